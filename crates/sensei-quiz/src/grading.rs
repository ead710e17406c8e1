//! Scoring for completed quizzes.

use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;
use crate::record::{AnswerKey, QuestionRecord};

/// Outcome of grading one quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScoreReport {
    /// Percentage of answered questions that were correct, rounded half up.
    pub score: u32,
    pub correct_count: u32,
    pub answered_count: u32,
    pub total_questions: u32,
    pub pass_threshold: u32,
    pub passed: bool,
}

/// Grades a quiz attempt against the answer key.
///
/// Answers pair with questions by position; `None` marks a skipped
/// question. A shorter answer slice leaves the tail unanswered and extra
/// answers beyond the question count are ignored. The score is the share
/// of answered questions that were correct, so an attempt with no answers
/// scores zero.
#[must_use]
pub fn grade(
    questions: &[QuestionRecord],
    answers: &[Option<AnswerKey>],
    difficulty: Difficulty,
) -> ScoreReport {
    let mut correct = 0u32;
    let mut answered = 0u32;

    for (question, answer) in questions.iter().zip(answers) {
        if let Some(answer) = answer {
            answered += 1;
            if *answer == question.correct_answer {
                correct += 1;
            }
        }
    }

    let score = if answered == 0 {
        0
    } else {
        (correct * 100 + answered / 2) / answered
    };

    let pass_threshold = difficulty.pass_threshold();

    ScoreReport {
        score,
        correct_count: correct,
        answered_count: answered,
        total_questions: u32::try_from(questions.len()).unwrap_or(u32::MAX),
        pass_threshold,
        passed: score >= pass_threshold,
    }
}
