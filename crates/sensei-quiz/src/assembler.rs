//! Quiz assembly.
//!
//! Every quiz carries exactly [`QUIZ_LEN`] questions, one per
//! [`QuestionCategory`]. Authored templates from [`crate::catalog`] are
//! preferred; categories without an authored scenario get a synthesized
//! question so the category contract holds for any skill.

use std::collections::HashSet;

use rand::Rng;

use crate::catalog::{self, ScenarioTemplate};
use crate::category::QuestionCategory;
use crate::difficulty::Difficulty;
use crate::error::QuizError;
use crate::record::{AnswerKey, QuestionRecord, QuizResult};

/// Number of questions in every generated quiz.
pub const QUIZ_LEN: usize = 10;

const GENERIC_OPTIONS: [&str; 4] = [
    "Implement a comprehensive solution",
    "Use a quick fix approach",
    "Defer the decision",
    "Seek external consultation",
];

const GENERIC_EXPLANATION: &str =
    "A comprehensive solution addresses the root cause and provides long-term value.";

/// Generates a quiz using the process RNG for timer draws.
///
/// # Errors
///
/// Returns [`QuizError::InvalidDifficulty`] when `difficulty` does not
/// normalize to a known level.
pub fn generate_quiz(skill: &str, difficulty: &str) -> Result<QuizResult, QuizError> {
    generate_quiz_with(skill, difficulty, &mut rand::rng())
}

/// Generates a quiz with a caller-supplied RNG.
///
/// The skill is trimmed and uppercased, the difficulty trimmed and
/// lowercased, before any lookup. An unknown skill is not an error; it
/// yields a fully synthesized quiz.
///
/// # Errors
///
/// Returns [`QuizError::InvalidDifficulty`] when `difficulty` does not
/// normalize to a known level.
pub fn generate_quiz_with<R: Rng>(
    skill: &str,
    difficulty: &str,
    rng: &mut R,
) -> Result<QuizResult, QuizError> {
    let skill = skill.trim().to_uppercase();
    let difficulty: Difficulty = difficulty.parse()?;

    let templates = catalog::templates(&skill, difficulty);
    if templates.is_empty() {
        tracing::debug!(%skill, %difficulty, "no authored templates, synthesizing all questions");
    }

    let mut questions = Vec::with_capacity(QUIZ_LEN);
    let mut used: HashSet<QuestionCategory> = HashSet::new();

    for template in templates {
        if questions.len() >= QUIZ_LEN {
            break;
        }
        if used.insert(template.category) {
            questions.push(realize(template, difficulty, rng));
        }
    }

    for category in QuestionCategory::ALL {
        if questions.len() >= QUIZ_LEN {
            break;
        }
        if !used.contains(&category) {
            questions.push(synthesize(&skill, category, difficulty, rng));
        }
    }

    questions.truncate(QUIZ_LEN);

    Ok(QuizResult {
        skill,
        difficulty,
        questions,
    })
}

fn draw_time_limit<R: Rng>(difficulty: Difficulty, rng: &mut R) -> u32 {
    rng.random_range(difficulty.time_limit_range())
}

fn realize<R: Rng>(
    template: &ScenarioTemplate,
    difficulty: Difficulty,
    rng: &mut R,
) -> QuestionRecord {
    QuestionRecord {
        question_type: template.category,
        scenario: template.scenario.to_owned(),
        question: template.question.to_owned(),
        time_limit_seconds: draw_time_limit(difficulty, rng),
        options: template.options.map(str::to_owned),
        correct_answer: template.correct,
        explanation: template.explanation.to_owned(),
    }
}

fn synthesize<R: Rng>(
    skill: &str,
    category: QuestionCategory,
    difficulty: Difficulty,
    rng: &mut R,
) -> QuestionRecord {
    let focus = category.label().to_lowercase();
    QuestionRecord {
        question_type: category,
        scenario: format!(
            "You are working on a {skill} project that requires {focus} skills. \
             The team is facing a critical decision that impacts the project timeline and quality."
        ),
        question: format!("What is the best approach for this {focus} scenario?"),
        time_limit_seconds: draw_time_limit(difficulty, rng),
        options: GENERIC_OPTIONS.map(str::to_owned),
        correct_answer: AnswerKey::A,
        explanation: GENERIC_EXPLANATION.to_owned(),
    }
}
