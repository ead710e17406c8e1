//! Serializable quiz records shared by assembly, grading, and the CLI output layer.

use serde::{Deserialize, Serialize};

use crate::category::QuestionCategory;
use crate::difficulty::Difficulty;

/// Answer slot for a four-option question. Serialized with the `Option `
/// prefix so payloads carry the same labels shown to quiz takers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum AnswerKey {
    #[serde(rename = "Option A")]
    A,
    #[serde(rename = "Option B")]
    B,
    #[serde(rename = "Option C")]
    C,
    #[serde(rename = "Option D")]
    D,
}

impl AnswerKey {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "Option A",
            Self::B => "Option B",
            Self::C => "Option C",
            Self::D => "Option D",
        }
    }

    /// Position of the matching entry in [`QuestionRecord::options`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }
}

impl std::fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One multiple-choice question: a scenario, the prompt, four options,
/// the correct slot, and a per-question timer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionRecord {
    pub question_type: QuestionCategory,
    pub scenario: String,
    pub question: String,
    pub time_limit_seconds: u32,
    pub options: [String; 4],
    pub correct_answer: AnswerKey,
    pub explanation: String,
}

/// A generated quiz: the normalized request plus exactly ten questions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizResult {
    pub skill: String,
    pub difficulty: Difficulty,
    pub questions: Vec<QuestionRecord>,
}
