//! Quiz assembly: category set, scenario catalog, timers, and grading.

pub mod assembler;
pub mod catalog;
pub mod category;
pub mod difficulty;
pub mod error;
pub mod grading;
pub mod record;

pub use assembler::{QUIZ_LEN, generate_quiz, generate_quiz_with};
pub use category::QuestionCategory;
pub use difficulty::Difficulty;
pub use error::QuizError;
pub use grading::{ScoreReport, grade};
pub use record::{AnswerKey, QuestionRecord, QuizResult};
