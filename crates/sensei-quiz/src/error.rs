#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("invalid difficulty level: {0}")]
    InvalidDifficulty(String),
}
