use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Quiz difficulty level.
///
/// Controls the per-question time limit range and the pass threshold
/// applied when grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub const ALL: [Self; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Expert,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
        }
    }

    /// Inclusive range a question's time limit is drawn from, in seconds.
    #[must_use]
    pub fn time_limit_range(self) -> RangeInclusive<u32> {
        match self {
            Self::Beginner => 45..=60,
            Self::Intermediate => 60..=90,
            Self::Advanced => 90..=120,
            Self::Expert => 120..=180,
        }
    }

    /// Minimum score, in percent, counted as a pass when grading.
    #[must_use]
    pub fn pass_threshold(self) -> u32 {
        match self {
            Self::Beginner => 60,
            Self::Intermediate => 70,
            Self::Advanced => 80,
            Self::Expert => 70,
        }
    }
}

impl FromStr for Difficulty {
    type Err = QuizError;

    /// Parses a difficulty level, trimming whitespace and ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::InvalidDifficulty`] for anything other than
    /// the four recognized levels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            "expert" => Ok(Self::Expert),
            other => Err(QuizError::InvalidDifficulty(other.to_owned())),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_lowercases() {
        assert_eq!("  Beginner ".parse::<Difficulty>().unwrap(), Difficulty::Beginner);
        assert_eq!("EXPERT".parse::<Difficulty>().unwrap(), Difficulty::Expert);
        assert_eq!("intermediate".parse::<Difficulty>().unwrap(), Difficulty::Intermediate);
    }

    #[test]
    fn parse_rejects_unknown_level() {
        let err = "nonsense".parse::<Difficulty>().unwrap_err();
        assert!(matches!(err, QuizError::InvalidDifficulty(ref s) if s == "nonsense"));
        assert_eq!(err.to_string(), "invalid difficulty level: nonsense");
    }

    #[test]
    fn parse_error_carries_normalized_input() {
        let err = "  HARD  ".parse::<Difficulty>().unwrap_err();
        assert!(matches!(err, QuizError::InvalidDifficulty(ref s) if s == "hard"));
    }

    #[test]
    fn time_limit_ranges() {
        assert_eq!(Difficulty::Beginner.time_limit_range(), 45..=60);
        assert_eq!(Difficulty::Intermediate.time_limit_range(), 60..=90);
        assert_eq!(Difficulty::Advanced.time_limit_range(), 90..=120);
        assert_eq!(Difficulty::Expert.time_limit_range(), 120..=180);
    }

    #[test]
    fn pass_thresholds() {
        assert_eq!(Difficulty::Beginner.pass_threshold(), 60);
        assert_eq!(Difficulty::Intermediate.pass_threshold(), 70);
        assert_eq!(Difficulty::Advanced.pass_threshold(), 80);
        assert_eq!(Difficulty::Expert.pass_threshold(), 70);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Advanced).unwrap();
        assert_eq!(json, "\"advanced\"");
        let back: Difficulty = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Difficulty::Advanced);
    }
}
