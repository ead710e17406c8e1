//! Experience tiers derived from verification scores.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum ExperienceLevel {
    Novice,
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ExperienceLevel {
    /// Tier for a 0 to 100 verification score.
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        match score {
            90.. => Self::Expert,
            75..=89 => Self::Advanced,
            60..=74 => Self::Intermediate,
            40..=59 => Self::Beginner,
            _ => Self::Novice,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
