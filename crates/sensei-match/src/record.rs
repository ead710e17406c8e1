//! Roster entries and match payloads.

use serde::{Deserialize, Serialize};

use crate::experience::ExperienceLevel;

fn default_experience_level() -> String {
    "Unknown".to_owned()
}

/// One mentor roster entry. Every field defaults so partial roster files
/// deserialize cleanly; a missing skill or status simply never satisfies
/// the match criteria.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MentorRecord {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub skill_name: String,
    #[serde(default)]
    pub verification_status: String,
    #[serde(default)]
    pub verification_score: u32,
    #[serde(default = "default_experience_level")]
    pub experience_level: String,
}

impl MentorRecord {
    /// Builds a verified entry, deriving the experience level from the
    /// verification score.
    #[must_use]
    pub fn verified(user_id: &str, skill_name: &str, verification_score: u32) -> Self {
        Self {
            user_id: user_id.to_owned(),
            skill_name: skill_name.to_owned(),
            verification_status: "verified".to_owned(),
            verification_score,
            experience_level: ExperienceLevel::from_score(verification_score)
                .as_str()
                .to_owned(),
        }
    }
}

/// Projection of one matching mentor returned to the learner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MatchRecord {
    pub user_id: String,
    /// Mentor's skill name exactly as it appears on the roster.
    pub skill: String,
    pub verification_score: u32,
    pub experience_level: String,
}

/// Result of matching one requested skill against the roster.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MatchResult {
    pub matched: bool,
    /// Requested skill exactly as the learner wrote it.
    pub skill: String,
    pub matches: Vec<MatchRecord>,
    pub message: String,
}
