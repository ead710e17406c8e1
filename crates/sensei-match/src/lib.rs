//! Exact-match mentor lookup with verification gating.

pub mod engine;
pub mod experience;
pub mod record;

pub use engine::{batch_match, match_skills};
pub use experience::ExperienceLevel;
pub use record::{MatchRecord, MatchResult, MentorRecord};
