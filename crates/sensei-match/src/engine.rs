//! Strict mentor matching.
//!
//! A mentor matches when both skill names are equal after trimming and
//! lowercasing and the mentor's verification status normalizes to
//! `verified`. Partial and fuzzy matches are never returned.

use crate::record::{MatchRecord, MatchResult, MentorRecord};

const VERIFIED: &str = "verified";

/// Matches one requested skill against the roster.
///
/// Roster order is preserved in the returned matches. The requested
/// skill is echoed back untouched in the result and its message; only
/// the comparison is normalized.
#[must_use]
pub fn match_skills(skill: &str, mentors: &[MentorRecord]) -> MatchResult {
    let wanted = skill.trim().to_lowercase();

    let matches: Vec<MatchRecord> = mentors
        .iter()
        .filter(|mentor| {
            mentor.skill_name.trim().to_lowercase() == wanted
                && mentor.verification_status.trim().to_lowercase() == VERIFIED
        })
        .map(|mentor| MatchRecord {
            user_id: mentor.user_id.clone(),
            skill: mentor.skill_name.clone(),
            verification_score: mentor.verification_score,
            experience_level: mentor.experience_level.clone(),
        })
        .collect();

    tracing::debug!(%skill, matched = matches.len(), roster = mentors.len(), "roster scan");

    let message = if matches.is_empty() {
        format!(
            "No verified mentors found for {skill}. \
             Only exact skill matches with verified status are returned."
        )
    } else {
        format!("Found {} verified mentor(s) for {skill}", matches.len())
    };

    MatchResult {
        matched: !matches.is_empty(),
        skill: skill.to_owned(),
        matches,
        message,
    }
}

/// Matches several requested skills against the same roster, one result
/// per request in request order.
#[must_use]
pub fn batch_match(skills: &[String], mentors: &[MentorRecord]) -> Vec<MatchResult> {
    skills
        .iter()
        .map(|skill| match_skills(skill, mentors))
        .collect()
}
