//! Match scoring: compares resume text against a job's required skills and
//! produces a bounded score together with the list of missing skills.

use serde::{Deserialize, Serialize};

pub const SCORE_FLOOR: u32 = 40;
pub const SCORE_CEILING: u32 = 99;
const SCORE_BASE: u32 = 60;
const POINTS_PER_MATCH: u32 = 7;

/// Outcome of checking resume text against one required-skill list.
///
/// `score` and `gaps` always come from the same partition pass over the
/// required skills, never computed independently, so the score can never
/// drift from the skills it claims are missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Bounded to [40, 99]: 60 base + 7 per matched required skill,
    /// saturating at 99 once six or more skills match; 40 when nothing
    /// matched (including an empty required list).
    pub score: u32,
    /// Required skills absent from the resume, in required-list order.
    pub gaps: Vec<String>,
}

/// Splits `required_skills` into (matched, gaps) by case-insensitive
/// substring presence in `resume_text`, preserving input order on both
/// sides. The single matching predicate behind [`score`] and the
/// recommendation builder.
pub fn partition_skills(
    resume_text: &str,
    required_skills: &[String],
) -> (Vec<String>, Vec<String>) {
    let text = resume_text.to_lowercase();
    required_skills
        .iter()
        .cloned()
        .partition(|skill| text.contains(&skill.to_lowercase()))
}

/// Scores resume text against required skills.
pub fn score(resume_text: &str, required_skills: &[String]) -> MatchResult {
    let (matched, gaps) = partition_skills(resume_text, required_skills);
    MatchResult {
        score: score_for(matched.len()),
        gaps,
    }
}

pub(crate) fn score_for(matched_count: usize) -> u32 {
    if matched_count == 0 {
        return SCORE_FLOOR;
    }
    (SCORE_BASE + POINTS_PER_MATCH * matched_count as u32).min(SCORE_CEILING)
}
