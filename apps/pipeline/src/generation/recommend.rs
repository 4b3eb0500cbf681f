//! Per-job tailoring: score a resume against a job posting and assemble the
//! derived materials (bullets, fallback letter, skill lists) in one record.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::generation::bullets::build_bullets;
use crate::generation::cover_letter::build_fallback_letter;
use crate::matching::score::{partition_skills, score_for};
use crate::matching::skills::extract_skills;

const MAX_REPORTED_GAPS: usize = 3;
const MAX_DERIVED_SKILLS: usize = 8;
const MATCHED_FALLBACK: usize = 3;

/// A job posting as supplied by the job-search collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    /// Required skills, as listed by the posting.
    pub skills: Vec<String>,
}

/// Tailored materials for one resume/job pairing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub company: String,
    pub score: u32,
    /// Top missing required skills (at most 3, in posting order).
    pub gaps: Vec<String>,
    pub resume_bullets: Vec<String>,
    pub cover_letter: String,
    /// Required skills found in the resume; when none matched, the top
    /// derived resume skills stand in so the bullets and letter still have
    /// something concrete to name.
    pub matched_skills: Vec<String>,
    /// Skills extracted from the resume itself (at most 8).
    pub derived_resume_skills: Vec<String>,
}

/// Builds a [`Recommendation`] for one job posting.
///
/// Score, gaps, and the matched list all come from a single
/// [`partition_skills`] pass over the posting's required skills, so the
/// three can never disagree.
pub fn recommend(
    resume_text: &str,
    candidate_name: Option<&str>,
    user_skills: &[String],
    job: &JobPosting,
) -> Recommendation {
    let derived = extract_skills(resume_text, user_skills);

    let (mut matched, gaps) = partition_skills(resume_text, &job.skills);
    let score = score_for(matched.len());
    if matched.is_empty() {
        matched = derived.iter().take(MATCHED_FALLBACK).cloned().collect();
    }

    debug!(
        title = %job.title,
        score,
        matched = matched.len(),
        gaps = gaps.len(),
        "tailored resume for job"
    );

    Recommendation {
        title: job.title.clone(),
        company: job.company.clone(),
        score,
        resume_bullets: build_bullets(&job.title, &job.company, &matched),
        cover_letter: build_fallback_letter(
            candidate_name,
            &job.title,
            &job.company,
            &matched,
            &gaps,
        ),
        gaps: gaps.into_iter().take(MAX_REPORTED_GAPS).collect(),
        matched_skills: matched,
        derived_resume_skills: derived.into_iter().take(MAX_DERIVED_SKILLS).collect(),
    }
}
