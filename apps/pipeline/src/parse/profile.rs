//! Full-pipeline orchestrator: raw resume text in, structured candidate
//! profile out.

use serde::Serialize;
use tracing::debug;

use crate::matching::skills::extract_skills;
use crate::parse::contact::{extract_contacts, ContactInfo};
use crate::parse::normalize::normalize;
use crate::parse::section::{segment, SectionMap};

/// Structured candidate profile derived from one resume. Transient:
/// computed fresh per call, never cached or mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateProfile {
    pub contacts: ContactInfo,
    pub sections: SectionMap,
    pub skills: Vec<String>,
}

/// Runs the whole parse pipeline: segment the raw text (the segmenter
/// normalizes each section body itself and needs the raw line structure for
/// header detection), then extract contacts and skills from the normalized
/// text.
pub fn build_profile(raw_text: &str, extra_skills: &[String]) -> CandidateProfile {
    let sections = segment(raw_text);
    let normalized = normalize(raw_text);
    let contacts = extract_contacts(&normalized);
    let skills = extract_skills(&normalized, extra_skills);

    debug!(
        sections = sections.len(),
        skills = skills.len(),
        has_name = contacts.name.is_some(),
        "built candidate profile"
    );

    CandidateProfile {
        contacts,
        sections,
        skills,
    }
}
