//! Deterministic resume-to-structured-profile pipeline.
//!
//! Takes raw resume text (extracted upstream from a PDF or other document),
//! repairs line-wrap artifacts, segments the text into canonical sections,
//! extracts contact information and a skill set, and scores the text against
//! a job's required skills. Transport, storage, file-format decoding, and
//! LLM calls are external collaborators; this crate consumes and produces
//! plain strings and lists of strings, and every function is total over that
//! input domain (empty input yields defined fallbacks, never an error).

pub mod generation;
pub mod matching;
pub mod parse;

pub use generation::bullets::build_bullets;
pub use generation::cover_letter::{
    build_cover_letter_prompt, build_fallback_letter, CoverLetterPrompt, CoverLetterRequest,
    PromptMetadata,
};
pub use generation::recommend::{recommend, JobPosting, Recommendation};
pub use matching::score::{score, MatchResult};
pub use matching::skills::extract_skills;
pub use parse::contact::{extract_contacts, ContactInfo};
pub use parse::normalize::normalize;
pub use parse::profile::{build_profile, CandidateProfile};
pub use parse::section::{segment, SectionKey, SectionMap};
