// Skill matching: vocabulary-based skill extraction from resume text and
// the resume-vs-required-skills match scorer.

pub mod score;
pub mod skills;
