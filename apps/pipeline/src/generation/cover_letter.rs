//! Cover-letter assembly: the structured prompt payload handed to a
//! downstream text-generation collaborator, and a deterministic
//! template-based fallback letter for when no such collaborator is wired up.

use serde::{Deserialize, Serialize};

use crate::generation::prompts::COVER_LETTER_PROMPT_TEMPLATE;

/// Cap on the resume excerpt embedded in the prompt payload.
pub const MAX_RESUME_EXCERPT_CHARS: usize = 1500;

/// Inputs to [`build_cover_letter_prompt`].
#[derive(Debug, Clone)]
pub struct CoverLetterRequest<'a> {
    pub candidate_name: Option<&'a str>,
    pub job_title: &'a str,
    pub company: &'a str,
    pub matched_skills: &'a [String],
    pub gaps: &'a [String],
    pub derived_skills: &'a [String],
    pub resume_text: &'a str,
}

/// Everything the generation collaborator needs, alongside the rendered
/// prompt itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptMetadata {
    pub candidate_name: Option<String>,
    pub job_title: String,
    pub company: String,
    pub matched_skills: Vec<String>,
    pub gaps: Vec<String>,
    pub derived_skills: Vec<String>,
    pub resume_excerpt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverLetterPrompt {
    pub prompt: String,
    pub metadata: PromptMetadata,
}

/// Assembles the cover-letter prompt payload. No generation service is
/// called; the caller forwards `prompt` (with
/// [`prompts::COVER_LETTER_SYSTEM`](crate::generation::prompts::COVER_LETTER_SYSTEM))
/// or falls back to [`build_fallback_letter`].
pub fn build_cover_letter_prompt(request: &CoverLetterRequest<'_>) -> CoverLetterPrompt {
    let excerpt = truncate_chars(request.resume_text, MAX_RESUME_EXCERPT_CHARS);
    let prompt = COVER_LETTER_PROMPT_TEMPLATE
        .replace("{candidate}", request.candidate_name.unwrap_or("Candidate"))
        .replace("{job_title}", request.job_title)
        .replace("{company}", request.company)
        .replace("{matched}", &join_or(request.matched_skills, "relevant tools"))
        .replace("{gaps}", &join_or(request.gaps, "the listed requirements"))
        .replace("{skills}", &join_or(request.derived_skills, "see resume"))
        .replace("{resume_excerpt}", &excerpt);

    CoverLetterPrompt {
        prompt,
        metadata: PromptMetadata {
            candidate_name: request.candidate_name.map(str::to_string),
            job_title: request.job_title.to_string(),
            company: request.company.to_string(),
            matched_skills: request.matched_skills.to_vec(),
            gaps: request.gaps.to_vec(),
            derived_skills: request.derived_skills.to_vec(),
            resume_excerpt: excerpt,
        },
    }
}

/// Deterministic template letter used when no generation collaborator is
/// available: candidate name (or "Candidate"), top 3 matched skills (or
/// "relevant tools"), top 2 gaps (or "the listed requirements").
pub fn build_fallback_letter(
    candidate_name: Option<&str>,
    job_title: &str,
    company: &str,
    matched: &[String],
    gaps: &[String],
) -> String {
    let who = match candidate_name {
        Some(name) if !name.trim().is_empty() => name,
        _ => "Candidate",
    };
    let have = join_capped(matched, 3, "relevant tools");
    let need = join_capped(gaps, 2, "the listed requirements");
    format!(
        "Dear Hiring Manager,\n\n\
         I am interested in the {job_title} role at {company}. My background includes practical experience with {have} \
         and a consistent focus on clear communication and measurable outcomes. I understand the importance of {need} \
         and learn quickly to meet team goals.\n\n\
         Thank you for your time and consideration.\nSincerely,\n{who}"
    )
}

fn join_or(items: &[String], fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items.join(", ")
    }
}

fn join_capped(items: &[String], cap: usize, fallback: &str) -> String {
    if items.is_empty() {
        fallback.to_string()
    } else {
        items
            .iter()
            .take(cap)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Truncates on a char boundary; byte-index slicing would panic mid-codepoint.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn request<'a>(
        matched: &'a [String],
        gaps: &'a [String],
        derived: &'a [String],
        resume: &'a str,
    ) -> CoverLetterRequest<'a> {
        CoverLetterRequest {
            candidate_name: Some("Jane Doe"),
            job_title: "Data Analyst",
            company: "BluePeak",
            matched_skills: matched,
            gaps,
            derived_skills: derived,
            resume_text: resume,
        }
    }

    #[test]
    fn test_prompt_carries_all_fields() {
        let matched = list(&["SQL", "Python"]);
        let gaps = list(&["Tableau"]);
        let derived = list(&["SQL", "Python", "Git"]);
        let payload =
            build_cover_letter_prompt(&request(&matched, &gaps, &derived, "resume body"));
        assert!(payload.prompt.contains("Candidate: Jane Doe"));
        assert!(payload.prompt.contains("Target Role: Data Analyst"));
        assert!(payload.prompt.contains("Company: BluePeak"));
        assert!(payload.prompt.contains("Matched skills: SQL, Python"));
        assert!(payload.prompt.contains("Gaps to address: Tableau"));
        assert!(payload.prompt.contains("resume body"));
        assert!(!payload.prompt.contains("{candidate}"));
        assert!(!payload.prompt.contains("{resume_excerpt}"));
    }

    #[test]
    fn test_metadata_mirrors_inputs() {
        let matched = list(&["SQL"]);
        let gaps = list(&["Spark"]);
        let derived = list(&["SQL", "Git"]);
        let payload = build_cover_letter_prompt(&request(&matched, &gaps, &derived, "text"));
        assert_eq!(payload.metadata.candidate_name.as_deref(), Some("Jane Doe"));
        assert_eq!(payload.metadata.matched_skills, matched);
        assert_eq!(payload.metadata.gaps, gaps);
        assert_eq!(payload.metadata.derived_skills, derived);
        assert_eq!(payload.metadata.resume_excerpt, "text");
    }

    #[test]
    fn test_missing_name_falls_back_to_candidate() {
        let empty: Vec<String> = vec![];
        let mut req = request(&empty, &empty, &empty, "text");
        req.candidate_name = None;
        let payload = build_cover_letter_prompt(&req);
        assert!(payload.prompt.contains("Candidate: Candidate"));
        assert_eq!(payload.metadata.candidate_name, None);
    }

    #[test]
    fn test_resume_excerpt_is_capped() {
        let empty: Vec<String> = vec![];
        let long = "x".repeat(MAX_RESUME_EXCERPT_CHARS + 500);
        let payload = build_cover_letter_prompt(&request(&empty, &empty, &empty, &long));
        assert_eq!(
            payload.metadata.resume_excerpt.chars().count(),
            MAX_RESUME_EXCERPT_CHARS
        );
    }

    #[test]
    fn test_excerpt_cap_respects_char_boundaries() {
        let empty: Vec<String> = vec![];
        let long = "é".repeat(MAX_RESUME_EXCERPT_CHARS + 10);
        let payload = build_cover_letter_prompt(&request(&empty, &empty, &empty, &long));
        assert_eq!(
            payload.metadata.resume_excerpt.chars().count(),
            MAX_RESUME_EXCERPT_CHARS
        );
    }

    #[test]
    fn test_fallback_letter_full() {
        let letter = build_fallback_letter(
            Some("Jane Doe"),
            "Data Analyst",
            "BluePeak",
            &list(&["SQL", "Python", "Git", "Docker"]),
            &list(&["Tableau", "Airflow", "Spark"]),
        );
        assert!(letter.starts_with("Dear Hiring Manager,"));
        assert!(letter.contains("the Data Analyst role at BluePeak"));
        assert!(letter.contains("SQL, Python, Git"));
        assert!(!letter.contains("Docker"));
        assert!(letter.contains("Tableau, Airflow"));
        assert!(!letter.contains("Spark"));
        assert!(letter.ends_with("Sincerely,\nJane Doe"));
    }

    #[test]
    fn test_fallback_letter_defaults() {
        let letter = build_fallback_letter(None, "Analyst", "Acme", &[], &[]);
        assert!(letter.contains("relevant tools"));
        assert!(letter.contains("the listed requirements"));
        assert!(letter.ends_with("Sincerely,\nCandidate"));
    }

    #[test]
    fn test_fallback_letter_blank_name_defaults() {
        let letter = build_fallback_letter(Some("   "), "Analyst", "Acme", &[], &[]);
        assert!(letter.ends_with("Sincerely,\nCandidate"));
    }
}
