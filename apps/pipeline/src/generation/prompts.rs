// Prompt constants for the cover-letter payload. The pipeline only
// assembles these; sending them to a generation service is the caller's
// concern.

/// System prompt paired with the cover-letter prompt.
pub const COVER_LETTER_SYSTEM: &str =
    "You are the one recruiter and hiring manager who wrote the job listing.";

/// Cover-letter prompt template. Replace `{candidate}`, `{job_title}`,
/// `{company}`, `{matched}`, `{gaps}`, `{skills}`, and `{resume_excerpt}`
/// before sending.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"You are drafting a cover letter.

Candidate: {candidate}
Target Role: {job_title}
Company: {company}

### Style Guide
- clear, professional tone
- 1 page max

### Skill Match
Matched skills: {matched}
Gaps to address: {gaps}
Skills derived from the resume: {skills}

### Candidate Resume (excerpt)
{resume_excerpt}

### Deliverable
Write a cover letter for the candidate that contains the following:
- A placeholder for the cover letter writer's address, and today's date at the top.
- A placeholder for the recruiter's name, company name, and company address below that.
- Address the recruiter with "Dear Mr./Ms. (Insert Name)"
- The first paragraph should indicate what position the candidate is interested in and how they heard about it.
- The second paragraph should relate the candidate's experience, skills and background to the position, highlighting the matched skills above.
- The third paragraph should indicate plans for follow-up contact and that the resume is enclosed.
- End the letter with "Sincerely, (Insert the cover letter writer's name)"
Output only the letter text.
"#;
