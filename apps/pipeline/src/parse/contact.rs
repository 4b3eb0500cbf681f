//! Contact extraction: harvests emails, phone numbers, and profile URLs
//! from normalized resume text, plus a best-effort name guess.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::parse::normalize::title_case;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

/// Loose on purpose: an optional `+`, a digit, 7+ phone-ish characters, a
/// closing digit. Long ID numbers can slip through; accepted false
/// positives, not a defect.
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?\d[\d\-\s().]{7,}\d").unwrap());

static URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)https?://[^\s)]+|linkedin\.com/\S+|github\.com/\S+").unwrap());

/// Contact fields harvested from resume text. All four fields are computed
/// independently from the same text; there is no cross-validation between
/// them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    /// First non-blank line, trimmed and title-cased. Best-effort metadata:
    /// nothing checks that it resembles a human name, and it is wrong
    /// whenever the resume opens with something else.
    pub name: Option<String>,
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub urls: Vec<String>,
}

/// Scans normalized resume text for contact information. Emails, phones,
/// and URLs are each deduplicated and returned sorted lexicographically.
pub fn extract_contacts(text: &str) -> ContactInfo {
    let name = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(title_case);

    ContactInfo {
        name,
        emails: collect_sorted(&EMAIL, text),
        phones: collect_sorted(&PHONE, text),
        urls: collect_sorted(&URL, text),
    }
}

fn collect_sorted(pattern: &Regex, text: &str) -> Vec<String> {
    let unique: BTreeSet<String> = pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();
    unique.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "jane doe\n\
        jane.doe@example.com | +1 415-555-0142\n\
        https://github.com/janedoe and linkedin.com/in/janedoe\n\
        Data analyst with 5 years of experience.";

    #[test]
    fn test_name_from_first_line_title_cased() {
        let contacts = extract_contacts(RESUME);
        assert_eq!(contacts.name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_name_skips_blank_leading_lines() {
        let contacts = extract_contacts("\n   \nJOHN SMITH\njohn@example.com");
        assert_eq!(contacts.name.as_deref(), Some("John Smith"));
    }

    #[test]
    fn test_name_none_for_empty_text() {
        assert_eq!(extract_contacts("").name, None);
        assert_eq!(extract_contacts("  \n \n").name, None);
    }

    #[test]
    fn test_emails_found() {
        let contacts = extract_contacts(RESUME);
        assert_eq!(contacts.emails, ["jane.doe@example.com"]);
    }

    #[test]
    fn test_emails_deduplicated_and_sorted() {
        let contacts =
            extract_contacts("b@example.com a@example.com b@example.com");
        assert_eq!(contacts.emails, ["a@example.com", "b@example.com"]);
    }

    #[test]
    fn test_phone_found() {
        let contacts = extract_contacts(RESUME);
        assert_eq!(contacts.phones.len(), 1);
        assert!(contacts.phones[0].starts_with("+1 415"));
    }

    #[test]
    fn test_phone_accepts_parentheses() {
        let contacts = extract_contacts("Call (415) 555-0142 anytime");
        assert_eq!(contacts.phones, ["415) 555-0142"]);
    }

    #[test]
    fn test_urls_found() {
        let contacts = extract_contacts(RESUME);
        assert!(contacts
            .urls
            .iter()
            .any(|u| u == "https://github.com/janedoe"));
        assert!(contacts.urls.iter().any(|u| u == "linkedin.com/in/janedoe"));
    }

    #[test]
    fn test_url_stops_at_closing_paren() {
        let contacts = extract_contacts("(see https://example.com/profile)");
        assert_eq!(contacts.urls, ["https://example.com/profile"]);
    }

    #[test]
    fn test_no_contacts_in_plain_prose() {
        let contacts = extract_contacts("A short bio with no contact details.");
        assert!(contacts.emails.is_empty());
        assert!(contacts.phones.is_empty());
        assert!(contacts.urls.is_empty());
    }
}
