//! Section segmentation: finds header lines in extracted resume text,
//! slices the document into contiguous spans, and canonicalizes header
//! wording into a fixed vocabulary of section keys.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::parse::normalize::normalize;

/// A line is a header candidate when one of the keywords appears within its
/// first 10 characters (case-insensitive). The bound lets "Relevant
/// Coursework" or "Work Experience" match while prose that mentions
/// "experience" mid-sentence does not. The whole line is captured as the
/// header title.
static HEADER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?im)^(.{0,10}(?:skills?|education|coursework|experience|projects?|activities?|leadership?|awards?)\b.*)$",
    )
    .unwrap()
});

/// Differently-worded headers that fold into one canonical key.
const SYNONYMS: &[(&str, &str)] = &[
    ("skills summary", "skills"),
    ("skills", "skills"),
    ("education", "education"),
    ("relevant coursework", "coursework"),
    ("coursework", "coursework"),
    ("work experience", "experience"),
    ("experience", "experience"),
    ("personal project", "projects"),
    ("academic project", "projects"),
    ("projects", "projects"),
    ("leadership & campus involvement", "leadership"),
    ("leadership", "leadership"),
];

/// Canonical section key: the fixed vocabulary, the reserved whole-document
/// key used when no header is detected, and an escape hatch for header
/// lines the synonym table does not recognize.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionKey {
    Skills,
    Education,
    Coursework,
    Experience,
    Projects,
    Activities,
    Leadership,
    Awards,
    /// The entire raw input, stored when no header line was found.
    WholeDocument,
    /// Unrecognized header, kept as its lower-cased trimmed line text.
    Other(String),
}

impl SectionKey {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Skills => "skills",
            Self::Education => "education",
            Self::Coursework => "coursework",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Activities => "activities",
            Self::Leadership => "leadership",
            Self::Awards => "awards",
            Self::WholeDocument => "whole-document",
            Self::Other(name) => name,
        }
    }

    /// Canonicalizes a matched header line: lower-case, trim, synonym-table
    /// lookup, then fall through to an ad-hoc key for anything unknown.
    fn from_header(title: &str) -> Self {
        let trimmed = title.trim().to_lowercase();
        let canon = SYNONYMS
            .iter()
            .find(|(raw, _)| *raw == trimmed)
            .map(|(_, canon)| *canon)
            .unwrap_or(trimmed.as_str());
        match canon {
            "skills" => Self::Skills,
            "education" => Self::Education,
            "coursework" => Self::Coursework,
            "experience" => Self::Experience,
            "projects" => Self::Projects,
            "activities" => Self::Activities,
            "leadership" => Self::Leadership,
            "awards" => Self::Awards,
            other => Self::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SectionKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Ordered mapping from canonical section key to section body text.
///
/// Two header lines that canonicalize to the same key append their bodies
/// in document order, joined by a line break; headers never overwrite each
/// other's content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionMap {
    entries: Vec<(SectionKey, String)>,
}

impl SectionMap {
    pub fn get(&self, key: &SectionKey) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, body)| body.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SectionKey, &str)> {
        self.entries.iter().map(|(k, body)| (k, body.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: SectionKey, body: String) {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            *existing = format!("{existing}\n{body}").trim().to_string();
        } else {
            self.entries.push((key, body));
        }
    }
}

impl Serialize for SectionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, body) in &self.entries {
            map.serialize_entry(key.as_str(), body)?;
        }
        map.end()
    }
}

/// Slices a resume into sections at detected header lines.
///
/// Every header occurrence across the whole document is found (resumes often
/// repeat header-like phrases); each section body is the text strictly
/// between the end of its header line and the start of the next header (or
/// end of document), trimmed and normalized before storage. When no header
/// is detected at all, the entire raw input is stored under the reserved
/// whole-document key, a deliberate fallback, not an error.
///
/// Known limitation carried over from the upstream design: a header keyword
/// that lands within the first 10 characters of a prose line opens a new
/// section at that line. See the misdetection test below.
pub fn segment(text: &str) -> SectionMap {
    let mut sections = SectionMap::default();

    let headers: Vec<(usize, &str)> = HEADER_LINE
        .find_iter(text)
        .map(|m| (m.start(), m.as_str()))
        .collect();

    if headers.is_empty() {
        debug!("no section headers detected, storing whole document");
        sections
            .entries
            .push((SectionKey::WholeDocument, text.to_string()));
        return sections;
    }

    for (i, &(start, title)) in headers.iter().enumerate() {
        let body_start = start + title.len();
        let body_end = headers.get(i + 1).map(|&(next, _)| next).unwrap_or(text.len());
        let body = normalize(text[body_start..body_end].trim());
        sections.insert(SectionKey::from_header(title), body);
    }

    debug!(count = sections.len(), "segmented resume");
    sections
}
