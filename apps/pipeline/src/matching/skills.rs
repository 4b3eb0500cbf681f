//! Skill extraction: scans text against a fixed vocabulary (extendable
//! with caller-supplied terms) and returns canonicalized labels ordered by
//! first occurrence.

use crate::parse::normalize::title_case;

/// Base skill vocabulary: data, engineering, and analytics tooling.
/// Immutable configuration data; declaration order breaks offset ties, so
/// it doubles as matching priority.
const BASE_SKILLS: &[&str] = &[
    "python",
    "sql",
    "excel",
    "power bi",
    "tableau",
    "snowflake",
    "pandas",
    "numpy",
    "r",
    "java",
    "javascript",
    "react",
    "node",
    "api",
    "rest",
    "fastapi",
    "flask",
    "dashboards",
    "kpi",
    "etl",
    "data pipeline",
    "airflow",
    "docker",
    "kubernetes",
    "git",
    "jira",
    "experimentation",
    "a b testing",
    "a/b testing",
    "statistics",
    "forecast",
    "supply chain",
    "sap",
    "ibp",
    "ml",
    "machine learning",
    "genai",
];

/// Terms rendered in all caps instead of title case.
const UPPERCASED: &[&str] = &["sql", "r"];

/// Extracts skills present in `text` as case-insensitive substrings of the
/// vocabulary (base set ∪ lower-cased `extra_terms`).
///
/// Multi-word terms are matched as literal substrings, not tokens, so
/// partial overlaps with surrounding words are possible and accepted.
/// Output is deduplicated, ordered by the offset of each term's first
/// occurrence (vocabulary order on ties), and case-normalized: `sql`/`r`
/// upper-cased, everything else title-cased.
pub fn extract_skills(text: &str, extra_terms: &[String]) -> Vec<String> {
    let text_lower = text.to_lowercase();

    let mut vocabulary: Vec<String> = BASE_SKILLS.iter().map(|s| s.to_string()).collect();
    for term in extra_terms {
        let term = term.to_lowercase();
        if !term.is_empty() && !vocabulary.contains(&term) {
            vocabulary.push(term);
        }
    }

    let mut hits: Vec<(usize, String)> = vocabulary
        .into_iter()
        .filter_map(|term| text_lower.find(&term).map(|offset| (offset, term)))
        .collect();
    // stable sort: equal offsets keep vocabulary order, so repeated calls
    // with identical input always agree
    hits.sort_by_key(|&(offset, _)| offset);

    hits.into_iter().map(|(_, term)| format_skill(&term)).collect()
}

fn format_skill(term: &str) -> String {
    if UPPERCASED.contains(&term) {
        term.to_uppercase()
    } else {
        title_case(term)
    }
}
