//! Text normalization: repairs the line-wrap artifacts PDF text extraction
//! leaves behind: words split across lines with a hyphen, and line breaks
//! inserted purely for page width.

use once_cell::sync::Lazy;
use regex::Regex;

/// A word split across two lines at a hyphen. PDF extraction emits either an
/// ASCII hyphen or an en-dash at the break, so both are accepted.
static HYPHEN_WRAP: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w)[-–]\n(\w)").unwrap());

/// Repairs line-wrap artifacts in raw extracted resume text.
///
/// Two passes, in order:
/// 1. Dehyphenation: `co-\nordinate` becomes `co-ordinate`; the line break
///    is dropped and a single ASCII hyphen kept.
/// 2. Soft-wrap collapse: a line break becomes a single space unless it ends
///    a sentence (preceded by `.`) or belongs to a paragraph boundary (next
///    to another line break).
///
/// Casing and punctuation are untouched; header detection and the contact
/// patterns downstream depend on them. Normalizing already-normalized text
/// is a no-op: `normalize(normalize(x)) == normalize(x)`.
pub fn normalize(raw: &str) -> String {
    // replace_all cannot rejoin chained wraps (`a-\nb-\nc`) in one pass, so
    // iterate to fixpoint; each pass that matches removes a line break.
    let mut text = HYPHEN_WRAP.replace_all(raw, "$1-$2").into_owned();
    while HYPHEN_WRAP.is_match(&text) {
        text = HYPHEN_WRAP.replace_all(&text, "$1-$2").into_owned();
    }
    collapse_soft_wraps(&text)
}

/// The regex crate has no look-around, so the wrap/boundary distinction is
/// made with a character scan: a `\n` survives only when preceded by `.` or
/// `\n`, or followed by `\n`.
fn collapse_soft_wraps(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut prev: Option<char> = None;
    while let Some(c) = chars.next() {
        if c == '\n' {
            let boundary =
                matches!(prev, Some('.') | Some('\n')) || chars.peek() == Some(&'\n');
            out.push(if boundary { '\n' } else { ' ' });
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}

/// Title-cases a string the way the profile pipeline formats names and
/// skill labels: a letter that follows a non-letter is upper-cased, every
/// other letter is lowered. `"jane.doe"` becomes `"Jane.Doe"`, `"a/b
/// testing"` becomes `"A/B Testing"`.
pub(crate) fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
