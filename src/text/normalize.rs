//! Text cleanup for titles, genre links and lead paragraphs.
//!
//! Bracket stripping only removes innermost pairs: `"a (b (c) d) e"` keeps
//! the outer parentheses after one pass.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ANNOTATION_RE: Regex =
        Regex::new(r"\([^()]*\)|\[[^\[\]]*\]").expect("annotation regex is valid");
    static ref PARENTHETICAL_RE: Regex =
        Regex::new(r"\([^)]*\)").expect("parenthetical regex is valid");
    static ref NUMBER_RUN_RE: Regex = Regex::new(r"\s*\d+\s*").expect("number regex is valid");
}

/// Remove `(...)` and `[...]` annotations, e.g. `"Love (Remastered 2011)"` -> `"Love "`.
///
/// The result is not trimmed, but a whitespace-only result collapses to `""`.
pub fn strip_annotations(text: &str) -> String {
    let stripped = ANNOTATION_RE.replace_all(text, "");
    if stripped.trim().is_empty() {
        return String::new();
    }
    stripped.into_owned()
}

/// Remove everything from an opening parenthesis up to the first closing one.
pub fn strip_parentheticals(text: &str) -> String {
    let stripped = PARENTHETICAL_RE.replace_all(text, "");
    if stripped.trim().is_empty() {
        return String::new();
    }
    stripped.into_owned()
}

/// Collapse every digit run (and the whitespace around it) into a single space, then trim.
pub fn strip_numbers(text: &str) -> String {
    NUMBER_RUN_RE.replace_all(text, " ").trim().to_string()
}
