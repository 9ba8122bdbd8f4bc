//! Headed-section extraction from free-form LLM replies.
//!
//! Both generation tools prompt the model to organize its reply under `##`
//! headings. The helpers here find one heading and slice out the block that
//! follows it. A missing section is reported as `None` rather than an error
//! so callers can substitute a canned fallback and one malformed reply never
//! fails the whole request.

use std::sync::LazyLock;

use regex::Regex;

/// A section body runs until the next `##` heading at the start of a line.
static NEXT_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^##").expect("valid heading boundary pattern"));

/// One `- item` line; the capture is the item text. Whitespace around the
/// dash is horizontal only; a bare dash never captures past its own line.
static BULLET_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*-[ \t]+(.+)$").expect("valid bullet pattern"));

/// Builds the matcher for a `##` heading line containing `words`.
/// Prompt templates decorate headings with emoji and suffixes, so the match
/// is deliberately loose: any heading line mentioning the words counts.
/// Matching is case-sensitive to mirror the templates exactly.
pub fn heading_pattern(words: &str) -> Regex {
    let pattern = format!(r"(?m)^##[^\n]*{}[^\n]*\n?", regex::escape(words));
    Regex::new(&pattern).expect("valid heading pattern")
}

/// Returns the text between `heading_re`'s first match and the earliest of:
/// the next line-start `##` heading, the first occurrence of `separator`, or
/// the end of the reply. `None` when the heading never occurs.
pub fn section_block<'a>(text: &'a str, heading_re: &Regex, separator: &str) -> Option<&'a str> {
    let heading = heading_re.find(text)?;
    let body = &text[heading.end()..];

    let mut end = body.len();
    if let Some(next) = NEXT_HEADING.find(body) {
        end = end.min(next.start());
    }
    if let Some(sep) = body.find(separator) {
        end = end.min(sep);
    }

    Some(&body[..end])
}

/// Splits a section body into trimmed bullet items, dropping blank ones.
pub fn bullet_lines(block: &str) -> Vec<String> {
    BULLET_LINE
        .captures_iter(block)
        .map(|caps| caps[1].trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
