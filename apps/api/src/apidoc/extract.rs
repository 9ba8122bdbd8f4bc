//! Turns one raw documentation reply into an `APIDocResponse`.
//!
//! Three blocks are cut out of the reply by the shared heading rule. The
//! markdown and OpenAPI blocks are kept trimmed verbatim (no JSON validation
//! on the spec). The code-examples block is split into two entries by raw
//! character offset.

use std::sync::LazyLock;

use regex::Regex;

use crate::apidoc::models::{APIDocResponse, CodeExample};
use crate::apidoc::prompts::{
    CODE_EXAMPLES_HEADING, MARKDOWN_DOCS_HEADING, OPENAPI_SPEC_HEADING, SECTION_SEPARATOR,
};
use crate::sections::{heading_pattern, section_block};

/// The first example keeps this many characters of the block.
const FIRST_SLICE_CHARS: usize = 500;
/// The second example ends at this character offset.
const SECOND_SLICE_CHARS: usize = 1000;
/// The second example is always labeled JavaScript, matching the prompt's
/// "examples in {language} and JavaScript" phrasing.
const SECOND_EXAMPLE_LANGUAGE: &str = "JavaScript";

const FALLBACK_OPENAPI_SPEC: &str = r#"{"openapi": "3.0.0", "info": {"title": "API"}}"#;
const FALLBACK_MARKDOWN_DOCS: &str = "# API Documentation\n\nAPI endpoints and usage information.";
const FALLBACK_EXAMPLE_CODE: &str = "# Example usage";

static MARKDOWN_DOCS: LazyLock<Regex> = LazyLock::new(|| heading_pattern(MARKDOWN_DOCS_HEADING));
static OPENAPI_SPEC: LazyLock<Regex> = LazyLock::new(|| heading_pattern(OPENAPI_SPEC_HEADING));
static CODE_EXAMPLES: LazyLock<Regex> = LazyLock::new(|| heading_pattern(CODE_EXAMPLES_HEADING));

pub fn assemble_api_doc_response(raw: &str, requested_language: &str) -> APIDocResponse {
    APIDocResponse {
        openapi_spec: extract_verbatim(raw, &OPENAPI_SPEC, FALLBACK_OPENAPI_SPEC),
        markdown_docs: extract_verbatim(raw, &MARKDOWN_DOCS, FALLBACK_MARKDOWN_DOCS),
        code_examples: extract_code_examples(raw, requested_language),
    }
}

fn extract_verbatim(raw: &str, heading_re: &Regex, fallback: &str) -> String {
    section_block(raw, heading_re, SECTION_SEPARATOR)
        .map(|block| block.trim())
        .filter(|block| !block.is_empty())
        .map(|block| block.to_string())
        .unwrap_or_else(|| fallback.to_string())
}

/// Splits the examples block into two entries by character offset: the first
/// 500 characters labeled with the requested language, then characters
/// 500-999 labeled JavaScript (or the whole block again when it is 500
/// characters or shorter). Positional slicing is a known weak heuristic kept
/// for output compatibility.
/// TODO: replace with fenced-code-block parsing so each entry is one snippet.
fn extract_code_examples(raw: &str, requested_language: &str) -> Vec<CodeExample> {
    let block = match section_block(raw, &CODE_EXAMPLES, SECTION_SEPARATOR) {
        Some(block) if !block.trim().is_empty() => block,
        _ => {
            return vec![CodeExample {
                language: requested_language.to_string(),
                code: FALLBACK_EXAMPLE_CODE.to_string(),
            }]
        }
    };

    let second = if block.chars().count() > FIRST_SLICE_CHARS {
        char_slice(block, FIRST_SLICE_CHARS, SECOND_SLICE_CHARS)
    } else {
        block
    };

    vec![
        CodeExample {
            language: requested_language.to_string(),
            code: char_slice(block, 0, FIRST_SLICE_CHARS).to_string(),
        },
        CodeExample {
            language: SECOND_EXAMPLE_LANGUAGE.to_string(),
            code: second.to_string(),
        },
    ]
}

/// `&s[start..end]` by character position, clamped to the string's end.
fn char_slice(s: &str, start: usize, end: usize) -> &str {
    if end <= start {
        return "";
    }
    let from = s
        .char_indices()
        .nth(start)
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    let to = s
        .char_indices()
        .nth(end)
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    &s[from..to]
}
