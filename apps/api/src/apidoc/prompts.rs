// All LLM prompt constants for the API doc tool.
// Headings named here are the same constants the extractor matches on.

use crate::apidoc::models::APIDocRequest;
use crate::llm_client::SamplingParams;

/// System prompt for API documentation generation.
pub const API_DOC_SYSTEM: &str =
    "You are an expert API documentation specialist. \
    Create clear, professional API documentation with valid OpenAPI specs and practical code examples.";

/// Sampling for doc generation. Cooler than the PRD tool so specs and
/// examples stay close to the source code.
pub const API_DOC_SAMPLING: SamplingParams = SamplingParams {
    temperature: 0.2,
    max_tokens: 3000,
    top_p: 0.9,
};

pub const MARKDOWN_DOCS_HEADING: &str = "API Documentation";
pub const OPENAPI_SPEC_HEADING: &str = "OpenAPI Spec";
pub const CODE_EXAMPLES_HEADING: &str = "Code Examples";

/// Separator the model is told to place between sections. Longer than the
/// PRD one so markdown horizontal rules inside the docs do not end a section.
pub const SECTION_SEPARATOR: &str = "---SEPARATOR---";

/// API doc prompt template. Replace: {project_name}, {language}, {code}
/// plus the heading and separator placeholders.
const API_DOC_PROMPT_TEMPLATE: &str = r#"You are an expert API documentation specialist. Generate professional API documentation from this code.

PROJECT: {project_name}
LANGUAGE: {language}

CODE:
{code}

Generate the following:

## 📚 {markdown_docs_heading} (Markdown)
[Professional markdown documentation with:
- Overview
- Base URL
- Authentication
- Endpoints (method, path, description, parameters, response)
- Error codes
- Rate limiting
- Examples]

## 🔗 {openapi_spec_heading}
[Valid OpenAPI 3.0.0 JSON spec]

## 💻 {code_examples_heading}
[Working code examples in {language} and JavaScript]

Format with clear sections separated by {separator}"#;

/// Fills the doc template. Static placeholders go first so user-supplied
/// text is never re-scanned for them.
pub fn build_api_doc_prompt(request: &APIDocRequest) -> String {
    API_DOC_PROMPT_TEMPLATE
        .replace("{markdown_docs_heading}", MARKDOWN_DOCS_HEADING)
        .replace("{openapi_spec_heading}", OPENAPI_SPEC_HEADING)
        .replace("{code_examples_heading}", CODE_EXAMPLES_HEADING)
        .replace("{separator}", SECTION_SEPARATOR)
        .replace("{project_name}", &request.project_name)
        .replace("{language}", &request.language)
        .replace("{code}", &request.code)
}
