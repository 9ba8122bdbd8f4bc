use serde::{Deserialize, Serialize};

fn default_project_name() -> String {
    "My API".to_string()
}

/// Request body for POST /api/generate-api-docs.
#[derive(Debug, Clone, Deserialize)]
pub struct APIDocRequest {
    pub code: String,
    pub language: String,
    #[serde(default = "default_project_name")]
    pub project_name: String,
}

/// One runnable snippet in the generated documentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeExample {
    pub language: String,
    pub code: String,
}

/// Structured documentation assembled from one LLM reply.
#[derive(Debug, Clone, Serialize)]
pub struct APIDocResponse {
    pub openapi_spec: String,
    pub markdown_docs: String,
    pub code_examples: Vec<CodeExample>,
}
