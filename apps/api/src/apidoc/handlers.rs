//! Axum route handlers for the API doc tool.

use axum::{extract::State, Json};
use tracing::info;

use crate::apidoc::extract::assemble_api_doc_response;
use crate::apidoc::models::{APIDocRequest, APIDocResponse};
use crate::apidoc::prompts::{build_api_doc_prompt, API_DOC_SAMPLING, API_DOC_SYSTEM};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/generate-api-docs
///
/// Builds the documentation prompt, makes one Groq call, and parses the
/// reply into an `APIDocResponse`. Parsing never fails; upstream errors map
/// to HTTP 500.
pub async fn handle_generate_api_docs(
    State(state): State<AppState>,
    Json(request): Json<APIDocRequest>,
) -> Result<Json<APIDocResponse>, AppError> {
    if request.code.trim().is_empty() {
        return Err(AppError::Validation("Code cannot be empty".to_string()));
    }

    info!(
        "API doc generation requested: project=\"{}\", language=\"{}\"",
        request.project_name, request.language
    );

    let prompt = build_api_doc_prompt(&request);
    let raw = state
        .llm
        .chat(API_DOC_SYSTEM, &prompt, API_DOC_SAMPLING)
        .await
        .map_err(|e| AppError::Upstream(format!("Error generating API docs: {e}")))?;

    info!("API documentation generated ({} bytes)", raw.len());

    Ok(Json(assemble_api_doc_response(&raw, &request.language)))
}
