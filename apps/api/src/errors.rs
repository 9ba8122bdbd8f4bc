use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upstream error: {0}")]
    Upstream(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Upstream(msg) => {
                tracing::error!("Upstream LLM error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        // Single-field body so clients can surface `detail` verbatim.
        let body = Json(json!({ "detail": detail }));

        (status, body).into_response()
    }
}

// ────────────────────────────── Tests ──────────────────────────────
