//! Axum route handlers for the PRD tool.

use axum::{extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::prd::extract::assemble_prd_response;
use crate::prd::models::{PRDRequest, PRDResponse};
use crate::prd::prompts::{build_prd_prompt, PRD_SAMPLING, PRD_SYSTEM};
use crate::state::AppState;

/// Longest slice of the feature idea echoed into the logs.
const LOG_PREVIEW_CHARS: usize = 50;

/// POST /api/generate-prd
///
/// Builds the PRD prompt, makes one Groq call, and parses the reply into a
/// `PRDResponse`. Parsing never fails; upstream errors map to HTTP 500.
pub async fn handle_generate_prd(
    State(state): State<AppState>,
    Json(request): Json<PRDRequest>,
) -> Result<Json<PRDResponse>, AppError> {
    if request.feature_idea.trim().is_empty() {
        return Err(AppError::Validation(
            "Feature idea cannot be empty".to_string(),
        ));
    }

    info!(
        "PRD generation requested: feature=\"{}\", audience=\"{}\"",
        preview(&request.feature_idea),
        request.target_audience
    );

    let prompt = build_prd_prompt(&request);
    let raw = state
        .llm
        .chat(PRD_SYSTEM, &prompt, PRD_SAMPLING)
        .await
        .map_err(|e| AppError::Upstream(format!("Error generating PRD: {e}")))?;

    info!("PRD generated ({} bytes)", raw.len());

    Ok(Json(assemble_prd_response(&raw)))
}

/// Truncates user text for log lines. Char-based so multibyte input
/// never splits mid-character.
fn preview(text: &str) -> String {
    if text.chars().count() > LOG_PREVIEW_CHARS {
        let cut: String = text.chars().take(LOG_PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_passes_short_text_through() {
        assert_eq!(preview("dark mode"), "dark mode");
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let long = "x".repeat(80);
        assert_eq!(preview(&long), format!("{}...", "x".repeat(50)));
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let long = "é".repeat(60);
        assert_eq!(preview(&long), format!("{}...", "é".repeat(50)));
    }
}
