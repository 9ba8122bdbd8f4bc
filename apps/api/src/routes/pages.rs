//! Static page handlers for the two-page frontend.
//!
//! A missing file is served as a small inline notice with HTTP 200 rather
//! than a 404, so the browser shows what is wrong during local setup.

use std::path::Path;

use axum::{extract::State, response::Html};
use tracing::warn;

use crate::state::AppState;

const LOGIN_PAGE: &str = "login.html";
const TOOL_PAGE: &str = "index.html";

/// GET /
pub async fn serve_login(State(state): State<AppState>) -> Html<String> {
    serve_page(&state.config.frontend_dir, LOGIN_PAGE).await
}

/// GET /app
pub async fn serve_tool(State(state): State<AppState>) -> Html<String> {
    serve_page(&state.config.frontend_dir, TOOL_PAGE).await
}

async fn serve_page(dir: &str, file: &str) -> Html<String> {
    let path = Path::new(dir).join(file);
    match tokio::fs::read_to_string(&path).await {
        Ok(contents) => Html(contents),
        Err(e) => {
            warn!("Could not read {}: {e}", path.display());
            Html(format!("<h1>❌ {file} not found</h1>"))
        }
    }
}
