use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Always 200. `api_key_set` reports whether a Groq key is configured,
/// independent of upstream reachability.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "api_key_set": state.config.groq_api_key.is_some()
    }))
}
