pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};

use crate::apidoc;
use crate::prd;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Frontend pages
        .route("/", get(pages::serve_login))
        .route("/app", get(pages::serve_tool))
        // Generation API
        .route(
            "/api/generate-prd",
            post(prd::handlers::handle_generate_prd),
        )
        .route(
            "/api/generate-api-docs",
            post(apidoc::handlers::handle_generate_api_docs),
        )
        .route("/health", get(health::health_handler))
        .with_state(state)
}
