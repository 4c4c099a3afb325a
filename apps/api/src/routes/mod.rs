pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;
use crate::web::handlers as web;

/// Room for the text fields and multipart framing on top of the file itself.
const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    // A re-posted PDF travels as base64, a third larger than the file.
    let body_limit = state.config.max_upload_bytes / 3 * 4 + FORM_OVERHEAD_BYTES;

    Router::new()
        .route("/health", get(health::health_handler))
        // HTML front-end
        .route("/", get(web::handle_index).post(web::handle_form))
        // JSON API
        .route("/api/v1/documents", post(handlers::handle_normalize_document))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
