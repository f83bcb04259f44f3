pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // One MB of slack over the configured limit so marginally-over uploads
    // reach the handler's own 413 instead of axum's generic body error.
    let body_limit = DefaultBodyLimit::max((state.config.max_upload_mb + 1) * 1024 * 1024);
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/analyze/text", post(handlers::handle_analyze_text))
        .layer(body_limit)
        .with_state(state)
}
