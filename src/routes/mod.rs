//! HTTP route handlers and router configuration.

mod admin;
mod geo;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the application router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(admin::health))
        .route("/geo/stats", get(admin::stats))
        // Bounding-box query
        .route("/geo/bounded-box", post(geo::bounded_box))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
