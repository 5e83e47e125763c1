//! Admin endpoints: /health, /geo/stats

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
///
/// GET /health
pub async fn health() -> Json<HealthResponse> {
    tracing::debug!("health check requested");
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Server statistics response
#[derive(Serialize)]
pub struct StatsResponse {
    /// Server uptime in seconds
    pub uptime_secs: u64,
    /// Number of hotel locations loaded at startup
    pub locations: usize,
    /// Server version
    pub version: &'static str,
}

/// Server statistics endpoint
///
/// GET /geo/stats
pub async fn stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    tracing::debug!("server stats requested");
    Json(StatsResponse {
        uptime_secs: state.uptime_secs(),
        locations: state.store.len(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
