//! Bounding-box query endpoint: `POST /geo/bounded-box`.
//!
//! Request body is a rectangle (`lo`/`hi` corners, in any order);
//! response is the list of matching hotel identifiers in store order.
//! An empty list is a normal outcome, not an error.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::engine;
use crate::extract::TraceHeaders;
use crate::state::AppState;
use crate::types::point::Rectangle;

/// Reply shape of the bounding-box query.
#[derive(Debug, Serialize)]
pub struct BoundedBoxResponse {
    /// Identifiers of all hotels inside the rectangle, store order.
    #[serde(rename = "hotelIds")]
    pub hotel_ids: Vec<i32>,
}

/// Returns all hotels contained within a given rectangle.
pub async fn bounded_box(
    State(state): State<Arc<AppState>>,
    TraceHeaders(trace): TraceHeaders,
    Json(rect): Json<Rectangle>,
) -> Json<BoundedBoxResponse> {
    let hotel_ids = engine::bounded_box(&state.store, &rect, &trace);
    Json(BoundedBoxResponse { hotel_ids })
}
