//! Trace metadata header extractor.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::HeaderMap;
use axum::http::request::Parts;

use crate::trace::TraceContext;

/// Extracts the per-request [`TraceContext`] from transport headers.
///
/// The trace identifier and caller name travel as headers rather than
/// in the domain payload. Extraction is infallible: missing or
/// unreadable headers leave the corresponding field unset, they never
/// reject the request.
#[derive(Debug, Clone)]
pub struct TraceHeaders(pub TraceContext);

impl TraceHeaders {
    /// Header names
    pub const TRACE_ID: &'static str = "x-trace-id";
    pub const FROM: &'static str = "x-from";

    /// Builds a trace context from a header map.
    pub fn from_headers(headers: &HeaderMap) -> TraceContext {
        TraceContext::new(
            get_header_str(headers, Self::TRACE_ID).map(str::to_string),
            get_header_str(headers, Self::FROM).map(str::to_string),
        )
    }
}

/// Get a header value as a string slice.
fn get_header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for TraceHeaders
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        Ok(TraceHeaders(TraceHeaders::from_headers(&parts.headers)))
    }
}
