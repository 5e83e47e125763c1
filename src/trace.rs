//! Per-request trace context.
//!
//! The upstream aggregator propagates a trace identifier and a caller
//! name with each request. The query engine forwards them to the
//! tracing collaborator as an "entered" report before the scan and an
//! "exited" report with a timestamp after it. Reporting is best-effort
//! log emission; it never fails the request and never blocks.

use chrono::{DateTime, Utc};

/// Service name reported to the tracing collaborator.
pub const SERVICE_NAME: &str = "svc-geo";

/// Opaque per-request correlation token.
///
/// Built from transport metadata; both fields are optional and their
/// absence must never fail a request. The core does not interpret
/// either value, it only forwards them.
#[derive(Debug, Clone, Default)]
pub struct TraceContext {
    pub trace_id: Option<String>,
    pub caller: Option<String>,
}

impl TraceContext {
    pub fn new(trace_id: Option<String>, caller: Option<String>) -> Self {
        Self { trace_id, caller }
    }

    /// Reports that the request entered this service.
    pub fn entered(&self) {
        tracing::info!(
            service = SERVICE_NAME,
            trace_id = self.trace_id.as_deref().unwrap_or(""),
            from = self.caller.as_deref().unwrap_or(""),
            "trace in"
        );
    }

    /// Reports that the request left this service at `finished_at`.
    pub fn exited(&self, finished_at: DateTime<Utc>) {
        tracing::info!(
            service = SERVICE_NAME,
            trace_id = self.trace_id.as_deref().unwrap_or(""),
            from = self.caller.as_deref().unwrap_or(""),
            finished_at = %finished_at.to_rfc3339(),
            "trace out"
        );
    }
}
