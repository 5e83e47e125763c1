//! Shared application state.

use std::time::Instant;

use crate::config::ServerConfig;
use crate::store::LocationStore;

/// State shared by all request handlers.
///
/// Everything in here is read-only after construction: the store is
/// loaded before the listener starts and no writer exists afterwards,
/// so handlers share it through an `Arc` without locking.
#[derive(Debug)]
pub struct AppState {
    pub config: ServerConfig,
    pub store: LocationStore,
    started_at: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig, store: LocationStore) -> Self {
        Self {
            config,
            store,
            started_at: Instant::now(),
        }
    }

    /// Seconds since the state was constructed.
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
