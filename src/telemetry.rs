//! Logging setup.

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the configured log level
/// applies crate-wide. Safe to call more than once (later calls are
/// no-ops), which keeps tests that share a process happy.
pub fn init_logging(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
