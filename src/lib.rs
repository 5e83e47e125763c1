//! Hotel Geospatial Lookup Service.
//!
//! Given a rectangular bounding box, returns the identifiers of all
//! known hotels whose coordinates fall within it. The dataset is
//! loaded once at startup into an immutable in-memory store; each
//! query is a full linear scan with an inclusive containment test.
//!
//! # Example
//!
//! ```ignore
//! use svc_geo::{GeoServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig::default();
//!     let server = GeoServer::new(config).unwrap();
//!     server.run().await.unwrap();
//! }
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;
pub mod store;
pub mod telemetry;
pub mod trace;
pub mod types;

pub use config::ServerConfig;
pub use error::LoadError;
pub use state::AppState;
pub use store::{LocationRecord, LocationStore};
pub use trace::TraceContext;
pub use types::point::{Point, Rectangle};

use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Geo HTTP server.
pub struct GeoServer {
    /// Application state
    state: Arc<AppState>,
    /// Configured router
    router: Router,
}

impl GeoServer {
    /// Creates a server with the given configuration.
    ///
    /// Loads the locations dataset eagerly; a load failure is returned
    /// to the caller so the process can refuse to start serving.
    pub fn new(config: ServerConfig) -> Result<Self, LoadError> {
        let store = LocationStore::load(&config.locations)?;
        info!(
            locations = store.len(),
            path = %config.locations.display(),
            "locations dataset loaded"
        );

        let state = Arc::new(AppState::new(config, store));
        let router = routes::build_router(state.clone());

        Ok(Self { state, router })
    }

    /// A reference to the application state.
    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    /// The router, for driving the service in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Runs the server until the listener fails.
    pub async fn run(self) -> Result<(), std::io::Error> {
        let addr = self.state.config.listen_addr;
        let listener = TcpListener::bind(addr).await?;

        info!(addr = %addr, "geo server listening");
        axum::serve(listener, self.router).await
    }
}
