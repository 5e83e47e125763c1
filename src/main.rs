//! Geo service entry point.
//!
//! Run with: `cargo run -- --help`

use clap::Parser;
use svc_geo::{telemetry, GeoServer, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let config = ServerConfig::parse();
    telemetry::init_logging(&config);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        addr = %config.listen_addr,
        locations = %config.locations.display(),
        "starting geo server"
    );

    // Fail-fast startup: an unreadable or malformed dataset means the
    // process must not begin serving.
    let server = match GeoServer::new(config) {
        Ok(server) => server,
        Err(e) => {
            tracing::error!(error = %e, "failed to load locations dataset");
            std::process::exit(1);
        }
    };

    server.run().await
}
