//! Server configuration.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Geo service configuration.
///
/// Constructed once at process entry and passed by value into the
/// loader and the server constructor; there is no ambient global
/// configuration state.
#[derive(Parser, Debug, Clone)]
#[command(name = "svc-geo")]
#[command(about = "Hotel geospatial lookup service")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "GEO_LISTEN_ADDR", default_value = "0.0.0.0:10002")]
    pub listen_addr: SocketAddr,

    /// Path to the JSON file containing hotel locations
    #[arg(long, env = "GEO_LOCATIONS_FILE", default_value = "data/locations.json")]
    pub locations: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "GEO_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        // Defaults only; does not consult argv.
        Self::parse_from(["svc-geo"])
    }
}
