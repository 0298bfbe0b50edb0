//! Observer server binary for the Threshold economy simulation.
//!
//! Wires together structured logging, the shared session state, and the
//! Axum observer server. Simulation parameters arrive over HTTP; the
//! only process-level configuration is where to listen.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Resolve the listen address from `THRESHOLD_HOST` / `THRESHOLD_PORT`
//! 3. Create the (empty) session state
//! 4. Serve until terminated

use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use threshold_observer::{AppState, ServerConfig, start_server};

/// Application entry point for the Observer server.
///
/// # Errors
///
/// Returns an error if the server fails to bind or serve.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("threshold-server starting");

    // 2. Resolve the listen address.
    let config = server_config_from_env();
    info!(host = config.host, port = config.port, "Configuration resolved");

    // 3. Create the session state (no simulation until the first init).
    let state = Arc::new(AppState::new());

    // 4. Serve until terminated.
    start_server(&config, state).await?;

    info!("threshold-server stopped");
    Ok(())
}

/// Build the server configuration from environment overrides.
///
/// `THRESHOLD_HOST` and `THRESHOLD_PORT` override the defaults
/// (`0.0.0.0:8080`). An unparseable port is ignored with a warning.
fn server_config_from_env() -> ServerConfig {
    let mut config = ServerConfig::default();

    if let Ok(host) = std::env::var("THRESHOLD_HOST") {
        config.host = host;
    }
    if let Ok(port) = std::env::var("THRESHOLD_PORT") {
        match port.parse::<u16>() {
            Ok(parsed) => config.port = parsed,
            Err(e) => warn!(port, error = %e, "Ignoring unparseable THRESHOLD_PORT"),
        }
    }

    config
}
