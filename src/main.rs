//! Autoescuela Contacto - main entry point.
//!
//! Starts the contact API server: logging, configuration, then the axum
//! router until shutdown.

use anyhow::Result;
use autoescuela_contacto::{server, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can drive the filter
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!(
        addr = %config.socket_addr(),
        delay_ms = config.processing_delay_ms,
        "Starting contact API server"
    );

    if let Err(e) = server::run_server(&config).await {
        error!(error = %e, "Server exited with error");
        return Err(e);
    }

    info!("Contact API server shutdown complete");
    Ok(())
}
