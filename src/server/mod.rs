//! HTTP server for the contact API.
//!
//! Exposes the contact submission endpoint together with the read-only
//! content endpoints, built as an axum router over a shared [`AppState`].

pub mod contacto;
pub mod sink;

pub use contacto::ContactPayload;
pub use sink::{ContactSink, LoggingSink};

use crate::config::Config;
use crate::metrics::Metrics;
use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

/// Shared state for the contact routes.
pub struct AppState {
    /// Delivery collaborator invoked for every accepted submission
    pub sink: Arc<dyn ContactSink>,

    /// Metrics collector
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(sink: Arc<dyn ContactSink>) -> Self {
        Self {
            sink,
            metrics: Metrics::new(),
        }
    }
}

/// Build the contact API router.
pub fn build_router(state: Arc<AppState>) -> Router {
    // The marketing site is served from a different origin during
    // development, so stay permissive here.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(contacto::health))
        .route("/api/contacto", post(contacto::submit_contact))
        .route("/api/testimonios", get(contacto::list_testimonials))
        .route("/api/servicios", get(contacto::list_services))
        .with_state(state)
        .layer(cors)
}

/// Start the HTTP server and run it until completion.
///
/// Uses the default [`LoggingSink`] with the configured artificial delay as
/// the delivery collaborator.
pub async fn run_server(config: &Config) -> Result<()> {
    let sink = Arc::new(LoggingSink::new(Duration::from_millis(
        config.processing_delay_ms,
    )));
    let state = Arc::new(AppState::new(sink));
    let router = build_router(state);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "Contact API listening");

    axum::serve(listener, router).await?;
    Ok(())
}
