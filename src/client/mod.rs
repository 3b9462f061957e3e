//! HTTP client for the contact submission endpoint.
//!
//! This module provides a synchronous HTTP client that can be used from async
//! contexts via `tokio::task::spawn_blocking`. The client posts contact
//! requests to the backend and normalizes every outcome into a single result
//! shape the form controller can display.

mod async_wrapper;
pub use async_wrapper::{AsyncContactClient, SubmissionClient};

use crate::config::Config;
use crate::error::{ContactApiError, ContactApiResult};
use crate::metrics::Metrics;
use crate::models::{ApiErrorBody, ContactRequest, SubmitResponse};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Path of the contact submission endpoint.
pub const CONTACT_PATH: &str = "/api/contacto";

/// Generic message shown when the backend gives no usable error text.
pub const SUBMIT_FALLBACK_MESSAGE: &str = "Error al enviar el formulario. Inténtalo de nuevo.";

/// Normalized result of one submission attempt.
///
/// Every failure mode (validation rejection, server error, transport error)
/// collapses into `Rejected` with a displayable message; nothing propagates
/// past this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The backend accepted the request (2xx with `success: true`).
    Accepted { message: String },

    /// The request did not go through; `message` is ready to display.
    Rejected { message: String },
}

/// HTTP client for the contact API.
///
/// Uses `ureq` for synchronous requests; wrap it in [`AsyncContactClient`]
/// when calling from async code.
#[derive(Clone)]
pub struct ContactClient {
    /// Base URL of the backend
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl ContactClient {
    /// Create a new ContactClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.api_base_url.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a ContactClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Post a contact request and parse the backend's response.
    ///
    /// Non-2xx statuses and transport failures are mapped into
    /// [`ContactApiError`]; the server's `{"error": ...}` body is extracted
    /// into the error message when present.
    pub fn post_contact(&self, request: &ContactRequest) -> ContactApiResult<SubmitResponse> {
        let start = Instant::now();
        let url = self.build_url(CONTACT_PATH);

        tracing::debug!(url = %url, nombre = %request.name, "POST contact request");

        let result = self
            .agent
            .post(&url)
            .set("Content-Type", "application/json")
            .send_json(serde_json::to_value(request)?)
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        if result.is_err() {
            self.metrics.record_http_error();
        }
        self.metrics.record_http_request(duration);

        let body = result?
            .into_string()
            .map_err(|e| ContactApiError::HttpError(e.to_string()))?;

        let response: SubmitResponse =
            serde_json::from_str(&body).map_err(ContactApiError::JsonError)?;

        tracing::debug!(success = response.success, "Contact request completed");
        Ok(response)
    }

    /// Submit a contact request, normalizing every outcome.
    ///
    /// Never panics and never returns an error: transport failures and server
    /// rejections alike become [`SubmitOutcome::Rejected`] with a displayable
    /// message.
    pub fn submit(&self, request: &ContactRequest) -> SubmitOutcome {
        match self.post_contact(request) {
            Ok(response) if response.success => SubmitOutcome::Accepted {
                message: response.message,
            },
            Ok(_) => SubmitOutcome::Rejected {
                message: SUBMIT_FALLBACK_MESSAGE.to_string(),
            },
            Err(err) => {
                tracing::warn!(error = %err, "Contact submission failed");
                SubmitOutcome::Rejected {
                    message: failure_message(&err),
                }
            }
        }
    }

    /// Map a ureq error to a ContactApiError.
    fn map_error(&self, error: ureq::Error) -> ContactApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let body = response.into_string().unwrap_or_default();

                // Only a structured {"error": ...} body counts as a
                // server-provided message; anything else stays generic
                let message = serde_json::from_str::<ApiErrorBody>(&body)
                    .map(|parsed| parsed.error)
                    .unwrap_or_else(|_| {
                        tracing::debug!(body = %body, "Non-JSON error body from contact API");
                        String::new()
                    });

                ContactApiError::ApiError {
                    status: code,
                    message,
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    ContactApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    ContactApiError::Timeout
                } else {
                    ContactApiError::HttpError(transport.to_string())
                }
            }
        }
    }
}

/// Displayable message for a failed submission.
///
/// The server-provided message wins when present; everything else falls back
/// to the generic retry prompt.
fn failure_message(err: &ContactApiError) -> String {
    match err {
        ContactApiError::ApiError { message, .. } if !message.trim().is_empty() => message.clone(),
        _ => SUBMIT_FALLBACK_MESSAGE.to_string(),
    }
}
