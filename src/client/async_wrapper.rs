//! Async wrapper around the synchronous ContactClient.
//!
//! Runs the blocking HTTP call on a dedicated thread pool via
//! `tokio::task::spawn_blocking`, so the form controller can await
//! submissions without blocking the async runtime.

use crate::client::{ContactClient, SubmitOutcome, SUBMIT_FALLBACK_MESSAGE};
use crate::models::ContactRequest;
use async_trait::async_trait;
use std::sync::Arc;

/// Boundary trait between the form controller and the network.
///
/// The controller only ever sees a [`SubmitOutcome`], which makes it trivial
/// to substitute a mock in tests.
#[async_trait]
pub trait SubmissionClient: Send + Sync {
    async fn submit(&self, request: &ContactRequest) -> SubmitOutcome;
}

/// Async wrapper around [`ContactClient`].
#[derive(Clone)]
pub struct AsyncContactClient {
    client: Arc<ContactClient>,
}

impl AsyncContactClient {
    pub fn new(client: ContactClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl SubmissionClient for AsyncContactClient {
    async fn submit(&self, request: &ContactRequest) -> SubmitOutcome {
        let client = self.client.clone();
        let request = request.clone();

        match tokio::task::spawn_blocking(move || client.submit(&request)).await {
            Ok(outcome) => outcome,
            // A panicked or cancelled task still must not surface as an
            // unhandled failure to the controller.
            Err(e) => {
                tracing::error!(error = %e, "Submission task failed to join");
                SubmitOutcome::Rejected {
                    message: SUBMIT_FALLBACK_MESSAGE.to_string(),
                }
            }
        }
    }
}
