//! Basic metrics instrumentation.
//!
//! Provides counters for outbound client requests and for submissions handled
//! by the backend.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Metrics collector shared between the client and the server state.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of HTTP requests made by the client
    http_requests_total: Arc<AtomicU64>,

    /// Total number of HTTP errors seen by the client
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,

    /// Submissions received by the backend handler
    submissions_received_total: Arc<AtomicU64>,

    /// Submissions accepted by the backend handler
    submissions_accepted_total: Arc<AtomicU64>,

    /// Submissions rejected by the backend handler (400/500 paths)
    submissions_rejected_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_errors_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
            submissions_received_total: Arc::new(AtomicU64::new(0)),
            submissions_accepted_total: Arc::new(AtomicU64::new(0)),
            submissions_rejected_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an HTTP request and its duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an HTTP error.
    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a submission arriving at the backend handler.
    pub fn record_submission_received(&self) {
        self.submissions_received_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record an accepted submission.
    pub fn record_submission_accepted(&self) {
        self.submissions_accepted_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejected submission.
    pub fn record_submission_rejected(&self) {
        self.submissions_rejected_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    pub fn submissions_received_total(&self) -> u64 {
        self.submissions_received_total.load(Ordering::Relaxed)
    }

    pub fn submissions_accepted_total(&self) -> u64 {
        self.submissions_accepted_total.load(Ordering::Relaxed)
    }

    pub fn submissions_rejected_total(&self) -> u64 {
        self.submissions_rejected_total.load(Ordering::Relaxed)
    }
}
