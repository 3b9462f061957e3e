//! Error types for the contact service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when posting to the contact API.
#[derive(Error, Debug)]
pub enum ContactApiError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while handing a contact request to the delivery collaborator.
#[derive(Error, Debug)]
pub enum SinkError {
    /// The downstream delivery mechanism rejected the request
    #[error("Contact delivery failed: {0}")]
    Delivery(String),
}

/// Convenience type alias for Results with ContactApiError
pub type ContactApiResult<T> = Result<T, ContactApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
