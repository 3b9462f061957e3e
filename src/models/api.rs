//! JSON response envelopes used by the contact API.

use serde::{Deserialize, Serialize};

/// Success body returned by `POST /api/contacto`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Always `true` on the success path
    pub success: bool,

    /// Confirmation message for the visitor
    pub message: String,
}

impl SubmitResponse {
    /// The standard confirmation body.
    pub fn ok() -> Self {
        Self {
            success: true,
            message: "Formulario enviado correctamente".to_string(),
        }
    }
}

/// Error body returned on 4xx/5xx responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    /// Human-readable error message
    pub error: String,
}

impl ApiErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Envelope for read-only content endpoints (testimonials, services).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
}

impl<T> DataResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
