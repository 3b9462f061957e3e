//! Contact request model - the payload a visitor submits via the form.

use crate::domain::PermitCategory;
use serde::{Deserialize, Serialize};

/// A contact request as sent to `POST /api/contacto`.
///
/// JSON field names keep the site's original Spanish keys; only `nombre` and
/// `email` are required on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    /// Visitor's full name
    #[serde(rename = "nombre")]
    pub name: String,

    /// Visitor's email address
    pub email: String,

    /// Optional phone number (nine digits when present)
    #[serde(rename = "telefono", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Optional free-text message
    #[serde(rename = "mensaje", default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Permit category the visitor is interested in
    #[serde(rename = "permiso", default, skip_serializing_if = "Option::is_none")]
    pub permit: Option<PermitCategory>,
}

impl ContactRequest {
    /// Create a minimal request with just the required fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            message: None,
            permit: None,
        }
    }
}
