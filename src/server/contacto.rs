//! Handlers for the contact API routes.
//!
//! `submit_contact` is the authoritative validator: it re-checks the required
//! fields and the email shape regardless of what the client validated, then
//! hands the payload to the delivery collaborator.

use crate::domain::EmailAddress;
use crate::fixtures;
use crate::models::{ApiErrorBody, DataResponse, SubmitResponse};
use crate::server::AppState;
use crate::validation::EMAIL_INVALID;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Error message when the required fields are missing.
pub const MISSING_FIELDS_MESSAGE: &str = "Los campos nombre y email son obligatorios";

/// Generic message for parse and processing failures.
pub const PROCESSING_ERROR_MESSAGE: &str = "Error al procesar el formulario";

/// Raw submission body as received on the wire.
///
/// Everything is optional here: presence of `nombre` and `email` is part of
/// what this handler validates, so missing keys must not fail
/// deserialization. Unknown permit values pass through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactPayload {
    pub nombre: Option<String>,
    pub email: Option<String>,
    pub telefono: Option<String>,
    pub mensaje: Option<String>,
    pub permiso: Option<String>,
}

/// `POST /api/contacto` - validate and accept a contact submission.
pub async fn submit_contact(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    state.metrics.record_submission_received();

    // A malformed body is a processing failure, not a validation one
    let payload: ContactPayload = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!(error = %e, "Failed to parse contact payload");
            state.metrics.record_submission_rejected();
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, PROCESSING_ERROR_MESSAGE);
        }
    };

    let nombre_present = payload
        .nombre
        .as_deref()
        .is_some_and(|s| !s.trim().is_empty());
    let email = payload.email.as_deref().unwrap_or("");

    if !nombre_present || email.trim().is_empty() {
        tracing::warn!("Contact submission missing nombre or email");
        state.metrics.record_submission_rejected();
        return error_response(StatusCode::BAD_REQUEST, MISSING_FIELDS_MESSAGE);
    }

    if !EmailAddress::is_valid(email) {
        tracing::warn!(email = %email, "Contact submission with malformed email");
        state.metrics.record_submission_rejected();
        return error_response(StatusCode::BAD_REQUEST, EMAIL_INVALID);
    }

    match state.sink.submit(&payload).await {
        Ok(()) => {
            state.metrics.record_submission_accepted();
            (StatusCode::OK, Json(SubmitResponse::ok())).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Contact delivery failed");
            state.metrics.record_submission_rejected();
            error_response(StatusCode::INTERNAL_SERVER_ERROR, PROCESSING_ERROR_MESSAGE)
        }
    }
}

/// `GET /api/testimonios` - static testimonial table.
pub async fn list_testimonials() -> Response {
    (
        StatusCode::OK,
        Json(DataResponse::new(fixtures::testimonials())),
    )
        .into_response()
}

/// `GET /api/servicios` - static service table.
pub async fn list_services() -> Response {
    (StatusCode::OK, Json(DataResponse::new(fixtures::services()))).into_response()
}

/// `GET /health` - liveness probe.
pub async fn health() -> Response {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"}))).into_response()
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ApiErrorBody::new(message))).into_response()
}
