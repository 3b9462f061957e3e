//! Route tests for the contact API using `tower::ServiceExt::oneshot`.

use async_trait::async_trait;
use autoescuela_contacto::error::SinkError;
use autoescuela_contacto::server::{build_router, AppState, ContactPayload, ContactSink};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use std::sync::Arc;
use tower::ServiceExt;

/// Sink that accepts everything instantly.
struct NoopSink;

#[async_trait]
impl ContactSink for NoopSink {
    async fn submit(&self, _payload: &ContactPayload) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Sink that always fails delivery.
struct FailingSink;

#[async_trait]
impl ContactSink for FailingSink {
    async fn submit(&self, _payload: &ContactPayload) -> Result<(), SinkError> {
        Err(SinkError::Delivery("smtp unavailable".to_string()))
    }
}

fn app(sink: Arc<dyn ContactSink>) -> Router {
    build_router(Arc::new(AppState::new(sink)))
}

async fn post_contacto(router: Router, body: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/contacto")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

#[tokio::test]
async fn test_valid_submission_accepted() {
    let (status, body) = post_contacto(
        app(Arc::new(NoopSink)),
        r#"{"nombre":"Ana","email":"ana@example.com"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Formulario enviado correctamente");
}

#[tokio::test]
async fn test_full_payload_accepted() {
    let (status, _) = post_contacto(
        app(Arc::new(NoopSink)),
        r#"{"nombre":"Ana","email":"ana@example.com","telefono":"612345678","mensaje":"Hola","permiso":"A"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_email_rejected() {
    let (status, body) = post_contacto(app(Arc::new(NoopSink)), r#"{"nombre":"Ana"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Los campos nombre y email son obligatorios");
}

#[tokio::test]
async fn test_missing_nombre_rejected() {
    let (status, body) =
        post_contacto(app(Arc::new(NoopSink)), r#"{"email":"ana@example.com"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Los campos nombre y email son obligatorios");
}

#[tokio::test]
async fn test_whitespace_nombre_rejected() {
    let (status, body) = post_contacto(
        app(Arc::new(NoopSink)),
        r#"{"nombre":"   ","email":"ana@example.com"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Los campos nombre y email son obligatorios");
}

#[tokio::test]
async fn test_malformed_email_rejected() {
    let (status, body) = post_contacto(
        app(Arc::new(NoopSink)),
        r#"{"nombre":"Ana","email":"bad-email"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "El formato del email no es válido");
}

#[tokio::test]
async fn test_malformed_json_is_processing_error() {
    let (status, body) = post_contacto(app(Arc::new(NoopSink)), "{nombre:").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error al procesar el formulario");
}

#[tokio::test]
async fn test_sink_failure_is_processing_error() {
    let (status, body) = post_contacto(
        app(Arc::new(FailingSink)),
        r#"{"nombre":"Ana","email":"ana@example.com"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Error al procesar el formulario");
}

#[tokio::test]
async fn test_submission_metrics_recorded() {
    let state = Arc::new(AppState::new(Arc::new(NoopSink)));
    let router = build_router(state.clone());

    post_contacto(router.clone(), r#"{"nombre":"Ana","email":"ana@example.com"}"#).await;
    post_contacto(router, r#"{"nombre":"Ana"}"#).await;

    assert_eq!(state.metrics.submissions_received_total(), 2);
    assert_eq!(state.metrics.submissions_accepted_total(), 1);
    assert_eq!(state.metrics.submissions_rejected_total(), 1);
}

#[tokio::test]
async fn test_testimonials_endpoint() {
    let (status, body) = get_json(app(Arc::new(NoopSink)), "/api/testimonios").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let data = body["data"].as_array().unwrap();
    assert!(!data.is_empty());
    assert_eq!(data[0]["nombre"], "María García");
}

#[tokio::test]
async fn test_services_endpoint() {
    let (status, body) = get_json(app(Arc::new(NoopSink)), "/api/servicios").await;

    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data[0]["tipoPermiso"], "B");
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, body) = get_json(app(Arc::new(NoopSink)), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
