//! End-to-end form flow scenarios for the FormController.

use async_trait::async_trait;
use autoescuela_contacto::client::AsyncContactClient;
use autoescuela_contacto::domain::PermitCategory;
use autoescuela_contacto::{
    ContactClient, ContactForm, ContactRequest, FormController, FormPhase, SubmissionClient,
    SubmitOutcome,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock submission client recording every request it sees.
struct RecordingClient {
    outcome: SubmitOutcome,
    calls: AtomicUsize,
    requests: Mutex<Vec<ContactRequest>>,
}

impl RecordingClient {
    fn accepting() -> Self {
        Self {
            outcome: SubmitOutcome::Accepted {
                message: "Formulario enviado correctamente".to_string(),
            },
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SubmissionClient for RecordingClient {
    async fn submit(&self, request: &ContactRequest) -> SubmitOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());
        self.outcome.clone()
    }
}

/// Scenario: a complete, valid submission succeeds and resets the form.
#[tokio::test]
async fn test_valid_submission_success_flow() {
    let client = Arc::new(RecordingClient::accepting());
    let mut controller = FormController::new(client.clone());

    controller.set_name("Ana");
    controller.set_email("ana@example.com");

    let phase = controller.submit().await;

    assert_eq!(phase, FormPhase::SuccessShown);
    assert_eq!(controller.form(), &ContactForm::default());
    assert!(controller.errors().is_empty());
    assert_eq!(controller.api_error(), None);
    assert_eq!(client.calls(), 1);

    let requests = client.requests.lock().unwrap();
    assert_eq!(requests[0].name, "Ana");
    assert_eq!(requests[0].email, "ana@example.com");
    assert_eq!(requests[0].permit, Some(PermitCategory::B));
}

/// Scenario: invalid fields store errors and never reach the network.
#[tokio::test]
async fn test_invalid_submission_stays_local() {
    let client = Arc::new(RecordingClient::accepting());
    let mut controller = FormController::new(client.clone());

    controller.set_name("");
    controller.set_email("x");

    let phase = controller.submit().await;

    assert_eq!(phase, FormPhase::Idle);
    assert_eq!(controller.errors().len(), 2);
    assert_eq!(client.calls(), 0);

    // Entered values are kept for correction
    assert_eq!(controller.form().email, "x");
}

/// Scenario: the controller drives the real client stack against a mock server.
#[tokio::test]
async fn test_controller_through_real_client() {
    let mut server = mockito::Server::new_async().await;

    let mock = server
        .mock("POST", "/api/contacto")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"message":"Formulario enviado correctamente"}"#)
        .create_async()
        .await;

    let client = AsyncContactClient::new(ContactClient::with_base_url(server.url()));
    let mut controller = FormController::new(Arc::new(client));

    controller.set_name("Ana");
    controller.set_email("ana@example.com");
    controller.set_phone("612345678");
    controller.set_permit(PermitCategory::C);

    let phase = controller.submit().await;

    mock.assert_async().await;
    assert_eq!(phase, FormPhase::SuccessShown);
    assert_eq!(controller.form(), &ContactForm::default());
}

/// Scenario: a server rejection surfaces as the error banner and keeps input.
#[tokio::test]
async fn test_controller_shows_server_rejection() {
    let mut server = mockito::Server::new_async().await;

    let _mock = server
        .mock("POST", "/api/contacto")
        .with_status(400)
        .with_body(r#"{"error":"El formato del email no es válido"}"#)
        .create_async()
        .await;

    let client = AsyncContactClient::new(ContactClient::with_base_url(server.url()));
    let mut controller = FormController::new(Arc::new(client));

    // Locally valid but rejected by the authoritative server
    controller.set_name("Ana");
    controller.set_email("ana@example.com");

    let phase = controller.submit().await;

    assert_eq!(phase, FormPhase::ErrorShown);
    assert_eq!(
        controller.api_error(),
        Some("El formato del email no es válido")
    );
    assert_eq!(controller.form().name, "Ana");
    assert!(!controller.is_submitting());
}
