//! Form controller owning the UI-visible submission state machine.

use crate::client::{SubmissionClient, SubmitOutcome};
use crate::form::ContactForm;
use crate::validation::{self, Field, FieldErrors};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default time the success banner stays visible.
pub const DEFAULT_BANNER_DURATION: Duration = Duration::from_secs(5);

/// Observable phase of the form.
///
/// `SuccessShown` and `ErrorShown` are overlays on an otherwise idle form:
/// the visitor can keep editing while either banner is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Submitting,
    SuccessShown,
    ErrorShown,
}

/// Stateful orchestrator of the contact form.
///
/// Owns the field buffer, the per-field errors, the submitting flag, and the
/// banners. All submission state lives here; there are no ambient singletons.
pub struct FormController {
    client: Arc<dyn SubmissionClient>,
    form: ContactForm,
    errors: FieldErrors,
    submitting: bool,
    api_error: Option<String>,
    success_until: Option<Instant>,
    banner_duration: Duration,
}

impl FormController {
    /// Create a controller with the default success banner duration.
    pub fn new(client: Arc<dyn SubmissionClient>) -> Self {
        Self::with_banner_duration(client, DEFAULT_BANNER_DURATION)
    }

    /// Create a controller with a custom success banner duration.
    pub fn with_banner_duration(client: Arc<dyn SubmissionClient>, banner: Duration) -> Self {
        Self {
            client,
            form: ContactForm::default(),
            errors: FieldErrors::new(),
            submitting: false,
            api_error: None,
            success_until: None,
            banner_duration: banner,
        }
    }

    /// Current field values.
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Currently stored per-field validation errors.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// API-level error banner text, if shown.
    pub fn api_error(&self) -> Option<&str> {
        self.api_error.as_deref()
    }

    /// Whether a submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Compute the current phase.
    ///
    /// The success banner auto-reverts: once its deadline passes, the phase
    /// reads `Idle` again without any background task.
    pub fn phase(&self) -> FormPhase {
        if self.submitting {
            return FormPhase::Submitting;
        }
        if self.api_error.is_some() {
            return FormPhase::ErrorShown;
        }
        match self.success_until {
            Some(until) if Instant::now() < until => FormPhase::SuccessShown,
            _ => FormPhase::Idle,
        }
    }

    /// Record an edit: clear the field's stored error and any API banner.
    fn edited(&mut self, field: Option<Field>) {
        if let Some(field) = field {
            self.errors.clear(field);
        }
        self.api_error = None;
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.form.name = value.into();
        self.edited(Some(Field::Name));
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.email = value.into();
        self.edited(Some(Field::Email));
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.form.phone = value.into();
        self.edited(Some(Field::Phone));
    }

    pub fn set_message(&mut self, value: impl Into<String>) {
        self.form.message = value.into();
        self.edited(None);
    }

    pub fn set_permit(&mut self, permit: crate::domain::PermitCategory) {
        self.form.permit = permit;
        self.edited(None);
    }

    /// Run validation and, if the form is clean, submit it.
    ///
    /// While a submission is in flight further calls are dropped (explicit
    /// re-entrancy guard). On validation errors the stored errors are
    /// replaced and no network call is made. On an accepted submission the
    /// fields reset to defaults and the success banner starts; on a rejected
    /// one the message is stored and the entered values are kept. The
    /// submitting flag is cleared on every path out.
    pub async fn submit(&mut self) -> FormPhase {
        if self.submitting {
            return FormPhase::Submitting;
        }

        self.api_error = None;

        let errors = validation::validate(&self.form);
        if !errors.is_empty() {
            self.errors = errors;
            return self.phase();
        }

        self.submitting = true;
        let outcome = self.client.submit(&self.form.to_request()).await;
        self.submitting = false;

        match outcome {
            SubmitOutcome::Accepted { message } => {
                tracing::info!(message = %message, "Contact form accepted");
                self.form = ContactForm::default();
                self.errors = FieldErrors::new();
                self.success_until = Some(Instant::now() + self.banner_duration);
            }
            SubmitOutcome::Rejected { message } => {
                tracing::warn!(message = %message, "Contact form rejected");
                self.api_error = Some(message);
            }
        }

        self.phase()
    }
}
