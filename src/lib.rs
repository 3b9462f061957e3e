//! Autoescuela Contacto - contact submission service for a driving school website.
//!
//! This crate implements the complete contact-form flow for the site: the
//! backend endpoint that authoritatively validates and accepts submissions,
//! the client that posts a contact request and normalizes every outcome, and
//! the form controller that owns the UI-visible submission state machine.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (email, phone, permit category)
//! - **models**: wire-level contact request and response envelopes
//! - **validation**: pure field validation shared by client and server
//! - **client**: HTTP client posting contact requests to the backend
//! - **form**: form controller owning the submission state machine
//! - **server**: axum routes and the contact delivery collaborator
//! - **fixtures**: static testimonial/service content tables
//! - **config**: configuration management from environment variables
//! - **error**: custom error types for precise error handling

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod fixtures;
pub mod form;
pub mod metrics;
pub mod models;
pub mod server;
pub mod validation;

pub use client::{AsyncContactClient, ContactClient, SubmissionClient, SubmitOutcome};
pub use config::Config;
pub use domain::{EmailAddress, PermitCategory, PhoneNumber};
pub use error::{ConfigError, ContactApiError, SinkError};
pub use form::{ContactForm, FormController, FormPhase};
pub use metrics::Metrics;
pub use models::{ApiErrorBody, ContactRequest, DataResponse, SubmitResponse};
pub use server::{build_router, AppState, ContactSink, LoggingSink};
pub use validation::{validate, Field, FieldErrors};
