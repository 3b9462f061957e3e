//! Wire-level data models for the contact API.
//!
//! This module contains the contact request payload and the JSON envelopes
//! the backend responds with.

pub mod api;
pub mod contact_request;

pub use api::{ApiErrorBody, DataResponse, SubmitResponse};
pub use contact_request::ContactRequest;
