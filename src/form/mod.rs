//! Contact form state: field buffer and submission controller.
//!
//! `ContactForm` holds the raw field values as the visitor types them;
//! `FormController` owns the submission state machine built on top.

pub mod controller;

pub use controller::{FormController, FormPhase};

use crate::domain::PermitCategory;
use crate::models::ContactRequest;

/// Raw field values of the contact form.
///
/// Everything is kept as entered, including invalid input; validation happens
/// on submit. An empty phone or message means "not provided".
#[derive(Debug, Clone, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub permit: PermitCategory,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            message: String::new(),
            permit: PermitCategory::default(),
        }
    }
}

impl ContactForm {
    /// Convert the field buffer into the wire payload.
    ///
    /// Empty optional fields are dropped rather than sent as empty strings.
    pub fn to_request(&self) -> ContactRequest {
        ContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: (!self.phone.is_empty()).then(|| self.phone.clone()),
            message: (!self.message.is_empty()).then(|| self.message.clone()),
            permit: Some(self.permit),
        }
    }
}
