//! Pure field validation for the contact form.
//!
//! `validate` maps the current field values to the set of failing fields with
//! their Spanish error messages. It has no side effects and is used both to
//! gate submission in the form controller and to render inline errors.

use crate::domain::{EmailAddress, PhoneNumber};
use crate::form::ContactForm;
use std::collections::BTreeMap;
use std::fmt;

/// Error message for an empty name.
pub const NAME_REQUIRED: &str = "El nombre es obligatorio";

/// Error message for an empty email.
pub const EMAIL_REQUIRED: &str = "El email es obligatorio";

/// Error message for a malformed email.
pub const EMAIL_INVALID: &str = "El formato del email no es válido";

/// Error message for a malformed phone number.
pub const PHONE_INVALID: &str = "El formato del teléfono no es válido";

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "nombre",
            Field::Email => "email",
            Field::Phone => "telefono",
        };
        write!(f, "{}", name)
    }
}

/// Mapping from failing field to its error message.
///
/// Contains only the fields that failed; an empty map means the form is
/// submittable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error message for a field, if it failed.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Clear the error for a single field, keeping the rest.
    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// Validate the contact form fields.
///
/// All rules run independently of each other:
/// - name must be non-empty after trimming;
/// - email must be non-empty and match the shared email pattern;
/// - phone is only checked when non-empty, and must be exactly nine digits.
pub fn validate(form: &ContactForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.name.trim().is_empty() {
        errors.insert(Field::Name, NAME_REQUIRED);
    }

    if form.email.trim().is_empty() {
        errors.insert(Field::Email, EMAIL_REQUIRED);
    } else if !EmailAddress::is_valid(&form.email) {
        errors.insert(Field::Email, EMAIL_INVALID);
    }

    if !form.phone.is_empty() && !PhoneNumber::is_valid(&form.phone) {
        errors.insert(Field::Phone, PHONE_INVALID);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let errors = validate(&valid_form());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_empty_name_flagged() {
        let mut form = valid_form();
        form.name = "   ".to_string();

        let errors = validate(&form);
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_empty_email_flagged_as_required() {
        let mut form = valid_form();
        form.email = String::new();

        let errors = validate(&form);
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
    }

    #[test]
    fn test_malformed_email_flagged_as_invalid() {
        let mut form = valid_form();
        form.email = "bad-email".to_string();

        let errors = validate(&form);
        assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID));
    }

    #[test]
    fn test_rules_run_independently() {
        let form = ContactForm {
            phone: "123".to_string(),
            ..ContactForm::default()
        };

        let errors = validate(&form);
        assert_eq!(errors.get(Field::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(Field::Phone), Some(PHONE_INVALID));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_empty_phone_never_flagged() {
        let errors = validate(&valid_form());
        assert_eq!(errors.get(Field::Phone), None);
    }

    #[test]
    fn test_nine_digit_phone_accepted() {
        let mut form = valid_form();
        form.phone = "612345678".to_string();
        assert!(validate(&form).is_empty());

        form.phone = "61234567".to_string();
        assert_eq!(validate(&form).get(Field::Phone), Some(PHONE_INVALID));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let form = ContactForm {
            name: String::new(),
            email: "x".to_string(),
            phone: "abc".to_string(),
            ..ContactForm::default()
        };

        assert_eq!(validate(&form), validate(&form));
    }

    #[test]
    fn test_clear_single_field() {
        let form = ContactForm::default();
        let mut errors = validate(&form);
        assert_eq!(errors.len(), 2);

        errors.clear(Field::Name);
        assert_eq!(errors.get(Field::Name), None);
        assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
    }
}
