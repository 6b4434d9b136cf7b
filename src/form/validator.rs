//! Field rules, message templating and hand-off link building.

use super::field::{Field, FieldError, ValidationResult};
use crate::config::Config;
use crate::domain::{ContactName, EmailAddress, PhoneNumber};
use crate::models::ContactRequest;
use serde::Serialize;

/// A ready-to-open hand-off: the message and the link that carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandOff {
    pub message: String,
    pub uri: String,
}

/// Field rules plus message and link building for the contact form.
///
/// Holds no page state; the same validator can check any number of requests.
#[derive(Debug, Clone)]
pub struct FormValidator {
    handoff_base_url: String,
    greeting: String,
}

impl FormValidator {
    pub fn new(config: &Config) -> Self {
        Self {
            handoff_base_url: config.handoff_base_url.clone(),
            greeting: config.greeting.clone(),
        }
    }

    /// Name is required and needs at least two UTF-16 units after trimming.
    pub fn validate_name(value: &str) -> ValidationResult {
        ValidationResult::from_check(Field::Name, ContactName::new(value))
    }

    /// Email is required and must look like `local@domain.tld`.
    pub fn validate_email(value: &str) -> ValidationResult {
        ValidationResult::from_check(Field::Email, EmailAddress::new(value))
    }

    /// Phone is optional; when given it must match the loose phone pattern.
    pub fn validate_phone(value: &str) -> ValidationResult {
        ValidationResult::from_check(Field::Phone, PhoneNumber::parse_optional(value))
    }

    /// Check one field. The free-text message always passes.
    pub fn validate_field(field: Field, value: &str) -> ValidationResult {
        match field {
            Field::Name => Self::validate_name(value),
            Field::Email => Self::validate_email(value),
            Field::Phone => Self::validate_phone(value),
            Field::Message => ValidationResult::valid(Field::Message),
        }
    }

    /// Check every rule-bearing field independently, in document order.
    pub fn validate(request: &ContactRequest) -> Vec<ValidationResult> {
        Field::VALIDATED
            .iter()
            .map(|&field| Self::validate_field(field, request.value(field)))
            .collect()
    }

    /// Format the outbound message.
    ///
    /// ```text
    /// <greeting>
    ///
    /// My details:
    /// Name: <name>
    /// Email: <email>
    /// Phone: <phone>        (only when given)
    ///
    /// Message: <message>    (only when given)
    /// ```
    pub fn build_message(&self, request: &ContactRequest) -> String {
        let request = request.trimmed();

        let mut message = format!("{}\n\n", self.greeting);
        message.push_str("My details:\n");
        message.push_str(&format!("{}: {}\n", Field::Name.label(), request.name));
        message.push_str(&format!("{}: {}\n", Field::Email.label(), request.email));

        if !request.phone.is_empty() {
            message.push_str(&format!("{}: {}\n", Field::Phone.label(), request.phone));
        }

        if !request.message.is_empty() {
            message.push_str(&format!("\n{}: {}", Field::Message.label(), request.message));
        }

        message
    }

    /// Messaging link carrying `message` as its percent-encoded `text` parameter.
    pub fn handoff_uri(&self, message: &str) -> String {
        format!(
            "{}?text={}",
            self.handoff_base_url,
            urlencoding::encode(message)
        )
    }

    /// Validate a request and, if every field passes, build its hand-off.
    ///
    /// # Errors
    ///
    /// Returns every field failure, in document order.
    pub fn prepare(&self, request: &ContactRequest) -> Result<HandOff, Vec<FieldError>> {
        let errors: Vec<FieldError> = Self::validate(request)
            .iter()
            .filter_map(ValidationResult::field_error)
            .collect();

        if !errors.is_empty() {
            return Err(errors);
        }

        let message = self.build_message(request);
        let uri = self.handoff_uri(&message);
        Ok(HandOff { message, uri })
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
