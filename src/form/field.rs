//! Form fields and per-field validation results.

use crate::domain::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The inputs of the contact form, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    /// Every input, in document order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// Inputs that carry validation rules.
    pub const VALIDATED: [Field; 3] = [Field::Name, Field::Email, Field::Phone];

    /// Id of the input element.
    pub fn input_id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    /// Id of the element that shows this field's error text.
    ///
    /// The free-text message has no rules and therefore no error holder.
    pub fn error_id(self) -> Option<&'static str> {
        match self {
            Field::Name => Some("nameError"),
            Field::Email => Some("emailError"),
            Field::Phone => Some("phoneError"),
            Field::Message => None,
        }
    }

    /// Label used in the outbound message, e.g. `Name`.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Message => "Message",
        }
    }

    /// How the field is referred to in error text.
    fn noun(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email address",
            Field::Phone => "phone number",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.input_id())
    }
}

/// A validation failure attached to the field it happened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldError {
    pub field: Field,
    pub kind: ValidationError,
}

impl FieldError {
    pub fn new(field: Field, kind: ValidationError) -> Self {
        Self { field, kind }
    }

    /// The text shown under the input.
    pub fn message(&self) -> String {
        match self.kind {
            ValidationError::EmptyField => format!("Please enter your {}", self.field.noun()),
            ValidationError::TooShort { min } => {
                format!("{} must be at least {} characters", self.field.label(), min)
            }
            ValidationError::BadFormat => format!("Please enter a valid {}", self.field.noun()),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message())
    }
}

impl std::error::Error for FieldError {}

/// Outcome of checking one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub field: Field,
    pub error: Option<ValidationError>,
}

impl ValidationResult {
    pub fn valid(field: Field) -> Self {
        Self { field, error: None }
    }

    pub fn invalid(field: Field, error: ValidationError) -> Self {
        Self {
            field,
            error: Some(error),
        }
    }

    pub(crate) fn from_check<T>(field: Field, check: Result<T, ValidationError>) -> Self {
        match check {
            Ok(_) => Self::valid(field),
            Err(error) => Self::invalid(field, error),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Human-readable error text, `None` when valid.
    pub fn message(&self) -> Option<String> {
        self.field_error().map(|err| err.message())
    }

    pub fn field_error(&self) -> Option<FieldError> {
        self.error.map(|kind| FieldError::new(self.field, kind))
    }
}
