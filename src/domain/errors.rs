//! Domain validation errors.

use std::fmt;

/// Ways a single form value can fail validation.
///
/// These carry no field context; see [`crate::form::FieldError`] for the
/// field-qualified form that gets rendered next to an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// The value is empty after trimming.
    EmptyField,

    /// The value has fewer than `min` characters after trimming.
    TooShort { min: usize },

    /// The value does not have the expected shape.
    BadFormat,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField => write!(f, "value cannot be empty"),
            Self::TooShort { min } => write!(f, "value must be at least {} characters", min),
            Self::BadFormat => write!(f, "value has an invalid format"),
        }
    }
}

impl std::error::Error for ValidationError {}
