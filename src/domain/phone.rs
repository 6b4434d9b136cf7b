//! PhoneNumber value object.

use super::errors::ValidationError;
use super::whitespace::{form_whitespace_class, trim_form};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Optional leading `+`, then at least ten ASCII digits, spaces, hyphens or parentheses.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(r"^[+]?[0-9", form_whitespace_class!(), r"\-()]{10,}$"))
        .expect("Failed to compile phone regex")
});

/// A type-safe wrapper for phone numbers.
///
/// The phone field is optional on the contact form, so the usual entry point
/// is [`PhoneNumber::parse_optional`], which maps blank input to `None`.
///
/// # Example
///
/// ```
/// use contact_handoff::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+1 (555) 123-4567").unwrap();
/// assert_eq!(phone.digits_only(), "15551234567");
/// assert!(PhoneNumber::parse_optional("   ").unwrap().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Optional leading `+`
    /// - At least 10 characters drawn from digits, whitespace, `-`, `(` and `)`
    ///
    /// Only the character set and length are checked; `"----------"` passes.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmptyField` if nothing remains after trimming
    /// - `ValidationError::BadFormat` otherwise
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let phone = trim_form(phone.as_ref());

        if phone.is_empty() {
            return Err(ValidationError::EmptyField);
        }

        if !Self::is_valid(phone) {
            return Err(ValidationError::BadFormat);
        }

        Ok(Self(phone.to_string()))
    }

    /// Parse an optional phone value; blank input is `Ok(None)`.
    pub fn parse_optional(phone: impl AsRef<str>) -> Result<Option<Self>, ValidationError> {
        let phone = trim_form(phone.as_ref());
        if phone.is_empty() {
            return Ok(None);
        }
        Self::new(phone).map(Some)
    }

    /// Check the phone shape without allocating.
    pub fn is_valid(phone: &str) -> bool {
        PHONE_REGEX.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
