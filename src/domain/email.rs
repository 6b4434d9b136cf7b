//! EmailAddress value object.

use super::errors::ValidationError;
use super::whitespace::{form_whitespace_class, trim_form};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// `local@domain.tld` with no whitespace or extra `@` in any part.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[^", form_whitespace_class!(), r"@]+",
        r"@[^", form_whitespace_class!(), r"@]+",
        r"\.[^", form_whitespace_class!(), r"@]+$",
    ))
    .expect("Failed to compile email regex")
});

/// A type-safe wrapper for email addresses.
///
/// The check is intentionally loose: anything shaped like `local@domain.tld`
/// passes, which is what the contact form has always accepted.
///
/// # Example
///
/// ```
/// use contact_handoff::domain::EmailAddress;
///
/// let email = EmailAddress::new("a@b.co").unwrap();
/// assert_eq!(email.domain(), "b.co");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress from raw input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmptyField` if nothing remains after trimming
    /// - `ValidationError::BadFormat` if the value is not shaped like an address
    pub fn new(email: impl AsRef<str>) -> Result<Self, ValidationError> {
        let email = trim_form(email.as_ref());

        if email.is_empty() {
            return Err(ValidationError::EmptyField);
        }

        if !Self::is_valid(email) {
            return Err(ValidationError::BadFormat);
        }

        Ok(Self(email.to_string()))
    }

    /// Check the address shape without allocating.
    pub fn is_valid(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map(|(local, _)| local).unwrap_or("")
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map(|(_, domain)| domain).unwrap_or("")
    }
}

impl Serialize for EmailAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EmailAddress::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
