//! ContactName value object.

use super::errors::ValidationError;
use super::whitespace::trim_form;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A visitor's name as entered in the contact form.
///
/// Stored trimmed. Length is counted in UTF-16 code units, the way a browser
/// measures form input, so one astral-plane character already has length 2.
///
/// # Example
///
/// ```
/// use contact_handoff::domain::ContactName;
///
/// let name = ContactName::new("  Jo ").unwrap();
/// assert_eq!(name.as_str(), "Jo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactName(String);

impl ContactName {
    /// Minimum length in UTF-16 code units after trimming.
    pub const MIN_LEN: usize = 2;

    /// Create a new ContactName from raw input.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmptyField` if nothing remains after trimming
    /// - `ValidationError::TooShort` if fewer than [`Self::MIN_LEN`] UTF-16 units remain
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let name = trim_form(name.as_ref());

        if name.is_empty() {
            return Err(ValidationError::EmptyField);
        }

        if name.encode_utf16().count() < Self::MIN_LEN {
            return Err(ValidationError::TooShort { min: Self::MIN_LEN });
        }

        Ok(Self(name.to_string()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
