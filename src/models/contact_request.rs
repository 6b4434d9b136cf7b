//! The contact request as entered on the page.

use crate::domain::trim_form;
use crate::error::MarkupResult;
use crate::form::Field;
use crate::markup::Markup;
use serde::{Deserialize, Serialize};

/// What a visitor entered in the contact form.
///
/// Values are plain strings; an empty `phone` or `message` means the visitor
/// left that optional field blank. Nothing here is validated, see
/// [`crate::form::FormValidator`] for the rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl ContactRequest {
    /// Create a request with only the required fields.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Read all four fields from the page, trimming each value.
    pub fn read_from(markup: &dyn Markup) -> MarkupResult<Self> {
        let read = |field: Field| -> MarkupResult<String> {
            Ok(trim_form(&markup.value(field.input_id())?).to_string())
        };
        Ok(Self {
            name: read(Field::Name)?,
            email: read(Field::Email)?,
            phone: read(Field::Phone)?,
            message: read(Field::Message)?,
        })
    }

    /// The raw value of one field.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    /// A copy with every value trimmed.
    pub fn trimmed(&self) -> Self {
        Self {
            name: trim_form(&self.name).to_string(),
            email: trim_form(&self.email).to_string(),
            phone: trim_form(&self.phone).to_string(),
            message: trim_form(&self.message).to_string(),
        }
    }
}
