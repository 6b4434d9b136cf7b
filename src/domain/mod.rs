//! Domain value objects and types.
//!
//! Type-safe wrappers for the values a visitor types into the contact form.
//! Each one validates at construction, so a `ContactName`, `EmailAddress` or
//! `PhoneNumber` that exists is known to satisfy the form's rules.

pub mod whitespace;

pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
pub use whitespace::{is_form_whitespace, trim_form};
