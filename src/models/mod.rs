//! Data models for the contact form.

pub mod contact_request;

pub use contact_request::ContactRequest;
