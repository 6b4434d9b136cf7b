//! Error types for the contact hand-off library.
//!
//! This module defines the environment-level error types using `thiserror`.
//! User-input failures live in [`crate::domain::ValidationError`] because they
//! are expected during normal operation and are rendered inline, not propagated.

use thiserror::Error;

/// Errors raised by the markup port when the page does not match the
/// expected element contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// An element the form relies on is not present
    #[error("Element not found: #{0}")]
    MissingElement(String),

    /// The page refused the operation, e.g. a blocked popup
    #[error("Operation refused by page: {0}")]
    Refused(String),
}

/// Errors that can occur when scheduling a delayed callback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    /// No tokio runtime is available on the current thread
    #[error("No async runtime available for scheduling")]
    NoRuntime,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with MarkupError
pub type MarkupResult<T> = Result<T, MarkupError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
