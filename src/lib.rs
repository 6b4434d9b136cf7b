//! Contact Handoff - contact form validation and messaging hand-off for brochure websites.
//!
//! A visitor fills in name, email, an optional phone number and an optional
//! message. The form checks each field on blur and again on submit, and when
//! everything passes it builds a templated message and opens it in a
//! messaging deep link (`https://wa.me/?text=...` by default).
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, emails and phone numbers
//! - **models**: The raw contact request as read from the page
//! - **form**: Field rules, message building and the submission flow
//! - **markup**: The page access trait and an in-memory page
//! - **scheduler**: Cancellable delayed callbacks (tokio timers or manual clock)
//! - **config**: Hand-off target, greeting, timings and element ids
//! - **error**: Environment error types
//! - **observability**: Logging setup and submission counters
//!
//! # Example
//!
//! ```
//! use contact_handoff::{Config, ContactForm, Field, ManualScheduler, MemoryDocument, SubmissionOutcome};
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! let page = Arc::new(MemoryDocument::contact_page());
//! let clock = Arc::new(ManualScheduler::new());
//! let form = ContactForm::init(page.clone(), clock.clone(), &Config::default()).unwrap();
//!
//! page.fill(Field::Name, "Jo");
//! page.fill(Field::Email, "a@b.co");
//! assert!(matches!(form.submit(), SubmissionOutcome::HandedOff(_)));
//!
//! clock.advance(Duration::from_secs(1));
//! assert_eq!(page.opened_links().len(), 1);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod markup;
pub mod models;
pub mod observability;
pub mod scheduler;

pub use config::{Config, FormElements};
pub use domain::{ContactName, EmailAddress, PhoneNumber, ValidationError};
pub use error::{ConfigError, MarkupError, SchedulerError};
pub use form::{
    ContactForm, Field, FieldError, FormEvent, FormValidator, HandOff, SubmissionOutcome,
    SubmissionState, ValidationResult,
};
pub use markup::{Markup, MemoryDocument, NewElement};
pub use models::ContactRequest;
pub use observability::{init_logging, FormMetrics, FormMetricsSummary};
pub use scheduler::{ManualScheduler, Scheduler, TaskHandle, TokioScheduler};
