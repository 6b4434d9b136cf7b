//! The contact form: field rules, message building and the submission flow.
//!
//! - [`FormValidator`] is pure: it validates a [`ContactRequest`] and builds
//!   the hand-off message and link.
//! - [`ContactForm`] binds a validator to a page through [`Markup`] and runs
//!   the event-driven submission flow, completing hand-offs through a
//!   [`Scheduler`].
//!
//! [`ContactRequest`]: crate::models::ContactRequest
//! [`Markup`]: crate::markup::Markup
//! [`Scheduler`]: crate::scheduler::Scheduler

mod controller;
mod field;
mod state;
mod validator;

pub use controller::{ContactForm, FormEvent, SubmissionOutcome, REDIRECTING_LABEL, SUCCESS_TEXT};
pub use field::{Field, FieldError, ValidationResult};
pub use state::{SubmissionGuard, SubmissionState};
pub use validator::{FormValidator, HandOff};
