//! The contact form controller: page events, submission and hand-off completion.

use super::field::{Field, FieldError, ValidationResult};
use super::state::{SubmissionGuard, SubmissionState};
use super::validator::{FormValidator, HandOff};
use crate::config::{Config, FormElements};
use crate::error::{MarkupError, MarkupResult};
use crate::markup::{Markup, NewElement};
use crate::models::ContactRequest;
use crate::observability::FormMetrics;
use crate::scheduler::{Scheduler, TaskHandle};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Class marking an input whose value failed validation.
const ERROR_CLASS: &str = "error";

/// Class of the notice appended after a hand-off.
const SUCCESS_CLASS: &str = "success-message";

/// Submit button label while a hand-off is pending.
pub const REDIRECTING_LABEL: &str = "Redirecting...";

/// Text of the notice shown once the hand-off link has been opened.
pub const SUCCESS_TEXT: &str = "WhatsApp opened successfully! Your message is ready to send.";

/// Page events the contact form reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// An input lost focus.
    Blur(Field),
    /// An input's value changed.
    Input(Field),
    /// The form was submitted.
    Submit,
}

/// What a submit attempt did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Another submission was already in flight; nothing happened.
    Ignored,
    /// At least one field failed. `focused` is the first invalid input.
    Rejected {
        errors: Vec<FieldError>,
        focused: Option<Field>,
    },
    /// The page is missing an element the flow needs.
    Aborted(MarkupError),
    /// Validation passed and the hand-off completion is scheduled.
    HandedOff(HandOff),
}

/// A scheduled hand-off completion and what it needs to undo.
struct PendingHandOff {
    id: u64,
    timer: TaskHandle,
    original_label: String,
}

/// State reachable from scheduled callbacks.
struct Shared {
    markup: Arc<dyn Markup>,
    scheduler: Arc<dyn Scheduler>,
    elements: FormElements,
    success_notice_ttl: Duration,
    guard: SubmissionGuard,
    next_handoff_id: AtomicU64,
    pending: Mutex<Option<PendingHandOff>>,
    notice_timer: Mutex<Option<TaskHandle>>,
    metrics: FormMetrics,
}

/// The contact form bound to a page.
///
/// Owns the submission state: at most one hand-off is in flight per form.
/// Event handlers never panic or return errors; missing markup is logged and
/// the affected operation is skipped.
pub struct ContactForm {
    shared: Arc<Shared>,
    validator: FormValidator,
    redirect_delay: Duration,
}

impl ContactForm {
    /// Bind the form to a page.
    ///
    /// # Errors
    ///
    /// Returns `MarkupError::MissingElement` naming the first absent element if
    /// the form container or any of its four inputs is missing. The caller
    /// should leave the feature disabled; the error has already been logged.
    pub fn init(
        markup: Arc<dyn Markup>,
        scheduler: Arc<dyn Scheduler>,
        config: &Config,
    ) -> MarkupResult<Self> {
        info!("Initializing contact form");

        if !markup.contains(&config.elements.form) {
            error!(form = %config.elements.form, "Contact form not found");
            return Err(MarkupError::MissingElement(config.elements.form.clone()));
        }

        let missing: Vec<&str> = Field::ALL
            .iter()
            .map(|field| field.input_id())
            .filter(|id| !markup.contains(id))
            .collect();
        if let Some(first) = missing.first() {
            error!(missing = ?missing, "Some form fields not found");
            return Err(MarkupError::MissingElement(first.to_string()));
        }

        debug!("Form fields found, validation ready");

        Ok(Self {
            shared: Arc::new(Shared {
                markup,
                scheduler,
                elements: config.elements.clone(),
                success_notice_ttl: config.success_notice_ttl(),
                guard: SubmissionGuard::new(),
                next_handoff_id: AtomicU64::new(0),
                pending: Mutex::new(None),
                notice_timer: Mutex::new(None),
                metrics: FormMetrics::new(),
            }),
            validator: FormValidator::new(config),
            redirect_delay: config.redirect_delay(),
        })
    }

    /// Dispatch a page event. Only `Submit` produces an outcome.
    pub fn handle(&self, event: FormEvent) -> Option<SubmissionOutcome> {
        match event {
            FormEvent::Blur(field) => {
                self.on_blur(field);
                None
            }
            FormEvent::Input(field) => {
                self.on_input(field);
                None
            }
            FormEvent::Submit => Some(self.submit()),
        }
    }

    /// Validate a field when it loses focus and show the result.
    ///
    /// Returns `None` for the message field, which has no rules, and when the
    /// field's elements are missing.
    pub fn on_blur(&self, field: Field) -> Option<ValidationResult> {
        if field.error_id().is_none() {
            return None;
        }

        debug!(field = %field, "Field blur");
        match self.check_field(field) {
            Ok(result) => Some(result),
            Err(e) => {
                error!(field = %field, error = %e, "Validation elements not found");
                None
            }
        }
    }

    /// Clear a field's error text as soon as the visitor edits it.
    ///
    /// The `error` class stays until the field is validated again.
    pub fn on_input(&self, field: Field) {
        let Some(error_id) = field.error_id() else {
            return;
        };
        let markup = &self.shared.markup;
        if markup.contains(error_id) {
            if let Err(e) = markup.set_text(error_id, "") {
                warn!(field = %field, error = %e, "Could not clear error text");
            }
        }
    }

    /// Run the submission flow.
    ///
    /// `Idle -> Validating -> Idle` when a field fails or markup is missing,
    /// `Idle -> Validating -> Submitting` when the hand-off is scheduled. The
    /// scheduled completion opens the link, restores the button, clears the
    /// fields, shows the success notice and returns to `Idle`.
    pub fn submit(&self) -> SubmissionOutcome {
        let shared = &self.shared;
        shared.metrics.track_submit_attempt();
        info!("Form submitted");

        if shared.guard.state() == SubmissionState::Submitting {
            shared.metrics.track_ignored();
            return SubmissionOutcome::Ignored;
        }

        let mut errors = Vec::new();
        for field in Field::VALIDATED {
            match self.check_field(field) {
                Ok(result) => errors.extend(result.field_error()),
                Err(e) => return self.abort(e),
            }
        }

        if !errors.is_empty() {
            let focused = self.focus_first_error();
            shared.metrics.track_rejected(errors.len());
            return SubmissionOutcome::Rejected { errors, focused };
        }

        if !shared.guard.try_begin() {
            shared.metrics.track_ignored();
            return SubmissionOutcome::Ignored;
        }

        match self.begin_handoff() {
            Ok(outcome) => outcome,
            Err(e) => {
                shared.guard.finish();
                self.abort(e)
            }
        }
    }

    /// Cancel a scheduled hand-off completion.
    ///
    /// Restores the submit button and returns to `Idle` without opening the
    /// link or clearing the fields. Returns `false` if nothing was pending.
    pub fn cancel_pending(&self) -> bool {
        let Some(pending) = lock(&self.shared.pending).take() else {
            return false;
        };

        pending.timer.cancel();
        self.shared.restore_submit_button(&pending.original_label);
        self.shared.guard.finish();
        info!("Pending hand-off cancelled");
        true
    }

    pub fn state(&self) -> SubmissionState {
        self.shared.guard.state()
    }

    pub fn metrics(&self) -> &FormMetrics {
        &self.shared.metrics
    }

    pub fn validator(&self) -> &FormValidator {
        &self.validator
    }

    /// Read, validate and render one field.
    fn check_field(&self, field: Field) -> MarkupResult<ValidationResult> {
        let markup = &self.shared.markup;
        let input_id = field.input_id();
        let error_id = field.error_id();

        if let Some(error_id) = error_id {
            if !markup.contains(error_id) {
                return Err(MarkupError::MissingElement(error_id.to_string()));
            }
        }

        let value = markup.value(input_id)?;
        let result = FormValidator::validate_field(field, &value);

        match (result.message(), error_id) {
            (Some(message), Some(error_id)) => {
                debug!(field = %field, message = %message, "Showing error");
                markup.add_class(input_id, ERROR_CLASS)?;
                markup.set_text(error_id, &message)?;
            }
            (None, Some(error_id)) => {
                markup.set_text(error_id, "")?;
                markup.remove_class(input_id, ERROR_CLASS)?;
            }
            _ => {}
        }

        Ok(result)
    }

    /// Focus the first input marked invalid, in document order.
    fn focus_first_error(&self) -> Option<Field> {
        let markup = &self.shared.markup;
        let first = markup
            .find_by_class(ERROR_CLASS)
            .into_iter()
            .find_map(|id| Field::ALL.into_iter().find(|f| f.input_id() == id))?;

        match markup.focus(first.input_id()) {
            Ok(()) => {
                debug!(field = %first, "Focused on first error field");
                Some(first)
            }
            Err(e) => {
                warn!(field = %first, error = %e, "Could not focus invalid field");
                None
            }
        }
    }

    /// Build the hand-off, show the loading state and schedule completion.
    fn begin_handoff(&self) -> MarkupResult<SubmissionOutcome> {
        let shared = &self.shared;
        let markup = &shared.markup;

        let request = ContactRequest::read_from(markup.as_ref())?;
        let handoff = match self.validator.prepare(&request) {
            Ok(handoff) => handoff,
            Err(errors) => {
                // Values changed between validation and read-back
                shared.guard.finish();
                let focused = self.focus_first_error();
                shared.metrics.track_rejected(errors.len());
                return Ok(SubmissionOutcome::Rejected { errors, focused });
            }
        };

        let button = &shared.elements.submit_button;
        if !markup.contains(button) {
            error!(button = %button, "Submit button not found");
            return Err(MarkupError::MissingElement(button.clone()));
        }

        let original_label = markup.text(button)?;
        markup.set_text(button, REDIRECTING_LABEL)?;
        markup.set_disabled(button, true)?;

        shared.metrics.track_handoff_started(handoff.message.len());
        debug!(uri = %handoff.uri, "Scheduling hand-off");

        let id = shared.next_handoff_id.fetch_add(1, Ordering::Relaxed);
        let completion = Arc::clone(shared);
        let uri = handoff.uri.clone();
        let label = original_label.clone();

        // Held across scheduling so the completion cannot run before it is recorded
        let mut pending = lock(&shared.pending);
        let timer = shared.scheduler.schedule(
            self.redirect_delay,
            Box::new(move || completion.complete_handoff(id, &uri, &label)),
        );
        *pending = Some(PendingHandOff {
            id,
            timer,
            original_label,
        });

        Ok(SubmissionOutcome::HandedOff(handoff))
    }

    fn abort(&self, e: MarkupError) -> SubmissionOutcome {
        error!(error = %e, "Form elements not found during submission");
        self.shared.metrics.track_aborted();
        SubmissionOutcome::Aborted(e)
    }
}

impl Shared {
    /// Finish hand-off `id`, unless it was cancelled or superseded.
    fn complete_handoff(self: &Arc<Self>, id: u64, uri: &str, original_label: &str) {
        {
            let mut pending = lock(&self.pending);
            match pending.as_ref() {
                Some(current) if current.id == id => {
                    pending.take();
                }
                _ => {
                    debug!(handoff = id, "Skipping stale hand-off completion");
                    return;
                }
            }
        }

        info!("Opening hand-off link");
        if let Err(e) = self.markup.open_in_new_context(uri) {
            error!(error = %e, "Could not open hand-off link");
        }

        self.restore_submit_button(original_label);
        self.guard.finish();

        for field in Field::ALL {
            if let Err(e) = self.markup.set_value(field.input_id(), "") {
                warn!(field = %field, error = %e, "Could not clear field");
            }
        }

        self.show_success_notice();
        self.metrics.track_handoff_completed();
    }

    fn restore_submit_button(&self, label: &str) {
        let button = &self.elements.submit_button;
        let restored = self
            .markup
            .set_text(button, label)
            .and_then(|()| self.markup.set_disabled(button, false));
        if let Err(e) = restored {
            warn!(error = %e, "Could not restore submit button");
        }
    }

    /// Replace any existing notice and remove the new one after its TTL.
    fn show_success_notice(self: &Arc<Self>) {
        let notice_id = self.elements.success_notice.clone();

        if let Some(previous) = lock(&self.notice_timer).take() {
            previous.cancel();
        }
        if self.markup.contains(&notice_id) {
            if let Err(e) = self.markup.remove_element(&notice_id) {
                warn!(error = %e, "Could not remove previous success notice");
            }
        }

        let notice = NewElement {
            id: notice_id.clone(),
            class: SUCCESS_CLASS.to_string(),
            text: SUCCESS_TEXT.to_string(),
        };
        if let Err(e) = self.markup.append_element(&self.elements.form, notice) {
            warn!(error = %e, "Could not show success notice");
            return;
        }
        debug!("Showing success message");

        let markup = Arc::clone(&self.markup);
        let timer = self.scheduler.schedule(
            self.success_notice_ttl,
            Box::new(move || {
                if markup.contains(&notice_id) {
                    if let Err(e) = markup.remove_element(&notice_id) {
                        warn!(error = %e, "Could not remove success notice");
                    }
                }
            }),
        );
        *lock(&self.notice_timer) = Some(timer);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
