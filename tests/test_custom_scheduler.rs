//! A scheduler implemented outside the crate.
//!
//! `StepScheduler` queues tasks and runs them only when told to, by index.
//! It mirrors a platform timer binding: cancellation is reported through the
//! handle's token and hook, and `run_late` lets a task fire after it was
//! cancelled, as a timer that already passed its cancel check would.

use contact_handoff::{
    Config, ContactForm, ContactRequest, Field, Markup, MemoryDocument, Scheduler, SubmissionOutcome,
    SubmissionState, TaskHandle,
};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Task = Box<dyn FnOnce() + Send + 'static>;

struct Queued {
    delay: Duration,
    task: Option<Task>,
    cancelled: Arc<AtomicBool>,
}

#[derive(Default)]
struct StepScheduler {
    queue: Mutex<Vec<Queued>>,
    cleared_timers: Arc<AtomicUsize>,
}

impl StepScheduler {
    fn delay_of(&self, index: usize) -> Duration {
        self.queue.lock().unwrap()[index].delay
    }

    /// Run a task unless it was cancelled. Returns whether it ran.
    fn fire(&self, index: usize) -> bool {
        let (task, cancelled) = {
            let mut queue = self.queue.lock().unwrap();
            let entry = &mut queue[index];
            (entry.task.take(), entry.cancelled.load(Ordering::Acquire))
        };
        match task {
            Some(task) if !cancelled => {
                task();
                true
            }
            _ => false,
        }
    }

    /// Run a task even if it was cancelled after its timer expired.
    fn run_late(&self, index: usize) {
        let task = self.queue.lock().unwrap()[index].task.take();
        if let Some(task) = task {
            task();
        }
    }
}

impl Scheduler for StepScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TaskHandle {
        let cleared = Arc::clone(&self.cleared_timers);
        let handle = TaskHandle::new().on_cancel(move || {
            cleared.fetch_add(1, Ordering::SeqCst);
        });
        self.queue.lock().unwrap().push(Queued {
            delay,
            task: Some(task),
            cancelled: handle.cancel_token(),
        });
        handle
    }
}

fn bind() -> (Arc<MemoryDocument>, Arc<StepScheduler>, ContactForm) {
    let page = Arc::new(MemoryDocument::contact_page());
    let scheduler = Arc::new(StepScheduler::default());
    let form = ContactForm::init(page.clone(), scheduler.clone(), &Config::default()).unwrap();

    let request = ContactRequest::new("Jo", "a@b.co");
    page.fill(Field::Name, &request.name);
    page.fill(Field::Email, &request.email);
    (page, scheduler, form)
}

/// The form drives a scheduler it knows nothing about.
#[test]
fn test_external_scheduler_completes_handoff() {
    let (page, scheduler, form) = bind();

    assert!(matches!(form.submit(), SubmissionOutcome::HandedOff(_)));
    assert_eq!(scheduler.delay_of(0), Duration::from_millis(1000));

    assert!(scheduler.fire(0));
    assert_eq!(page.opened_links().len(), 1);
    assert_eq!(form.state(), SubmissionState::Idle);

    // Success notice removal
    assert_eq!(scheduler.delay_of(1), Duration::from_millis(5000));
    assert!(scheduler.fire(1));
    assert!(!page.contains("contactSuccess"));
}

/// Cancelling reaches the external timer through the handle.
#[test]
fn test_cancel_reaches_external_timer() {
    let (page, scheduler, form) = bind();

    form.submit();
    assert!(form.cancel_pending());

    assert_eq!(scheduler.cleared_timers.load(Ordering::SeqCst), 1);
    assert!(!scheduler.fire(0));
    assert!(page.opened_links().is_empty());
}

/// A completion that fires after its hand-off was cancelled does nothing,
/// even while a newer hand-off is pending.
#[test]
fn test_late_cancelled_completion_is_ignored() {
    let (page, scheduler, form) = bind();

    assert!(matches!(form.submit(), SubmissionOutcome::HandedOff(_)));
    assert!(form.cancel_pending());
    assert!(matches!(form.submit(), SubmissionOutcome::HandedOff(_)));

    scheduler.run_late(0);
    assert!(page.opened_links().is_empty());
    assert_eq!(form.state(), SubmissionState::Submitting);
    assert_eq!(form.submit(), SubmissionOutcome::Ignored);

    let button = page.element("contactSubmit").unwrap();
    assert!(button.disabled);

    assert!(scheduler.fire(1));
    assert_eq!(page.opened_links().len(), 1);
    assert_eq!(form.state(), SubmissionState::Idle);
}
