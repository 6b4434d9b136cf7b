//! Delayed callbacks with cancellation.
//!
//! The submission flow waits a fixed delay before completing a hand-off.
//! Rather than calling a timer API directly, it schedules the completion on a
//! [`Scheduler`] and keeps the returned [`TaskHandle`] so the completion can
//! be cancelled.

mod manual;
mod timer;

pub use manual::ManualScheduler;
pub use timer::TokioScheduler;

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// A callback to run once after a delay.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Runs tasks after a delay.
///
/// Implementations create a [`TaskHandle`] per task and must not run a task
/// whose handle reports [`TaskHandle::is_cancelled`].
pub trait Scheduler: Send + Sync {
    /// Schedule `task` to run once after `delay`.
    fn schedule(&self, delay: Duration, task: Task) -> TaskHandle;
}

type CancelHook = Box<dyn Fn() + Send + Sync + 'static>;

/// Handle to a scheduled task.
///
/// Dropping the handle does not cancel the task.
pub struct TaskHandle {
    cancelled: Arc<AtomicBool>,
    on_cancel: Option<CancelHook>,
}

impl TaskHandle {
    pub fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
            on_cancel: None,
        }
    }

    /// Run `hook` when the task is cancelled, e.g. to clear a platform timer.
    pub fn on_cancel(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_cancel = Some(Box::new(hook));
        self
    }

    /// Flag shared with the scheduler; set once the task must not run.
    pub fn cancel_token(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancelled)
    }

    /// Prevent the task from running. No effect if it already ran.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
        if let Some(hook) = &self.on_cancel {
            hook();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl Default for TaskHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskHandle")
            .field("cancelled", &self.is_cancelled())
            .field("on_cancel", &self.on_cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_cancel_sets_token_and_runs_hook() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let handle = TaskHandle::new().on_cancel(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let token = handle.cancel_token();

        handle.cancel();

        assert!(token.load(Ordering::Acquire));
        assert!(handle.is_cancelled());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
