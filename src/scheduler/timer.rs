//! Tokio-backed scheduler.

use super::{Scheduler, Task, TaskHandle};
use crate::error::SchedulerError;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tokio::runtime::Handle;

/// Scheduler backed by tokio timers.
///
/// Each scheduled task is a spawned future that sleeps for the delay and then
/// runs the callback. Cancelling aborts the future.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    runtime: Handle,
}

impl TokioScheduler {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }

    /// Use the runtime the caller is running on.
    ///
    /// # Errors
    ///
    /// Returns `SchedulerError::NoRuntime` outside of a tokio runtime.
    pub fn from_current() -> Result<Self, SchedulerError> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|_| SchedulerError::NoRuntime)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TaskHandle {
        let handle = TaskHandle::new();
        let cancelled = handle.cancel_token();

        let join = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if !cancelled.load(Ordering::Acquire) {
                task();
            }
        });

        tracing::trace!(delay_ms = delay.as_millis() as u64, "Timer scheduled");
        let abort = join.abort_handle();
        handle.on_cancel(move || abort.abort())
    }
}
