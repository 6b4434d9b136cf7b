//! Deterministic scheduler for tests and headless use.

use super::{Scheduler, Task, TaskHandle};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
    cancelled: Arc<AtomicBool>,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_seq: u64,
    pending: Vec<Pending>,
}

/// Deterministic scheduler driven by an explicit virtual clock.
///
/// Nothing runs until [`ManualScheduler::advance`] moves the clock past a
/// task's due time. Tasks due at the same instant run in scheduling order,
/// and tasks scheduled by a running task are eligible within the same advance.
#[derive(Default)]
pub struct ManualScheduler {
    state: Mutex<ManualState>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Number of tasks still waiting to run.
    pub fn pending(&self) -> usize {
        self.lock()
            .pending
            .iter()
            .filter(|p| !p.cancelled.load(Ordering::Acquire))
            .count()
    }

    /// Move the clock forward, running every task that falls due.
    ///
    /// Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.lock().now + by;
        let mut ran = 0;

        loop {
            let next = {
                let mut state = self.lock();
                state.pending.retain(|p| !p.cancelled.load(Ordering::Acquire));

                let earliest = state
                    .pending
                    .iter()
                    .enumerate()
                    .filter(|(_, p)| p.due <= target)
                    .min_by_key(|(_, p)| (p.due, p.seq))
                    .map(|(idx, _)| idx);

                match earliest {
                    Some(idx) => {
                        let task = state.pending.remove(idx);
                        state.now = task.due;
                        Some(task)
                    }
                    None => {
                        state.now = target;
                        None
                    }
                }
            };

            // Lock released: the task may schedule more work
            match next {
                Some(task) if !task.cancelled.load(Ordering::Acquire) => {
                    (task.task)();
                    ran += 1;
                }
                Some(_) => {}
                None => break,
            }
        }

        ran
    }

    /// Keep advancing until no task is left. Returns how many tasks ran.
    pub fn run_until_idle(&self) -> usize {
        let mut ran = 0;
        loop {
            let last_due = {
                let mut state = self.lock();
                state.pending.retain(|p| !p.cancelled.load(Ordering::Acquire));
                state.pending.iter().map(|p| p.due).max()
            };

            match last_due {
                Some(due) => {
                    let now = self.now();
                    ran += self.advance(due.saturating_sub(now));
                }
                None => return ran,
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, ManualState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) -> TaskHandle {
        let handle = TaskHandle::new();
        let mut state = self.lock();
        let pending = Pending {
            due: state.now + delay,
            seq: state.next_seq,
            task,
            cancelled: handle.cancel_token(),
        };
        state.next_seq += 1;
        state.pending.push(pending);
        handle
    }
}
