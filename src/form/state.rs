//! Submission guard: at most one hand-off in flight per form.

use std::sync::atomic::{AtomicBool, Ordering};

/// Whether a hand-off is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
}

/// At-most-one-in-flight guard for submissions, owned by a single form.
#[derive(Debug, Default)]
pub struct SubmissionGuard {
    in_flight: AtomicBool,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move from `Idle` to `Submitting`. Returns `false` if already submitting.
    pub fn try_begin(&self) -> bool {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Return to `Idle`.
    pub fn finish(&self) {
        self.in_flight.store(false, Ordering::Release);
    }

    pub fn state(&self) -> SubmissionState {
        if self.in_flight.load(Ordering::Acquire) {
            SubmissionState::Submitting
        } else {
            SubmissionState::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_allows_one_in_flight() {
        let guard = SubmissionGuard::new();
        assert_eq!(guard.state(), SubmissionState::Idle);

        assert!(guard.try_begin());
        assert!(!guard.try_begin());
        assert_eq!(guard.state(), SubmissionState::Submitting);

        guard.finish();
        assert_eq!(guard.state(), SubmissionState::Idle);
        assert!(guard.try_begin());
    }
}
