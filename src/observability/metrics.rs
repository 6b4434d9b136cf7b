//! Counters for the submission flow.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Submission counters for one contact form.
///
/// Cheap to clone; clones share the same counters.
#[derive(Debug, Clone)]
pub struct FormMetrics {
    submit_attempts_total: Arc<AtomicU64>,
    ignored_total: Arc<AtomicU64>,
    rejected_total: Arc<AtomicU64>,
    aborted_total: Arc<AtomicU64>,
    handoffs_started_total: Arc<AtomicU64>,
    handoffs_completed_total: Arc<AtomicU64>,
}

/// Point-in-time copy of [`FormMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormMetricsSummary {
    pub submit_attempts: u64,
    pub ignored: u64,
    pub rejected: u64,
    pub aborted: u64,
    pub handoffs_started: u64,
    pub handoffs_completed: u64,
}

impl FormMetrics {
    pub fn new() -> Self {
        Self {
            submit_attempts_total: Arc::new(AtomicU64::new(0)),
            ignored_total: Arc::new(AtomicU64::new(0)),
            rejected_total: Arc::new(AtomicU64::new(0)),
            aborted_total: Arc::new(AtomicU64::new(0)),
            handoffs_started_total: Arc::new(AtomicU64::new(0)),
            handoffs_completed_total: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn track_submit_attempt(&self) {
        self.submit_attempts_total.fetch_add(1, Ordering::Relaxed);
    }

    /// A submit arrived while another was in flight.
    pub fn track_ignored(&self) {
        self.ignored_total.fetch_add(1, Ordering::Relaxed);
        tracing::debug!("Submit ignored, submission already in flight");
    }

    pub fn track_rejected(&self, invalid_fields: usize) {
        self.rejected_total.fetch_add(1, Ordering::Relaxed);
        tracing::debug!(invalid_fields = invalid_fields, "Submit rejected");
    }

    pub fn track_aborted(&self) {
        self.aborted_total.fetch_add(1, Ordering::Relaxed);
        tracing::warn!("Submit aborted, page markup incomplete");
    }

    pub fn track_handoff_started(&self, message_len: usize) {
        self.handoffs_started_total.fetch_add(1, Ordering::Relaxed);
        tracing::info!(message_len = message_len, "Hand-off started");
    }

    pub fn track_handoff_completed(&self) {
        self.handoffs_completed_total.fetch_add(1, Ordering::Relaxed);
        tracing::info!("Hand-off completed");
    }

    /// Share of submit attempts that ended in a hand-off (0.0 to 1.0).
    pub fn handoff_rate(&self) -> f64 {
        let attempts = self.submit_attempts_total.load(Ordering::Relaxed) as f64;
        let started = self.handoffs_started_total.load(Ordering::Relaxed) as f64;

        if attempts == 0.0 {
            0.0
        } else {
            started / attempts
        }
    }

    pub fn summary(&self) -> FormMetricsSummary {
        FormMetricsSummary {
            submit_attempts: self.submit_attempts_total.load(Ordering::Relaxed),
            ignored: self.ignored_total.load(Ordering::Relaxed),
            rejected: self.rejected_total.load(Ordering::Relaxed),
            aborted: self.aborted_total.load(Ordering::Relaxed),
            handoffs_started: self.handoffs_started_total.load(Ordering::Relaxed),
            handoffs_completed: self.handoffs_completed_total.load(Ordering::Relaxed),
        }
    }
}

impl Default for FormMetrics {
    fn default() -> Self {
        Self::new()
    }
}
