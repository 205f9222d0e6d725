//! Scheduler configuration and its merge-update patch.
//!
//! [`SchedulerConfig`] deliberately carries no `validate()`: supplying
//! out-of-range values is the caller's responsibility and degrades
//! scheduling behavior instead of raising errors. A zero
//! `max_batch_size` makes every call process nothing; a non-positive
//! `frame_budget_ms` terminates every call after at most one batch.

// ── SchedulerConfig ──────────────────────────────────────────────

/// Tunable parameters of a [`TickScheduler`](crate::TickScheduler).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SchedulerConfig {
    /// Upper bound on ticks handed to the processor in one batch.
    pub max_batch_size: u32,
    /// Maximum wall-clock milliseconds one scheduling call may consume
    /// before returning control to the host loop. Checked only between
    /// batches, never mid-batch.
    pub frame_budget_ms: f64,
    /// Whether per-batch performance samples are retained for adaptive
    /// batch sizing. Cumulative tick/batch counters are always kept.
    pub enable_metrics: bool,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_batch_size: 1000,
            frame_budget_ms: 8.0,
            enable_metrics: true,
        }
    }
}

impl SchedulerConfig {
    /// Merge `patch` into this config, leaving unspecified fields
    /// untouched.
    pub fn apply(&mut self, patch: ConfigPatch) {
        if let Some(v) = patch.max_batch_size {
            self.max_batch_size = v;
        }
        if let Some(v) = patch.frame_budget_ms {
            self.frame_budget_ms = v;
        }
        if let Some(v) = patch.enable_metrics {
            self.enable_metrics = v;
        }
    }
}

// ── ConfigPatch ──────────────────────────────────────────────────

/// Partial update for [`SchedulerConfig`]; `None` fields are preserved.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConfigPatch {
    /// New batch-size cap, if any.
    pub max_batch_size: Option<u32>,
    /// New per-call time budget, if any.
    pub frame_budget_ms: Option<f64>,
    /// New metrics toggle, if any.
    pub enable_metrics: Option<bool>,
}
