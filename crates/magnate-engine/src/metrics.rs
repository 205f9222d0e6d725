//! Cumulative scheduler metrics and the recorder that accumulates them.
//!
//! [`SchedulerMetrics`] is plain data read by the host (telemetry, dev
//! console); [`MetricsRecorder`] pairs the cumulative counters with the
//! bounded performance-sample ring used for adaptive batch sizing.

use crate::history::{PerformanceSample, SampleRing};

// ── SchedulerMetrics ─────────────────────────────────────────────

/// Cumulative counters since construction or the last reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SchedulerMetrics {
    /// Total ticks advanced across all scheduling calls.
    pub total_ticks_processed: u64,
    /// Total processor invocations (batches), including idle
    /// fast-forward batches.
    pub total_batches: u64,
}

// ── MetricsRecorder ──────────────────────────────────────────────

/// Accumulates cumulative counters and the rolling sample history.
///
/// Counters are unconditional; the sample ring is fed only when the
/// scheduler has metrics enabled, since it exists solely to drive the
/// adaptive batch-size estimate.
#[derive(Clone, Debug, Default)]
pub struct MetricsRecorder {
    totals: SchedulerMetrics,
    history: SampleRing,
}

impl MetricsRecorder {
    /// Recorder with the default history capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder with an explicit history capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            totals: SchedulerMetrics::default(),
            history: SampleRing::new(capacity),
        }
    }

    /// Count one completed batch of `ticks` ticks.
    pub fn count_batch(&mut self, ticks: u64) {
        self.totals.total_ticks_processed += ticks;
        self.totals.total_batches += 1;
    }

    /// Retain a performance sample for adaptive batch sizing.
    pub fn record_sample(&mut self, sample: PerformanceSample) {
        self.history.push(sample);
    }

    /// Snapshot of the cumulative counters.
    pub fn metrics(&self) -> SchedulerMetrics {
        self.totals
    }

    /// The rolling sample history.
    pub fn history(&self) -> &SampleRing {
        &self.history
    }

    /// Zero the counters and drop all retained samples.
    pub fn reset(&mut self) {
        self.totals = SchedulerMetrics::default();
        self.history.clear();
    }
}
