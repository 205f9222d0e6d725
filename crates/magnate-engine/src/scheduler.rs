//! Tick scheduler: batched state advancement under a frame budget.
//!
//! [`TickScheduler`] consumes a host-supplied [`TickProcessor`] strategy
//! and advances an opaque simulation state in batches, bounding the
//! wall-clock cost of each call and fast-forwarding through idle
//! stretches reported by an optional [`IdleDetector`]. Each call is a
//! self-contained synchronous operation; the scheduler keeps no
//! reference to host state between calls.

use std::fmt;

use magnate_core::clock::{Clock, MonotonicClock};
use magnate_core::error::ProcessError;
use magnate_core::traits::{IdleDetector, TickProcessor};
use smallvec::SmallVec;

use crate::config::{ConfigPatch, SchedulerConfig};
use crate::history::{PerformanceSample, SampleRing};
use crate::metrics::{MetricsRecorder, SchedulerMetrics};

// ── BatchResult ──────────────────────────────────────────────────

/// Result of one [`TickScheduler::process_ticks`] call.
#[derive(Debug)]
pub struct BatchResult<S> {
    /// State after the processed ticks.
    pub state: S,
    /// Ticks actually advanced this call. Never exceeds the request;
    /// an unsatisfied remainder is simply left for the next call.
    pub ticks_processed: u64,
    /// Wall-clock time consumed by this call, in milliseconds.
    pub time_spent_ms: f64,
    /// Per-batch breakdown of the iterative path. Empty for no-op calls
    /// and for the idle fast path (a skip-ahead batch's per-tick cost is
    /// not representative).
    pub samples: SmallVec<[PerformanceSample; 8]>,
}

impl<S> BatchResult<S> {
    fn noop(state: S) -> Self {
        Self {
            state,
            ticks_processed: 0,
            time_spent_ms: 0.0,
            samples: SmallVec::new(),
        }
    }
}

// ── TickScheduler ────────────────────────────────────────────────

/// Batching scheduler over an opaque simulation state `S`.
///
/// Constructed by the host's loop driver and passed by reference to any
/// component that needs to invoke it; there is no global instance. The
/// domain callback is installed with [`set_processor`](Self::set_processor);
/// until then every [`process_ticks`](Self::process_ticks) call is a
/// well-defined no-op, so a scheduler can be built before domain wiring
/// is complete.
pub struct TickScheduler<S> {
    config: SchedulerConfig,
    recorder: MetricsRecorder,
    processor: Option<Box<dyn TickProcessor<S>>>,
    idle_detector: Option<Box<dyn IdleDetector<S>>>,
    clock: Box<dyn Clock>,
}

impl<S> TickScheduler<S> {
    /// Scheduler with default configuration and a monotonic wall clock.
    pub fn new() -> Self {
        Self::with_clock(Box::new(MonotonicClock::new()))
    }

    /// Scheduler reading time from an injected clock.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            config: SchedulerConfig::default(),
            recorder: MetricsRecorder::new(),
            processor: None,
            idle_detector: None,
            clock,
        }
    }

    /// Merge the given fields into the current configuration, leaving
    /// unspecified fields untouched. Values are not validated;
    /// out-of-range settings degrade scheduling behavior.
    pub fn configure(&mut self, patch: ConfigPatch) {
        self.config.apply(patch);
    }

    /// Install the domain tick processor.
    pub fn set_processor(&mut self, processor: Box<dyn TickProcessor<S>>) {
        self.processor = Some(processor);
    }

    /// Install the optional idle detector. Absence disables idle
    /// fast-forward skipping entirely.
    pub fn set_idle_detector(&mut self, detector: Box<dyn IdleDetector<S>>) {
        self.idle_detector = Some(detector);
    }

    /// Advance `state` by up to `requested` ticks.
    ///
    /// Processes sequentially in batches of
    /// `min(remaining, max_batch_size, optimal_batch_size())`, stopping
    /// early once the cumulative call time reaches `frame_budget_ms`.
    /// The budget is checked only between batches; a batch already in
    /// flight always completes. Batches are applied strictly in
    /// increasing tick order, each batch's output state feeding the
    /// next batch's input.
    ///
    /// With an idle detector installed and reporting idle, the
    /// processor is invoked exactly once with
    /// `min(skip_count, requested)` — a single fast-forward batch.
    ///
    /// A zero request or a missing processor is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// A [`ProcessError`] from the tick processor propagates unmodified;
    /// progress already made within the call is abandoned with it, since
    /// the state that produced the error cannot be trusted.
    pub fn process_ticks(
        &mut self,
        state: S,
        requested: u64,
    ) -> Result<BatchResult<S>, ProcessError> {
        let Self {
            config,
            recorder,
            processor,
            idle_detector,
            clock,
        } = self;

        let Some(processor) = processor.as_mut() else {
            return Ok(BatchResult::noop(state));
        };
        if requested == 0 {
            return Ok(BatchResult::noop(state));
        }

        let call_start = clock.now_ms();

        // Idle fast path: one skip-ahead batch instead of iterative work.
        if let Some(detector) = idle_detector.as_ref() {
            let signal = detector.probe(&state);
            if signal.is_idle {
                let count = signal.skip_count.min(requested);
                let state = processor.process(state, count)?;
                recorder.count_batch(count);
                return Ok(BatchResult {
                    state,
                    ticks_processed: count,
                    time_spent_ms: clock.now_ms() - call_start,
                    samples: SmallVec::new(),
                });
            }
        }

        // Iterative path: batch until the request is satisfied or the
        // frame budget is spent.
        let mut state = state;
        let mut remaining = requested;
        let mut ticks_processed: u64 = 0;
        let mut samples: SmallVec<[PerformanceSample; 8]> = SmallVec::new();

        while remaining > 0 {
            let cap = config
                .max_batch_size
                .min(optimal_for(config, recorder.history()));
            let batch = remaining.min(u64::from(cap));
            if batch == 0 {
                // max_batch_size of zero: every call degrades to no work.
                break;
            }

            let batch_start = clock.now_ms();
            state = processor.process(state, batch)?;
            let batch_ms = clock.now_ms() - batch_start;

            ticks_processed += batch;
            remaining -= batch;
            recorder.count_batch(batch);

            let sample = PerformanceSample {
                batch_size: u32::try_from(batch).expect("batch bounded by max_batch_size"),
                time_spent_ms: batch_ms,
            };
            samples.push(sample);
            if config.enable_metrics {
                recorder.record_sample(sample);
            }

            if clock.now_ms() - call_start >= config.frame_budget_ms {
                break;
            }
        }

        Ok(BatchResult {
            state,
            ticks_processed,
            time_spent_ms: clock.now_ms() - call_start,
            samples,
        })
    }

    /// Largest batch size expected to fit within the frame budget.
    ///
    /// Returns `max_batch_size` while no performance history exists;
    /// otherwise estimates from the average per-tick cost in the rolling
    /// history, clamped to `[1, max_batch_size]`.
    pub fn optimal_batch_size(&self) -> u32 {
        optimal_for(&self.config, self.recorder.history())
    }

    /// Snapshot of the cumulative counters.
    pub fn metrics(&self) -> SchedulerMetrics {
        self.recorder.metrics()
    }

    /// Zero the cumulative counters and drop the performance history.
    /// Configuration and installed strategies are unaffected.
    pub fn reset_metrics(&mut self) {
        self.recorder.reset();
    }

    /// Read-only view of the current configuration.
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Number of performance samples currently retained.
    pub fn history_len(&self) -> usize {
        self.recorder.history().len()
    }
}

impl<S> Default for TickScheduler<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for TickScheduler<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickScheduler")
            .field("config", &self.config)
            .field("metrics", &self.recorder.metrics())
            .field("has_processor", &self.processor.is_some())
            .field("has_idle_detector", &self.idle_detector.is_some())
            .finish()
    }
}

/// Batch size that fits the frame budget given the observed per-tick
/// cost, clamped to `[1, max_batch_size]`. Degenerate history (no
/// samples, zero or non-finite cost) falls back to `max_batch_size`.
fn optimal_for(config: &SchedulerConfig, history: &SampleRing) -> u32 {
    let max = config.max_batch_size;
    let Some(per_tick_ms) = history.avg_tick_cost_ms() else {
        return max;
    };
    if !per_tick_ms.is_finite() || per_tick_ms <= 0.0 {
        return max;
    }
    if max == 0 {
        return 0;
    }
    let fit = (config.frame_budget_ms / per_tick_ms).floor();
    if !fit.is_finite() || fit <= 1.0 {
        return 1;
    }
    if fit >= f64::from(max) {
        return max;
    }
    fit as u32
}
