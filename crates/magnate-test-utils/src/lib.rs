//! Test utilities and mock strategies for Magnate development.
//!
//! Provides mock implementations of the core traits ([`TickProcessor`],
//! [`IdleDetector`], [`Clock`]) plus a minimal counter state for
//! exercising the scheduler without a real domain simulation.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use magnate_core::clock::Clock;
use magnate_core::error::ProcessError;
use magnate_core::traits::{IdleDetector, IdleSignal, TickProcessor};

// ── CounterState ─────────────────────────────────────────────────

/// Minimal simulation state: a tick counter.
///
/// Stands in for a full game state in scheduler tests; the mock
/// processors add the batch count to `ticks`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterState {
    pub ticks: u64,
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }
}

// ── ManualClock ──────────────────────────────────────────────────

/// Deterministic clock advanced explicitly by the test.
///
/// Cloning yields a handle onto the same underlying time, so a test can
/// keep one handle while the code under test owns another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now_ms: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `delta_ms`.
    pub fn advance_ms(&self, delta_ms: f64) {
        self.now_ms.set(self.now_ms.get() + delta_ms);
    }

    /// Jump time to an absolute reading.
    pub fn set_ms(&self, now_ms: f64) {
        self.now_ms.set(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms.get()
    }
}

// ── Mock processors ──────────────────────────────────────────────

/// Processor that adds the batch count to the state counter and logs
/// every call's count.
///
/// Keep the handle returned by [`calls`](CountingProcessor::calls)
/// before boxing the processor into a scheduler; the log is shared.
pub struct CountingProcessor {
    calls: Rc<RefCell<Vec<u64>>>,
}

impl CountingProcessor {
    pub fn new() -> Self {
        Self {
            calls: Rc::default(),
        }
    }

    /// Shared handle onto the per-call count log.
    pub fn calls(&self) -> Rc<RefCell<Vec<u64>>> {
        Rc::clone(&self.calls)
    }
}

impl Default for CountingProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TickProcessor<CounterState> for CountingProcessor {
    fn process(&mut self, mut state: CounterState, count: u64) -> Result<CounterState, ProcessError> {
        self.calls.borrow_mut().push(count);
        state.ticks += count;
        Ok(state)
    }
}

/// Processor that succeeds for a configurable number of calls, then
/// reports a domain-invariant violation on every later call.
pub struct FailingProcessor {
    succeed_count: usize,
    call_count: usize,
}

impl FailingProcessor {
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            call_count: 0,
        }
    }
}

impl TickProcessor<CounterState> for FailingProcessor {
    fn process(&mut self, mut state: CounterState, count: u64) -> Result<CounterState, ProcessError> {
        let n = self.call_count;
        self.call_count += 1;
        if n >= self.succeed_count {
            return Err(ProcessError::InvariantViolated {
                reason: format!("cash balance went negative on call {n}"),
            });
        }
        state.ticks += count;
        Ok(state)
    }
}

/// Processor whose simulated cost is deterministic: each processed tick
/// advances a [`ManualClock`] by a fixed number of milliseconds.
///
/// Lets budget-enforcement tests model a slow domain simulation without
/// real sleeping.
pub struct FixedCostProcessor {
    clock: ManualClock,
    cost_per_tick_ms: f64,
    calls: Rc<RefCell<Vec<u64>>>,
}

impl FixedCostProcessor {
    pub fn new(clock: ManualClock, cost_per_tick_ms: f64) -> Self {
        Self {
            clock,
            cost_per_tick_ms,
            calls: Rc::default(),
        }
    }

    /// Shared handle onto the per-call count log.
    pub fn calls(&self) -> Rc<RefCell<Vec<u64>>> {
        Rc::clone(&self.calls)
    }
}

impl TickProcessor<CounterState> for FixedCostProcessor {
    fn process(&mut self, mut state: CounterState, count: u64) -> Result<CounterState, ProcessError> {
        self.calls.borrow_mut().push(count);
        self.clock.advance_ms(self.cost_per_tick_ms * count as f64);
        state.ticks += count;
        Ok(state)
    }
}

// ── Mock idle detectors ──────────────────────────────────────────

/// Detector that always reports idle with a fixed skip allowance.
pub struct AlwaysIdleDetector {
    pub skip_count: u64,
}

impl IdleDetector<CounterState> for AlwaysIdleDetector {
    fn probe(&self, _state: &CounterState) -> IdleSignal {
        IdleSignal::idle(self.skip_count).with_reason("always idle")
    }
}

/// Detector that reports idle once the counter passes a threshold.
pub struct ThresholdIdleDetector {
    pub idle_at: u64,
    pub skip_count: u64,
}

impl IdleDetector<CounterState> for ThresholdIdleDetector {
    fn probe(&self, state: &CounterState) -> IdleSignal {
        if state.ticks >= self.idle_at {
            IdleSignal::idle(self.skip_count).with_reason("counter past threshold")
        } else {
            IdleSignal::active()
        }
    }
}
