//! Strategy traits at the host boundary.
//!
//! The scheduler is agnostic of the simulation state's shape: the host
//! installs a [`TickProcessor`] that owns all domain semantics, and
//! optionally an [`IdleDetector`] that reports when a stretch of ticks
//! can be skipped ahead in one batched call. Both traits have blanket
//! impls for closures, so tests and small hosts can wire plain
//! functions without defining carrier types.

use crate::error::ProcessError;

// ── IdleSignal ───────────────────────────────────────────────────

/// Idle probe result, produced fresh per scheduling call and never
/// stored by the scheduler.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdleSignal {
    /// Whether no meaningful per-tick change would occur right now.
    pub is_idle: bool,
    /// How many ticks may be skipped ahead in a single batch.
    pub skip_count: u64,
    /// Optional human-readable explanation, for the host's diagnostics.
    pub reason: Option<String>,
}

impl IdleSignal {
    /// An active (non-idle) signal.
    pub fn active() -> Self {
        Self::default()
    }

    /// An idle signal permitting up to `skip_count` ticks in one batch.
    pub fn idle(skip_count: u64) -> Self {
        Self {
            is_idle: true,
            skip_count,
            reason: None,
        }
    }

    /// Attach an explanation to this signal.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

// ── TickProcessor ────────────────────────────────────────────────

/// Domain strategy that advances the simulation state by a batch of
/// ticks.
///
/// Must be total over all reachable states: given a valid state and any
/// count (including zero), it returns the advanced state. An `Err`
/// signals an unrecoverable domain-invariant violation and propagates
/// out of the scheduler unmodified.
pub trait TickProcessor<S> {
    /// Advance `state` by `count` ticks and return the new state.
    fn process(&mut self, state: S, count: u64) -> Result<S, ProcessError>;
}

impl<S, F> TickProcessor<S> for F
where
    F: FnMut(S, u64) -> Result<S, ProcessError>,
{
    fn process(&mut self, state: S, count: u64) -> Result<S, ProcessError> {
        self(state, count)
    }
}

// ── IdleDetector ─────────────────────────────────────────────────

/// Optional strategy reporting whether the simulation is idle.
///
/// Probed once per scheduling call with the current state. When the
/// signal reports idle, the scheduler fast-forwards with a single
/// batched processor call instead of iterative per-tick work.
pub trait IdleDetector<S> {
    /// Inspect `state` and report an [`IdleSignal`].
    fn probe(&self, state: &S) -> IdleSignal;
}

impl<S, F> IdleDetector<S> for F
where
    F: Fn(&S) -> IdleSignal,
{
    fn probe(&self, state: &S) -> IdleSignal {
        self(state)
    }
}
