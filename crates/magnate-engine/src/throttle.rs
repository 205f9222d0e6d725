//! Leading-edge call-rate limiter.
//!
//! [`Throttle`] caps how often a publication callback fires, so the
//! host can decouple the UI refresh rate from the simulation rate. The
//! first call in a window fires immediately; later calls inside the
//! window are suppressed entirely — no deferred replay, no timers, just
//! a comparison against the clock at call time.

use std::marker::PhantomData;

use magnate_core::clock::{Clock, MonotonicClock};

/// Stateful leading-edge throttle around an update callback.
///
/// Holds only the timestamp of the last actual invocation. A call made
/// after the window has elapsed fires with *that call's* value and
/// resets the timestamp; suppressed values are dropped, never replayed.
pub struct Throttle<T, F> {
    update: F,
    min_interval_ms: f64,
    last_fired_ms: Option<f64>,
    clock: Box<dyn Clock>,
    _value: PhantomData<fn(T)>,
}

impl<T, F> Throttle<T, F>
where
    F: FnMut(T),
{
    /// Throttle `update` to at most one invocation per
    /// `min_interval_ms`, timed against the wall clock.
    pub fn new(update: F, min_interval_ms: f64) -> Self {
        Self::with_clock(update, min_interval_ms, Box::new(MonotonicClock::new()))
    }

    /// Throttle timed against an injected clock.
    pub fn with_clock(update: F, min_interval_ms: f64, clock: Box<dyn Clock>) -> Self {
        Self {
            update,
            min_interval_ms,
            last_fired_ms: None,
            clock,
            _value: PhantomData,
        }
    }

    /// Offer `value` to the callback.
    ///
    /// Returns `true` if the callback fired, `false` if the call was
    /// suppressed inside the current window.
    pub fn call(&mut self, value: T) -> bool {
        let now = self.clock.now_ms();
        if let Some(last) = self.last_fired_ms {
            if now - last < self.min_interval_ms {
                return false;
            }
        }
        (self.update)(value);
        self.last_fired_ms = Some(now);
        true
    }
}
