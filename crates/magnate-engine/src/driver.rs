//! Host-loop driver: frame time in, batched ticks out.
//!
//! [`FrameLoop`] is the callable owner the host's frame timer talks to.
//! It converts each frame's elapsed wall-clock time into a tick request
//! via the speed table, delegates to its [`TickScheduler`], and carries
//! sub-interval remainders forward so slow hosts lose no simulated
//! time. UI publication is the host's concern and is typically routed
//! through a [`Throttle`](crate::Throttle) — the simulation rate and
//! the refresh rate stay independently controlled.

use magnate_core::error::ProcessError;
use magnate_core::speed::{ticks_for_speed, SpeedLevel};

use crate::scheduler::{BatchResult, TickScheduler};

/// Frame-driven loop owner around a [`TickScheduler`].
#[derive(Debug)]
pub struct FrameLoop<S> {
    scheduler: TickScheduler<S>,
    speed: SpeedLevel,
    tick_interval_ms: f64,
    carry_ms: f64,
}

impl<S> FrameLoop<S> {
    /// Wrap `scheduler`, treating `tick_interval_ms` of wall-clock time
    /// as one simulated tick at normal speed. Starts at
    /// [`SpeedLevel::Normal`].
    pub fn new(scheduler: TickScheduler<S>, tick_interval_ms: f64) -> Self {
        Self {
            scheduler,
            speed: SpeedLevel::Normal,
            tick_interval_ms,
            carry_ms: 0.0,
        }
    }

    /// Advance the simulation for one frame.
    ///
    /// Adds `frame_elapsed_ms` to the carried remainder, converts whole
    /// tick intervals into a request scaled by the current speed, and
    /// hands the request to the scheduler. While paused, elapsed time
    /// is discarded rather than banked — resuming must not
    /// fast-forward.
    ///
    /// # Errors
    ///
    /// Propagates any [`ProcessError`] from the tick processor.
    pub fn advance(
        &mut self,
        state: S,
        frame_elapsed_ms: f64,
    ) -> Result<BatchResult<S>, ProcessError> {
        if self.speed == SpeedLevel::Paused {
            self.carry_ms = 0.0;
            return self.scheduler.process_ticks(state, 0);
        }

        let elapsed = if frame_elapsed_ms.is_finite() && frame_elapsed_ms > 0.0 {
            frame_elapsed_ms
        } else {
            0.0
        };
        let total = self.carry_ms + elapsed;
        let requested = ticks_for_speed(self.speed, total, self.tick_interval_ms);

        self.carry_ms = if self.tick_interval_ms.is_finite() && self.tick_interval_ms > 0.0 {
            total % self.tick_interval_ms
        } else {
            0.0
        };

        self.scheduler.process_ticks(state, requested)
    }

    /// Change the speed setting for subsequent frames.
    pub fn set_speed(&mut self, speed: SpeedLevel) {
        self.speed = speed;
    }

    /// The current speed setting.
    pub fn speed(&self) -> SpeedLevel {
        self.speed
    }

    /// Wall-clock milliseconds per simulated tick at normal speed.
    pub fn tick_interval_ms(&self) -> f64 {
        self.tick_interval_ms
    }

    /// Shared access to the wrapped scheduler.
    pub fn scheduler(&self) -> &TickScheduler<S> {
        &self.scheduler
    }

    /// Mutable access to the wrapped scheduler (configuration, strategy
    /// installation, metrics reset).
    pub fn scheduler_mut(&mut self) -> &mut TickScheduler<S> {
        &mut self.scheduler
    }
}
