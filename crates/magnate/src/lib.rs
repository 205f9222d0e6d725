//! Magnate: a tick-batching simulation scheduler for idle and tycoon
//! games.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Magnate sub-crates. For most users, adding `magnate` as a
//! single dependency is sufficient.
//!
//! The scheduler advances an opaque, host-owned simulation state in
//! discrete ticks (simulated days), batching work under a per-call
//! frame budget so the host's rendering loop is never blocked. Speed
//! levels scale how many ticks a frame requests; an optional idle
//! detector lets long quiet stretches be fast-forwarded in one batched
//! call; a leading-edge throttle caps UI publication frequency
//! independently of the simulation rate.
//!
//! # Quick start
//!
//! ```rust
//! use magnate::prelude::*;
//!
//! // Host-owned state: here, just a day counter.
//! #[derive(Clone, Copy, Default)]
//! struct Game {
//!     day: u64,
//! }
//!
//! let mut scheduler = TickScheduler::new();
//! scheduler.set_processor(Box::new(
//!     |mut game: Game, days: u64| -> Result<Game, ProcessError> {
//!         game.day += days;
//!         Ok(game)
//!     },
//! ));
//!
//! // Drive it from a frame loop: 100ms of wall clock per simulated day.
//! let mut frame_loop = FrameLoop::new(scheduler, 100.0);
//! frame_loop.set_speed(SpeedLevel::Fast);
//!
//! let game = Game::default();
//! let result = frame_loop.advance(game, 300.0).unwrap();
//! assert_eq!(result.state.day, 6); // 3 intervals at 2x speed
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `magnate-core` | Speed levels, strategy traits, errors, clock |
//! | [`engine`] | `magnate-engine` | Scheduler, frame loop, throttle, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and the tick calculator (`magnate-core`).
pub use magnate_core as types;

/// Scheduler, driver, throttle, and metrics (`magnate-engine`).
pub use magnate_engine as engine;

/// The most commonly used items, importable in one line.
pub mod prelude {
    pub use magnate_core::clock::{Clock, MonotonicClock};
    pub use magnate_core::error::ProcessError;
    pub use magnate_core::speed::{ticks_for_speed, SpeedLevel};
    pub use magnate_core::traits::{IdleDetector, IdleSignal, TickProcessor};
    pub use magnate_engine::config::{ConfigPatch, SchedulerConfig};
    pub use magnate_engine::driver::FrameLoop;
    pub use magnate_engine::metrics::SchedulerMetrics;
    pub use magnate_engine::scheduler::{BatchResult, TickScheduler};
    pub use magnate_engine::throttle::Throttle;
}
