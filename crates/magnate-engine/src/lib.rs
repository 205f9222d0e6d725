//! Scheduling engine for the Magnate idle-business simulation.
//!
//! Provides the [`TickScheduler`] that advances host-owned simulation
//! state in time-budgeted batches, the [`FrameLoop`] driver that
//! converts frame time into tick requests, and the leading-edge
//! [`Throttle`] that caps UI publication frequency.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod history;
pub mod metrics;
pub mod scheduler;
pub mod throttle;

pub use config::{ConfigPatch, SchedulerConfig};
pub use driver::FrameLoop;
pub use history::{PerformanceSample, SampleRing, DEFAULT_HISTORY_CAPACITY};
pub use metrics::{MetricsRecorder, SchedulerMetrics};
pub use scheduler::{BatchResult, TickScheduler};
pub use throttle::Throttle;
