//! Benchmark profiles and synthetic workloads for the Magnate scheduler.
//!
//! Provides pre-built scheduler profiles for benchmarking and examples:
//!
//! - [`reference_scheduler`]: light per-tick work (~a cheap idle-game day)
//! - [`stress_scheduler`]: heavy per-tick work (~an expensive late-game day)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use magnate_core::error::ProcessError;
use magnate_core::traits::TickProcessor;
use magnate_engine::TickScheduler;

/// Synthetic simulation state for benchmark workloads.
#[derive(Clone, Copy, Debug, Default)]
pub struct WorkloadState {
    /// Accumulator the workload churns so the work cannot be optimized
    /// away.
    pub value: u64,
    /// Ticks processed so far.
    pub ticks: u64,
}

/// Processor burning a fixed amount of arithmetic per tick.
pub struct SpinProcessor {
    spins_per_tick: u32,
}

impl SpinProcessor {
    /// Workload doing `spins_per_tick` multiply-add rounds per tick.
    pub fn new(spins_per_tick: u32) -> Self {
        Self { spins_per_tick }
    }
}

impl TickProcessor<WorkloadState> for SpinProcessor {
    fn process(&mut self, mut state: WorkloadState, count: u64) -> Result<WorkloadState, ProcessError> {
        for _ in 0..count {
            let mut acc = state.value;
            for i in 0..self.spins_per_tick {
                acc = acc
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(u64::from(i));
            }
            state.value = acc;
        }
        state.ticks += count;
        Ok(state)
    }
}

/// Scheduler loaded with the reference workload: 64 spin rounds per
/// tick, default configuration.
pub fn reference_scheduler() -> TickScheduler<WorkloadState> {
    let mut scheduler = TickScheduler::new();
    scheduler.set_processor(Box::new(SpinProcessor::new(64)));
    scheduler
}

/// Scheduler loaded with the stress workload: 4096 spin rounds per
/// tick, default configuration.
pub fn stress_scheduler() -> TickScheduler<WorkloadState> {
    let mut scheduler = TickScheduler::new();
    scheduler.set_processor(Box::new(SpinProcessor::new(4096)));
    scheduler
}
