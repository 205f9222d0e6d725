//! Integration test: frame-budget enforcement over a slow simulation.
//!
//! A deterministic slow processor (fixed milliseconds per tick against
//! a manual clock) verifies that one scheduling call never overshoots
//! the budget by more than a single in-flight batch, that the adaptive
//! batch size converges onto the budget, and that repeated calls
//! eventually satisfy the full request.

use magnate_engine::{ConfigPatch, TickScheduler};
use magnate_test_utils::{CounterState, FixedCostProcessor, ManualClock};

fn slow_scheduler(
    cost_per_tick_ms: f64,
    max_batch_size: u32,
    frame_budget_ms: f64,
) -> (TickScheduler<CounterState>, ManualClock) {
    let clock = ManualClock::new();
    let mut scheduler = TickScheduler::with_clock(Box::new(clock.clone()));
    scheduler.set_processor(Box::new(FixedCostProcessor::new(clock.clone(), cost_per_tick_ms)));
    scheduler.configure(ConfigPatch {
        max_batch_size: Some(max_batch_size),
        frame_budget_ms: Some(frame_budget_ms),
        ..ConfigPatch::default()
    });
    (scheduler, clock)
}

#[test]
fn first_call_overshoots_by_at_most_one_batch() {
    // 2ms per tick, 10-tick batches, 5ms budget: the first (blind)
    // batch costs 20ms, and the call stops right after it.
    let (mut scheduler, _clock) = slow_scheduler(2.0, 10, 5.0);

    let result = scheduler.process_ticks(CounterState::new(), 1000).unwrap();
    assert_eq!(result.ticks_processed, 10);
    assert_eq!(result.samples.len(), 1);
    assert_eq!(result.time_spent_ms, 20.0);
}

#[test]
fn adaptive_sizing_converges_onto_the_budget() {
    let (mut scheduler, _clock) = slow_scheduler(2.0, 100, 10.0);

    // Learn the cost from the first call.
    scheduler.process_ticks(CounterState::new(), 1000).unwrap();

    // floor(10ms / 2ms) = 5 ticks per batch from here on.
    assert_eq!(scheduler.optimal_batch_size(), 5);
    let result = scheduler.process_ticks(CounterState::new(), 1000).unwrap();
    assert!(result.samples.iter().all(|s| s.batch_size == 5));
    // One batch costs 10ms, meeting the budget exactly: one per call.
    assert_eq!(result.ticks_processed, 5);
}

#[test]
fn repeated_calls_drain_the_full_request() {
    let (mut scheduler, _clock) = slow_scheduler(1.0, 50, 10.0);

    let requested_total = 500u64;
    let mut state = CounterState::new();
    let mut remaining = requested_total;
    let mut calls = 0;
    while remaining > 0 {
        let result = scheduler.process_ticks(state, remaining).unwrap();
        assert!(result.ticks_processed <= remaining);
        assert!(result.ticks_processed > 0, "scheduler must make progress");
        remaining -= result.ticks_processed;
        state = result.state;
        calls += 1;
        assert!(calls < 1000, "drain should terminate");
    }

    assert_eq!(state.ticks, requested_total);
    assert_eq!(
        scheduler.metrics().total_ticks_processed,
        requested_total
    );
}

#[test]
fn faster_simulation_earns_larger_batches() {
    // 0.1ms per tick against an 8ms budget fits 80 ticks per batch.
    let (mut scheduler, _clock) = slow_scheduler(0.1, 1000, 8.0);

    scheduler.process_ticks(CounterState::new(), 10).unwrap();
    let optimal = scheduler.optimal_batch_size();
    assert!(
        (79..=81).contains(&optimal),
        "expected ~80 ticks to fit, got {optimal}"
    );
}

#[test]
fn budget_is_never_checked_mid_batch() {
    // A single batch far exceeding the budget still completes; the
    // check happens only between batches.
    let (mut scheduler, _clock) = slow_scheduler(100.0, 10, 1.0);

    let result = scheduler.process_ticks(CounterState::new(), 10).unwrap();
    assert_eq!(result.ticks_processed, 10);
    assert_eq!(result.time_spent_ms, 1000.0);
}
