//! Integration test: idle fast-forward skipping.
//!
//! When the host's idle detector reports that no meaningful per-tick
//! change would occur, the scheduler must fast-forward with a single
//! batched processor call rather than iterative per-tick work — and
//! must drop back to normal batching as soon as the detector reports
//! activity again.

use magnate_core::IdleSignal;
use magnate_engine::{ConfigPatch, TickScheduler};
use magnate_test_utils::{CounterState, CountingProcessor, ManualClock, ThresholdIdleDetector};

fn counting_scheduler() -> (
    TickScheduler<CounterState>,
    std::rc::Rc<std::cell::RefCell<Vec<u64>>>,
) {
    let clock = ManualClock::new();
    let mut scheduler = TickScheduler::with_clock(Box::new(clock));
    let processor = CountingProcessor::new();
    let calls = processor.calls();
    scheduler.set_processor(Box::new(processor));
    (scheduler, calls)
}

#[test]
fn idle_stretch_is_one_processor_call() {
    let (mut scheduler, calls) = counting_scheduler();
    scheduler.set_idle_detector(Box::new(|_: &CounterState| {
        IdleSignal::idle(40).with_reason("no pending construction")
    }));
    scheduler.configure(ConfigPatch {
        max_batch_size: Some(5),
        ..ConfigPatch::default()
    });

    // Without the fast path this request would take 8 batches of 5;
    // idle skip-ahead does it in one call of 40.
    let result = scheduler.process_ticks(CounterState::new(), 100).unwrap();
    assert_eq!(result.ticks_processed, 40);
    assert_eq!(*calls.borrow(), vec![40]);
}

#[test]
fn skip_allowance_is_capped_by_the_request() {
    let (mut scheduler, calls) = counting_scheduler();
    scheduler.set_idle_detector(Box::new(|_: &CounterState| IdleSignal::idle(1_000_000)));

    let result = scheduler.process_ticks(CounterState::new(), 25).unwrap();
    assert_eq!(result.ticks_processed, 25);
    assert_eq!(*calls.borrow(), vec![25]);
}

#[test]
fn detector_transition_switches_paths() {
    let (mut scheduler, calls) = counting_scheduler();
    // Active below 10 ticks, then idle with a 100-tick allowance.
    scheduler.set_idle_detector(Box::new(ThresholdIdleDetector {
        idle_at: 10,
        skip_count: 100,
    }));
    scheduler.configure(ConfigPatch {
        max_batch_size: Some(10),
        ..ConfigPatch::default()
    });

    // Active state: iterative batching.
    let result = scheduler.process_ticks(CounterState::new(), 10).unwrap();
    assert_eq!(result.ticks_processed, 10);
    assert_eq!(*calls.borrow(), vec![10]);

    // Counter reached the threshold: the next call fast-forwards.
    let result = scheduler.process_ticks(result.state, 300).unwrap();
    assert_eq!(result.ticks_processed, 100);
    assert_eq!(*calls.borrow(), vec![10, 100]);
    assert_eq!(result.state.ticks, 110);
}

#[test]
fn without_detector_no_skipping_happens() {
    let (mut scheduler, calls) = counting_scheduler();
    scheduler.configure(ConfigPatch {
        max_batch_size: Some(10),
        ..ConfigPatch::default()
    });

    let result = scheduler.process_ticks(CounterState::new(), 30).unwrap();
    assert_eq!(result.ticks_processed, 30);
    assert_eq!(*calls.borrow(), vec![10, 10, 10]);
}

#[test]
fn idle_ticks_count_toward_cumulative_metrics() {
    let (mut scheduler, _calls) = counting_scheduler();
    scheduler.set_idle_detector(Box::new(|_: &CounterState| IdleSignal::idle(60)));

    scheduler.process_ticks(CounterState::new(), 100).unwrap();
    scheduler.process_ticks(CounterState::new(), 10).unwrap();

    let metrics = scheduler.metrics();
    assert_eq!(metrics.total_ticks_processed, 70);
    assert_eq!(metrics.total_batches, 2);
}

#[test]
fn idle_batches_leave_no_performance_history() {
    // Skip-ahead cost per tick is not representative of per-tick work;
    // it must not poison the adaptive estimate.
    let (mut scheduler, _calls) = counting_scheduler();
    scheduler.set_idle_detector(Box::new(|_: &CounterState| IdleSignal::idle(60)));

    scheduler.process_ticks(CounterState::new(), 100).unwrap();
    assert_eq!(scheduler.history_len(), 0);
    assert_eq!(
        scheduler.optimal_batch_size(),
        scheduler.config().max_batch_size
    );
}
