//! Criterion benchmarks for the scheduler hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use magnate_bench::{reference_scheduler, stress_scheduler, WorkloadState};
use magnate_engine::FrameLoop;

fn bench_process_1k_reference(c: &mut Criterion) {
    let mut scheduler = reference_scheduler();

    // Warm up: populate the performance history so the adaptive sizing
    // path is exercised, not the no-history fallback.
    scheduler.process_ticks(WorkloadState::default(), 1000).unwrap();

    c.bench_function("process_1k_reference", |b| {
        b.iter(|| {
            let result = scheduler
                .process_ticks(WorkloadState::default(), 1000)
                .unwrap();
            black_box(&result);
        });
    });
}

fn bench_process_1k_stress(c: &mut Criterion) {
    let mut scheduler = stress_scheduler();

    scheduler.process_ticks(WorkloadState::default(), 1000).unwrap();

    c.bench_function("process_1k_stress", |b| {
        b.iter(|| {
            let result = scheduler
                .process_ticks(WorkloadState::default(), 1000)
                .unwrap();
            black_box(&result);
        });
    });
}

fn bench_frame_loop_advance(c: &mut Criterion) {
    let mut frame_loop = FrameLoop::new(reference_scheduler(), 100.0);

    c.bench_function("frame_loop_advance_16ms", |b| {
        b.iter(|| {
            let result = frame_loop
                .advance(WorkloadState::default(), 16.0)
                .unwrap();
            black_box(&result);
        });
    });
}

criterion_group!(
    benches,
    bench_process_1k_reference,
    bench_process_1k_stress,
    bench_frame_loop_advance
);
criterion_main!(benches);
