//! Criterion micro-benchmarks for generation stepping, snapshots, and undo.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use lifegrid_bench::{reference_profile, soup, stress_profile};
use lifegrid_core::{Cell, LiveSet, RuleParameters};
use lifegrid_engine::{step_live, HistoryStack, LifeGrid};
use lifegrid_test_utils::glider;

fn soup_set(seed: u64, side: u32) -> LiveSet {
    soup(seed, side, side, 35).into_iter().collect()
}

/// Benchmark: one generation of a 128x128 soup.
fn bench_step_reference(c: &mut Criterion) {
    let live = soup_set(42, 128);
    c.bench_function("step_live_128x128_soup", |b| {
        b.iter(|| black_box(step_live(black_box(&live), RuleParameters::CONWAY)));
    });
}

/// Benchmark: one generation of a 512x512 soup.
fn bench_step_stress(c: &mut Criterion) {
    let live = soup_set(42, 512);
    c.bench_function("step_live_512x512_soup", |b| {
        b.iter(|| black_box(step_live(black_box(&live), RuleParameters::CONWAY)));
    });
}

/// Benchmark: 100 glider generations far from the origin.
fn bench_glider_100(c: &mut Criterion) {
    let start = glider(Cell::new(1 << 40, -(1 << 40)));
    c.bench_function("glider_100_generations", |b| {
        b.iter(|| {
            let mut grid = LifeGrid::new();
            grid.replace_all(start.iter().copied());
            for _ in 0..100 {
                grid.advance_generation();
            }
            black_box(grid.population())
        });
    });
}

/// Benchmark: a full session step (history push plus generation).
fn bench_session_step(c: &mut Criterion) {
    c.bench_function("session_step_128x128", |b| {
        b.iter_batched(
            || reference_profile(42).unwrap(),
            |mut session| black_box(session.step()),
            BatchSize::LargeInput,
        );
    });
}

/// Benchmark: snapshot of a ~92K-cell grid (shared, no copy).
fn bench_snapshot(c: &mut Criterion) {
    let session = stress_profile(42).unwrap();
    c.bench_function("snapshot_512x512", |b| {
        b.iter(|| black_box(session.grid().snapshot()));
    });
}

/// Benchmark: history push at capacity (evicts every call).
fn bench_history_push_full(c: &mut Criterion) {
    let session = reference_profile(42).unwrap();
    let snap = session.grid().snapshot();
    let mut history = HistoryStack::new(1000);
    for _ in 0..1000 {
        history.push(snap.clone());
    }
    c.bench_function("history_push_full", |b| {
        b.iter(|| black_box(history.push(snap.clone())));
    });
}

criterion_group!(
    benches,
    bench_step_reference,
    bench_step_stress,
    bench_glider_100,
    bench_session_step,
    bench_snapshot,
    bench_history_push_full,
);
criterion_main!(benches);
