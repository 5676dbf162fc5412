//! Benchmarks for incremental vs fresh prime counting.
//!
//! Run with: cargo bench -p gaussgrid-count --bench count_bench

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gaussgrid_count::{CountConfig, GrowableGrid, SweepConfig, count_fresh, count_in, sweep};
use std::hint::black_box;

// =============================================================================
// Sweeps: one grid reused across every step vs a recount per step
// =============================================================================

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("count/sweep");
    group.sample_size(20);

    for max_radius in [100.0, 1_000.0] {
        let config = SweepConfig::new(max_radius).with_interval(1.0);

        group.bench_with_input(
            BenchmarkId::new("incremental", max_radius),
            &config,
            |b, config| b.iter(|| black_box(sweep(config).unwrap())),
        );

        group.bench_with_input(
            BenchmarkId::new("fresh", max_radius),
            &max_radius,
            |b, &max_radius| {
                b.iter(|| {
                    let mut r = 0.0;
                    while r < max_radius {
                        black_box(count_fresh(r).unwrap());
                        r += 1.0;
                    }
                })
            },
        );
    }

    group.finish();
}

// =============================================================================
// Single query on a warm grid (the scan-only path)
// =============================================================================

fn bench_warm_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("count/warm");
    let config = CountConfig::default();

    let mut grid = GrowableGrid::seeded();
    count_in(&mut grid, 10_000.0, &config).unwrap();

    group.bench_function("rescan_10k", |b| {
        b.iter(|| black_box(count_in(&mut grid, black_box(10_000.0), &config).unwrap()))
    });

    group.bench_function("fresh_10k", |b| {
        b.iter(|| black_box(count_fresh(black_box(10_000.0)).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_sweep, bench_warm_query);
criterion_main!(benches);
