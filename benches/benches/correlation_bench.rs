//! # Correlation Benchmarks
//!
//! Measures Bell sampling and the Pearson statistic over growing batches.
//! `correlation` and `correlation_history` are O(n).
//!
//! Run: `cargo bench --bench correlation_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use qlab_core::{BellState, MeasurementLog, QuantumSampler, correlation};

/// Benchmark Bell batch sampling
fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("bell_sampling");

    for size in [10usize, 100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("run_bell", size), &size, |b, &size| {
            let mut sampler = QuantumSampler::seeded(7);
            b.iter(|| black_box(sampler.run_bell(BellState::PsiMinus, size)))
        });
    }

    group.finish();
}

/// Benchmark Pearson correlation
fn bench_correlation(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlation");

    for size in [10usize, 100, 1_000, 10_000] {
        let pairs = QuantumSampler::seeded(11).run_bell(BellState::PhiPlus, size);
        let log: MeasurementLog = pairs.iter().copied().collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("pearson", size), &pairs, |b, pairs| {
            b.iter(|| black_box(correlation(black_box(pairs))))
        });
        group.bench_with_input(BenchmarkId::new("history_step_10", size), &log, |b, log| {
            b.iter(|| black_box(log.correlation_history(10)))
        });
        group.bench_with_input(BenchmarkId::new("counts", size), &log, |b, log| {
            b.iter(|| black_box(log.counts()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sampling, bench_correlation);

criterion_main!(benches);
