//! # QubitState Benchmarks
//!
//! Measures Bloch conversion, Hadamard and single-qubit measurement.
//! All operations are O(1).
//!
//! Run: `cargo bench --bench state_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qlab_core::{Amplitude, BasisState, BlochConverter, QuantumSampler, QubitState, apply_hadamard, to_bloch};

/// Benchmark Bloch conversion
fn bench_bloch(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloch");

    for basis in BasisState::ALL {
        let state = basis.state();
        group.bench_function(format!("to_bloch_{basis:?}").to_lowercase(), |b| {
            b.iter(|| black_box(to_bloch(black_box(&state))))
        });
    }

    let skewed = QubitState::new(Amplitude::new(0.6, 0.1), Amplitude::new(-0.2, 0.77));
    let converter = BlochConverter::new();
    group.bench_function("converter_complex_phase", |b| {
        b.iter(|| black_box(converter.convert(black_box(&skewed))))
    });

    group.finish();
}

/// Benchmark Hadamard
fn bench_hadamard(c: &mut Criterion) {
    let mut group = c.benchmark_group("hadamard");

    group.bench_function("single", |b| {
        b.iter(|| black_box(apply_hadamard(black_box(&QubitState::ZERO))))
    });

    group.bench_function("self_inverse_pair", |b| {
        b.iter(|| black_box(apply_hadamard(&apply_hadamard(black_box(&QubitState::MINUS)))))
    });

    group.finish();
}

/// Benchmark measurement
fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("measure");
    let mut sampler = QuantumSampler::seeded(42);

    group.bench_function("plus", |b| {
        b.iter(|| black_box(sampler.measure(black_box(&QubitState::PLUS))))
    });

    group.finish();
}

criterion_group!(benches, bench_bloch, bench_hadamard, bench_measure);

criterion_main!(benches);
