//! Criterion benchmarks for hydrosa_core
//!
//! Run with: cargo bench -p hydrosa_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use hydrosa_core::{Grid, SobolEstimator, SobolInput, SobolOptions, pack, unpack};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn create_packed_input(ns: usize, k: usize) -> SobolInput {
    let mut rng = StdRng::seed_from_u64(42);
    let outputs = (0..ns * (k + 2))
        .map(|_| rng.random_range(-100.0..100.0))
        .collect();
    SobolInput::packed(outputs, ns)
}

fn bench_sobol_parameters(c: &mut Criterion) {
    let mut group = c.benchmark_group("sobol_parameters");
    let estimator = SobolEstimator::default();

    for k in [10, 100, 500].iter() {
        let input = create_packed_input(1_000, *k);
        group.bench_with_input(BenchmarkId::new("k", k), k, |b, _| {
            b.iter(|| estimator.compute(black_box(&input)))
        });
    }

    group.finish();
}

fn bench_sobol_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("sobol_selection");
    let input = create_packed_input(10_000, 20);

    group.bench_function("both", |b| {
        let estimator = SobolEstimator::new(SobolOptions::default());
        b.iter(|| estimator.compute(black_box(&input)))
    });

    group.bench_function("first_order_only", |b| {
        let estimator = SobolEstimator::new(SobolOptions::first_order_only());
        b.iter(|| estimator.compute(black_box(&input)))
    });

    group.bench_function("explicit_input", |b| {
        let estimator = SobolEstimator::default();
        let SobolInput::Packed { outputs, .. } = &input else {
            unreachable!()
        };
        let (ya, rest) = outputs.split_at(10_000);
        let (yb, yc) = rest.split_at(10_000);
        let explicit = SobolInput::explicit(
            ya.to_vec(),
            yb.to_vec(),
            yc.chunks_exact(10_000).map(<[f64]>::to_vec).collect(),
        );
        b.iter(|| estimator.compute(black_box(&explicit)))
    });

    group.finish();
}

fn bench_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("pack");
    let array = Grid::new(vec![365, 100, 100], 1.0_f64).unwrap();
    let mask = Grid::from_data(
        vec![100, 100],
        (0..10_000).map(|i| (i / 100 + i % 100) % 3 == 0).collect(),
    )
    .unwrap();

    group.bench_function("daily_field", |b| {
        b.iter(|| pack(black_box(&array), black_box(&mask)))
    });

    let packed = pack(&array, &mask).unwrap();
    group.bench_function("daily_field_unpack", |b| {
        b.iter(|| unpack(black_box(&packed), black_box(&mask), black_box(&array)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_sobol_parameters,
    bench_sobol_selection,
    bench_pack,
);
criterion_main!(benches);
