//! Criterion benchmarks for normal sampling and text round trips.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use variate_core::traits::RngSource;
use variate_models::normal::NormalDist;

/// Benchmark single draws against `rand_distr`'s ziggurat.
fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    let normal = NormalDist::new(6.0_f64, 2.0);

    let mut source = RngSource::new(StdRng::seed_from_u64(42));
    group.bench_function("inverse_cdf_f64", |b| {
        b.iter(|| normal.sample(black_box(&mut source)))
    });

    let normal32 = NormalDist::new(6.0_f32, 2.0);
    group.bench_function("inverse_cdf_f32", |b| {
        b.iter(|| normal32.sample(black_box(&mut source)))
    });

    let mut rng = StdRng::seed_from_u64(42);
    group.bench_function("rand_distr_ziggurat", |b| {
        b.iter(|| {
            let z: f64 = rng.sample(StandardNormal);
            black_box(z * 2.0 + 6.0)
        })
    });

    group.finish();
}

/// Benchmark buffer fills of increasing size.
fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill");
    let normal = NormalDist::new(0.0_f64, 1.0);
    let mut source = RngSource::new(StdRng::seed_from_u64(7));

    for size in [64_usize, 1_024, 16_384] {
        let mut buffer = vec![0.0; size];
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                normal.fill(&mut source, &mut buffer);
                black_box(buffer[0])
            })
        });
    }

    group.finish();
}

/// Benchmark pdf, cdf and icdf.
fn bench_analytic(c: &mut Criterion) {
    let mut group = c.benchmark_group("analytic");
    let normal = NormalDist::new(6.0_f64, 2.0);

    group.bench_function("pdf", |b| b.iter(|| normal.pdf(black_box(7.3))));
    group.bench_function("cdf", |b| b.iter(|| normal.cdf(black_box(7.3))));
    group.bench_function("icdf", |b| b.iter(|| normal.icdf(black_box(0.73))));

    group.finish();
}

/// Benchmark the canonical text form.
fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");
    let normal = NormalDist::new(6.0_f64, 2.0);
    let text = normal.serialize();

    group.bench_function("serialize", |b| b.iter(|| black_box(&normal).serialize()));
    group.bench_function("parse", |b| {
        b.iter(|| NormalDist::<f64>::parse(black_box(&text)))
    });

    group.finish();
}

criterion_group!(benches, bench_sample, bench_fill, bench_analytic, bench_text);
criterion_main!(benches);
