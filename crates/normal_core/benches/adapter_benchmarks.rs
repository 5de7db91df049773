//! Criterion benchmarks for the generator adapters.
//!
//! Benchmarks cover:
//! - Raw engine throughput (MT19937 vs host RNG)
//! - Per-adapter vector generation (1K, 10K, 100K samples)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use normal_core::engine::{HostRng, Mt19937};
use normal_core::{Adapter, AdapterKind};
use rand::RngCore;

/// Benchmark raw engine output.
fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("engines");

    group.bench_function("mt19937_next_u32", |b| {
        let mut engine = Mt19937::default();
        b.iter(|| black_box(engine.next_u32()));
    });

    group.bench_function("host_gen_normal", |b| {
        let mut rng = HostRng::from_seed(42);
        b.iter(|| black_box(rng.gen_normal()));
    });

    group.finish();
}

/// Benchmark vector generation per adapter.
fn bench_adapters(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapters");

    for kind in AdapterKind::ALL.into_iter().filter(AdapterKind::is_available) {
        for n_samples in [1_000, 10_000, 100_000] {
            group.bench_with_input(
                BenchmarkId::new(kind.as_str(), n_samples),
                &n_samples,
                |b, &n| {
                    let mut adapter = Adapter::with_default_seed(kind).unwrap();
                    b.iter(|| black_box(adapter.generate(n).unwrap()));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_engines, bench_adapters);
criterion_main!(benches);
