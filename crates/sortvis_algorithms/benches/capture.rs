//! Criterion benchmarks for capturing operation logs.
//!
//! Run with: cargo bench -p sortvis_algorithms

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sortvis_algorithms::AlgorithmRegistry;
use sortvis_core::{generate_items, LinearCongruentialGenerator};
use sortvis_recorder::capture;

/// Benchmark capturing every registered algorithm on scrambled input
fn bench_capture(c: &mut Criterion) {
    let registry = AlgorithmRegistry::with_defaults();

    for (identifier, algorithm) in registry.iter() {
        let mut group = c.benchmark_group(identifier);

        for count in [16usize, 64, 256] {
            let mut rng = LinearCongruentialGenerator::new(42);
            let items = generate_items(count, &mut rng);
            group.throughput(Throughput::Elements(count as u64));

            group.bench_with_input(BenchmarkId::from_parameter(count), &items, |b, items| {
                b.iter(|| capture(algorithm.as_ref(), black_box(items)))
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_capture);
criterion_main!(benches);
