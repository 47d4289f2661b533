//! Tree generation benchmarks.
//!
//! Run with: cargo bench -p confgen-core

#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use confgen_core::{escape_value, generate, GeneratorConfig, TreeLimits};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let config = GeneratorConfig::default();

    for nodes in [10, 100, 1000] {
        group.throughput(Throughput::Elements(nodes as u64));

        group.bench_with_input(BenchmarkId::from_parameter(nodes), &nodes, |b, &nodes| {
            let limits = TreeLimits::new(nodes, 12).unwrap();
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| black_box(generate(&mut rng, &config, limits)));
        });
    }

    group.finish();
}

fn bench_escape(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape");

    for (label, value) in [
        ("bare", "abcdefghij_0123456789!@#$%^&*"),
        ("double", "some value with spaces [x]"),
        ("single", "say \"hello\" \\ there"),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(label), value, |b, value| {
            b.iter(|| black_box(escape_value(black_box(value))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate, bench_escape);
criterion_main!(benches);
