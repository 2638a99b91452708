//! Criterion micro-benchmarks for rule parsing and table compilation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use lifetree_bench::{synthetic_rule, synthetic_rule_text};
use lifetree_rule::{compile_with, parse_rule, CompileConfig, Symmetry, TableCache};
use lifetree_test_utils::fixtures::{CONWAY_LIFE, LIFE_HISTORY};

/// Benchmark: parse the 7-state LifeHistory table.
fn bench_parse_life_history(c: &mut Criterion) {
    c.bench_function("parse_life_history", |b| {
        b.iter(|| parse_rule(black_box(LIFE_HISTORY)).unwrap());
    });
}

/// Benchmark: compile Conway Life with identity seeding.
fn bench_compile_conway_life(c: &mut Criterion) {
    let spec = parse_rule(CONWAY_LIFE).unwrap();
    let config = CompileConfig::new().with_identity_default();
    c.bench_function("compile_conway_life", |b| {
        b.iter(|| compile_with(black_box(&spec), &config).unwrap());
    });
}

/// Benchmark: 3-state permute rule, sequential vs. 4 workers.
fn bench_compile_permute(c: &mut Criterion) {
    let spec = synthetic_rule(42, 3, 16, Symmetry::Permute);
    let mut group = c.benchmark_group("compile_permute_3_states");
    group.sample_size(10);
    group.bench_function("sequential", |b| {
        b.iter(|| compile_with(black_box(&spec), &CompileConfig::new()).unwrap());
    });
    group.bench_function("threads_4", |b| {
        let config = CompileConfig::new().with_threads(4);
        b.iter(|| compile_with(black_box(&spec), &config).unwrap());
    });
    group.finish();
}

/// Benchmark: 4-state rotate4reflect rule with identity seeding.
fn bench_compile_seeded_rotate4reflect(c: &mut Criterion) {
    let spec = synthetic_rule(7, 4, 64, Symmetry::Rotate4Reflect);
    let config = CompileConfig::new().with_identity_default();
    let mut group = c.benchmark_group("compile_seeded");
    group.sample_size(10);
    group.bench_function("rotate4reflect_4_states", |b| {
        b.iter(|| compile_with(black_box(&spec), &config).unwrap());
    });
    group.finish();
}

/// Benchmark: cache hit on a reformatted rule text.
fn bench_cache_hit(c: &mut Criterion) {
    let text = synthetic_rule_text(3, 3, 32, Symmetry::Rotate8);
    let variant = text.replace(',', ", ");
    let mut cache = TableCache::new(CompileConfig::default());
    cache.get_or_compile(&text).unwrap();
    c.bench_function("table_cache_hit", |b| {
        b.iter(|| cache.get_or_compile(black_box(&variant)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_parse_life_history,
    bench_compile_conway_life,
    bench_compile_permute,
    bench_compile_seeded_rotate4reflect,
    bench_cache_hit,
);
criterion_main!(benches);
