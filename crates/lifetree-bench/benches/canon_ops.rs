//! Criterion micro-benchmarks for canonicalization and the apgcode codec.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use lifetree_canon::{canonicalize, decode, encode, min_apgcode, symmetric_digest};
use lifetree_test_utils::fixtures::glider;
use lifetree_test_utils::random_nonempty_grid;

/// Benchmark: canonicalize a 5-cell glider.
fn bench_canonicalize_glider(c: &mut Criterion) {
    let grid = glider();
    c.bench_function("canonicalize_glider", |b| {
        b.iter(|| canonicalize(black_box(&grid)));
    });
}

/// Benchmark: canonicalize a 32x32 soup at density 3/8.
fn bench_canonicalize_soup(c: &mut Criterion) {
    let grid = random_nonempty_grid(42, 32, 32, 0.375);
    c.bench_function("canonicalize_soup_32x32", |b| {
        b.iter(|| canonicalize(black_box(&grid)));
    });
    c.bench_function("symmetric_digest_soup_32x32", |b| {
        b.iter(|| symmetric_digest(black_box(&grid)));
    });
}

/// Benchmark: encode and decode a sparse 64x64 soup.
fn bench_apgcode_round_trip(c: &mut Criterion) {
    let grid = random_nonempty_grid(7, 64, 64, 0.05);
    let code = encode(&grid).unwrap();
    c.bench_function("apgcode_encode_64x64", |b| {
        b.iter(|| encode(black_box(&grid)));
    });
    c.bench_function("apgcode_decode_64x64", |b| {
        b.iter(|| decode(black_box(code.as_str())).unwrap());
    });
    c.bench_function("min_apgcode_64x64", |b| {
        b.iter(|| min_apgcode(black_box(&grid)));
    });
}

criterion_group!(
    benches,
    bench_canonicalize_glider,
    bench_canonicalize_soup,
    bench_apgcode_round_trip,
);
criterion_main!(benches);
