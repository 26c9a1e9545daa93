//! BLAKE2b Criterion Benchmark
//!
//! Latency, bulk throughput, streaming and verification.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn random_input(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Short inputs: one or two compressions plus setup and finalization.
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [
        (0, "0B"),
        (16, "16B"),
        (64, "64B"),
        (128, "128B"),
        (129, "129B"),
        (KB, "1KB"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| blake2b::hash(black_box(data), 64))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK THROUGHPUT
// =============================================================================

/// Steady-state compression throughput.
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Bulk");
    group.sample_size(50);

    let sizes = [
        (16 * KB, "16KB"),
        (256 * KB, "256KB"),
        (MB, "1MB"),
        (16 * MB, "16MB"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| blake2b::hash(black_box(data), 64))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: STREAMING
// =============================================================================

/// Incremental updates, including chunks that split blocks.
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Streaming");
    group.sample_size(50);

    let test_cases = [
        (MB, 100, "1MB-100B-chunks"),
        (MB, 4 * KB, "1MB-4KB-chunks"),
        (MB, 64 * KB, "1MB-64KB-chunks"),
        (16 * MB, 64 * KB, "16MB-64KB-chunks"),
    ];

    for (total_size, chunk_size, name) in test_cases {
        let input = random_input(total_size);
        group.throughput(Throughput::Bytes(total_size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(input, chunk_size),
            |b, (data, chunk_sz)| {
                b.iter(|| {
                    let mut hasher = blake2b::Hasher::new(64).unwrap();
                    for chunk in data.chunks(*chunk_sz) {
                        hasher.update(black_box(chunk));
                    }
                    hasher.finalize()
                })
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: DIGEST SIZES & VERIFICATION
// =============================================================================

/// Digest size only touches the parameter block; cost should be flat.
fn bench_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Operations");

    let input = random_input(64 * KB);
    group.throughput(Throughput::Bytes(input.len() as u64));

    for size in [20, 32, 64] {
        group.bench_function(format!("hash-{}bit", size * 8), |b| {
            b.iter(|| blake2b::hash(black_box(&input), size))
        });
    }

    let tag = blake2b::hash(&input, 32).unwrap();
    group.bench_function("verify", |b| {
        b.iter(|| blake2b::verify(black_box(&input), black_box(&tag)))
    });

    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_bulk,
    bench_streaming,
    bench_operations,
);
criterion_main!(benches);
