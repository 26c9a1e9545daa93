//! Comparison Benchmark
//!
//! This crate against the RustCrypto `blake2` implementation, BLAKE3 and
//! SHA-256, plus the bare compression function.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use blake2::digest::{Update, VariableOutput};
use blake2b::kernels::portable::compress;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use sha2::{Digest, Sha256};
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_implementations(c: &mut Criterion) {
    let mut group = c.benchmark_group("Implementations");

    // Scenarios:
    // - Small (7B): setup and finalization dominate
    // - Medium (1KB): L1 cache hot-path
    // - Large (256KB): bulk throughput
    let sizes = [7, 1024, 256 * 1024];

    for size in sizes {
        let input = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(format!("blake2b - {size} bytes"), |b| {
            b.iter(|| blake2b::hash(black_box(&input), 64));
        });

        group.bench_function(format!("RustCrypto blake2 - {size} bytes"), |b| {
            b.iter(|| {
                let mut h = blake2::Blake2bVar::new(64).unwrap();
                h.update(black_box(&input));
                let mut out = [0u8; 64];
                h.finalize_variable(&mut out).unwrap();
                out
            });
        });

        group.bench_function(format!("BLAKE3 - {size} bytes"), |b| {
            b.iter(|| blake3::hash(black_box(&input)));
        });

        group.bench_function(format!("SHA-256 - {size} bytes"), |b| {
            b.iter(|| Sha256::digest(black_box(&input)));
        });
    }
    group.finish();
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("Compression");
    group.throughput(Throughput::Bytes(128));

    let block = [0x5Au8; 128];
    let mut h = blake2b::kernels::constants::IV;
    group.bench_function("compress", |b| {
        b.iter(|| compress(black_box(&mut h), black_box(&block), [128, 0], [0, 0]));
    });
    group.finish();
}

criterion_group!(benches, bench_implementations, bench_compress);
criterion_main!(benches);
