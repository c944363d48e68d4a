//! Sorting benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 100K elements)
//! - Input patterns (random, sorted, reverse, sawtooth, duplicates)
//! - Baselines (sequential engine, standard library sort)
//! - Cutoff sensitivity for the parallel descent
//! - Chunked ingestion throughput
//!
//! For serial execution, use `FASTMERGESORT_MODE=serial cargo bench`.
//! For parallel execution, use `FASTMERGESORT_MODE=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastMergesort::prelude::*;
use mergesort::prelude::Mergesort as BaseMergesort;
use rand::prelude::*;
use rand_distr::Normal;
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTMERGESORT_MODE").ok().as_deref() {
        Some("serial") | Some("sequential") => (false, "serial"),
        Some("parallel") | _ => (true, "parallel"),
    }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate uniformly random integers.
fn generate_random_data(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(-1_000_000..1_000_000)).collect()
}

/// Generate already-sorted data (fast-path scan only).
fn generate_sorted_data(size: usize) -> Vec<i64> {
    (0..size as i64).collect()
}

/// Generate reverse-sorted data (every adjacent pair inverted).
fn generate_reverse_data(size: usize) -> Vec<i64> {
    (0..size as i64).rev().collect()
}

/// Generate sawtooth data (short ascending runs, repeated).
fn generate_sawtooth_data(size: usize, period: usize) -> Vec<i64> {
    (0..size).map(|i| (i % period) as i64).collect()
}

/// Generate data drawn from a tiny key space (heavy ties).
fn generate_duplicate_data(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(0..100)).collect()
}

/// Generate sorted data perturbed by a few random swaps.
fn generate_nearly_sorted_data(size: usize, seed: u64, swaps: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = generate_sorted_data(size);
    for _ in 0..swaps {
        let i = rng.random_range(0..size);
        let j = rng.random_range(0..size);
        data.swap(i, j);
    }
    data
}

/// Generate normally distributed floats with sparse NaNs.
fn generate_float_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(0.0, 1_000_000.0).unwrap();
    (0..size)
        .map(|i| {
            if i % 1_000 == 999 {
                f64::NAN
            } else {
                dist.sample(&mut rng)
            }
        })
        .collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scalability_{}", mode_name));
    group.sample_size(50);

    for size in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        let data = generate_random_data(size, 42);

        group.bench_with_input(BenchmarkId::new("batch", size), &size, |b, _| {
            b.iter(|| {
                Mergesort::new()
                    .adapter(Batch)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .sort_vec(black_box(data.clone()))
            })
        });
    }
    group.finish();
}

fn bench_patterns(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("patterns_{}", mode_name));
    group.sample_size(50);

    let size = 100_000;
    let patterns: [(&str, Vec<i64>); 6] = [
        ("random", generate_random_data(size, 42)),
        ("sorted", generate_sorted_data(size)),
        ("reverse", generate_reverse_data(size)),
        ("sawtooth", generate_sawtooth_data(size, 64)),
        ("duplicates", generate_duplicate_data(size, 42)),
        ("nearly_sorted", generate_nearly_sorted_data(size, 42, 16)),
    ];

    for (name, data) in patterns {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                Mergesort::new()
                    .adapter(Batch)
                    .parallel(use_parallel)
                    .build()
                    .unwrap()
                    .sort_vec(black_box(data.clone()))
            })
        });
    }
    group.finish();
}

fn bench_baselines(c: &mut Criterion) {
    let mut group = c.benchmark_group("baselines");
    group.sample_size(50);

    let size = 100_000;
    let data = generate_random_data(size, 42);
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("parallel_batch", |b| {
        b.iter(|| {
            Mergesort::new()
                .adapter(Batch)
                .build()
                .unwrap()
                .sort_vec(black_box(data.clone()))
        })
    });

    group.bench_function("sequential_engine", |b| {
        b.iter(|| {
            BaseMergesort::new()
                .adapter(mergesort::prelude::Batch)
                .build()
                .unwrap()
                .sort_vec(black_box(data.clone()))
        })
    });

    group.bench_function("std_stable_sort", |b| {
        b.iter(|| {
            let mut values = black_box(data.clone());
            values.sort();
            values
        })
    });

    group.finish();
}

fn bench_cutoff(c: &mut Criterion) {
    let mut group = c.benchmark_group("cutoff");
    group.sample_size(30);

    let size = 1_000_000;
    let data = generate_random_data(size, 42);
    group.throughput(Throughput::Elements(size as u64));

    for cutoff in [1_024, 8_192, 65_536] {
        group.bench_with_input(BenchmarkId::new("batch", cutoff), &cutoff, |b, &cutoff| {
            b.iter(|| {
                Mergesort::new()
                    .adapter(Batch)
                    .sequential_cutoff(cutoff)
                    .build()
                    .unwrap()
                    .sort_vec(black_box(data.clone()))
            })
        });
    }
    group.finish();
}

fn bench_floats(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("floats_{}", mode_name));
    group.sample_size(50);

    let size = 100_000;
    let data = generate_float_data(size, 42);
    group.throughput(Throughput::Elements(size as u64));

    group.bench_function("total_order_with_nans", |b| {
        b.iter(|| {
            Mergesort::new()
                .adapter(Batch)
                .parallel(use_parallel)
                .build()
                .unwrap()
                .sort_floats(black_box(&data))
        })
    });

    group.finish();
}

fn bench_chunked(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("chunked_{}", mode_name));
    group.sample_size(30);

    let size = 500_000;
    let data = generate_random_data(size, 42);
    group.throughput(Throughput::Elements(size as u64));

    for capacity in [4_096, 65_536] {
        group.bench_with_input(
            BenchmarkId::new("ingest_finish", capacity),
            &capacity,
            |b, &capacity| {
                b.iter(|| {
                    let mut sorter = Mergesort::new()
                        .chunk_capacity(capacity)
                        .adapter(Chunked)
                        .parallel(use_parallel)
                        .build()
                        .unwrap();
                    sorter.extend(black_box(&data).iter().cloned());
                    sorter.finish()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_patterns,
    bench_baselines,
    bench_cutoff,
    bench_floats,
    bench_chunked,
);

criterion_main!(benches);
