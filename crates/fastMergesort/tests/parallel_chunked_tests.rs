#![cfg(feature = "dev")]
//! Tests for the parallel Chunked adapter.
//!
//! These tests exercise incremental accumulation with deferred chunk
//! sorting, and pin the adapter to the base crate's chunked mode: same
//! inputs and same capacity must yield the same values and the same
//! metrics.

use fastMergesort::prelude::*;
use mergesort::internals::api::{Chunked as CoreChunked, MergesortBuilder as CoreMergesort};
use rand::prelude::*;

/// Seeded random values so failures reproduce.
fn random_values(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(-1_000_000..1_000_000)).collect()
}

// ============================================================================
// Accumulation Tests
// ============================================================================

/// Test basic push-then-finish sorting.
#[test]
fn test_parallel_chunked_basic() {
    let mut sorter = Mergesort::new().adapter(Chunked).build().unwrap();

    sorter.push_slice(&[9, 3, 7]);
    sorter.push(1);

    let result = sorter.finish();
    assert_eq!(result.values, vec![1, 3, 7, 9]);
}

/// Test chunk capture accounting.
///
/// With capacity four, ten pushes capture two chunks and leave two pending.
#[test]
fn test_parallel_chunked_accounting() {
    let mut sorter = Mergesort::new()
        .chunk_capacity(4)
        .adapter(Chunked)
        .build()
        .unwrap();

    assert!(sorter.is_empty());

    sorter.extend(0..10);

    assert_eq!(sorter.len(), 10);
    assert_eq!(sorter.sealed_runs(), 2);
    assert!(!sorter.is_empty());
}

/// Test finishing with no elements.
#[test]
fn test_parallel_chunked_empty_finish() {
    let sorter = Mergesort::new()
        .collect_metrics()
        .adapter(Chunked)
        .build::<i32>()
        .unwrap();

    let result = sorter.finish();
    assert!(result.values.is_empty());

    let metrics = result.metrics.expect("Metrics were requested");
    assert!(metrics.presorted, "Nothing contradicted the presorted flag");
    assert_eq!(metrics.comparisons, 0);
    assert_eq!(metrics.merges, 0);
}

/// Test a single partial chunk.
#[test]
fn test_parallel_chunked_partial_chunk() {
    let mut sorter = Mergesort::new()
        .chunk_capacity(1024)
        .adapter(Chunked)
        .build()
        .unwrap();

    sorter.push_slice(&[5, 2, 8, 2]);

    let result = sorter.finish();
    assert_eq!(result.values, vec![2, 2, 5, 8]);
}

// ============================================================================
// Base Crate Equivalence Tests
// ============================================================================

/// Test value and metric equality with the base chunked mode.
///
/// Same data, same chunk capacity: the deferred parallel sorting must land
/// on exactly the per-chunk sorts and fusion rounds of the base crate.
#[test]
fn test_parallel_chunked_matches_base() {
    let data = random_values(10_000, 21);

    let mut parallel = Mergesort::new()
        .chunk_capacity(512)
        .collect_metrics()
        .adapter(Chunked)
        .sequential_cutoff(64)
        .build()
        .unwrap();
    parallel.push_slice(&data);
    let par_result = parallel.finish();

    let mut base = CoreMergesort::new()
        .chunk_capacity(512)
        .collect_metrics()
        .adapter(CoreChunked)
        .build()
        .unwrap();
    base.push_slice(&data);
    let base_result = base.finish();

    assert_eq!(par_result.values, base_result.values);
    assert_eq!(par_result.metrics, base_result.metrics);
}

/// Test the sequential fallback against the base chunked mode.
#[test]
fn test_chunked_parallel_disabled_matches_base() {
    let data = random_values(3_000, 5);

    let mut fallback = Mergesort::new()
        .chunk_capacity(256)
        .collect_metrics()
        .adapter(Chunked)
        .parallel(false)
        .build()
        .unwrap();
    fallback.push_slice(&data);
    let fb_result = fallback.finish();

    let mut base = CoreMergesort::new()
        .chunk_capacity(256)
        .collect_metrics()
        .adapter(CoreChunked)
        .build()
        .unwrap();
    base.push_slice(&data);
    let base_result = base.finish();

    assert_eq!(fb_result.values, base_result.values);
    assert_eq!(fb_result.metrics, base_result.metrics);
}

// ============================================================================
// Ordering Tests
// ============================================================================

/// Test descending chunked sorting across chunk boundaries.
#[test]
fn test_parallel_chunked_descending() {
    let data = random_values(2_000, 13);
    let mut expected = data.clone();
    expected.sort_by(|a, b| b.cmp(a));

    let mut sorter = Mergesort::new()
        .direction(Descending)
        .chunk_capacity(128)
        .adapter(Chunked)
        .build()
        .unwrap();
    sorter.extend(data);

    let result = sorter.finish();
    assert_eq!(result.values, expected);
    assert_eq!(result.direction, Descending);
}

/// Test that presorted input across chunks is detected as such.
///
/// Every chunk scans clean, but fusing the chunks still counts as work, so
/// the flag survives only without fusion.
#[test]
fn test_parallel_chunked_presorted_single_chunk() {
    let mut sorter = Mergesort::new()
        .chunk_capacity(1024)
        .collect_metrics()
        .adapter(Chunked)
        .build()
        .unwrap();
    sorter.extend(0..100);

    let result = sorter.finish();
    let metrics = result.metrics.expect("Metrics were requested");

    assert_eq!(result.values, (0..100).collect::<Vec<_>>());
    assert!(metrics.presorted, "One clean chunk needs no fusion");

    // Two chunks force one fusion merge, which clears the flag
    let mut sorter = Mergesort::new()
        .chunk_capacity(50)
        .collect_metrics()
        .adapter(Chunked)
        .build()
        .unwrap();
    sorter.extend(0..100);

    let metrics = sorter.finish().metrics.expect("Metrics were requested");
    assert!(!metrics.presorted);
}
