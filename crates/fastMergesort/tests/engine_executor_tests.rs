#![cfg(feature = "dev")]
#![cfg(feature = "cpu")]
//! Tests for the parallel execution engine.
//!
//! These tests verify the parallel descent and run fusion against the
//! sequential engine they wrap, including:
//! - Cutoff resolution (explicit and adaptive)
//! - The presorted fast path
//! - Descent equivalence for arbitrary cutoffs
//! - Fusion pairing and counter accounting

use fastMergesort::internals::engine::executor::{
    MIN_SEQUENTIAL_CUTOFF, effective_cutoff, merge_rounds_parallel, run_by_parallel,
    sort_pass_parallel,
};
use mergesort::internals::algorithms::merge::merge_rounds;
use mergesort::internals::engine::executor::SortExecutor;
use mergesort::internals::evaluation::metrics::SortMetrics;

/// Deterministic scrambled permutation of `0..n`.
fn scrambled(n: usize) -> Vec<i64> {
    (0..n as i64).map(|i| (i * 37 + 11) % n as i64).collect()
}

// ============================================================================
// Cutoff Resolution Tests
// ============================================================================

/// Test that an explicit cutoff request wins.
#[test]
fn test_effective_cutoff_explicit() {
    assert_eq!(effective_cutoff(1_000_000, Some(7)), 7);
    assert_eq!(effective_cutoff(10, Some(100)), 100);

    // A zero request is floored at one so the descent can terminate
    assert_eq!(effective_cutoff(10, Some(0)), 1);
}

/// Test the adaptive cutoff floor.
///
/// Small inputs never fork; the adaptive value is floored at the minimum.
#[test]
fn test_effective_cutoff_adaptive() {
    assert_eq!(effective_cutoff(0, None), MIN_SEQUENTIAL_CUTOFF);
    assert_eq!(effective_cutoff(100, None), MIN_SEQUENTIAL_CUTOFF);

    // Large inputs scale with the pool but never drop below the floor
    let large = effective_cutoff(10_000_000, None);
    assert!(large >= MIN_SEQUENTIAL_CUTOFF);
    assert!(large <= 10_000_000 / 4, "Cutoff leaves at least four subproblems");
}

// ============================================================================
// Presorted Fast Path Tests
// ============================================================================

/// Test that a sorted input skips the parallel descent.
///
/// Verifies the scan accounting: one comparison per adjacent pair, no merges,
/// no recursion.
#[test]
fn test_run_by_parallel_presorted_fast_path() {
    let input: Vec<i64> = (0..100).collect();
    let out = run_by_parallel(input.clone(), |a: &i64, b: &i64| a.cmp(b), Some(8));

    assert_eq!(out.sorted, input);
    assert!(out.metrics.presorted);
    assert_eq!(out.metrics.comparisons, 99);
    assert_eq!(out.metrics.merges, 0);
    assert_eq!(out.metrics.max_depth, 0);
}

/// Test that a single inversion disables the fast path.
#[test]
fn test_run_by_parallel_detects_inversion() {
    let mut input: Vec<i64> = (0..100).collect();
    input.swap(40, 41);

    let out = run_by_parallel(input, |a: &i64, b: &i64| a.cmp(b), Some(8));
    let expected: Vec<i64> = (0..100).collect();

    assert_eq!(out.sorted, expected);
    assert!(!out.metrics.presorted);
    assert!(out.metrics.merges > 0);
}

// ============================================================================
// Descent Equivalence Tests
// ============================================================================

/// Test that the parallel descent matches the sequential one exactly.
///
/// Values and every counter must agree for any cutoff, because split points
/// and merge order are identical.
#[test]
fn test_sort_pass_parallel_matches_sequential() {
    let input = scrambled(64);
    let cmp = |a: &i64, b: &i64| a.cmp(b);

    let mut seq_metrics = SortMetrics::new();
    let expected = SortExecutor::sort_pass(input.clone(), &mut |a, b| a.cmp(b), 0, &mut seq_metrics);

    for cutoff in [1, 2, 3, 8, 64, 1000] {
        let mut par_metrics = SortMetrics::new();
        let sorted = sort_pass_parallel(input.clone(), &cmp, cutoff, 0, &mut par_metrics);

        assert_eq!(sorted, expected, "Values diverged at cutoff {}", cutoff);
        assert_eq!(par_metrics, seq_metrics, "Metrics diverged at cutoff {}", cutoff);
    }
}

/// Test depth seeding in the parallel descent.
///
/// A seeded depth shifts `max_depth` by the seed, exactly like the
/// sequential descent.
#[test]
fn test_sort_pass_parallel_depth_seeding() {
    let input = scrambled(16);
    let cmp = |a: &i64, b: &i64| a.cmp(b);

    let mut base = SortMetrics::new();
    let _ = sort_pass_parallel(input.clone(), &cmp, 2, 0, &mut base);

    let mut seeded = SortMetrics::new();
    let _ = sort_pass_parallel(input, &cmp, 2, 5, &mut seeded);

    assert_eq!(seeded.max_depth, base.max_depth + 5);
    assert_eq!(seeded.comparisons, base.comparisons);
    assert_eq!(seeded.merges, base.merges);
}

/// Test the full parallel entry point against the sequential one.
#[test]
fn test_run_by_parallel_matches_run_by() {
    let input = scrambled(500);

    let seq = SortExecutor::run_by(input.clone(), |a: &i64, b: &i64| a.cmp(b));
    let par = run_by_parallel(input, |a: &i64, b: &i64| a.cmp(b), Some(16));

    assert_eq!(par.sorted, seq.sorted);
    assert_eq!(par.metrics, seq.metrics);
}

// ============================================================================
// Fusion Tests
// ============================================================================

/// Test parallel fusion of sorted runs.
///
/// Four runs fuse in two rounds: two pair merges, then one.
#[test]
fn test_merge_rounds_parallel_fuses() {
    let runs = vec![vec![1, 4, 7], vec![2, 5], vec![3, 6], vec![0, 8]];
    let cmp = |a: &i32, b: &i32| a.cmp(b);

    let mut comparisons = 0u64;
    let mut merges = 0u64;
    let fused = merge_rounds_parallel(runs, &cmp, &mut comparisons, &mut merges);

    assert_eq!(fused, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(merges, 3);
    assert!(comparisons > 0);
}

/// Test that an odd trailing run passes through each round.
#[test]
fn test_merge_rounds_parallel_odd_run_count() {
    let runs = vec![vec![5, 9], vec![1, 3], vec![2, 7]];
    let cmp = |a: &i32, b: &i32| a.cmp(b);

    let mut comparisons = 0u64;
    let mut merges = 0u64;
    let fused = merge_rounds_parallel(runs, &cmp, &mut comparisons, &mut merges);

    // Round one merges the first pair and carries [2, 7]; round two merges it in
    assert_eq!(fused, vec![1, 2, 3, 5, 7, 9]);
    assert_eq!(merges, 2);
}

/// Test fusion counter equality with the sequential fusion.
#[test]
fn test_merge_rounds_parallel_matches_sequential() {
    let runs: Vec<Vec<i64>> = (0..7)
        .map(|r| (0..20).map(|i| i * 7 + r).collect())
        .collect();
    let cmp = |a: &i64, b: &i64| a.cmp(b);

    let mut seq_comparisons = 0u64;
    let mut seq_merges = 0u64;
    let expected = merge_rounds(
        runs.clone(),
        &mut |a: &i64, b: &i64| a.cmp(b),
        &mut seq_comparisons,
        &mut seq_merges,
    );

    let mut par_comparisons = 0u64;
    let mut par_merges = 0u64;
    let fused = merge_rounds_parallel(runs, &cmp, &mut par_comparisons, &mut par_merges);

    assert_eq!(fused, expected);
    assert_eq!(par_comparisons, seq_comparisons);
    assert_eq!(par_merges, seq_merges);
}

/// Test fusion edge cases: no runs and a single run.
#[test]
fn test_merge_rounds_parallel_degenerate() {
    let cmp = |a: &i32, b: &i32| a.cmp(b);

    let mut comparisons = 0u64;
    let mut merges = 0u64;

    let empty: Vec<Vec<i32>> = Vec::new();
    assert_eq!(
        merge_rounds_parallel(empty, &cmp, &mut comparisons, &mut merges),
        Vec::<i32>::new()
    );

    let single = vec![vec![1, 2, 3]];
    assert_eq!(
        merge_rounds_parallel(single, &cmp, &mut comparisons, &mut merges),
        vec![1, 2, 3]
    );

    assert_eq!(comparisons, 0);
    assert_eq!(merges, 0);
}
