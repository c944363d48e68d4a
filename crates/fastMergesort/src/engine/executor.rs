//! Parallel execution engine for sort operations.
//!
//! ## Purpose
//!
//! This module provides the parallel counterparts of the `mergesort` crate's
//! recursive descent and run fusion. Halves of a large sequence are sorted on
//! separate threads of the rayon pool, speeding up sorting on multi-core
//! machines while producing exactly the output of the sequential engine.
//!
//! ## Design notes
//!
//! * **Implementation**: Drop-in replacement for the sequential descent; the
//!   split points and merge order are identical, only the schedule differs.
//! * **Parallelism**: Uses `rayon::join` for divide-and-conquer work stealing
//!   and parallel iterators for run fusion.
//! * **Cutoff**: Subproblems at or below the sequential cutoff run on the
//!   base engine, seeded with the current recursion depth.
//! * **Accounting**: Each fork counts into its own metrics; parents absorb
//!   them after the join, so totals match the sequential descent.
//!
//! ## Key concepts
//!
//! * **Fork point**: A half larger than the cutoff sorts on a pool thread.
//! * **Sequential cutoff**: Adaptive bound of roughly four subproblems per
//!   pool thread, floored at [`MIN_SEQUENTIAL_CUTOFF`].
//! * **Deterministic results**: Output and metrics are independent of thread
//!   count and cutoff choice.
//!
//! ## Invariants
//!
//! * The comparator is shared read-only across threads.
//! * Depth accounting matches the sequential descent for every element.
//! * Run fusion pairs adjacent runs exactly like the sequential fusion.
//!
//! ## Non-goals
//!
//! * This module does not decide whether to parallelize (handled by adapters).
//! * This module does not validate configuration (handled by the base crate).
//! * This module does not report metrics selectively (handled by adapters).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
#[cfg(feature = "cpu")]
use std::cmp::Ordering;

// Export dependencies from mergesort crate
#[cfg(feature = "cpu")]
use mergesort::internals::algorithms::merge::merge;
#[cfg(feature = "cpu")]
use mergesort::internals::algorithms::split::split_at_midpoint;
#[cfg(feature = "cpu")]
use mergesort::internals::engine::executor::{ExecutorOutput, SortExecutor};
#[cfg(feature = "cpu")]
use mergesort::internals::evaluation::metrics::SortMetrics;

// ============================================================================
// Constants
// ============================================================================

/// Smallest half worth forking to the pool.
pub const MIN_SEQUENTIAL_CUTOFF: usize = 1024;

// ============================================================================
// Cutoff Selection
// ============================================================================

/// Resolve the sequential cutoff for a sequence of length `n`.
///
/// An explicit request wins, floored at one. Otherwise the cutoff targets
/// about four subproblems per pool thread, floored at
/// [`MIN_SEQUENTIAL_CUTOFF`] so small halves never pay the fork overhead.
#[cfg(feature = "cpu")]
pub fn effective_cutoff(n: usize, requested: Option<usize>) -> usize {
    match requested {
        Some(cutoff) => cutoff.max(1),
        None => {
            let threads = rayon::current_num_threads().max(1);
            (n / (threads * 4)).max(MIN_SEQUENTIAL_CUTOFF)
        }
    }
}

// ============================================================================
// Parallel Recursive Descent
// ============================================================================

/// One parallel split/sort/merge descent over an owned sequence.
///
/// Above `cutoff` the two halves sort concurrently via `rayon::join`; at or
/// below it the descent continues on the sequential engine, seeded with the
/// current depth. Split points and merge order are the same as the
/// sequential descent, so output and metrics are identical for any cutoff
/// and any thread count.
#[cfg(feature = "cpu")]
pub fn sort_pass_parallel<T, C>(
    seq: Vec<T>,
    cmp: &C,
    cutoff: usize,
    depth: usize,
    metrics: &mut SortMetrics,
) -> Vec<T>
where
    T: Send,
    C: Fn(&T, &T) -> Ordering + Sync,
{
    if seq.len() <= cutoff {
        return SortExecutor::sort_pass(seq, &mut |a, b| cmp(a, b), depth, metrics);
    }

    if metrics.max_depth < depth {
        metrics.max_depth = depth;
    }

    let (left, right) = split_at_midpoint(seq);

    // Vacuously presorted so absorbing leaves the caller's flag untouched
    let mut left_metrics = SortMetrics::new();
    let mut right_metrics = SortMetrics::new();
    left_metrics.presorted = true;
    right_metrics.presorted = true;

    let (left, right) = rayon::join(
        || sort_pass_parallel(left, cmp, cutoff, depth + 1, &mut left_metrics),
        || sort_pass_parallel(right, cmp, cutoff, depth + 1, &mut right_metrics),
    );
    metrics.absorb(&left_metrics);
    metrics.absorb(&right_metrics);

    metrics.merges += 1;
    merge(left, right, &mut |a, b| cmp(a, b), &mut metrics.comparisons)
}

// ============================================================================
// Parallel Run Entry Point
// ============================================================================

/// Sort an owned sequence under an arbitrary total order, in parallel.
///
/// Mirrors the sequential `run_by` entry point: a single scan checks the
/// presorted fast path first, and only an input with an inversion enters the
/// parallel descent.
#[cfg(feature = "cpu")]
pub fn run_by_parallel<T, C>(input: Vec<T>, cmp: C, cutoff: Option<usize>) -> ExecutorOutput<T>
where
    T: Send,
    C: Fn(&T, &T) -> Ordering + Sync,
{
    let mut metrics = SortMetrics::new();

    if SortExecutor::is_presorted(&input, &mut |a, b| cmp(a, b), &mut metrics.comparisons) {
        metrics.presorted = true;
        return ExecutorOutput {
            sorted: input,
            metrics,
        };
    }

    let cutoff = effective_cutoff(input.len(), cutoff);
    let sorted = sort_pass_parallel(input, &cmp, cutoff, 0, &mut metrics);
    ExecutorOutput { sorted, metrics }
}

// ============================================================================
// Parallel Run Fusion
// ============================================================================

/// Fuse a list of sorted runs by parallel pairwise merge rounds.
///
/// Pairings per round are the same as the sequential fusion: adjacent runs
/// merge, an odd trailing run passes through. The merges of one round run
/// concurrently on the pool; counters accumulate in run order, so totals
/// match the sequential fusion exactly.
#[cfg(feature = "cpu")]
pub fn merge_rounds_parallel<T, C>(
    mut runs: Vec<Vec<T>>,
    cmp: &C,
    comparisons: &mut u64,
    merges: &mut u64,
) -> Vec<T>
where
    T: Send,
    C: Fn(&T, &T) -> Ordering + Sync,
{
    while runs.len() > 1 {
        let mut pairs = Vec::with_capacity(runs.len() / 2);
        let mut carry = None;

        let mut iter = runs.into_iter();
        while let Some(first) = iter.next() {
            match iter.next() {
                Some(second) => pairs.push((first, second)),
                None => carry = Some(first),
            }
        }

        let fused: Vec<(Vec<T>, u64)> = pairs
            .into_par_iter()
            .map(|(left, right)| {
                let mut local = 0u64;
                let out = merge(left, right, &mut |a, b| cmp(a, b), &mut local);
                (out, local)
            })
            .collect();

        let mut next = Vec::with_capacity(fused.len() + 1);
        for (run, count) in fused {
            *comparisons += count;
            *merges += 1;
            next.push(run);
        }
        if let Some(last) = carry {
            next.push(last);
        }

        runs = next;
    }

    runs.pop().unwrap_or_default()
}
