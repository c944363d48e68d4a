//! Execution engine for sort operations.
//!
//! ## Purpose
//!
//! This module provides the core execution engine that drives a merge sort:
//! the recursive split/sort/merge descent, the already-sorted fast path, and
//! the metrics accounting. The executor is the single place the recursion
//! lives; adapters differ only in how they feed it.
//!
//! ## Design notes
//!
//! * Provides both configuration-based and comparator-based entry points.
//! * The comparator-based entry point (`run_by`) is the core; the `Ord`
//!   entry points wrap `Ord::cmp` with the configured direction.
//! * `sort_pass` exposes one recursive descent so extension crates can
//!   compose it (e.g., run it on independent halves from worker threads).
//! * Sorting owns its input: slice entry points clone once, then every
//!   split and merge moves elements.
//!
//! ## Invariants
//!
//! * The output is a permutation of the input: same length, same multiset.
//! * Adjacent output elements never compare `Greater` under the comparator.
//! * Equal elements appear in their original relative order (stability).
//! * Sequences of length <= 1 are returned as-is.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (handled by `validator`).
//! * This module does not decide whether metrics are reported (handled by
//!   adapters).
//! * This module does not handle parallel execution directly (handled by
//!   extension crates).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::algorithms::merge::merge;
use crate::algorithms::split::split_at_midpoint;
use crate::evaluation::metrics::SortMetrics;
use crate::primitives::ordering::Direction;

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for sort execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    /// Direction of the sorted output.
    pub direction: Direction,
}

// ============================================================================
// Executor Output
// ============================================================================

/// Output from sort execution.
#[derive(Debug, Clone)]
pub struct ExecutorOutput<T> {
    /// The sorted sequence.
    pub sorted: Vec<T>,

    /// Work performed while sorting.
    pub metrics: SortMetrics,
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for sort operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortExecutor {
    /// Direction of the sorted output.
    pub direction: Direction,
}

impl SortExecutor {
    // ========================================================================
    // Constructor and Builder Methods
    // ========================================================================

    /// Create a new executor with default parameters.
    pub fn new() -> Self {
        Self {
            direction: Direction::Ascending,
        }
    }

    /// Create a new executor from a `SortConfig`.
    pub fn from_config(config: &SortConfig) -> Self {
        Self {
            direction: config.direction,
        }
    }

    /// Set the direction of the sorted output.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    // ========================================================================
    // Main Entry Points
    // ========================================================================

    /// Sort an owned sequence using a `SortConfig` payload.
    pub fn run_with_config<T: Ord>(input: Vec<T>, config: &SortConfig) -> ExecutorOutput<T> {
        Self::from_config(config).run_owned(input)
    }

    /// Sort a borrowed sequence under the configured direction.
    ///
    /// Clones the slice once up front; the clone is then consumed by the
    /// recursion without further copying.
    pub fn run<T: Ord + Clone>(&self, input: &[T]) -> ExecutorOutput<T> {
        self.run_owned(input.to_vec())
    }

    /// Sort an owned sequence under the configured direction.
    pub fn run_owned<T: Ord>(&self, input: Vec<T>) -> ExecutorOutput<T> {
        let direction = self.direction;
        Self::run_by(input, move |a, b| direction.apply(a.cmp(b)))
    }

    /// Sort an owned sequence under an arbitrary total order.
    ///
    /// This is the core entry point; the comparator already encodes the
    /// direction. The comparator must be a total order, otherwise the output
    /// order is unspecified (though still a permutation of the input).
    pub fn run_by<T, C>(input: Vec<T>, mut cmp: C) -> ExecutorOutput<T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        let mut metrics = SortMetrics::new();

        // Fast path: a scan that finds no inversion skips the recursion
        if Self::is_presorted(&input, &mut cmp, &mut metrics.comparisons) {
            metrics.presorted = true;
            return ExecutorOutput {
                sorted: input,
                metrics,
            };
        }

        let sorted = Self::sort_pass(input, &mut cmp, 0, &mut metrics);
        ExecutorOutput { sorted, metrics }
    }

    // ========================================================================
    // Recursive Descent
    // ========================================================================

    /// One recursive split/sort/merge descent over an owned sequence.
    ///
    /// `depth` seeds the recursion level recorded in the metrics, so callers
    /// running independent sub-sorts can keep depth accounting consistent.
    pub fn sort_pass<T, C>(
        seq: Vec<T>,
        cmp: &mut C,
        depth: usize,
        metrics: &mut SortMetrics,
    ) -> Vec<T>
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        if metrics.max_depth < depth {
            metrics.max_depth = depth;
        }

        // Base case: empty and singleton sequences are already sorted
        if seq.len() <= 1 {
            return seq;
        }

        let (left, right) = split_at_midpoint(seq);
        let left = Self::sort_pass(left, cmp, depth + 1, metrics);
        let right = Self::sort_pass(right, cmp, depth + 1, metrics);

        metrics.merges += 1;
        merge(left, right, cmp, &mut metrics.comparisons)
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Scan for an inversion; `true` means the sequence is already sorted.
    ///
    /// Increments `comparisons` once per adjacent pair inspected. The scan
    /// short-circuits at the first inversion.
    pub fn is_presorted<T, C>(seq: &[T], cmp: &mut C, comparisons: &mut u64) -> bool
    where
        C: FnMut(&T, &T) -> Ordering,
    {
        seq.windows(2).all(|w| {
            *comparisons += 1;
            cmp(&w[0], &w[1]) != Ordering::Greater
        })
    }
}
