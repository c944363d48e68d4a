//! Parallel batch adapter for whole-sequence sorting.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter with parallel recursion:
//! the entire input is available up front and its halves are sorted on the
//! rayon pool. Results are identical to the base batch adapter, element for
//! element and counter for counter.
//!
//! ## Design notes
//!
//! * **Delegation**: Configuration, validation, and result shaping reuse the
//!   base crate; only the descent is scheduled differently.
//! * **Parallelism**: Adds parallel execution via `rayon` (fastMergesort
//!   extension); `.parallel(false)` restores the sequential engine.
//! * **Comparators**: Caller-supplied orders must be `Fn + Sync` so they can
//!   be shared read-only across pool threads.
//!
//! ## Key concepts
//!
//! * **Ord path**: `sort` / `sort_vec` use the element's total order.
//! * **Custom orders**: `sort_by` and `sort_by_key` accept shared-state
//!   orders; the configured direction is applied on top.
//! * **Float path**: `sort_floats` sorts IEEE floats under a total order
//!   with NaNs at the end.
//! * **Sequential cutoff**: Halves at or below the cutoff skip forking.
//!
//! ## Invariants
//!
//! * Output and metrics match the base batch adapter for every input,
//!   cutoff, and thread count.
//! * Sorting never fails; only `build()` can return an error.
//!
//! ## Non-goals
//!
//! * This adapter does not accumulate data incrementally (use the chunked
//!   adapter).
//! * This adapter does not sort in place.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::run_by_parallel;

// External dependencies
use num_traits::Float;
use std::cmp::Ordering;
use std::result::Result;

// Export dependencies from mergesort crate
use mergesort::internals::adapters::batch::BatchSorterBuilder;
use mergesort::internals::engine::executor::{ExecutorOutput, SortConfig, SortExecutor};
use mergesort::internals::engine::output::MergesortResult;
use mergesort::internals::engine::validator::Validator;
use mergesort::internals::evaluation::metrics::SortMetrics;
use mergesort::internals::primitives::errors::MergesortError;
use mergesort::internals::primitives::ordering::{total_float_cmp, Direction};

// ============================================================================
// Extended Batch Sorter Builder
// ============================================================================

/// Builder for the batch sorter with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelBatchSorterBuilder {
    /// Base builder from the mergesort crate
    pub base: BatchSorterBuilder,

    /// Sequential cutoff override for the parallel descent
    pub sequential_cutoff: Option<usize>,
}

impl Default for ParallelBatchSorterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelBatchSorterBuilder {
    /// Create a new batch sorter builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from the mergesort `BatchSorterBuilder`
    /// * parallel: true (fastMergesort extension)
    /// * sequential_cutoff: adaptive, derived from input size and pool width
    fn new() -> Self {
        let base = BatchSorterBuilder::default().parallel(true); // Default to parallel in fastMergesort
        Self {
            base,
            sequential_cutoff: None,
        }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base = self.base.parallel(parallel);
        self
    }

    /// Set the sequential cutoff for the parallel descent.
    ///
    /// Halves at or below this length sort on the calling thread.
    pub fn sequential_cutoff(mut self, cutoff: usize) -> Self {
        self.sequential_cutoff = Some(cutoff);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the direction of the sorted output.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.base = self.base.direction(direction);
        self
    }

    /// Enable attaching work metrics to results.
    pub fn collect_metrics(mut self, enabled: bool) -> Self {
        self.base = self.base.collect_metrics(enabled);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch sorter.
    pub fn build(self) -> Result<ParallelBatchSorter, MergesortError> {
        // Check for deferred errors from adapter conversion
        if let Some(err) = self.base.deferred_error {
            return Err(err);
        }

        // Reuses the validation logic centralized in the mergesort crate
        let _ = self.base.clone().build()?;

        if let Some(cutoff) = self.sequential_cutoff {
            Validator::validate_cutoff(cutoff)?;
        }

        Ok(ParallelBatchSorter { config: self })
    }
}

// ============================================================================
// Extended Batch Sorter
// ============================================================================

/// Batch sorter with parallel support.
pub struct ParallelBatchSorter {
    config: ParallelBatchSorterBuilder,
}

impl ParallelBatchSorter {
    // ========================================================================
    // Ord Entry Points
    // ========================================================================

    /// Sort a sequence under the element's total order.
    ///
    /// The input is never mutated; it is cloned once and the clone is sorted.
    pub fn sort<T: Ord + Clone + Send>(&self, input: &[T]) -> MergesortResult<T> {
        self.sort_vec(input.to_vec())
    }

    /// Sort an owned sequence under the element's total order.
    ///
    /// Consumes the input; elements are moved, never cloned.
    pub fn sort_vec<T: Ord + Send>(&self, input: Vec<T>) -> MergesortResult<T> {
        let direction = self.config.base.direction;

        #[cfg(feature = "cpu")]
        if self.parallel_enabled() {
            let output = run_by_parallel(
                input,
                move |a: &T, b: &T| direction.apply(a.cmp(b)),
                self.config.sequential_cutoff,
            );
            return self.finalize(output);
        }

        let config = SortConfig { direction };
        self.finalize(SortExecutor::run_with_config(input, &config))
    }

    // ========================================================================
    // Custom-Order Entry Points
    // ========================================================================

    /// Sort a sequence under a caller-supplied total order.
    ///
    /// The comparator is shared read-only across pool threads, so it must be
    /// `Fn + Sync`. The configured direction is applied on top of `cmp`;
    /// elements that compare `Equal` keep their input order.
    pub fn sort_by<T, C>(&self, input: &[T], cmp: C) -> MergesortResult<T>
    where
        T: Clone + Send,
        C: Fn(&T, &T) -> Ordering + Sync,
    {
        let direction = self.config.base.direction;
        let ordered = move |a: &T, b: &T| direction.apply(cmp(a, b));

        #[cfg(feature = "cpu")]
        if self.parallel_enabled() {
            let output = run_by_parallel(input.to_vec(), ordered, self.config.sequential_cutoff);
            return self.finalize(output);
        }

        self.finalize(SortExecutor::run_by(input.to_vec(), ordered))
    }

    /// Sort a sequence by a key extracted from each element.
    ///
    /// The key is recomputed on each comparison; extract keys up front if
    /// extraction is expensive.
    pub fn sort_by_key<T, K, F>(&self, input: &[T], key: F) -> MergesortResult<T>
    where
        T: Clone + Send,
        K: Ord,
        F: Fn(&T) -> K + Sync,
    {
        self.sort_by(input, move |a, b| {
            let ka = key(a);
            let kb = key(b);
            ka.cmp(&kb)
        })
    }

    // ========================================================================
    // Float Entry Point
    // ========================================================================

    /// Sort floating-point values under a total order.
    ///
    /// Ordinary values (finite and infinite) order via `partial_cmp`; every
    /// NaN sorts after all non-NaN values and NaNs keep their relative input
    /// order. Under `Descending` the whole order is reversed, so NaNs lead.
    pub fn sort_floats<T: Float + Send>(&self, input: &[T]) -> MergesortResult<T> {
        self.sort_by(input, total_float_cmp)
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Whether this sorter runs the parallel descent.
    #[cfg(feature = "cpu")]
    fn parallel_enabled(&self) -> bool {
        self.config.base.parallel.unwrap_or(true)
    }

    /// Wrap engine output into a result, attaching metrics only on request.
    fn finalize<T>(&self, output: ExecutorOutput<T>) -> MergesortResult<T> {
        MergesortResult {
            values: output.sorted,
            direction: self.config.base.direction,
            metrics: self.filter_metrics(output.metrics),
        }
    }

    /// Engine metrics are always counted; attach them only when requested.
    fn filter_metrics(&self, metrics: SortMetrics) -> Option<SortMetrics> {
        if self.config.base.collect_metrics {
            Some(metrics)
        } else {
            None
        }
    }
}
