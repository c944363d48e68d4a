//! Batch adapter for whole-sequence sorting.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: the entire input is
//! available up front and is sorted in a single call. This is the default
//! mode and the right one whenever the data fits in memory.
//!
//! ## Design notes
//!
//! * **Delegation**: All entry points funnel into the execution engine; the
//!   adapter only composes the comparator and filters the metrics.
//! * **Purity**: Slice entry points never mutate the input; they clone once
//!   and sort the clone. `sort_vec` consumes its argument instead.
//! * **Reusability**: A built sorter borrows itself per call, so one
//!   configuration can sort any number of sequences of any element type.
//!
//! ## Key concepts
//!
//! * **Ord path**: `sort` / `sort_vec` use the element's total order.
//! * **Custom orders**: `sort_by` and `sort_by_key` accept caller-supplied
//!   orders; the configured direction is applied on top.
//! * **Float path**: `sort_floats` sorts IEEE floats under a total order
//!   with NaNs at the end.
//!
//! ## Invariants
//!
//! * Output is a permutation of the input, sorted under the active
//!   comparator, with equal elements in input order.
//! * Sorting never fails; only `build()` can return an error.
//!
//! ## Non-goals
//!
//! * This adapter does not accumulate data incrementally (use the chunked
//!   adapter).
//! * This adapter does not sort in place.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{ExecutorOutput, SortConfig, SortExecutor};
use crate::engine::output::MergesortResult;
use crate::engine::validator::Validator;
use crate::evaluation::metrics::SortMetrics;
use crate::primitives::errors::MergesortError;
use crate::primitives::ordering::{total_float_cmp, Direction};

// ============================================================================
// Batch Sorter Builder
// ============================================================================

/// Builder for the batch sorter.
#[derive(Debug, Clone)]
pub struct BatchSorterBuilder {
    /// Direction of the sorted output
    pub direction: Direction,

    /// Whether to attach work metrics to results
    pub collect_metrics: bool,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<MergesortError>,

    /// Parallel execution hint for extension crates
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,
}

impl Default for BatchSorterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchSorterBuilder {
    /// Create a new batch sorter builder with default parameters.
    fn new() -> Self {
        Self {
            direction: Direction::default(),
            collect_metrics: false,
            deferred_error: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    /// Set the direction of the sorted output.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Enable attaching work metrics to results.
    pub fn collect_metrics(mut self, enabled: bool) -> Self {
        self.collect_metrics = enabled;
        self
    }

    /// Set parallel execution hint.
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the batch sorter.
    pub fn build(self) -> Result<BatchSorter, MergesortError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(BatchSorter { config: self })
    }
}

// ============================================================================
// Batch Sorter
// ============================================================================

/// Batch sorter: sorts complete sequences in one call.
pub struct BatchSorter {
    config: BatchSorterBuilder,
}

impl BatchSorter {
    // ========================================================================
    // Ord Entry Points
    // ========================================================================

    /// Sort a sequence under the element's total order.
    ///
    /// The input is never mutated; it is cloned once and the clone is sorted.
    pub fn sort<T: Ord + Clone>(&self, input: &[T]) -> MergesortResult<T> {
        self.sort_vec(input.to_vec())
    }

    /// Sort an owned sequence under the element's total order.
    ///
    /// Consumes the input; elements are moved, never cloned.
    pub fn sort_vec<T: Ord>(&self, input: Vec<T>) -> MergesortResult<T> {
        let config = SortConfig {
            direction: self.config.direction,
        };
        self.finalize(SortExecutor::run_with_config(input, &config))
    }

    // ========================================================================
    // Custom-Order Entry Points
    // ========================================================================

    /// Sort a sequence under a caller-supplied total order.
    ///
    /// The configured direction is applied on top of `cmp`: under
    /// `Descending` the output is the exact reverse of what `cmp` ascending
    /// would produce. Elements that compare `Equal` keep their input order.
    pub fn sort_by<T, C>(&self, input: &[T], mut cmp: C) -> MergesortResult<T>
    where
        T: Clone,
        C: FnMut(&T, &T) -> Ordering,
    {
        let direction = self.config.direction;
        self.finalize(SortExecutor::run_by(input.to_vec(), move |a, b| {
            direction.apply(cmp(a, b))
        }))
    }

    /// Sort a sequence by a key extracted from each element.
    ///
    /// The key is recomputed on each comparison; extract keys up front if
    /// extraction is expensive.
    pub fn sort_by_key<T, K, F>(&self, input: &[T], mut key: F) -> MergesortResult<T>
    where
        T: Clone,
        K: Ord,
        F: FnMut(&T) -> K,
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
    pub fn sort_floats<T: Float>(&self, input: &[T]) -> MergesortResult<T> {
        self.sort_by(input, total_float_cmp)
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Wrap engine output into a result, attaching metrics only on request.
    fn finalize<T>(&self, output: ExecutorOutput<T>) -> MergesortResult<T> {
        MergesortResult {
            values: output.sorted,
            direction: self.config.direction,
            metrics: self.filter_metrics(output.metrics),
        }
    }

    /// Engine metrics are always counted; attach them only when requested.
    fn filter_metrics(&self, metrics: SortMetrics) -> Option<SortMetrics> {
        if self.config.collect_metrics {
            Some(metrics)
        } else {
            None
        }
    }
}
