//! Parallel chunked adapter for incremental sorting.
//!
//! ## Purpose
//!
//! This module provides the chunked execution adapter with parallel
//! completion: elements arrive incrementally and accumulate in fixed-size
//! chunks, and at `finish` the chunks are sorted concurrently on the rayon
//! pool and fused by parallel merge rounds. Results are identical to the
//! base chunked adapter, element for element and counter for counter.
//!
//! ## Design notes
//!
//! * **Deferred sealing**: Chunks are captured raw while data arrives and
//!   sorted together at `finish`, so the pool sees all of them at once.
//!   Pushes are therefore plain appends; the sorting cost concentrates at
//!   completion instead of spreading across pushes.
//! * **Parallelism**: Adds parallel execution via `rayon` (fastMergesort
//!   extension); `.parallel(false)` restores sequential completion.
//! * **Stability**: Chunks are captured and fused in arrival order, so equal
//!   elements keep their arrival order end to end.
//! * **Accounting**: Per-chunk metrics are absorbed in arrival order; fusion
//!   adds its comparisons and merges at `finish`.
//!
//! ## Key concepts
//!
//! * **Raw chunk**: Unsorted arrivals captured at the chunk capacity.
//! * **Run**: A sorted chunk awaiting fusion.
//! * **Chunk capacity**: Pending-buffer size that triggers a capture.
//!
//! ## Invariants
//!
//! * `finish` returns every pushed element exactly once.
//! * Output and metrics match the base chunked adapter for every input,
//!   capacity, cutoff, and thread count.
//! * No chunk ever exceeds the chunk capacity.
//!
//! ## Non-goals
//!
//! * This adapter does not support caller-supplied comparators; elements
//!   sort under their `Ord` order and the configured direction.
//! * This adapter does not emit partial results before `finish`.

// Feature-gated imports
#[cfg(feature = "cpu")]
use crate::engine::executor::{merge_rounds_parallel, run_by_parallel};
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use std::mem;
use std::result::Result;

// Export dependencies from mergesort crate
use mergesort::internals::adapters::chunked::ChunkedSorterBuilder;
use mergesort::internals::algorithms::merge::merge_rounds;
use mergesort::internals::engine::executor::{SortConfig, SortExecutor};
#[cfg(feature = "cpu")]
use mergesort::internals::engine::executor::ExecutorOutput;
use mergesort::internals::engine::output::MergesortResult;
use mergesort::internals::engine::validator::Validator;
use mergesort::internals::evaluation::metrics::SortMetrics;
use mergesort::internals::primitives::errors::MergesortError;
use mergesort::internals::primitives::ordering::Direction;

// ============================================================================
// Extended Chunked Sorter Builder
// ============================================================================

/// Builder for the chunked sorter with parallel support.
#[derive(Debug, Clone)]
pub struct ParallelChunkedSorterBuilder {
    /// Base builder from the mergesort crate
    pub base: ChunkedSorterBuilder,

    /// Sequential cutoff override for the parallel descent
    pub sequential_cutoff: Option<usize>,
}

impl Default for ParallelChunkedSorterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelChunkedSorterBuilder {
    /// Create a new chunked sorter builder with default parameters.
    ///
    /// # Defaults
    ///
    /// * All base parameters from the mergesort `ChunkedSorterBuilder`
    /// * parallel: true (fastMergesort extension)
    fn new() -> Self {
        let base = ChunkedSorterBuilder::default().parallel(true); // Default to parallel in fastMergesort
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
    pub fn sequential_cutoff(mut self, cutoff: usize) -> Self {
        self.sequential_cutoff = Some(cutoff);
        self
    }

    // ========================================================================
    // Shared Setters
    // ========================================================================

    /// Set the pending-buffer capacity.
    pub fn chunk_capacity(mut self, capacity: usize) -> Self {
        self.base = self.base.chunk_capacity(capacity);
        self
    }

    /// Set the direction of the sorted output.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.base = self.base.direction(direction);
        self
    }

    /// Enable attaching work metrics to the result.
    pub fn collect_metrics(mut self, enabled: bool) -> Self {
        self.base = self.base.collect_metrics(enabled);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the chunked sorter.
    ///
    /// The element type binds here; it is usually inferred from later
    /// `push` calls.
    pub fn build<T: Ord>(self) -> Result<ParallelChunkedSorter<T>, MergesortError> {
        // Check for deferred errors from adapter conversion
        if let Some(err) = self.base.deferred_error {
            return Err(err);
        }

        // Reuses the validation logic centralized in the mergesort crate
        let _ = self.base.clone().build::<T>()?;

        if let Some(cutoff) = self.sequential_cutoff {
            Validator::validate_cutoff(cutoff)?;
        }

        let chunk_capacity = self.base.chunk_capacity;

        // Vacuously presorted until a sorted chunk proves otherwise
        let mut metrics = SortMetrics::new();
        metrics.presorted = true;

        Ok(ParallelChunkedSorter {
            config: self,
            pending: Vec::with_capacity(chunk_capacity),
            chunks: Vec::new(),
            captured_len: 0,
            metrics,
        })
    }
}

// ============================================================================
// Extended Chunked Sorter
// ============================================================================

/// Chunked sorter with parallel completion.
pub struct ParallelChunkedSorter<T> {
    config: ParallelChunkedSorterBuilder,
    pending: Vec<T>,
    chunks: Vec<Vec<T>>,
    captured_len: usize,
    metrics: SortMetrics,
}

impl<T: Ord> ParallelChunkedSorter<T> {
    // ========================================================================
    // Accumulation
    // ========================================================================

    /// Push one element.
    ///
    /// Captures the pending buffer as a raw chunk when it reaches the chunk
    /// capacity.
    pub fn push(&mut self, value: T) {
        self.pending.push(value);
        if self.pending.len() >= self.config.base.chunk_capacity {
            self.capture_pending();
        }
    }

    /// Push a slice of elements, cloning each.
    pub fn push_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        self.extend(values.iter().cloned());
    }

    /// Push every element of an iterator.
    pub fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.push(value);
        }
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of elements pushed so far.
    pub fn len(&self) -> usize {
        self.captured_len + self.pending.len()
    }

    /// Whether no elements have been pushed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of chunks captured so far.
    pub fn sealed_runs(&self) -> usize {
        self.chunks.len()
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Capture the pending buffer as a raw chunk.
    fn capture_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }

        let capacity = self.config.base.chunk_capacity;
        let chunk = mem::replace(&mut self.pending, Vec::with_capacity(capacity));
        self.captured_len += chunk.len();
        self.chunks.push(chunk);
    }
}

impl<T: Ord + Send> ParallelChunkedSorter<T> {
    // ========================================================================
    // Completion
    // ========================================================================

    /// Capture any pending elements, sort all chunks, and fuse them into the
    /// sorted result.
    pub fn finish(mut self) -> MergesortResult<T> {
        self.capture_pending();

        let Self {
            config,
            chunks,
            mut metrics,
            ..
        } = self;
        let direction = config.base.direction;

        #[cfg(feature = "cpu")]
        let values = if config.base.parallel.unwrap_or(true) {
            Self::fuse_parallel(&config, direction, chunks, &mut metrics)
        } else {
            Self::fuse_sequential(direction, chunks, &mut metrics)
        };

        #[cfg(not(feature = "cpu"))]
        let values = Self::fuse_sequential(direction, chunks, &mut metrics);

        MergesortResult {
            values,
            direction,
            metrics: if config.base.collect_metrics {
                Some(metrics)
            } else {
                None
            },
        }
    }

    /// Sort chunks concurrently and fuse them by parallel merge rounds.
    #[cfg(feature = "cpu")]
    fn fuse_parallel(
        config: &ParallelChunkedSorterBuilder,
        direction: Direction,
        chunks: Vec<Vec<T>>,
        metrics: &mut SortMetrics,
    ) -> Vec<T> {
        let cmp = move |a: &T, b: &T| direction.apply(a.cmp(b));
        let cutoff = config.sequential_cutoff;

        // Sort captured chunks on the pool; absorb their metrics in
        // arrival order
        let outputs: Vec<ExecutorOutput<T>> = chunks
            .into_par_iter()
            .map(|chunk| run_by_parallel(chunk, cmp, cutoff))
            .collect();

        let mut runs = Vec::with_capacity(outputs.len());
        for output in outputs {
            metrics.absorb(&output.metrics);
            runs.push(output.sorted);
        }

        // Any fusion work means the input as a whole was not presorted
        let merges_before = metrics.merges;
        let values =
            merge_rounds_parallel(runs, &cmp, &mut metrics.comparisons, &mut metrics.merges);
        if metrics.merges > merges_before {
            metrics.presorted = false;
        }

        values
    }

    /// Sort chunks and fuse them on the calling thread.
    fn fuse_sequential(
        direction: Direction,
        chunks: Vec<Vec<T>>,
        metrics: &mut SortMetrics,
    ) -> Vec<T> {
        let sort_config = SortConfig { direction };

        let mut runs = Vec::with_capacity(chunks.len());
        for chunk in chunks {
            let output = SortExecutor::run_with_config(chunk, &sort_config);
            metrics.absorb(&output.metrics);
            runs.push(output.sorted);
        }

        // Any fusion work means the input as a whole was not presorted
        let mut cmp = move |a: &T, b: &T| direction.apply(a.cmp(b));
        let merges_before = metrics.merges;
        let values = merge_rounds(runs, &mut cmp, &mut metrics.comparisons, &mut metrics.merges);
        if metrics.merges > merges_before {
            metrics.presorted = false;
        }

        values
    }
}
