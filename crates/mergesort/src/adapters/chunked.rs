//! Chunked adapter for incremental sorting.
//!
//! ## Purpose
//!
//! This module provides the chunked execution adapter: elements arrive
//! incrementally (one at a time, in slices, or from iterators), accumulate in
//! a bounded pending buffer, and the full sorted sequence is produced once at
//! `finish`. This fits producers that generate data over time and callers
//! that want sorting work spread across the accumulation phase.
//!
//! ## Design notes
//!
//! * **Sealing**: Whenever the pending buffer reaches the chunk capacity it
//!   is sorted by the engine and sealed as a run, bounding the cost of any
//!   single push.
//! * **Run fusion**: `finish` merges adjacent runs pairwise in rounds, the
//!   merge step generalized from two inputs to many.
//! * **Stability**: Runs are sealed and fused in arrival order, so equal
//!   elements keep their arrival order end to end; the result is identical
//!   to a batch sort of the concatenated input.
//! * **Accounting**: Seal-time metrics are absorbed as runs are produced;
//!   fusion adds its comparisons and merges at `finish`.
//!
//! ## Key concepts
//!
//! * **Pending buffer**: Unsorted arrivals waiting for the next seal.
//! * **Run**: A sorted chunk awaiting fusion.
//! * **Chunk capacity**: Pending-buffer size that triggers a seal.
//!
//! ## Invariants
//!
//! * `finish` returns every pushed element exactly once.
//! * No run ever exceeds the chunk capacity.
//! * The pending buffer holds fewer than chunk-capacity elements between
//!   calls.
//!
//! ## Non-goals
//!
//! * This adapter does not support caller-supplied comparators; elements
//!   sort under their `Ord` order and the configured direction.
//! * This adapter does not emit partial results before `finish`.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::algorithms::merge::merge_rounds;
use crate::engine::executor::{SortConfig, SortExecutor};
use crate::engine::output::MergesortResult;
use crate::engine::validator::Validator;
use crate::evaluation::metrics::SortMetrics;
use crate::primitives::buffer::ChunkedBuffer;
use crate::primitives::errors::MergesortError;
use crate::primitives::ordering::Direction;

// ============================================================================
// Constants
// ============================================================================

/// Default pending-buffer capacity.
pub const DEFAULT_CHUNK_CAPACITY: usize = 4096;

// ============================================================================
// Chunked Sorter Builder
// ============================================================================

/// Builder for the chunked sorter.
#[derive(Debug, Clone)]
pub struct ChunkedSorterBuilder {
    /// Pending-buffer size that triggers a seal
    pub chunk_capacity: usize,

    /// Direction of the sorted output
    pub direction: Direction,

    /// Whether to attach work metrics to the result
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

impl Default for ChunkedSorterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkedSorterBuilder {
    /// Create a new chunked sorter builder with default parameters.
    fn new() -> Self {
        Self {
            chunk_capacity: DEFAULT_CHUNK_CAPACITY,
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

    /// Set the pending-buffer capacity.
    pub fn chunk_capacity(mut self, capacity: usize) -> Self {
        self.chunk_capacity = capacity;
        self
    }

    /// Set the direction of the sorted output.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Enable attaching work metrics to the result.
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

    /// Build the chunked sorter.
    ///
    /// The element type binds here; it is usually inferred from later
    /// `push` calls.
    pub fn build<T: Ord>(self) -> Result<ChunkedSorter<T>, MergesortError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate chunk capacity
        Validator::validate_chunk_capacity(self.chunk_capacity)?;

        let buffer = ChunkedBuffer::with_capacity(self.chunk_capacity);

        // Vacuously presorted until a sealed run proves otherwise
        let mut metrics = SortMetrics::new();
        metrics.presorted = true;

        Ok(ChunkedSorter {
            config: self,
            buffer,
            metrics,
        })
    }
}

// ============================================================================
// Chunked Sorter
// ============================================================================

/// Chunked sorter: accumulates elements incrementally, sorts at `finish`.
pub struct ChunkedSorter<T> {
    config: ChunkedSorterBuilder,
    buffer: ChunkedBuffer<T>,
    metrics: SortMetrics,
}

impl<T: Ord> ChunkedSorter<T> {
    // ========================================================================
    // Accumulation
    // ========================================================================

    /// Push one element.
    ///
    /// Seals the pending buffer into a sorted run when it reaches the chunk
    /// capacity.
    pub fn push(&mut self, value: T) {
        self.buffer.push(value);
        if self.buffer.is_full() {
            self.seal_pending();
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
        self.buffer.len()
    }

    /// Whether no elements have been pushed.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Number of runs sealed so far.
    pub fn sealed_runs(&self) -> usize {
        self.buffer.run_count()
    }

    // ========================================================================
    // Completion
    // ========================================================================

    /// Seal any pending elements and fuse all runs into the sorted result.
    pub fn finish(mut self) -> MergesortResult<T> {
        self.seal_pending();

        let Self {
            config,
            buffer,
            mut metrics,
        } = self;
        let (_, runs) = buffer.into_parts();

        let direction = config.direction;
        let mut cmp = move |a: &T, b: &T| direction.apply(a.cmp(b));

        // Fuse sealed runs; any fusion work means the input as a whole
        // was not presorted
        let merges_before = metrics.merges;
        let values = merge_rounds(runs, &mut cmp, &mut metrics.comparisons, &mut metrics.merges);
        if metrics.merges > merges_before {
            metrics.presorted = false;
        }

        MergesortResult {
            values,
            direction,
            metrics: if config.collect_metrics {
                Some(metrics)
            } else {
                None
            },
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    /// Sort the pending buffer and store it as a sealed run.
    fn seal_pending(&mut self) {
        if self.buffer.pending_len() == 0 {
            return;
        }

        let pending = self.buffer.take_pending();
        let config = SortConfig {
            direction: self.config.direction,
        };
        let output = SortExecutor::run_with_config(pending, &config);

        self.metrics.absorb(&output.metrics);
        self.buffer.store_run(output.sorted);
    }
}
