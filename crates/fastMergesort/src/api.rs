//! High-level API for merge sorting with parallel execution support.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for sorting with
//! multi-threaded execution. It extends the `mergesort` API with adapters
//! that drive the recursive descent on all available CPU cores.
//!
//! ## Design notes
//!
//! * **Fluent Integration**: Re-uses the base `mergesort` builder pattern.
//! * **Parallel-First**: Defaults to parallel execution where beneficial.
//! * **Transparent**: Marker types (Batch, Chunked) select the parallel builders.
//!
//! ## Key concepts
//!
//! * **Parallel Support**: Uses `rayon` for divide-and-conquer work stealing.
//! * **Extended Adapters**: Wraps base adapters with parallel execution logic.
//! * **Feature-Gated**: Parallelism is configurable via the `cpu` feature.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`MergesortBuilder`] via `Mergesort::new()`.
//! 2. Chain configuration methods (`.direction()`, `.collect_metrics()`, etc.).
//! 3. Select an adapter via `.adapter(Batch)` to get a parallel execution builder.

// Internal dependencies
use crate::adapters::batch::ParallelBatchSorterBuilder;
use crate::adapters::chunked::ParallelChunkedSorterBuilder;

// Import base marker types for delegation
use mergesort::internals::api::Batch as BaseBatch;
use mergesort::internals::api::Chunked as BaseChunked;

// Publicly re-exported types
pub use mergesort::internals::api::{MergesortAdapter, MergesortBuilder};
pub use mergesort::internals::engine::output::MergesortResult;
pub use mergesort::internals::evaluation::metrics::SortMetrics;
pub use mergesort::internals::primitives::errors::MergesortError;
pub use mergesort::internals::primitives::ordering::Direction;

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Chunked};
}

// ============================================================================
// Adapter Marker Types
// ============================================================================

/// Marker for parallel in-memory batch sorting.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl MergesortAdapter for Batch {
    type Output = ParallelBatchSorterBuilder;

    fn convert(builder: MergesortBuilder) -> Self::Output {
        // Determine parallel mode: user choice OR default to true for fastMergesort Batch
        let parallel = builder.parallel.unwrap_or(true);

        // Delegate to base implementation to create base builder
        let mut base = <BaseBatch as MergesortAdapter>::convert(builder);
        base = base.parallel(parallel);

        // Wrap with extension fields
        ParallelBatchSorterBuilder {
            base,
            sequential_cutoff: None,
        }
    }
}

/// Marker for parallel incremental chunked sorting.
#[derive(Debug, Clone, Copy)]
pub struct Chunked;

impl MergesortAdapter for Chunked {
    type Output = ParallelChunkedSorterBuilder;

    fn convert(builder: MergesortBuilder) -> Self::Output {
        // Determine parallel mode: user choice OR default to true for fastMergesort Chunked
        let parallel = builder.parallel.unwrap_or(true);

        // Delegate to base implementation to create base builder
        let mut base = <BaseChunked as MergesortAdapter>::convert(builder);
        base = base.parallel(parallel);

        // Wrap with extension fields
        ParallelChunkedSorterBuilder {
            base,
            sequential_cutoff: None,
        }
    }
}
