//! High-level API for merge sorting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for the sort
//! engine. It implements a fluent builder pattern for configuring sort
//! parameters and choosing an execution adapter (Batch or Chunked).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Core parameters are validated during adapter construction.
//! * **Type-Safe**: Element types are chosen per call, not per builder.
//!
//! ## Key concepts
//!
//! * **Execution Adapters**: Batch and Chunked modes.
//! * **Configuration Flow**: Builder pattern ending in `.adapter(Adapter::Type)`.
//! * **Validation**: Parameters are validated when `.build()` is called on the adapter.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`MergesortBuilder`] via `Mergesort::new()`.
//! 2. Chain configuration methods (`.direction()`, `.collect_metrics()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.

// Internal dependencies
use crate::adapters::batch::BatchSorterBuilder;
use crate::adapters::chunked::ChunkedSorterBuilder;

// Publicly re-exported types
pub use crate::engine::output::MergesortResult;
pub use crate::evaluation::metrics::SortMetrics;
pub use crate::primitives::errors::MergesortError;
pub use crate::primitives::ordering::Direction;

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Chunked};
}

/// Fluent builder for configuring sort parameters and execution modes.
#[derive(Debug, Clone)]
pub struct MergesortBuilder {
    /// Sort direction (default: Ascending).
    pub direction: Option<Direction>,

    /// Attach instrumentation counters to results.
    pub collect_metrics: Option<bool>,

    /// Run capacity for chunked ingestion (Chunked only).
    pub chunk_capacity: Option<usize>,

    /// Parallel execution hint.
    #[doc(hidden)]
    pub parallel: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Default for MergesortBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MergesortBuilder {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: MergesortAdapter,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            direction: None,
            collect_metrics: None,
            chunk_capacity: None,
            parallel: None,
            duplicate_param: None,
        }
    }

    /// Set the sort direction.
    pub fn direction(mut self, direction: Direction) -> Self {
        if self.direction.is_some() {
            self.duplicate_param = Some("direction");
        }
        self.direction = Some(direction);
        self
    }

    /// Set the run capacity for chunked ingestion (Chunked only).
    pub fn chunk_capacity(mut self, capacity: usize) -> Self {
        if self.chunk_capacity.is_some() {
            self.duplicate_param = Some("chunk_capacity");
        }
        self.chunk_capacity = Some(capacity);
        self
    }

    /// Include comparison and merge counters in output.
    pub fn collect_metrics(mut self) -> Self {
        self.collect_metrics = Some(true);
        self
    }

    /// Set parallel execution hint (only for dev)
    #[doc(hidden)]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait MergesortAdapter {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`MergesortBuilder`] into a specialized execution builder.
    fn convert(builder: MergesortBuilder) -> Self::Output;
}

/// Marker for in-memory batch sorting.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl MergesortAdapter for Batch {
    type Output = BatchSorterBuilder;

    fn convert(builder: MergesortBuilder) -> Self::Output {
        let mut result = BatchSorterBuilder::default();

        if let Some(direction) = builder.direction {
            result.direction = direction;
        }
        if let Some(cm) = builder.collect_metrics {
            result.collect_metrics = cm;
        }
        if builder.chunk_capacity.is_some() {
            result.deferred_error = Some(MergesortError::UnsupportedParameter {
                adapter: "Batch",
                parameter: "chunk_capacity",
            });
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for incremental chunked sorting.
#[derive(Debug, Clone, Copy)]
pub struct Chunked;

impl MergesortAdapter for Chunked {
    type Output = ChunkedSorterBuilder;

    fn convert(builder: MergesortBuilder) -> Self::Output {
        let mut result = ChunkedSorterBuilder::default();

        // Override with user-provided values
        if let Some(capacity) = builder.chunk_capacity {
            result.chunk_capacity = capacity;
        }
        if let Some(direction) = builder.direction {
            result.direction = direction;
        }
        if let Some(cm) = builder.collect_metrics {
            result.collect_metrics = cm;
        }

        // ======================================
        // DEV
        // ======================================
        if let Some(p) = builder.parallel {
            result.parallel = Some(p);
        }

        result.duplicate_param = builder.duplicate_param;

        result
    }
}
