//! Layer 6: Adapters
//!
//! This layer provides user-facing APIs that adapt the parallel engine for
//! different execution modes:
//!
//! - **Batch**: Whole-sequence sorting with parallel recursion
//! - **Chunked**: Incremental ingestion with parallel run sorting and fusion

// Parallel batch adapter for whole-sequence sorting.
pub mod batch;

// Parallel chunked adapter for incremental sorting.
pub mod chunked;
