//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing APIs that adapt the engine layer for
//! different execution modes and use cases:
//!
//! - **Batch**: Sort a complete sequence in one call
//! - **Chunked**: Accumulate elements incrementally, sort at the end
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Batch adapter for whole-sequence sorting.
pub mod batch;

/// Chunked adapter for incremental accumulation.
pub mod chunked;
