//! Layer 3: Evaluation
//!
//! # Purpose
//!
//! This layer accounts for the work a sort performs. It defines the metrics
//! accumulated by the engine (comparisons, merges, recursion depth) and how
//! counts from independent sub-sorts combine.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Work metrics for sort execution.
pub mod metrics;
