//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the sort by coordinating between primitives
//! (ordering, errors) and algorithms (split, merge). It drives the recursive
//! descent, maintains the work metrics, and defines the public result type.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Unified execution engine for sorting.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for sort operations.
pub mod output;
