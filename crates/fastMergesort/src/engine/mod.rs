//! Layer 5: Engine
//!
//! This layer provides the parallel execution engine for sort operations.
//! It distributes the recursive descent and run fusion across CPU cores.

// Parallel execution engine using CPU threads
pub mod executor;
