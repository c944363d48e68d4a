//! Layer 2: Algorithms
//!
//! This layer implements the core logic of merge sorting: midpoint splitting,
//! the stable two-way merge, and pairwise fusion of sorted runs. It contains
//! the "business logic" of the sort but is orchestrated by the engine layer.

// Midpoint splitting for the recursive descent.
pub mod split;

// Stable two-way merge and run fusion.
pub mod merge;
