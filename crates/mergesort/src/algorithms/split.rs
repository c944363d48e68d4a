//! Midpoint splitting for the recursive descent.
//!
//! ## Purpose
//!
//! This module provides the partitioning step of the sort: dividing an owned
//! sequence into two independently owned halves at the midpoint.
//!
//! ## Design notes
//!
//! * **Floor midpoint**: The left half holds `floor(n/2)` elements, the right
//!   half the rest, so the right half is never smaller than the left.
//! * **Ownership transfer**: `Vec::split_off` moves the tail into a new
//!   allocation; elements themselves are moved, never cloned.
//!
//! ## Invariants
//!
//! * Concatenating the halves in order reproduces the input exactly.
//! * For `n >= 2` both halves are non-empty, so the recursion always makes
//!   progress.
//!
//! ## Non-goals
//!
//! * This module does not compare or reorder elements.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// ============================================================================
// Splitting Functions
// ============================================================================

/// Split an owned sequence into two halves at the floor midpoint.
///
/// Returns `(left, right)` where `left` holds the first `len / 2` elements
/// and `right` the remaining `len - len / 2`.
#[inline]
pub fn split_at_midpoint<T>(mut seq: Vec<T>) -> (Vec<T>, Vec<T>) {
    let mid = seq.len() / 2;
    let right = seq.split_off(mid);
    (seq, right)
}
