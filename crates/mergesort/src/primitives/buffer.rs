//! Buffer management for incremental sorting.
//!
//! ## Purpose
//!
//! This module provides the accumulation buffer backing the chunked adapter.
//! Elements arrive one at a time or in slices, collect in a pending buffer,
//! and are sealed into sorted runs once the buffer reaches its capacity.
//!
//! ## Design notes
//!
//! * **Centralized Ownership**: The buffer owns both the pending elements and
//!   every sealed run until the adapter consumes them at `finish`.
//! * **Capacity Recycling**: Sealing swaps the pending buffer for a fresh one
//!   with the same capacity, so steady-state pushes never reallocate.
//! * **Arrival Order**: Runs are stored in sealing order. The final merge
//!   relies on this to keep equal elements in their arrival order.
//!
//! ## Key concepts
//!
//! * **Pending buffer**: Unsorted elements waiting for the next seal.
//! * **Run**: A sorted chunk, produced by the engine at seal time.
//!
//! ## Invariants
//!
//! * `len()` equals the number of pushed elements not yet consumed.
//! * The pending buffer never exceeds the chunk capacity.
//! * Sealed runs are individually sorted; the buffer never reorders them.
//!
//! ## Non-goals
//!
//! * This module does not sort; sealing is driven by the adapter.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::mem;

// ============================================================================
// ChunkedBuffer - Accumulation State for the Chunked Adapter
// ============================================================================

/// Accumulation buffer for the chunked adapter.
///
/// Holds the unsorted pending elements and the sorted runs sealed so far.
#[derive(Debug, Clone)]
pub struct ChunkedBuffer<T> {
    /// Elements awaiting the next seal, in arrival order.
    pending: Vec<T>,

    /// Sorted runs sealed so far, in sealing order.
    runs: Vec<Vec<T>>,

    /// Number of elements across all sealed runs.
    sealed_len: usize,

    /// Pending buffer size that triggers a seal.
    chunk_capacity: usize,
}

impl<T> ChunkedBuffer<T> {
    /// Create a buffer that seals pending elements at `chunk_capacity`.
    pub fn with_capacity(chunk_capacity: usize) -> Self {
        Self {
            pending: Vec::with_capacity(chunk_capacity),
            runs: Vec::new(),
            sealed_len: 0,
            chunk_capacity,
        }
    }

    /// Append one element to the pending buffer.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.pending.push(value);
    }

    /// Whether the pending buffer has reached the chunk capacity.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.pending.len() >= self.chunk_capacity
    }

    /// Take the pending elements, leaving an empty buffer with the same capacity.
    #[inline]
    pub fn take_pending(&mut self) -> Vec<T> {
        mem::replace(&mut self.pending, Vec::with_capacity(self.chunk_capacity))
    }

    /// Store a sealed run. The run must already be sorted.
    #[inline]
    pub fn store_run(&mut self, run: Vec<T>) {
        self.sealed_len += run.len();
        self.runs.push(run);
    }

    /// Total number of buffered elements (pending plus sealed).
    #[inline]
    pub fn len(&self) -> usize {
        self.sealed_len + self.pending.len()
    }

    /// Whether the buffer holds no elements at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of elements in the pending buffer.
    #[inline]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Number of sealed runs.
    #[inline]
    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    /// Consume the buffer, yielding the pending elements and the sealed runs.
    pub fn into_parts(self) -> (Vec<T>, Vec<Vec<T>>) {
        (self.pending, self.runs)
    }
}
