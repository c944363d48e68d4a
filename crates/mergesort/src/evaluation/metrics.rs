//! Work metrics for sort execution.
//!
//! ## Purpose
//!
//! This module provides the counters the engine maintains while sorting:
//! element comparisons, two-way merges, and the deepest recursion level
//! reached. Metrics make the O(n log n) contract observable and give the
//! parallel and chunked execution modes a common accounting currency.
//!
//! ## Design notes
//!
//! * **Always counted**: The engine counts unconditionally; whether metrics
//!   appear in the result is decided by the adapter.
//! * **Composable**: Independent sub-sorts (chunked runs, parallel halves)
//!   produce independent metrics that `absorb` combines: counts add, depths
//!   take the maximum.
//! * **Saturating semantics-free**: Counters are `u64`; no realistic input
//!   overflows them.
//!
//! ## Key concepts
//!
//! * **Comparisons**: One per head-to-head element comparison, including the
//!   presorted scan.
//! * **Merges**: One per two-way merge performed.
//! * **Max depth**: Deepest recursion level, with the root at depth 0.
//! * **Presorted**: Whether the fast-path scan found no inversion and the
//!   recursion was skipped entirely.
//!
//! ## Invariants
//!
//! * A recursive sort of `n >= 2` elements performs exactly `n - 1` merges.
//! * `max_depth` is 0 whenever the input was presorted or had length <= 1.
//! * `absorb` is commutative in the counts and monotone in the depth.
//!
//! ## Non-goals
//!
//! * This module does not measure wall-clock time or allocations.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Metrics Structure
// ============================================================================

/// Work performed by one sort execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortMetrics {
    /// Number of element comparisons performed.
    pub comparisons: u64,

    /// Number of two-way merges performed.
    pub merges: u64,

    /// Deepest recursion level reached (root = 0).
    pub max_depth: usize,

    /// Whether the input was already sorted and the recursion was skipped.
    pub presorted: bool,
}

impl SortMetrics {
    /// Create a zeroed metrics record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the metrics of an independent sub-sort into this record.
    ///
    /// Counts add up; the recursion depth takes the maximum. The combined
    /// record is presorted only if both parts were.
    pub fn absorb(&mut self, other: &SortMetrics) {
        self.comparisons += other.comparisons;
        self.merges += other.merges;
        self.max_depth = self.max_depth.max(other.max_depth);
        self.presorted = self.presorted && other.presorted;
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortMetrics {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Sort Metrics:")?;
        writeln!(f, "  Comparisons: {}", self.comparisons)?;
        writeln!(f, "  Merges:      {}", self.merges)?;
        writeln!(f, "  Max depth:   {}", self.max_depth)?;
        writeln!(f, "  Presorted:   {}", self.presorted)?;
        Ok(())
    }
}
