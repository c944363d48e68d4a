//! Output types and result structures for sort operations.
//!
//! ## Purpose
//!
//! This module defines the `MergesortResult` struct which encapsulates the
//! output of a sort: the sorted sequence, the direction it was sorted under,
//! and optionally the work metrics.
//!
//! ## Design notes
//!
//! * **Memory Efficiency**: The result owns the sorted sequence; no copy of
//!   the input is retained.
//! * **Optional Outputs**: Metrics are only populated when requested.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Key concepts
//!
//! * **Values**: The sorted sequence, a permutation of the input.
//! * **Metrics**: Comparison/merge/depth counters, present only when the
//!   builder requested them.
//!
//! ## Invariants
//!
//! * `values.len()` equals the input length.
//! * Adjacent values never compare `Greater` under the active comparator.
//!
//! ## Non-goals
//!
//! * This module does not perform sorting; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::evaluation::metrics::SortMetrics;
use crate::primitives::ordering::Direction;

// ============================================================================
// Result Structure
// ============================================================================

/// Output of a sort: the sorted sequence plus optional work metrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergesortResult<T> {
    /// The sorted sequence.
    pub values: Vec<T>,

    /// Direction the sequence was sorted under.
    pub direction: Direction,

    /// Work metrics, present when the builder requested them.
    pub metrics: Option<SortMetrics>,
}

impl<T> MergesortResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of elements in the sorted sequence.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sorted sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check if work metrics were collected.
    pub fn has_metrics(&self) -> bool {
        self.metrics.is_some()
    }

    /// Consume the result, yielding the sorted sequence.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Display> Display for MergesortResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Elements:  {}", self.values.len())?;
        writeln!(f, "  Direction: {}", self.direction.name())?;
        writeln!(f)?;

        if let Some(metrics) = &self.metrics {
            writeln!(f, "{}", metrics)?;
        }

        writeln!(f, "Sorted Data:")?;

        // Data rows (show first 10 and last 10 if more than 20 elements)
        let n = self.values.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            // Add ellipsis if we skipped rows
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "  {:>8}", "...")?;
            }
            prev_idx = idx;

            writeln!(f, "  [{:>6}] {:>12}", idx, self.values[idx])?;
        }

        Ok(())
    }
}
