//! Comparison direction and ordering utilities.
//!
//! ## Purpose
//!
//! This module defines the sort direction and the comparators built on top of
//! it, including a total order over IEEE floating-point values.
//!
//! ## Design notes
//!
//! * **Direction as a transform**: `Direction` post-processes an `Ordering`
//!   rather than swapping comparator arguments, so equal elements stay equal
//!   and stability is preserved in both directions.
//! * **Float totality**: `partial_cmp` is undefined for NaN; the float
//!   comparator treats every NaN as greater than every non-NaN value and NaNs
//!   as mutually equal, which makes the order total.
//!
//! ## Key concepts
//!
//! * **Ascending**: The default; output is non-decreasing under the comparator.
//! * **Descending**: The exact reverse of the ascending order for the same input.
//!
//! ## Invariants
//!
//! * `Direction::apply` maps `Equal` to `Equal` in both directions.
//! * `total_float_cmp` is a total order: antisymmetric, transitive, total.
//! * Finite values and infinities compare via `partial_cmp`; NaN sorts after
//!   all of them.
//!
//! ## Non-goals
//!
//! * This module does not perform any sorting itself.

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Direction Enum
// ============================================================================

/// Direction of the sorted output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Smallest elements first. This is the default.
    #[default]
    Ascending,

    /// Largest elements first; the exact reverse of `Ascending`.
    Descending,
}

impl Direction {
    /// Get the name of the direction.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Direction::Ascending => "Ascending",
            Direction::Descending => "Descending",
        }
    }

    /// Transform an ascending comparison into this direction.
    ///
    /// `Equal` stays `Equal`, so ties are still resolved by input position
    /// and stability carries over to descending sorts.
    #[inline]
    pub const fn apply(&self, ord: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }
}

// ============================================================================
// Float Comparison
// ============================================================================

/// Compare two floating-point values under a total order.
///
/// Ordinary values (finite and infinite) compare via `partial_cmp`. Every
/// NaN compares greater than every non-NaN value, so NaNs collect at the end
/// of an ascending sort; NaNs compare equal to each other, so stability
/// preserves their relative input order.
#[inline]
pub fn total_float_cmp<T: Float>(a: &T, b: &T) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}
