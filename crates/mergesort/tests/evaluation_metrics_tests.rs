#![cfg(feature = "dev")]
//! Tests for sort metrics.
//!
//! These tests verify counter construction, accumulation, and formatting.
//!
//! ## Test Organization
//!
//! 1. **Construction** - new, default
//! 2. **Accumulation** - absorb combining rules
//! 3. **Formatting** - Display output

use std::fmt::Write;

use mergesort::internals::evaluation::metrics::SortMetrics;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test metric defaults.
#[test]
fn test_metrics_new() {
    let metrics = SortMetrics::new();

    assert_eq!(metrics.comparisons, 0);
    assert_eq!(metrics.merges, 0);
    assert_eq!(metrics.max_depth, 0);
    assert!(!metrics.presorted);

    assert_eq!(metrics, SortMetrics::default());
}

// ============================================================================
// Accumulation Tests
// ============================================================================

/// Test absorb combining rules.
///
/// Verifies counts add, depth takes the maximum, and presorted ANDs.
#[test]
fn test_metrics_absorb() {
    let mut total = SortMetrics {
        comparisons: 10,
        merges: 3,
        max_depth: 2,
        presorted: true,
    };
    let part = SortMetrics {
        comparisons: 5,
        merges: 2,
        max_depth: 4,
        presorted: true,
    };

    total.absorb(&part);

    assert_eq!(total.comparisons, 15);
    assert_eq!(total.merges, 5);
    assert_eq!(total.max_depth, 4);
    assert!(total.presorted);
}

/// Test absorb clears the presorted flag.
///
/// Verifies that one unsorted part clears the combined flag for good.
#[test]
fn test_metrics_absorb_presorted_flag() {
    let mut total = SortMetrics {
        presorted: true,
        ..SortMetrics::new()
    };
    let unsorted_part = SortMetrics::new();

    total.absorb(&unsorted_part);
    assert!(!total.presorted);

    // The flag never comes back
    let sorted_part = SortMetrics {
        presorted: true,
        ..SortMetrics::new()
    };
    total.absorb(&sorted_part);
    assert!(!total.presorted);
}

// ============================================================================
// Formatting Tests
// ============================================================================

/// Test SortMetrics Display formatting.
///
/// Verifies that metrics can be formatted.
#[test]
fn test_metrics_display() {
    let metrics = SortMetrics {
        comparisons: 42,
        merges: 9,
        max_depth: 5,
        presorted: false,
    };

    let mut s = String::new();
    write!(&mut s, "{}", metrics).expect("format metrics");

    assert!(s.contains("Sort Metrics"));
    assert!(s.contains("Comparisons: 42"));
    assert!(s.contains("Merges:      9"));
    assert!(s.contains("Max depth:   5"));
    assert!(s.contains("Presorted:   false"));
}
