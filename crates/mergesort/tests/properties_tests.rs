#![cfg(feature = "dev")]
//! Property-based tests for the sort engine.
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;

use mergesort::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn int_sequences() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..200)
}

fn tagged_sequences() -> impl Strategy<Value = Vec<(u8, usize)>> {
    // Small key space forces plenty of ties; the payload records input position
    prop::collection::vec(0u8..8, 0..100)
        .prop_map(|keys| keys.into_iter().zip(0..).map(|(k, i)| (k, i)).collect())
}

fn float_sequences() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        prop_oneof![4 => any::<f64>(), 1 => Just(f64::NAN)],
        0..100,
    )
}

// =============================================================================
// Ordering Properties
// =============================================================================

proptest! {
    /// Property: Output matches the standard library's stable sort exactly
    #[test]
    fn sort_matches_std_oracle(data in int_sequences()) {
        let sorter = Mergesort::new().adapter(Batch).build().unwrap();
        let result = sorter.sort(&data);

        let mut expected = data.clone();
        expected.sort();

        prop_assert_eq!(result.values, expected);
    }

    /// Property: Descending output matches a reversed-comparator stable sort
    #[test]
    fn descending_matches_std_oracle(data in int_sequences()) {
        let sorter = Mergesort::new()
            .direction(Descending)
            .adapter(Batch)
            .build()
            .unwrap();
        let result = sorter.sort(&data);

        let mut expected = data.clone();
        expected.sort_by(|a, b| b.cmp(a));

        prop_assert_eq!(result.values, expected);
    }

    /// Property: The input is never mutated
    #[test]
    fn sort_leaves_input_untouched(data in int_sequences()) {
        let snapshot = data.clone();
        let sorter = Mergesort::new().adapter(Batch).build().unwrap();
        let _ = sorter.sort(&data);

        prop_assert_eq!(data, snapshot);
    }

    /// Property: Sorting is idempotent
    #[test]
    fn sort_is_idempotent(data in int_sequences()) {
        let sorter = Mergesort::new().adapter(Batch).build().unwrap();

        let once = sorter.sort(&data);
        let twice = sorter.sort(&once.values);

        prop_assert_eq!(once.values, twice.values);
    }

    /// Property: Output is a permutation of the input
    #[test]
    fn sort_is_a_permutation(data in prop::collection::vec(any::<u8>(), 0..200)) {
        let sorter = Mergesort::new().adapter(Batch).build().unwrap();
        let result = sorter.sort(&data);

        let mut input_counts = [0usize; 256];
        for &v in &data {
            input_counts[v as usize] += 1;
        }
        let mut output_counts = [0usize; 256];
        for &v in &result.values {
            output_counts[v as usize] += 1;
        }

        prop_assert_eq!(input_counts.as_slice(), output_counts.as_slice());
    }
}

// =============================================================================
// Stability Properties
// =============================================================================

proptest! {
    /// Property: Equal keys keep their input order
    #[test]
    fn sort_by_key_is_stable(records in tagged_sequences()) {
        let sorter = Mergesort::new().adapter(Batch).build().unwrap();
        let result = sorter.sort_by_key(&records, |r| r.0);

        // std's sort_by_key is stable, so exact equality covers tie order
        let mut expected = records.clone();
        expected.sort_by_key(|r| r.0);

        prop_assert_eq!(result.values, expected);
    }

    /// Property: Positions within every key class are increasing
    #[test]
    fn tie_positions_increase(records in tagged_sequences()) {
        let sorter = Mergesort::new().adapter(Batch).build().unwrap();
        let result = sorter.sort_by_key(&records, |r| r.0);

        for pair in result.values.windows(2) {
            if pair[0].0 == pair[1].0 {
                prop_assert!(
                    pair[0].1 < pair[1].1,
                    "Equal keys must keep input order: {:?}",
                    pair
                );
            }
        }
    }
}

// =============================================================================
// Mode Equivalence Properties
// =============================================================================

proptest! {
    /// Property: Chunked mode matches batch mode for any capacity
    #[test]
    fn chunked_matches_batch(data in int_sequences(), capacity in 1usize..64) {
        let batch = Mergesort::new().adapter(Batch).build().unwrap().sort(&data);

        let mut chunked = Mergesort::new()
            .chunk_capacity(capacity)
            .adapter(Chunked)
            .build()
            .unwrap();
        chunked.push_slice(&data);
        let streamed = chunked.finish();

        prop_assert_eq!(streamed.values, batch.values);
    }
}

// =============================================================================
// Float Ordering Properties
// =============================================================================

proptest! {
    /// Property: sort_floats yields a non-decreasing prefix with NaNs at the end
    #[test]
    fn sort_floats_total_order(data in float_sequences()) {
        let sorter = Mergesort::new().adapter(Batch).build().unwrap();
        let result = sorter.sort_floats(&data);

        prop_assert_eq!(result.values.len(), data.len());

        // All NaNs form a suffix
        let first_nan = result
            .values
            .iter()
            .position(|v| v.is_nan())
            .unwrap_or(result.values.len());
        prop_assert!(result.values[first_nan..].iter().all(|v| v.is_nan()));

        // The non-NaN prefix is non-decreasing
        prop_assert!(result.values[..first_nan].windows(2).all(|w| w[0] <= w[1]));
    }
}
