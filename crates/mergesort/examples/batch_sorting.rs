//! Comprehensive Batch Sorting Examples
//!
//! This example demonstrates various sorting scenarios:
//! - Basic sorting with minimal configuration
//! - Descending order
//! - Instrumentation with sort metrics
//! - Stable sorting of keyed records
//! - Custom comparators and key extraction
//! - Total ordering of floats with NaN values
//! - Incremental ingestion with the Chunked adapter
//!
//! Each scenario includes the expected output as comments.

#[cfg(feature = "std")]
use mergesort::prelude::*;
#[cfg(feature = "std")]
use std::time::Instant;

#[cfg(feature = "std")]
fn main() -> Result<(), MergesortError> {
    println!("{}", "=".repeat(80));
    println!("Merge Sort Engine - Comprehensive Examples");
    println!("{}", "=".repeat(80));
    println!();

    // Run all example scenarios
    example_1_basic_sorting()?;
    example_2_descending_order()?;
    example_3_sort_metrics()?;
    example_4_stable_records()?;
    example_5_custom_comparators()?;
    example_6_floats_with_nan()?;
    example_7_chunked_ingestion()?;
    example_8_benchmark()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Basic Sorting
/// Demonstrates the simplest usage with minimal configuration
fn example_1_basic_sorting() -> Result<(), MergesortError> {
    println!("Example 1: Basic Sorting");
    println!("{}", "-".repeat(80));

    let sorter = Mergesort::new().adapter(Batch).build()?;

    let data = [4, 2, 7, 1, 0];
    let result = sorter.sort(&data);
    println!("{}", result);

    // The input slice is never touched
    assert_eq!(data, [4, 2, 7, 1, 0]);

    /* Expected Output:
    Summary:
      Elements:  5
      Direction: Ascending

    Sorted Data:
      [     0]            0
      [     1]            1
      [     2]            2
      [     3]            4
      [     4]            7
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Descending Order
/// The same stable merge, largest element first
fn example_2_descending_order() -> Result<(), MergesortError> {
    println!("Example 2: Descending Order");
    println!("{}", "-".repeat(80));

    let sorter = Mergesort::new().direction(Descending).adapter(Batch).build()?;

    let result = sorter.sort(&[2, 9, 4, 7]);
    println!("Descending: {:?}", result.values);

    /* Expected Output:
    Descending: [9, 7, 4, 2]
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Sort Metrics
/// Instrumentation counters for comparisons, merges, and recursion depth
fn example_3_sort_metrics() -> Result<(), MergesortError> {
    println!("Example 3: Sort Metrics");
    println!("{}", "-".repeat(80));

    let sorter = Mergesort::new().collect_metrics().adapter(Batch).build()?;

    let result = sorter.sort(&[3, 1, 4, 1, 5, 9, 2, 6]);
    println!("{}", result);

    // Already-sorted input is detected in a single scan
    let presorted = sorter.sort(&[1, 2, 3, 4, 5]);
    if let Some(metrics) = &presorted.metrics {
        println!("Presorted input: {} comparisons, {} merges", metrics.comparisons, metrics.merges);
    }

    /* Expected Output:
    Summary:
      Elements:  8
      Direction: Ascending

    Sort Metrics:
      Comparisons: 16
      Merges:      7
      Max depth:   3
      Presorted:   false

    Sorted Data:
      [     0]            1
      [     1]            1
      [     2]            2
      [     3]            3
      [     4]            4
      [     5]            5
      [     6]            6
      [     7]            9

    Presorted input: 4 comparisons, 0 merges
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Stable Sorting of Keyed Records
/// Equal keys keep their input order
fn example_4_stable_records() -> Result<(), MergesortError> {
    println!("Example 4: Stable Sorting of Keyed Records");
    println!("{}", "-".repeat(80));

    // (priority, label) pairs with duplicate priorities
    let records = [(5, 'a'), (3, 'b'), (5, 'c'), (3, 'd'), (1, 'e')];

    let sorter = Mergesort::new().adapter(Batch).build()?;
    let result = sorter.sort_by_key(&records, |r| r.0);

    for (priority, label) in &result.values {
        println!("  priority {} label {}", priority, label);
    }

    /* Expected Output:
      priority 1 label e
      priority 3 label b
      priority 3 label d
      priority 5 label a
      priority 5 label c
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 5: Custom Comparators
/// Sort by an arbitrary order via sort_by
fn example_5_custom_comparators() -> Result<(), MergesortError> {
    println!("Example 5: Custom Comparators");
    println!("{}", "-".repeat(80));

    let words = ["plum", "fig", "banana", "kiwi"];

    let sorter = Mergesort::new().adapter(Batch).build()?;

    // Order by word length; ties keep input order ("plum" before "kiwi")
    let result = sorter.sort_by(&words, |a, b| a.len().cmp(&b.len()));
    println!("By length: {:?}", result.values);

    /* Expected Output:
    By length: ["fig", "plum", "kiwi", "banana"]
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 6: Floats with NaN
/// sort_floats applies a total order in which NaN sorts last
fn example_6_floats_with_nan() -> Result<(), MergesortError> {
    println!("Example 6: Floats with NaN");
    println!("{}", "-".repeat(80));

    let samples = [2.5, f64::NAN, 0.5, 1.5];

    let sorter = Mergesort::new().adapter(Batch).build()?;
    let result = sorter.sort_floats(&samples);
    println!("Total order: {:?}", result.values);

    /* Expected Output:
    Total order: [0.5, 1.5, 2.5, NaN]
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 7: Chunked Ingestion
/// Feed elements incrementally, sort runs as they fill, merge at the end
fn example_7_chunked_ingestion() -> Result<(), MergesortError> {
    println!("Example 7: Chunked Ingestion");
    println!("{}", "-".repeat(80));

    let mut sorter = Mergesort::new()
        .chunk_capacity(256)
        .collect_metrics()
        .adapter(Chunked)
        .build()?;

    // Stream 1000 elements in reverse order
    sorter.extend((0..1000).rev());
    println!("Sealed runs before finish: {}", sorter.sealed_runs());

    let result = sorter.finish();
    println!("Sorted {} elements", result.len());
    println!(
        "First: {:?}, Last: {:?}",
        result.values.first(),
        result.values.last()
    );

    /* Expected Output:
    Sealed runs before finish: 3
    Sorted 1000 elements
    First: Some(0), Last: Some(999)
    */

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 8: Benchmark (Sequential Batch)
/// Measure execution time for a large dataset using the sequential Batch adapter
fn example_8_benchmark() -> Result<(), MergesortError> {
    println!("Example 8: Benchmark (Sequential Batch)");
    println!("{}", "-".repeat(80));

    // Generate a larger synthetic dataset
    let n = 100_000;
    let data: Vec<i64> = (0..n).map(|i| (i * 2_654_435_761) % 1_000_003).collect();

    let sorter = Mergesort::new().adapter(Batch).build()?;

    let start = Instant::now();
    let result = sorter.sort_vec(data);
    let duration = start.elapsed();

    println!("Processed {} elements in {:?}", n, duration);
    println!("Execution mode: Sequential Batch");
    println!(
        "First: {:?}, Last: {:?}",
        result.values.first(),
        result.values.last()
    );

    println!();
    Ok(())
}
