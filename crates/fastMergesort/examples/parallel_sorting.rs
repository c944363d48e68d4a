//! Parallel Sorting Examples
//!
//! This example demonstrates parallel sorting scenarios:
//! - Basic sorting with the parallel Batch adapter
//! - Serial and parallel runs producing identical results
//! - Tuning the sequential cutoff
//! - Work metrics that match the sequential engine
//! - Concurrent chunk sorting with the Chunked adapter
//!
//! Each scenario includes the expected output as comments.

use fastMergesort::prelude::*;
use std::time::Instant;

fn main() -> Result<(), MergesortError> {
    println!("{}", "=".repeat(80));
    println!("Fast Mergesort - Parallel Examples");
    println!("{}", "=".repeat(80));
    println!();

    // Run all example scenarios
    example_1_basic_parallel()?;
    example_2_serial_vs_parallel()?;
    example_3_cutoff_tuning()?;
    example_4_identical_metrics()?;
    example_5_parallel_chunked()?;

    Ok(())
}

/// Deterministic scrambled dataset for the timing examples.
fn scrambled(n: i64) -> Vec<i64> {
    (0..n).map(|i| (i * 2_654_435_761) % 1_000_003).collect()
}

/// Example 1: Basic Parallel Sorting
/// The Batch adapter forks on the rayon pool by default
fn example_1_basic_parallel() -> Result<(), MergesortError> {
    println!("Example 1: Basic Parallel Sorting");
    println!("{}", "-".repeat(80));

    let sorter = Mergesort::new().adapter(Batch).build()?;

    let result = sorter.sort(&[4, 2, 7, 1, 0]);
    println!("{}", result);

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

/// Example 2: Serial vs Parallel
/// Same input, same output; only the wall-clock time differs
fn example_2_serial_vs_parallel() -> Result<(), MergesortError> {
    println!("Example 2: Serial vs Parallel");
    println!("{}", "-".repeat(80));

    let n = 1_000_000;
    let data = scrambled(n);

    let serial_sorter = Mergesort::new().adapter(Batch).parallel(false).build()?;
    let start = Instant::now();
    let serial = serial_sorter.sort_vec(data.clone());
    let serial_time = start.elapsed();

    let parallel_sorter = Mergesort::new().adapter(Batch).build()?;
    let start = Instant::now();
    let parallel = parallel_sorter.sort_vec(data);
    let parallel_time = start.elapsed();

    println!("Serial:   {} elements in {:?}", n, serial_time);
    println!("Parallel: {} elements in {:?}", n, parallel_time);
    println!("Identical output: {}", serial.values == parallel.values);

    /* Expected Output (times vary):
    Serial:   1000000 elements in 245ms
    Parallel: 1000000 elements in 78ms
    Identical output: true
    */

    println!();
    Ok(())
}

/// Example 3: Cutoff Tuning
/// Halves at or below the cutoff sort on the calling thread
fn example_3_cutoff_tuning() -> Result<(), MergesortError> {
    println!("Example 3: Cutoff Tuning");
    println!("{}", "-".repeat(80));

    let data = scrambled(500_000);

    for cutoff in [1_024, 16_384, 131_072] {
        let sorter = Mergesort::new()
            .adapter(Batch)
            .sequential_cutoff(cutoff)
            .build()?;

        let start = Instant::now();
        let result = sorter.sort_vec(data.clone());
        println!(
            "Cutoff {:>7}: {:?} ({} elements)",
            cutoff,
            start.elapsed(),
            result.len()
        );
    }

    /* Expected Output (times vary):
    Cutoff    1024: 52ms (500000 elements)
    Cutoff   16384: 48ms (500000 elements)
    Cutoff  131072: 61ms (500000 elements)
    */

    println!();
    Ok(())
}

/// Example 4: Identical Metrics
/// The parallel descent reports exactly the sequential counters
fn example_4_identical_metrics() -> Result<(), MergesortError> {
    println!("Example 4: Identical Metrics");
    println!("{}", "-".repeat(80));

    let data = scrambled(10_000);

    let serial = Mergesort::new()
        .collect_metrics()
        .adapter(Batch)
        .parallel(false)
        .build()?
        .sort_vec(data.clone());

    let parallel = Mergesort::new()
        .collect_metrics()
        .adapter(Batch)
        .sequential_cutoff(512)
        .build()?
        .sort_vec(data);

    if let (Some(s), Some(p)) = (&serial.metrics, &parallel.metrics) {
        println!("Serial:   {} merges, depth {}", s.merges, s.max_depth);
        println!("Parallel: {} merges, depth {}", p.merges, p.max_depth);
        println!("Identical metrics: {}", s == p);
    }

    /* Expected Output:
    Serial:   9999 merges, depth 14
    Parallel: 9999 merges, depth 14
    Identical metrics: true
    */

    println!();
    Ok(())
}

/// Example 5: Parallel Chunked Ingestion
/// Chunks are captured raw during ingestion and sorted concurrently at finish
fn example_5_parallel_chunked() -> Result<(), MergesortError> {
    println!("Example 5: Parallel Chunked Ingestion");
    println!("{}", "-".repeat(80));

    let mut sorter = Mergesort::new()
        .chunk_capacity(65_536)
        .adapter(Chunked)
        .build()?;

    // Stream elements in reverse order
    sorter.extend((0..500_000).rev());
    println!("Captured chunks before finish: {}", sorter.sealed_runs());

    let start = Instant::now();
    let result = sorter.finish();
    println!("Finished in {:?}", start.elapsed());
    println!(
        "First: {:?}, Last: {:?}",
        result.values.first(),
        result.values.last()
    );

    /* Expected Output (time varies):
    Captured chunks before finish: 7
    Finished in 31ms
    First: Some(0), Last: Some(499999)
    */

    println!();
    Ok(())
}
