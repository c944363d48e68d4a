//! Combined Visualization Data for Sorting
//!
//! This script runs multiple scenarios to generate CSV data for visualization.
//! It covers:
//! 1. Complexity Growth (comparisons and merges against n log n)
//! 2. Pattern Comparison (work per input shape)
//! 3. Cutoff Sweep (wall time per sequential cutoff)
//! 4. Serial vs Parallel Scaling (wall time per input size)
//! 5. Chunk Capacity Sweep (chunked ingestion behavior)

use fastMergesort::prelude::*;
use rand::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Running All Visualization Examples...");
    println!("=====================================");
    println!();

    // Ensure output directory exists
    let output_dir = "../output/visual/";
    std::fs::create_dir_all(output_dir)?;
    println!("Output directory: {}", output_dir);
    println!();

    run_complexity_growth()?;
    println!();

    run_pattern_comparison()?;
    println!();

    run_cutoff_sweep()?;
    println!();

    run_serial_parallel_scaling()?;
    println!();

    run_chunk_capacity_sweep()?;
    println!();

    println!("All examples completed successfully.");
    Ok(())
}

/// Deterministic random dataset shared by the scenarios.
fn random_data(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(-1_000_000..1_000_000)).collect()
}

/// 1. Complexity Growth
fn run_complexity_growth() -> Result<(), Box<dyn std::error::Error>> {
    println!("1. Complexity Growth");
    println!("--------------------");

    let path = "../output/visual/complexity_growth.csv";
    let mut file = File::create(path)?;
    writeln!(file, "n,comparisons,merges,max_depth,n_log2_n")?;

    for exp in 6..=16 {
        let n = 1usize << exp;
        let data = random_data(n, 42);

        let result = Mergesort::new()
            .collect_metrics()
            .adapter(Batch)
            .build()
            .unwrap()
            .sort_vec(data);

        let metrics = result.metrics.unwrap();
        let n_log2_n = (n as f64) * (n as f64).log2();

        println!(
            "n = {:>6}: {} comparisons, {} merges, depth {}",
            n, metrics.comparisons, metrics.merges, metrics.max_depth
        );
        writeln!(
            file,
            "{},{},{},{},{:.0}",
            n, metrics.comparisons, metrics.merges, metrics.max_depth, n_log2_n
        )?;
    }
    println!("Results exported to {}", path);

    Ok(())
}

/// 2. Pattern Comparison
fn run_pattern_comparison() -> Result<(), Box<dyn std::error::Error>> {
    println!("2. Pattern Comparison");
    println!("---------------------");

    let n = 65_536;
    let mut rng = StdRng::seed_from_u64(7);

    let patterns: [(&str, Vec<i64>); 5] = [
        ("random", random_data(n, 7)),
        ("sorted", (0..n as i64).collect()),
        ("reverse", (0..n as i64).rev().collect()),
        ("sawtooth", (0..n).map(|i| (i % 64) as i64).collect()),
        ("ties", (0..n).map(|_| rng.random_range(0..8)).collect()),
    ];

    let path = "../output/visual/pattern_comparison.csv";
    let mut file = File::create(path)?;
    writeln!(file, "pattern,comparisons,merges,max_depth,presorted")?;

    for (name, data) in patterns {
        let result = Mergesort::new()
            .collect_metrics()
            .adapter(Batch)
            .build()
            .unwrap()
            .sort_vec(data);

        let metrics = result.metrics.unwrap();
        println!(
            "{:>13}: {} comparisons, {} merges, presorted {}",
            name, metrics.comparisons, metrics.merges, metrics.presorted
        );
        writeln!(
            file,
            "{},{},{},{},{}",
            name, metrics.comparisons, metrics.merges, metrics.max_depth, metrics.presorted
        )?;
    }
    println!("Results exported to {}", path);

    Ok(())
}

/// 3. Cutoff Sweep
fn run_cutoff_sweep() -> Result<(), Box<dyn std::error::Error>> {
    println!("3. Cutoff Sweep");
    println!("---------------");

    let n = 1 << 20;
    let data = random_data(n, 11);

    let path = "../output/visual/cutoff_sweep.csv";
    let mut file = File::create(path)?;
    writeln!(file, "cutoff,millis")?;

    for exp in [6, 8, 10, 12, 14, 16] {
        let cutoff = 1usize << exp;
        let sorter = Mergesort::new()
            .adapter(Batch)
            .sequential_cutoff(cutoff)
            .build()
            .unwrap();

        let start = Instant::now();
        let result = sorter.sort_vec(data.clone());
        let millis = start.elapsed().as_secs_f64() * 1_000.0;

        println!("cutoff {:>6}: {:.2} ms ({} elements)", cutoff, millis, result.len());
        writeln!(file, "{},{:.3}", cutoff, millis)?;
    }
    println!("Results exported to {}", path);

    Ok(())
}

/// 4. Serial vs Parallel Scaling
fn run_serial_parallel_scaling() -> Result<(), Box<dyn std::error::Error>> {
    println!("4. Serial vs Parallel Scaling");
    println!("-----------------------------");

    let path = "../output/visual/serial_parallel_scaling.csv";
    let mut file = File::create(path)?;
    writeln!(file, "n,serial_millis,parallel_millis,identical")?;

    for exp in [14, 16, 18, 20] {
        let n = 1usize << exp;
        let data = random_data(n, 13);

        let serial_sorter = Mergesort::new().adapter(Batch).parallel(false).build().unwrap();
        let start = Instant::now();
        let serial = serial_sorter.sort_vec(data.clone());
        let serial_millis = start.elapsed().as_secs_f64() * 1_000.0;

        let parallel_sorter = Mergesort::new().adapter(Batch).build().unwrap();
        let start = Instant::now();
        let parallel = parallel_sorter.sort_vec(data);
        let parallel_millis = start.elapsed().as_secs_f64() * 1_000.0;

        let identical = serial.values == parallel.values;
        println!(
            "n = {:>8}: serial {:.2} ms, parallel {:.2} ms, identical {}",
            n, serial_millis, parallel_millis, identical
        );
        writeln!(
            file,
            "{},{:.3},{:.3},{}",
            n, serial_millis, parallel_millis, identical
        )?;
    }
    println!("Results exported to {}", path);

    Ok(())
}

/// 5. Chunk Capacity Sweep
fn run_chunk_capacity_sweep() -> Result<(), Box<dyn std::error::Error>> {
    println!("5. Chunk Capacity Sweep");
    println!("-----------------------");

    let n = 1 << 19;
    let data = random_data(n, 17);

    let path = "../output/visual/chunk_capacity_sweep.csv";
    let mut file = File::create(path)?;
    writeln!(file, "capacity,chunks,merges,millis")?;

    for exp in [10, 12, 14, 16] {
        let capacity = 1usize << exp;
        let mut sorter = Mergesort::new()
            .chunk_capacity(capacity)
            .collect_metrics()
            .adapter(Chunked)
            .build()
            .unwrap();

        sorter.extend(data.iter().cloned());
        let chunks = sorter.sealed_runs();

        let start = Instant::now();
        let result = sorter.finish();
        let millis = start.elapsed().as_secs_f64() * 1_000.0;

        let metrics = result.metrics.unwrap();
        println!(
            "capacity {:>6}: {} chunks, {} merges, {:.2} ms",
            capacity, chunks, metrics.merges, millis
        );
        writeln!(file, "{},{},{},{:.3}", capacity, chunks, metrics.merges, millis)?;
    }
    println!("Results exported to {}", path);

    Ok(())
}
