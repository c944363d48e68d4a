//! Invariant validation against the standard library's stable sort.
//!
//! Each scenario sorts a deterministic dataset through `fastMergesort`,
//! checks the ordering/permutation/stability invariants plus the metric
//! identities, compares the values against `slice::sort` as the reference,
//! and writes one JSON report per scenario to `../output/fastMergesort/`.
//!
//! The process exits nonzero if any check fails.

use fastMergesort::internals::api::Direction;
use fastMergesort::prelude::*;
use rand::prelude::*;
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

#[derive(Debug, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    params: Params,
    result: ResultData,
}

#[derive(Debug, Serialize)]
struct Params {
    elements: usize,
    direction: String,
    parallel: bool,
    sequential_cutoff: Option<usize>,
    chunk_capacity: Option<usize>,
    seed: u64,
}

#[derive(Debug, Serialize, Default)]
struct ResultData {
    ordered: bool,
    permutation: bool,
    matches_reference: bool,
    metric_identities: bool,
    comparisons: u64,
    merges: u64,
    max_depth: usize,
    presorted: bool,
    passed: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(failures) if failures == 0 => {
            println!("All scenarios passed");
            ExitCode::SUCCESS
        }
        Ok(failures) => {
            eprintln!("{} scenario(s) failed", failures);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Validation aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<usize, Box<dyn Error>> {
    let output_dir = Path::new("../output/fastMergesort");
    fs::create_dir_all(output_dir)?;

    let scenarios: [(&str, &str, usize, Direction, bool, Option<usize>, u64); 7] = [
        (
            "uniform_random",
            "Uniformly random values through the parallel batch adapter",
            10_000,
            Direction::Ascending,
            true,
            Some(256),
            42,
        ),
        (
            "descending_random",
            "Uniformly random values sorted largest first",
            10_000,
            Direction::Descending,
            true,
            Some(256),
            43,
        ),
        (
            "presorted",
            "Already sorted input; the scan must skip the recursion",
            10_000,
            Direction::Ascending,
            true,
            None,
            0,
        ),
        (
            "reverse",
            "Strictly decreasing input; every adjacent pair is inverted",
            10_000,
            Direction::Ascending,
            true,
            Some(512),
            0,
        ),
        (
            "heavy_ties",
            "Values drawn from eight keys; massive duplication",
            10_000,
            Direction::Ascending,
            true,
            Some(128),
            44,
        ),
        (
            "serial_reference",
            "Same data through the sequential engine",
            10_000,
            Direction::Ascending,
            false,
            None,
            42,
        ),
        (
            "boundary_small",
            "Two-element input; the smallest case with any work to do",
            2,
            Direction::Ascending,
            true,
            None,
            45,
        ),
    ];

    let mut failures = 0;
    for (name, notes, elements, direction, parallel, cutoff, seed) in scenarios {
        let report = run_batch_scenario(name, notes, elements, direction, parallel, cutoff, seed)?;
        if !report.result.passed {
            failures += 1;
        }
        write_report(output_dir, &report)?;
    }

    let chunked = run_chunked_scenario()?;
    if !chunked.result.passed {
        failures += 1;
    }
    write_report(output_dir, &chunked)?;

    let stability = run_stability_scenario()?;
    if !stability.result.passed {
        failures += 1;
    }
    write_report(output_dir, &stability)?;

    Ok(failures)
}

/// Deterministic dataset for a scenario.
fn generate(name: &str, elements: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    match name {
        "presorted" => (0..elements as i64).collect(),
        "reverse" => (0..elements as i64).rev().collect(),
        "heavy_ties" => (0..elements).map(|_| rng.random_range(0..8)).collect(),
        _ => (0..elements)
            .map(|_| rng.random_range(-1_000_000..1_000_000))
            .collect(),
    }
}

fn run_batch_scenario(
    name: &str,
    notes: &str,
    elements: usize,
    direction: Direction,
    parallel: bool,
    cutoff: Option<usize>,
    seed: u64,
) -> Result<ValidationData, Box<dyn Error>> {
    let data = generate(name, elements, seed);

    let mut builder = Mergesort::new()
        .direction(direction)
        .collect_metrics()
        .adapter(Batch)
        .parallel(parallel);
    if let Some(c) = cutoff {
        builder = builder.sequential_cutoff(c);
    }
    let result = builder.build()?.sort_vec(data.clone());

    // Reference: the standard library's stable sort under the same direction
    let mut reference = data.clone();
    match direction {
        Direction::Ascending => reference.sort(),
        Direction::Descending => reference.sort_by(|a, b| b.cmp(a)),
    }

    let metrics = result.metrics.unwrap_or_default();
    let ordered = is_ordered(&result.values, direction);
    let permutation = is_permutation(&data, &result.values);
    let matches_reference = result.values == reference;
    let metric_identities = check_metric_identities(&metrics, elements);
    let passed = ordered && permutation && matches_reference && metric_identities;

    println!(
        "{}: {}",
        name,
        if passed { "PASS" } else { "FAIL" }
    );

    Ok(ValidationData {
        name: name.to_string(),
        notes: notes.to_string(),
        params: Params {
            elements,
            direction: direction.name().to_string(),
            parallel,
            sequential_cutoff: cutoff,
            chunk_capacity: None,
            seed,
        },
        result: ResultData {
            ordered,
            permutation,
            matches_reference,
            metric_identities,
            comparisons: metrics.comparisons,
            merges: metrics.merges,
            max_depth: metrics.max_depth,
            presorted: metrics.presorted,
            passed,
        },
    })
}

/// Chunked ingestion scenario: values stream in, chunks sort concurrently.
fn run_chunked_scenario() -> Result<ValidationData, Box<dyn Error>> {
    let elements = 50_000;
    let seed = 46;
    let capacity = 4_096;
    let data = generate("uniform_random", elements, seed);

    let mut sorter = Mergesort::new()
        .chunk_capacity(capacity)
        .collect_metrics()
        .adapter(Chunked)
        .sequential_cutoff(256)
        .build()?;
    sorter.extend(data.iter().cloned());
    let result = sorter.finish();

    let mut reference = data.clone();
    reference.sort();

    let metrics = result.metrics.unwrap_or_default();
    let ordered = is_ordered(&result.values, Direction::Ascending);
    let permutation = is_permutation(&data, &result.values);
    let matches_reference = result.values == reference;
    let passed = ordered && permutation && matches_reference;

    println!("chunked_stream: {}", if passed { "PASS" } else { "FAIL" });

    Ok(ValidationData {
        name: "chunked_stream".to_string(),
        notes: "Streaming ingestion with deferred concurrent chunk sorting".to_string(),
        params: Params {
            elements,
            direction: Direction::Ascending.name().to_string(),
            parallel: true,
            sequential_cutoff: Some(256),
            chunk_capacity: Some(capacity),
            seed,
        },
        result: ResultData {
            ordered,
            permutation,
            matches_reference,
            metric_identities: true,
            comparisons: metrics.comparisons,
            merges: metrics.merges,
            max_depth: metrics.max_depth,
            presorted: metrics.presorted,
            passed,
        },
    })
}

/// Stability scenario: ties must keep their input order under forced forking.
fn run_stability_scenario() -> Result<ValidationData, Box<dyn Error>> {
    let elements = 10_000;
    let seed = 47;
    let mut rng = StdRng::seed_from_u64(seed);
    let data: Vec<(u8, usize)> = (0..elements).map(|i| (rng.random_range(0..8u8), i)).collect();

    let result = Mergesort::new()
        .adapter(Batch)
        .sequential_cutoff(64)
        .build()?
        .sort_by(&data, |a, b| a.0.cmp(&b.0));

    let mut ordered = true;
    let mut stable = true;
    for pair in result.values.windows(2) {
        if pair[0].0 > pair[1].0 {
            ordered = false;
        }
        if pair[0].0 == pair[1].0 && pair[0].1 >= pair[1].1 {
            stable = false;
        }
    }
    let permutation = result.values.len() == data.len();
    let passed = ordered && stable && permutation;

    println!("stability_ties: {}", if passed { "PASS" } else { "FAIL" });

    Ok(ValidationData {
        name: "stability_ties".to_string(),
        notes: "Eight-key records; equal keys must keep input order".to_string(),
        params: Params {
            elements,
            direction: Direction::Ascending.name().to_string(),
            parallel: true,
            sequential_cutoff: Some(64),
            chunk_capacity: None,
            seed,
        },
        result: ResultData {
            ordered,
            permutation,
            matches_reference: stable,
            metric_identities: true,
            comparisons: 0,
            merges: 0,
            max_depth: 0,
            presorted: false,
            passed,
        },
    })
}

// ============================================================================
// Checks
// ============================================================================

/// No adjacent pair may be out of order under the direction.
fn is_ordered(values: &[i64], direction: Direction) -> bool {
    values.windows(2).all(|w| match direction {
        Direction::Ascending => w[0] <= w[1],
        Direction::Descending => w[0] >= w[1],
    })
}

/// Output must hold exactly the input values, multiplicity included.
fn is_permutation(input: &[i64], output: &[i64]) -> bool {
    let mut a = input.to_vec();
    let mut b = output.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

/// Counter identities of the recursive sort.
///
/// A full recursive sort of n >= 2 elements performs exactly n - 1 merges;
/// a presorted input performs n - 1 comparisons and no merges at all.
fn check_metric_identities(metrics: &SortMetrics, elements: usize) -> bool {
    if metrics.presorted {
        metrics.merges == 0
            && metrics.max_depth == 0
            && metrics.comparisons == elements.saturating_sub(1) as u64
    } else {
        elements < 2 || metrics.merges == elements as u64 - 1
    }
}

// ============================================================================
// Report Output
// ============================================================================

fn write_report(output_dir: &Path, report: &ValidationData) -> Result<(), Box<dyn Error>> {
    let output_path = output_dir.join(format!("{}.json", report.name));
    let output_json = serde_json::to_string_pretty(report)?;
    fs::write(output_path, output_json)?;
    Ok(())
}
