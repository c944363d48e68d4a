#![cfg(feature = "dev")]
use fastMergesort::prelude::*;
use rand::prelude::*;

#[test]
fn test_sort_pass_consistency_random() {
    let n = 5_000;
    let mut rng = StdRng::seed_from_u64(42);
    let data: Vec<i64> = (0..n).map(|_| rng.random_range(-1_000..1_000)).collect();

    // Sequential sort with metrics
    let seq_res = Mergesort::new()
        .collect_metrics()
        .adapter(Batch)
        .parallel(false)
        .build()
        .unwrap()
        .sort_vec(data.clone());

    // Parallel sort with metrics and a small cutoff
    let par_res = Mergesort::new()
        .collect_metrics()
        .adapter(Batch)
        .parallel(true)
        .sequential_cutoff(128)
        .build()
        .unwrap()
        .sort_vec(data);

    for i in 0..n {
        assert_eq!(seq_res.values[i], par_res.values[i], "Mismatch at index {}", i);
    }
    assert_eq!(seq_res.metrics, par_res.metrics);
    println!("Sort pass consistency ({} elements): OK", n);
}

#[test]
fn test_sort_pass_consistency_descending() {
    let n = 2_000;
    let mut rng = StdRng::seed_from_u64(7);
    let data: Vec<i64> = (0..n).map(|_| rng.random_range(-1_000..1_000)).collect();

    let seq_res = Mergesort::new()
        .direction(Descending)
        .collect_metrics()
        .adapter(Batch)
        .parallel(false)
        .build()
        .unwrap()
        .sort_vec(data.clone());

    let par_res = Mergesort::new()
        .direction(Descending)
        .collect_metrics()
        .adapter(Batch)
        .parallel(true)
        .sequential_cutoff(64)
        .build()
        .unwrap()
        .sort_vec(data);

    assert_eq!(seq_res.values, par_res.values);
    assert_eq!(seq_res.metrics, par_res.metrics);
    println!("Descending sort pass consistency ({} elements): OK", n);
}

#[test]
fn test_sort_pass_consistency_across_cutoffs() {
    let n = 4_096;
    let mut rng = StdRng::seed_from_u64(99);
    let data: Vec<i64> = (0..n).map(|_| rng.random_range(-1_000..1_000)).collect();

    let reference = Mergesort::new()
        .collect_metrics()
        .adapter(Batch)
        .parallel(false)
        .build()
        .unwrap()
        .sort_vec(data.clone());

    // Metrics are independent of where the descent goes sequential
    for cutoff in [1, 3, 64, 1_000, 10_000] {
        let res = Mergesort::new()
            .collect_metrics()
            .adapter(Batch)
            .sequential_cutoff(cutoff)
            .build()
            .unwrap()
            .sort_vec(data.clone());

        assert_eq!(res.values, reference.values, "Values diverged at cutoff {}", cutoff);
        assert_eq!(res.metrics, reference.metrics, "Metrics diverged at cutoff {}", cutoff);
    }
    println!("Cutoff invariance ({} elements): OK", n);
}
