//! # Fast Mergesort: Parallel Stable Merge Sorting
//!
//! A multi-threaded, stable, instrumented merge sort for **Rust**, built on
//! the `mergesort` engine and the rayon thread pool.
//!
//! ## What is this crate?
//!
//! `fastMergesort` keeps the `mergesort` crate's semantics and API shape and
//! changes only the schedule: the two halves of a large sequence sort on
//! separate pool threads, and independent runs fuse concurrently. The output
//! is identical to the sequential engine's, element for element and counter
//! for counter, for any thread count.
//!
//! ## Documentation
//!
//! > 📚 **Full Documentation**: [docs.rs/fastMergesort](https://docs.rs/fastMergesort)
//! >
//! > API references and guides for parallel batch and chunked sorting.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use fastMergesort::prelude::*;
//!
//! // Build the sorter with parallel execution (default)
//! let sorter = Mergesort::new()
//!     .adapter(Batch)     // Parallel by default
//!     .build()?;
//!
//! // Sort a sequence (the input is left untouched)
//! let result = sorter.sort(&[4, 2, 7, 1, 0]);
//!
//! println!("{}", result);
//! # Result::<(), MergesortError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Elements:  5
//!   Direction: Ascending
//!
//! Sorted Data:
//!   [     0]            0
//!   [     1]            1
//!   [     2]            2
//!   [     3]            4
//!   [     4]            7
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use fastMergesort::prelude::*;
//!
//! // Build a sorter with all features enabled
//! let sorter = Mergesort::new()
//!     .direction(Descending)      // Largest element first
//!     .collect_metrics()          // Attach instrumentation counters
//!     .adapter(Batch)             // Parallel batch adapter
//!     .parallel(true)             // Enable parallel execution
//!     .sequential_cutoff(4096)    // Halves this short sort inline
//!     .build()?;
//!
//! let result = sorter.sort(&[3, 1, 4, 1, 5, 9, 2, 6]);
//! println!("{}", result);
//! # Result::<(), MergesortError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Elements:  8
//!   Direction: Descending
//!
//! Sort Metrics:
//!   Comparisons: 18
//!   Merges:      7
//!   Max depth:   3
//!   Presorted:   false
//!
//! Sorted Data:
//!   [     0]            9
//!   [     1]            6
//!   [     2]            5
//!   [     3]            4
//!   [     4]            3
//!   [     5]            2
//!   [     6]            1
//!   [     7]            1
//! ```
//!
//! ### Result and Error Handling
//!
//! Sorting itself is total: `sort` always returns a [`prelude::MergesortResult`].
//! Configuration is where things can go wrong, so `build` returns a
//! `Result<_, MergesortError>`.
//!
//! The `?` operator is idiomatic:
//!
//! ```rust
//! use fastMergesort::prelude::*;
//!
//! let sorter = Mergesort::new().adapter(Batch).build()?;
//!
//! let result = sorter.sort(&[3, 1, 2]);
//! assert_eq!(result.values, vec![1, 2, 3]);
//! # Result::<(), MergesortError>::Ok(())
//! ```
//!
//! But you can also handle configuration errors explicitly:
//!
//! ```rust
//! use fastMergesort::prelude::*;
//!
//! // A zero cutoff cannot make progress and is rejected at build time
//! let attempt = Mergesort::new()
//!     .adapter(Batch)
//!     .sequential_cutoff(0)
//!     .build();
//!
//! match attempt {
//!     Ok(_) => unreachable!(),
//!     Err(e) => {
//!         // e is MergesortError::InvalidCutoff
//!         eprintln!("Configuration failed: {}", e);
//!     }
//! }
//! ```
//!
//! ## Controlling Parallelism
//!
//! Parallel execution is on by default and runs on the global rayon pool.
//! Two knobs control it:
//!
//! - `.parallel(false)` restores the sequential engine end to end.
//! - `.sequential_cutoff(n)` bounds forking: halves of length `n` or less
//!   sort on the calling thread. Without it the cutoff adapts to the input
//!   size and pool width.
//!
//! Neither knob changes the result:
//!
//! ```rust
//! use fastMergesort::prelude::*;
//!
//! let data: Vec<i64> = (0..10_000).rev().collect();
//!
//! let parallel = Mergesort::new().adapter(Batch).build()?.sort_vec(data.clone());
//! let sequential = Mergesort::new()
//!     .adapter(Batch)
//!     .parallel(false)
//!     .build()?
//!     .sort_vec(data);
//!
//! assert_eq!(parallel.values, sequential.values);
//! # Result::<(), MergesortError>::Ok(())
//! ```
//!
//! ## References
//!
//! - Knuth, D. E. (1998). "The Art of Computer Programming, Vol. 3: Sorting and Searching"
//! - Cormen, T. H., Leiserson, C. E., Rivest, R. L. & Stein, C. (2009). "Introduction to Algorithms", Chapter 27: Multithreaded Algorithms
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![allow(non_snake_case)]

// Layer 5: Engine - parallel execution control.
mod engine;

// Layer 6: Adapters - parallel execution mode adapters.
mod adapters;

// High-level fluent API for parallel sorting.
mod api;

// Standard fastMergesort prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Chunked},
        Direction::Ascending,
        Direction::Descending,
        MergesortBuilder as Mergesort, MergesortError, MergesortResult, SortMetrics,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
