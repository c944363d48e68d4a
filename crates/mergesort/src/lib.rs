//! # Mergesort: Stable Merge Sorting for Rust
//!
//! A stable, instrumented merge sort engine for **Rust**, with batch and
//! chunked execution modes and `no_std` support.
//!
//! ## What is merge sort?
//!
//! Merge sort is a divide-and-conquer sorting algorithm. It splits a sequence
//! in half, sorts each half recursively, and merges the sorted halves back
//! together by repeatedly taking the smaller head element. Because ties are
//! always taken from the left half, equal elements keep their input order,
//! which makes the sort stable. Runtime is `O(n log n)` regardless of input
//! distribution.
//!
//! ## Documentation
//!
//! > 📚 **Full Documentation**: [docs.rs/mergesort](https://docs.rs/mergesort)
//! >
//! > API references and guides for batch, chunked, and parallel sorting.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use mergesort::prelude::*;
//!
//! // Build the sorter
//! let sorter = Mergesort::new()
//!     .adapter(Batch)
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
//! use mergesort::prelude::*;
//!
//! // Build a sorter with all features enabled
//! let sorter = Mergesort::new()
//!     .direction(Descending)  // Largest element first
//!     .collect_metrics()      // Attach instrumentation counters
//!     .adapter(Batch)         // Batch adapter
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
//! use mergesort::prelude::*;
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
//! use mergesort::prelude::*;
//!
//! // Setting the same parameter twice is rejected at build time
//! let attempt = Mergesort::new()
//!     .direction(Ascending)
//!     .direction(Descending)
//!     .adapter(Batch)
//!     .build();
//!
//! match attempt {
//!     Ok(_) => unreachable!(),
//!     Err(e) => {
//!         // e is MergesortError::DuplicateParameter
//!         eprintln!("Configuration failed: {}", e);
//!     }
//! }
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments for embedded devices and
//! resource-constrained systems. Disable default features to remove the
//! standard library dependency:
//!
//! ```toml
//! [dependencies]
//! mergesort = { version = "0.5", default-features = false }
//! ```
//!
//! **Minimal example for embedded systems:**
//!
//! ```rust
//! # #[cfg(feature = "std")] {
//! use mergesort::prelude::*;
//!
//! // In an embedded context (e.g., ordering sensor readings)
//! fn sort_sensor_data() -> Result<(), MergesortError> {
//!     // Small dataset from sensor readings
//!     let readings = vec![4.2_f32, 1.5, 3.3, 2.8, 0.9];
//!
//!     // Build a minimal sorter (no metrics)
//!     let sorter = Mergesort::new()
//!         .adapter(Batch)
//!         .build()?;
//!
//!     // Sort with a total order over floats (NaN sorts last)
//!     let result = sorter.sort_floats(&readings);
//!
//!     // Use ordered values (result.values)
//!     // ...
//!
//!     Ok(())
//! }
//! # sort_sensor_data().unwrap();
//! # }
//! ```
//!
//! **Tips for embedded/no_std usage:**
//! - Use `f32` instead of `f64` to reduce memory footprint
//! - Prefer `sort_vec` over `sort` to avoid the upfront input copy
//! - Use the Chunked adapter with a small `chunk_capacity` to bound peak buffering
//! - Skip `collect_metrics()` when counters are not needed
//!
//! ## References
//!
//! - Knuth, D. E. (1998). "The Art of Computer Programming, Vol. 3: Sorting and Searching"
//! - Goldstine, H. H. & von Neumann, J. (1948). "Planning and Coding of Problems for an Electronic Computing Instrument"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Algorithms - core split and merge routines.
mod algorithms;

// Layer 3: Evaluation - instrumentation and metrics.
mod evaluation;

// Layer 4: Engine - orchestration and execution control.
mod engine;

// Layer 5: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API for merge sorting.
mod api;

// Standard merge sort prelude.
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
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
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
