//! Error types for sorter configuration.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while configuring a
//! sorter through the builder API. Sorting itself is a total operation: any
//! finite sequence of comparable elements is valid input, so no error
//! conditions exist at sort time.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. minimum capacity).
//! * **Deferred**: Errors are caught and stored during builder configuration,
//!   then surfaced by `build()`.
//! * **No-std**: Supports `no_std` environments; all variants are allocation-free.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Builder misuse**: The same parameter configured more than once.
//! 2. **Adapter constraints**: Invalid chunk capacity or sequential cutoff.
//! 3. **Parameter support**: Parameters not supported by the selected
//!    execution adapter.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not cover sort-time failures; none exist.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sorter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergesortError {
    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Chunk capacity must be at least 1 so every push makes progress.
    InvalidChunkCapacity {
        /// The chunk capacity provided.
        got: usize,
        /// Minimum required chunk capacity.
        min: usize,
    },

    /// Sequential cutoff must be at least 1 so the parallel recursion terminates.
    InvalidCutoff {
        /// The cutoff provided.
        got: usize,
        /// Minimum required cutoff.
        min: usize,
    },

    /// Selected adapter does not support the configured parameter.
    UnsupportedParameter {
        /// Name of the adapter (e.g., "Batch").
        adapter: &'static str,
        /// Name of the unsupported parameter.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for MergesortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::InvalidChunkCapacity { got, min } => {
                write!(f, "Invalid chunk_capacity: {got} (must be at least {min})")
            }
            Self::InvalidCutoff { got, min } => {
                write!(
                    f,
                    "Invalid sequential_cutoff: {got} (must be at least {min})"
                )
            }
            Self::UnsupportedParameter { adapter, parameter } => {
                write!(
                    f,
                    "Adapter '{adapter}' does not support parameter: {parameter}"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for MergesortError {}
