//! Validation for sorter configuration.
//!
//! ## Purpose
//!
//! This module provides the validation functions run by `build()` on every
//! adapter builder. Only configuration is validated: the sort operation is
//! total, so there is no input data to check.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Deferred reporting**: Builders record misuse (duplicate parameters)
//!   as they are configured; validation surfaces it at `build()`.
//!
//! ## Key concepts
//!
//! * **Builder misuse**: Each parameter may be configured at most once.
//! * **Adapter constraints**: Chunk capacity and sequential cutoff must allow
//!   the respective execution modes to make progress.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//! * A configuration that passes validation can never fail at sort time.
//!
//! ## Non-goals
//!
//! * This module does not inspect or transform input sequences.
//! * This module does not provide automatic correction of invalid values.

// Internal dependencies
use crate::primitives::errors::MergesortError;

// ============================================================================
// Constants
// ============================================================================

/// Minimum chunk capacity for the chunked adapter.
pub const MIN_CHUNK_CAPACITY: usize = 1;

/// Minimum sequential cutoff for parallel execution.
pub const MIN_CUTOFF: usize = 1;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sorter configuration.
///
/// Provides static methods for validating builder parameters. All methods
/// return `Result<(), MergesortError>` and fail fast upon identifying the
/// first violation.
pub struct Validator;

impl Validator {
    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), MergesortError> {
        if let Some(param) = duplicate_param {
            return Err(MergesortError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    /// Validate the pending-buffer capacity for the chunked adapter.
    pub fn validate_chunk_capacity(chunk_capacity: usize) -> Result<(), MergesortError> {
        if chunk_capacity < MIN_CHUNK_CAPACITY {
            return Err(MergesortError::InvalidChunkCapacity {
                got: chunk_capacity,
                min: MIN_CHUNK_CAPACITY,
            });
        }
        Ok(())
    }

    /// Validate the sequential cutoff for parallel execution.
    pub fn validate_cutoff(cutoff: usize) -> Result<(), MergesortError> {
        if cutoff < MIN_CUTOFF {
            return Err(MergesortError::InvalidCutoff {
                got: cutoff,
                min: MIN_CUTOFF,
            });
        }
        Ok(())
    }
}
