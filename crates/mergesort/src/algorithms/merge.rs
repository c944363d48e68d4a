//! Stable two-way merge and run fusion.
//!
//! ## Purpose
//!
//! This module implements the merge step: fusing two sorted sequences into
//! one sorted sequence, and the generalization that fuses an arbitrary list
//! of sorted runs by repeated pairwise merging.
//!
//! ## Design notes
//!
//! * **Stability**: When the heads compare equal, the left element is taken
//!   first. Callers keep earlier input on the left, so equal elements retain
//!   their original relative order.
//! * **Remainder handling**: Once either side is exhausted, the rest of the
//!   other side is appended wholesale without further comparisons.
//! * **Ownership**: Inputs are consumed and elements moved into the output;
//!   nothing is cloned.
//! * **Counting**: Comparison and merge counters are threaded through as
//!   plain integers so this layer stays independent of the evaluation layer.
//!
//! ## Key concepts
//!
//! * **Two-way merge**: Linear fusion of two sorted sequences.
//! * **Merge rounds**: Adjacent runs are fused pairwise until one remains,
//!   halving the run count each round.
//!
//! ## Invariants
//!
//! * The output length equals the sum of the input lengths.
//! * The output is sorted whenever both inputs are sorted under `cmp`.
//! * A two-way merge performs at most `left.len() + right.len() - 1`
//!   comparisons.
//!
//! ## Non-goals
//!
//! * This module does not split sequences or drive the recursion.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::cmp::Ordering;

// ============================================================================
// Two-Way Merge
// ============================================================================

/// Merge two sorted sequences into one sorted sequence.
///
/// Repeatedly compares the current heads and appends the smaller one; on a
/// tie the left head is appended first. When one side runs out, the rest of
/// the other side is appended unchanged. Increments `comparisons` once per
/// head-to-head comparison.
pub fn merge<T, C>(left: Vec<T>, right: Vec<T>, cmp: &mut C, comparisons: &mut u64) -> Vec<T>
where
    C: FnMut(&T, &T) -> Ordering,
{
    if left.is_empty() {
        return right;
    }
    if right.is_empty() {
        return left;
    }

    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left_iter = left.into_iter();
    let mut right_iter = right.into_iter();
    let mut left_head = left_iter.next();
    let mut right_head = right_iter.next();

    loop {
        match (left_head.take(), right_head.take()) {
            (Some(l), Some(r)) => {
                *comparisons += 1;
                // Ties go left to keep equal elements in input order
                if cmp(&l, &r) != Ordering::Greater {
                    out.push(l);
                    right_head = Some(r);
                    left_head = left_iter.next();
                } else {
                    out.push(r);
                    left_head = Some(l);
                    right_head = right_iter.next();
                }
            }
            (Some(l), None) => {
                out.push(l);
                out.extend(left_iter);
                break;
            }
            (None, Some(r)) => {
                out.push(r);
                out.extend(right_iter);
                break;
            }
            (None, None) => break,
        }
    }

    out
}

// ============================================================================
// Run Fusion
// ============================================================================

/// Fuse a list of sorted runs into a single sorted sequence.
///
/// Adjacent runs are merged pairwise; each round halves the run count
/// (rounding up, the last run passes through unmerged when the count is odd)
/// until one run remains. Because only neighbors are ever fused and runs
/// arrive in input order, equal elements across runs keep their original
/// relative order.
///
/// Increments `merges` once per two-way merge performed.
pub fn merge_rounds<T, C>(
    mut runs: Vec<Vec<T>>,
    cmp: &mut C,
    comparisons: &mut u64,
    merges: &mut u64,
) -> Vec<T>
where
    C: FnMut(&T, &T) -> Ordering,
{
    while runs.len() > 1 {
        let mut next = Vec::with_capacity(runs.len() / 2 + 1);
        let mut iter = runs.into_iter();

        while let Some(first) = iter.next() {
            match iter.next() {
                Some(second) => {
                    *merges += 1;
                    next.push(merge(first, second, cmp, comparisons));
                }
                None => next.push(first),
            }
        }

        runs = next;
    }

    runs.pop().unwrap_or_default()
}
