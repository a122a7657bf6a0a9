// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for internal invariants.
//!
//! Debug-mode assertions that catch algorithmic faults early:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!` / `cfg!(debug_assertions)`)
//! 2. **Early failure detection** during development and tests
//!
//! These guard defects, not user input. Malformed inputs are reported through
//! [`crate::Error`] instead.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Invariant                                     |
//! |------------------------------|-----------------------------------------------|
//! | `check_permutation`          | SA holds every text position exactly once     |
//! | `check_suffix_array_sorted`  | adjacent suffixes strictly increase           |
//! | `check_range_consistent`     | binary searches never leave `L > R + 1`       |
//! | `check_doc_id_in_range`      | attribution stays inside `[1, k]`             |
//! | `check_quartiles_ordered`    | `Q0 <= Q1 <= Q2 <= Q3 <= Q4`                  |

// ============================================================================
// SUFFIX ARRAY CONTRACTS
// ============================================================================

/// Check that `sa` is a permutation of `0..n`.
#[inline]
pub fn check_permutation(sa: &[usize], n: usize) {
    if !cfg!(debug_assertions) {
        return;
    }

    debug_assert_eq!(
        sa.len(),
        n,
        "Contract violation: suffix array has {} entries for a text of {}",
        sa.len(),
        n
    );

    let mut seen = vec![false; n];
    for (i, &pos) in sa.iter().enumerate() {
        debug_assert!(
            pos < n,
            "Contract violation: sa[{}] = {} out of bounds (n = {})",
            i,
            pos,
            n
        );
        debug_assert!(
            !seen[pos],
            "Contract violation: position {} appears twice in the suffix array",
            pos
        );
        seen[pos] = true;
    }
}

/// Check that consecutive suffixes are strictly increasing.
///
/// Suffixes of a sentinel-terminated text are all distinct, so equality
/// between neighbours is also a violation.
#[inline]
pub fn check_suffix_array_sorted(text: &[u8], sa: &[usize]) {
    if !cfg!(debug_assertions) {
        return;
    }

    for (i, pair) in sa.windows(2).enumerate() {
        debug_assert!(
            text[pair[0]..] < text[pair[1]..],
            "Contract violation: suffix array not sorted at {} (positions {} and {})",
            i + 1,
            pair[0],
            pair[1]
        );
    }
}

// ============================================================================
// SEARCH CONTRACTS
// ============================================================================

/// Check the half-open range produced by the two binary searches.
#[inline]
pub fn check_range_consistent(start: usize, end: usize, n: usize) {
    debug_assert!(
        start <= end,
        "Contract violation: search range start {} beyond end {}",
        start,
        end
    );
    debug_assert!(
        end <= n,
        "Contract violation: search range end {} beyond suffix count {}",
        end,
        n
    );
}

/// Check that a mapped document id is within `[1, k]`.
#[inline]
pub fn check_doc_id_in_range(doc_id: usize, k: usize) {
    debug_assert!(
        (1..=k).contains(&doc_id),
        "Contract violation: document id {} outside [1, {}]",
        doc_id,
        k
    );
}

// ============================================================================
// STATISTICS CONTRACTS
// ============================================================================

/// Check that the five-number summary is monotone.
#[inline]
pub fn check_quartiles_ordered(q: &[f64; 5]) {
    debug_assert!(
        q.windows(2).all(|w| w[0] <= w[1]),
        "Contract violation: quartiles out of order: {:?}",
        q
    );
}
