// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search primitives over a sorted integer array.
//!
//! All three return the index of an element equal to `target`, or `None`.
//! On arrays with duplicates they may return different (equally valid)
//! indices; the probe workload only uses distinct values.

use std::cmp::Ordering;

/// Linear scan from the front. O(k) for a target at index k.
pub fn sequential_search(data: &[i64], target: i64) -> Option<usize> {
    data.iter().position(|&x| x == target)
}

/// Classic halving search. O(log n).
pub fn binary_search(data: &[i64], target: i64) -> Option<usize> {
    binary_search_in(data, target, 0, data.len())
}

fn binary_search_in(data: &[i64], target: i64, mut lo: usize, mut hi: usize) -> Option<usize> {
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match data[mid].cmp(&target) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal => return Some(mid),
        }
    }
    None
}

/// Exponential probe for an upper bound, then binary search inside it.
/// O(log k) for a target at index k.
pub fn galloping_search(data: &[i64], target: i64) -> Option<usize> {
    if data.is_empty() {
        return None;
    }

    let mut bound = 1;
    while bound < data.len() && data[bound] < target {
        bound *= 2;
    }

    // target, if present, is in [bound / 2, bound]
    let lo = bound / 2;
    let hi = (bound + 1).min(data.len());
    binary_search_in(data, target, lo, hi)
}
