// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Plain suffix array over the corpus.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **SUFFIX_ARRAY_PERMUTATION**: `sa` holds every position of `text` exactly once
//! 2. **SUFFIX_ARRAY_SORTED**: `text[sa[i]..] < text[sa[i + 1]..]` for all `i`
//! 3. **READ_ONLY**: neither `text` nor `sa` change after [`SuffixArrayIndex::new`]

use std::cmp::Ordering;
use std::mem;

use crate::contracts::{check_permutation, check_suffix_array_sorted};
use crate::corpus::TextCorpus;
use crate::sais::build_suffix_array;

/// Compare `pattern` against the suffix `text[sa_pos..]`, looking at most
/// `pattern.len()` bytes.
///
/// Returns the order of the *pattern* relative to the suffix prefix:
/// `Less` if the pattern sorts before it, `Equal` if the pattern is a prefix
/// of (or equal to) the suffix, `Greater` otherwise. A suffix that runs out
/// before the pattern does is smaller than the pattern.
///
/// This is a prefix comparator, not a total order on suffixes; both range
/// searches in [`crate::locate`] depend on using it consistently.
#[inline]
pub fn compare_suffix(text: &[u8], sa_pos: usize, pattern: &[u8]) -> Ordering {
    for (i, &p) in pattern.iter().enumerate() {
        let Some(&t) = text.get(sa_pos + i) else {
            return Ordering::Greater;
        };
        match p.cmp(&t) {
            Ordering::Equal => {}
            other => return other,
        }
    }
    Ordering::Equal
}

/// Corpus text plus its suffix array.
#[derive(Debug, Clone)]
pub struct SuffixArrayIndex {
    text: TextCorpus,
    sa: Vec<usize>,
}

impl SuffixArrayIndex {
    /// Build the suffix array with the linear-time SA-IS routine.
    pub fn new(text: TextCorpus) -> Self {
        let sa = build_suffix_array(text.as_bytes());

        // INVARIANT: SUFFIX_ARRAY_PERMUTATION + SUFFIX_ARRAY_SORTED
        // Debug builds only; construction is trusted in release.
        check_permutation(&sa, text.len());
        check_suffix_array_sorted(text.as_bytes(), &sa);

        Self { text, sa }
    }

    /// Corpus bytes, sentinel included.
    #[inline]
    pub fn text(&self) -> &[u8] {
        self.text.as_bytes()
    }

    #[inline]
    pub fn sa(&self) -> &[usize] {
        &self.sa
    }

    /// `n`, the number of suffixes (sentinel included).
    #[inline]
    pub fn len(&self) -> usize {
        self.sa.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sa.is_empty()
    }

    /// Bytes held by the suffix array and the text it searches.
    pub fn size_in_bytes(&self) -> usize {
        self.sa.len() * mem::size_of::<usize>() + self.text.len()
    }
}

/// Check that `sa` orders the suffixes of `text` (non-strict, for tests and tools).
pub fn is_suffix_array_sorted(text: &[u8], sa: &[usize]) -> bool {
    sa.windows(2).all(|pair| text[pair[0]..] <= text[pair[1]..])
}
