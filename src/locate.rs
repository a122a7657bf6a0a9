// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pattern location on the suffix array and document attribution.
//!
//! Two binary searches over `sa` find the block of suffixes that start with
//! the pattern:
//!
//! ```text
//!   sa index:   0    1    2    3    4    5    6
//!   suffix:     $    a$   ana$ anana$ banana$ na$ nana$
//!                         └──── "an" ───┘
//!   lower bound (first suffix >= "an")         = 2
//!   upper bound (first suffix >  "an" prefix)  = 4   → range 2..4, R = 3
//! ```
//!
//! `doc_locate` then maps every `sa[i]` in that block to its document and
//! keeps the distinct ids.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::ops::Range;

use crate::boundaries::BoundaryIndex;
use crate::contracts::{check_doc_id_in_range, check_range_consistent};
use crate::error::{Error, Result};
use crate::suffix_array::{compare_suffix, SuffixArrayIndex};

/// Distinct 1-based document ids, iterated in ascending order.
pub type DocumentIdSet = BTreeSet<usize>;

/// Contiguous block of suffix array indices matching a pattern.
///
/// Half-open: `start` is `L`, `end - 1` is `R`. An empty range (`R < L`)
/// means the pattern does not occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRange {
    pub start: usize,
    pub end: usize,
}

impl SearchRange {
    /// Number of occurrences, `R - L + 1`.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// `R`, the last matching index, if any.
    pub fn last(&self) -> Option<usize> {
        (!self.is_empty()).then(|| self.end - 1)
    }

    pub fn as_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// First index whose suffix is `>=` the pattern under the prefix order.
/// Returns `sa.len()` when every suffix is smaller.
fn lower_bound(text: &[u8], sa: &[usize], pattern: &[u8]) -> usize {
    let mut lo = 0usize;
    let mut hi = sa.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if compare_suffix(text, sa[mid], pattern) == Ordering::Greater {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// First index at or after `from` whose suffix is strictly greater than the
/// pattern, i.e. no longer shares it as a prefix.
fn upper_bound(text: &[u8], sa: &[usize], pattern: &[u8], from: usize) -> usize {
    let mut lo = from;
    let mut hi = sa.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if compare_suffix(text, sa[mid], pattern) == Ordering::Less {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    lo
}

/// Collect the documents touched by a set of text positions.
pub fn attribute<I>(positions: I, boundaries: &BoundaryIndex) -> DocumentIdSet
where
    I: IntoIterator<Item = usize>,
{
    positions
        .into_iter()
        .map(|pos| {
            let doc_id = boundaries.doc_id(pos);
            check_doc_id_in_range(doc_id, boundaries.len());
            doc_id
        })
        .collect()
}

impl SuffixArrayIndex {
    /// Find the range `[L, R]` of suffixes prefixed by `pattern`.
    ///
    /// O(|P| log n). Zero occurrences come back as an empty range, not an
    /// error; only an empty pattern is rejected.
    pub fn locate_range(&self, pattern: &[u8]) -> Result<SearchRange> {
        if pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }

        let text = self.text();
        let sa = self.sa();

        let start = lower_bound(text, sa, pattern);
        let end = upper_bound(text, sa, pattern, start);

        // INVARIANT: the second search starts at L, so it cannot end before it
        check_range_consistent(start, end, sa.len());

        Ok(SearchRange { start, end })
    }

    /// Text positions of the occurrences in `range`, in suffix order.
    #[inline]
    pub fn occurrences(&self, range: SearchRange) -> &[usize] {
        &self.sa()[range.as_range()]
    }

    /// Distinct documents containing `pattern`, ascending.
    ///
    /// O((R - L + 1) log k) after the range search.
    pub fn doc_locate(&self, pattern: &[u8], boundaries: &BoundaryIndex) -> Result<DocumentIdSet> {
        let range = self.locate_range(pattern)?;
        if range.is_empty() {
            return Ok(DocumentIdSet::new());
        }
        Ok(attribute(
            self.occurrences(range).iter().copied(),
            boundaries,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::TextCorpus;

    fn index(raw: &[u8]) -> SuffixArrayIndex {
        SuffixArrayIndex::new(TextCorpus::from_bytes(raw.to_vec()).unwrap())
    }

    fn brute_force_count(text: &[u8], pattern: &[u8]) -> usize {
        (0..text.len())
            .filter(|&i| text[i..].starts_with(pattern))
            .count()
    }

    #[test]
    fn test_banana_range() {
        let idx = index(b"banana");
        let range = idx.locate_range(b"an").unwrap();
        assert_eq!(range, SearchRange { start: 2, end: 4 });
        assert_eq!(range.last(), Some(3));
        let mut positions = idx.occurrences(range).to_vec();
        positions.sort_unstable();
        assert_eq!(positions, vec![1, 3]);
    }

    #[test]
    fn test_counts_match_brute_force() {
        let idx = index(b"abracadabra mississippi banana");
        for pattern in [
            &b"a"[..],
            b"abra",
            b"ssi",
            b"ana",
            b" ",
            b"i",
            b"banana",
            b"x",
            b"abracadabra mississippi banana",
        ] {
            let range = idx.locate_range(pattern).unwrap();
            assert_eq!(
                range.len(),
                brute_force_count(idx.text(), pattern),
                "pattern {:?}",
                String::from_utf8_lossy(pattern)
            );
        }
    }

    #[test]
    fn test_absent_pattern_is_empty_range() {
        let idx = index(b"AB$BA$AB$");
        let range = idx.locate_range(b"ZZZ").unwrap();
        assert!(range.is_empty());
        assert_eq!(range.len(), 0);
        assert_eq!(range.last(), None);
    }

    #[test]
    fn test_pattern_longer_than_text() {
        let idx = index(b"ab");
        assert!(idx.locate_range(b"abab").unwrap().is_empty());
    }

    #[test]
    fn test_pattern_smaller_than_everything() {
        let idx = index(b"bcd");
        let range = idx.locate_range(b"a").unwrap();
        assert!(range.is_empty());
    }

    #[test]
    fn test_pattern_larger_than_everything() {
        let idx = index(b"bcd");
        let range = idx.locate_range(b"z").unwrap();
        assert!(range.is_empty());
        assert_eq!(range.start, idx.len());
    }

    #[test]
    fn test_empty_pattern_rejected() {
        let idx = index(b"abc");
        assert!(matches!(idx.locate_range(b""), Err(Error::EmptyPattern)));
    }

    #[test]
    fn test_doc_locate_three_documents() {
        let idx = index(b"AB$BA$AB$");
        let boundaries = BoundaryIndex::from_starts(vec![0, 3, 6]).unwrap();

        let docs = idx.doc_locate(b"AB", &boundaries).unwrap();
        assert_eq!(docs.into_iter().collect::<Vec<_>>(), vec![1, 3]);

        let docs = idx.doc_locate(b"BA", &boundaries).unwrap();
        assert_eq!(docs.into_iter().collect::<Vec<_>>(), vec![2]);

        let docs = idx.doc_locate(b"B", &boundaries).unwrap();
        assert_eq!(docs.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_doc_locate_deduplicates() {
        let idx = index(b"aaaa$b");
        let boundaries = BoundaryIndex::from_starts(vec![0, 5]).unwrap();
        let docs = idx.doc_locate(b"a", &boundaries).unwrap();
        assert_eq!(docs.len(), 1);
        assert!(docs.contains(&1));
    }

    #[test]
    fn test_doc_locate_absent_pattern() {
        let idx = index(b"AB$BA$AB$");
        let boundaries = BoundaryIndex::from_starts(vec![0, 3, 6]).unwrap();
        assert!(idx.doc_locate(b"ZZZ", &boundaries).unwrap().is_empty());
    }
}
