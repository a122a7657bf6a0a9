//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! The brute-force oracles here are the reference every index is checked against.

#![doc(hidden)]

use crate::boundaries::BoundaryIndex;
use crate::concat::{join_documents, DEFAULT_DELIMITER};
use crate::corpus::TextCorpus;
use crate::locate::DocumentIdSet;

/// Join documents with `$` and return the corpus with its boundaries.
pub fn corpus_from_documents<D: AsRef<[u8]>>(documents: &[D]) -> (TextCorpus, BoundaryIndex) {
    let joined = join_documents(documents, DEFAULT_DELIMITER);
    let corpus = TextCorpus::from_bytes(joined.corpus).expect("test documents contain NUL");
    let boundaries = BoundaryIndex::from_starts(joined.starts).expect("no documents given");
    (corpus, boundaries)
}

/// Every position where `pattern` starts, ascending.
pub fn brute_force_positions(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&i| &text[i..i + pattern.len()] == pattern)
        .collect()
}

/// Documents containing `pattern`, by scanning every position.
pub fn brute_force_documents(
    text: &[u8],
    pattern: &[u8],
    boundaries: &BoundaryIndex,
) -> DocumentIdSet {
    brute_force_positions(text, pattern)
        .into_iter()
        .map(|pos| boundaries.doc_id(pos))
        .collect()
}

/// Naive suffix array: sort all suffixes with the standard comparison.
pub fn naive_suffix_array(text: &[u8]) -> Vec<usize> {
    let mut sa: Vec<usize> = (0..text.len()).collect();
    sa.sort_by(|&a, &b| text[a..].cmp(&text[b..]));
    sa
}
