//! Shared test utilities and fixtures.

#![allow(dead_code)]

use doclocate::{BoundaryIndex, TextCorpus};
use proptest::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

// Re-export canonical test utilities from doclocate::testing
pub use doclocate::testing::{
    brute_force_documents, brute_force_positions, corpus_from_documents, naive_suffix_array,
};

// ============================================================================
// FIXTURES
// ============================================================================

/// The three-document corpus used throughout: "AB", "BA", "AB".
pub const THREE_DOCS: &[u8] = b"AB$BA$AB$";

/// Start offsets of [`THREE_DOCS`].
pub const THREE_DOC_STARTS: [usize; 3] = [0, 3, 6];

pub fn three_docs() -> (TextCorpus, BoundaryIndex) {
    (
        TextCorpus::from_bytes(THREE_DOCS.to_vec()).unwrap(),
        BoundaryIndex::from_starts(THREE_DOC_STARTS.to_vec()).unwrap(),
    )
}

/// Write the three-document corpus and its boundary file into `dir`.
pub fn write_three_docs(dir: &Path) -> (PathBuf, PathBuf) {
    let corpus = dir.join("corpus.txt");
    let bounds = dir.join("bounds.txt");
    fs::write(&corpus, THREE_DOCS).unwrap();
    fs::write(&bounds, "0\n3\n6\n").unwrap();
    (corpus, bounds)
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Bytes from a small alphabet so patterns actually repeat.
pub fn small_alphabet_text(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"abcd$".to_vec()), 0..max_len)
}

/// Arbitrary non-NUL bytes.
pub fn any_text(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=255, 0..max_len)
}

/// Short patterns over the small alphabet.
pub fn small_pattern() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"abcd$".to_vec()), 1..5)
}

/// A handful of documents over the small alphabet (no delimiter inside).
pub fn documents() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(b"abcd".to_vec()), 0..16),
        1..8,
    )
}
