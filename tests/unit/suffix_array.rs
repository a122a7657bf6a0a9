//! Suffix array construction and the range comparator on fixed inputs.

use super::common::{naive_suffix_array, three_docs};
use doclocate::{build_suffix_array, compare_suffix, SuffixArrayIndex, TextCorpus};
use std::cmp::Ordering;

#[test]
fn three_doc_suffix_array_matches_naive_sort() {
    let (corpus, _) = three_docs();
    let index = SuffixArrayIndex::new(corpus.clone());
    assert_eq!(index.sa(), naive_suffix_array(corpus.as_bytes()).as_slice());
}

#[test]
fn sentinel_suffix_sorts_first() {
    let (corpus, _) = three_docs();
    let index = SuffixArrayIndex::new(corpus);
    assert_eq!(index.sa()[0], index.len() - 1);
}

#[test]
fn dna_like_text_matches_naive_sort() {
    let raw: Vec<u8> = b"ACGTTGCAACGTACGTTTGACCA".repeat(8);
    let corpus = TextCorpus::from_bytes(raw).unwrap();
    assert_eq!(
        build_suffix_array(corpus.as_bytes()),
        naive_suffix_array(corpus.as_bytes())
    );
}

#[test]
fn comparator_reports_pattern_side() {
    let text = b"AB$BA$AB$\0";
    // Suffix 3 is "BA$AB$"
    assert_eq!(compare_suffix(text, 3, b"BA"), Ordering::Equal);
    assert_eq!(compare_suffix(text, 3, b"AB"), Ordering::Less);
    assert_eq!(compare_suffix(text, 3, b"BB"), Ordering::Greater);
    // Suffix 9 is just the sentinel
    assert_eq!(compare_suffix(text, 9, b"A"), Ordering::Greater);
}

#[test]
fn size_accounts_for_text_and_array() {
    let (corpus, _) = three_docs();
    let n = corpus.len();
    let index = SuffixArrayIndex::new(corpus);
    assert_eq!(index.size_in_bytes(), n * std::mem::size_of::<usize>() + n);
}
