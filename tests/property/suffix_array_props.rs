//! Suffix array property tests.
//!
//! - Sortedness: adjacent suffixes strictly increase
//! - Completeness: every position appears once
//! - Determinism: rebuilding gives the same array

use super::common::{any_text, naive_suffix_array, small_alphabet_text};
use doclocate::{is_suffix_array_sorted, SuffixArrayIndex, TextCorpus};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_sorted_and_complete(raw in small_alphabet_text(200)) {
        let corpus = TextCorpus::from_bytes(raw).unwrap();
        let index = SuffixArrayIndex::new(corpus);

        prop_assert!(is_suffix_array_sorted(index.text(), index.sa()));
        let mut positions = index.sa().to_vec();
        positions.sort_unstable();
        prop_assert_eq!(positions, (0..index.len()).collect::<Vec<_>>());
        prop_assert_eq!(index.sa()[0], index.len() - 1);
    }

    #[test]
    fn prop_matches_naive_sort(raw in any_text(120)) {
        let corpus = TextCorpus::from_bytes(raw).unwrap();
        let expected = naive_suffix_array(corpus.as_bytes());
        let index = SuffixArrayIndex::new(corpus);
        prop_assert_eq!(index.sa(), expected.as_slice());
    }

    #[test]
    fn prop_rebuild_is_identical(raw in small_alphabet_text(150)) {
        let a = SuffixArrayIndex::new(TextCorpus::from_bytes(raw.clone()).unwrap());
        let b = SuffixArrayIndex::new(TextCorpus::from_bytes(raw).unwrap());
        prop_assert_eq!(a.sa(), b.sa());
    }
}
