//! Range search and document attribution against brute-force scans.

use super::common::{
    brute_force_documents, brute_force_positions, corpus_from_documents, documents,
    small_alphabet_text, small_pattern,
};
use doclocate::{build_index, BoundaryIndex, IndexKind, SuffixArrayIndex, TextCorpus};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_range_length_is_occurrence_count(
        raw in small_alphabet_text(200),
        pattern in small_pattern(),
    ) {
        let corpus = TextCorpus::from_bytes(raw).unwrap();
        let expected = brute_force_positions(corpus.as_bytes(), &pattern);
        let index = SuffixArrayIndex::new(corpus);

        let range = index.locate_range(&pattern).unwrap();
        prop_assert_eq!(range.len(), expected.len());

        let mut positions = index.occurrences(range).to_vec();
        positions.sort_unstable();
        prop_assert_eq!(positions, expected);
    }

    #[test]
    fn prop_doc_id_is_total(
        starts in prop::collection::btree_set(0usize..500, 1..20),
        pos in 0usize..1000,
    ) {
        let starts: Vec<usize> = starts.into_iter().collect();
        let k = starts.len();
        let boundaries = BoundaryIndex::from_starts(starts.clone()).unwrap();

        let id = boundaries.doc_id(pos);
        prop_assert!((1..=k).contains(&id));
        if pos >= starts[0] {
            // The owning document starts at or before pos
            prop_assert!(starts[id - 1] <= pos);
            prop_assert!(id == k || starts[id] > pos);
        }
    }

    #[test]
    fn prop_doc_id_monotone(
        starts in prop::collection::btree_set(0usize..300, 1..10),
        a in 0usize..400,
        b in 0usize..400,
    ) {
        let boundaries = BoundaryIndex::from_starts(starts.into_iter().collect()).unwrap();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(boundaries.doc_id(lo) <= boundaries.doc_id(hi));
    }

    #[test]
    fn prop_doc_locate_matches_scan(docs in documents(), pattern in small_pattern()) {
        let (corpus, boundaries) = corpus_from_documents(&docs);
        let expected = brute_force_documents(corpus.as_bytes(), &pattern, &boundaries);
        let index = SuffixArrayIndex::new(corpus);
        prop_assert_eq!(index.doc_locate(&pattern, &boundaries).unwrap(), expected);
    }

    #[test]
    fn prop_doc_locate_is_idempotent(docs in documents(), pattern in small_pattern()) {
        let (corpus, boundaries) = corpus_from_documents(&docs);
        let index = SuffixArrayIndex::new(corpus);
        let first = index.doc_locate(&pattern, &boundaries).unwrap();
        let second = index.doc_locate(&pattern, &boundaries).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_fm_agrees_with_suffix_array(
        docs in documents(),
        pattern in small_pattern(),
        rate in 1usize..40,
    ) {
        let (corpus, boundaries) = corpus_from_documents(&docs);
        let sa = build_index(IndexKind::Sa, corpus.clone(), rate).unwrap();
        let fm = build_index(IndexKind::Fm, corpus, rate).unwrap();

        prop_assert_eq!(sa.count(&pattern).unwrap(), fm.count(&pattern).unwrap());

        let mut a = sa.locate(&pattern).unwrap();
        let mut b = fm.locate(&pattern).unwrap();
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);

        prop_assert_eq!(
            sa.doc_locate(&pattern, &boundaries).unwrap(),
            fm.doc_locate(&pattern, &boundaries).unwrap()
        );
    }
}
