//! doc_locate on the reference three-document corpus, for every index kind.

use super::common::three_docs;
use doclocate::{build_index, IndexKind, SuffixArrayIndex};

fn ids(set: doclocate::DocumentIdSet) -> Vec<usize> {
    set.into_iter().collect()
}

#[test]
fn suffix_array_range_for_ab() {
    let (corpus, _) = three_docs();
    let index = SuffixArrayIndex::new(corpus);
    let range = index.locate_range(b"AB").unwrap();
    assert_eq!(range.len(), 2);

    let mut positions = index.occurrences(range).to_vec();
    positions.sort_unstable();
    assert_eq!(positions, vec![0, 6]);
}

#[test]
fn zzz_is_an_empty_range() {
    let (corpus, boundaries) = three_docs();
    let index = SuffixArrayIndex::new(corpus);
    let range = index.locate_range(b"ZZZ").unwrap();
    assert!(range.is_empty());
    assert!(range.last().is_none());
    assert!(index.doc_locate(b"ZZZ", &boundaries).unwrap().is_empty());
}

#[test]
fn every_kind_attributes_documents() {
    for kind in [IndexKind::Sa, IndexKind::Fm] {
        let (corpus, boundaries) = three_docs();
        let index = build_index(kind, corpus, 2).unwrap();

        assert_eq!(ids(index.doc_locate(b"AB", &boundaries).unwrap()), vec![1, 3], "{}", kind);
        assert_eq!(ids(index.doc_locate(b"BA", &boundaries).unwrap()), vec![2], "{}", kind);
        assert_eq!(ids(index.doc_locate(b"$", &boundaries).unwrap()), vec![1, 2, 3], "{}", kind);
        assert_eq!(ids(index.doc_locate(b"B$B", &boundaries).unwrap()), vec![1], "{}", kind);
        assert_eq!(index.count(b"A").unwrap(), 3, "{}", kind);
    }
}

#[test]
fn empty_pattern_is_an_error_for_every_kind() {
    for kind in [IndexKind::Sa, IndexKind::Fm] {
        let (corpus, boundaries) = three_docs();
        let index = build_index(kind, corpus, 2).unwrap();
        assert!(matches!(index.count(b""), Err(doclocate::Error::EmptyPattern)));
        assert!(matches!(
            index.doc_locate(b"", &boundaries),
            Err(doclocate::Error::EmptyPattern)
        ));
    }
}
