//! Corpus preparation feeding straight into doc_locate.

use doclocate::{concatenate, BoundaryIndex, SuffixArrayIndex, TextCorpus};
use std::fs;

#[test]
fn concatenated_files_answer_queries() {
    let dir = tempfile::tempdir().unwrap();
    let docs: Vec<_> = ["<title>rust</title>", "<title>lean</title>", "rust and lean"]
        .iter()
        .enumerate()
        .map(|(i, body)| {
            let path = dir.path().join(format!("{}.xml", i));
            fs::write(&path, body).unwrap();
            path
        })
        .collect();

    let corpus_path = dir.path().join("corpus.txt");
    let bounds_path = dir.path().join("bounds.txt");
    concatenate(&docs, b'$', &corpus_path, &bounds_path).unwrap();

    let corpus = TextCorpus::load(&corpus_path).unwrap();
    let boundaries = BoundaryIndex::load(&bounds_path).unwrap();
    assert_eq!(boundaries.len(), 3);

    let index = SuffixArrayIndex::new(corpus);
    let rust: Vec<_> = index.doc_locate(b"rust", &boundaries).unwrap().into_iter().collect();
    let title: Vec<_> = index.doc_locate(b"<title>", &boundaries).unwrap().into_iter().collect();
    assert_eq!(rust, vec![1, 3]);
    assert_eq!(title, vec![1, 2]);
}
