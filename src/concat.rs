// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Build a corpus file and its boundary file from separate documents.
//!
//! ```text
//!   doc1 = "AB", doc2 = "BA", doc3 = "AB", delimiter '$'
//!
//!   corpus:      A B $ B A $ A B
//!   boundaries:  0     3     6
//! ```
//!
//! The delimiter goes between documents, not after the last one. It belongs
//! to the document that precedes it.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::corpus::SENTINEL;
use crate::error::{Error, Result};

/// Default document separator.
pub const DEFAULT_DELIMITER: u8 = b'$';

/// Concatenated bytes and document start offsets, before writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concatenation {
    pub corpus: Vec<u8>,
    pub starts: Vec<usize>,
}

/// Join in-memory documents with `delimiter` between them.
pub fn join_documents<D: AsRef<[u8]>>(documents: &[D], delimiter: u8) -> Concatenation {
    let total: usize = documents.iter().map(|d| d.as_ref().len() + 1).sum();
    let mut corpus = Vec::with_capacity(total);
    let mut starts = Vec::with_capacity(documents.len());

    for (i, document) in documents.iter().enumerate() {
        if i > 0 {
            corpus.push(delimiter);
        }
        starts.push(corpus.len());
        corpus.extend_from_slice(document.as_ref());
    }

    Concatenation { corpus, starts }
}

fn refuse_existing(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(Error::config(format!(
            "{} already exists; refusing to overwrite",
            path.display()
        )));
    }
    Ok(())
}

fn write_new(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;
    file.write_all(bytes).map_err(|e| Error::io(path, e))
}

/// Read every document, then write `corpus_out` and `boundaries_out`.
///
/// All inputs are read and validated before either output is created.
/// Returns the document start offsets.
pub fn concatenate(
    documents: &[PathBuf],
    delimiter: u8,
    corpus_out: &Path,
    boundaries_out: &Path,
) -> Result<Vec<usize>> {
    if documents.is_empty() {
        return Err(Error::config("at least one document is required"));
    }
    if delimiter == SENTINEL {
        return Err(Error::config("the delimiter cannot be the NUL sentinel byte"));
    }
    refuse_existing(corpus_out)?;
    refuse_existing(boundaries_out)?;

    let mut contents = Vec::with_capacity(documents.len());
    for path in documents {
        let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
        if bytes.contains(&SENTINEL) {
            return Err(Error::data(format!(
                "document {} contains a NUL byte",
                path.display()
            )));
        }
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "read document");
        contents.push(bytes);
    }

    let Concatenation { corpus, starts } = join_documents(&contents, delimiter);

    let boundary_text: String = starts.iter().map(|s| format!("{}\n", s)).collect();
    write_new(corpus_out, &corpus)?;
    write_new(boundaries_out, boundary_text.as_bytes())?;

    tracing::info!(
        documents = starts.len(),
        corpus_bytes = corpus.len(),
        "corpus written"
    );
    Ok(starts)
}
