// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document boundaries: where each document starts inside the corpus.
//!
//! Document ids are 1-based. `starts[i]` is the offset of document `i + 1`;
//! the last document runs to the end of the corpus.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **NON_EMPTY**: at least one boundary.
//! 2. **STRICTLY_INCREASING**: `starts[i] < starts[i + 1]`.
//! 3. **TOTAL_MAPPING**: [`BoundaryIndex::doc_id`] returns an id in `[1, k]` for every position.

use std::fs;
use std::ops::Range;
use std::path::Path;

use crate::error::{Error, Result};

/// Sorted start offsets of every document in the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryIndex {
    starts: Vec<usize>,
}

impl BoundaryIndex {
    /// Validate and wrap a list of start offsets.
    pub fn from_starts(starts: Vec<usize>) -> Result<Self> {
        if starts.is_empty() {
            return Err(Error::data("boundary list is empty"));
        }
        if let Some(i) = starts.windows(2).position(|w| w[0] >= w[1]) {
            return Err(Error::data(format!(
                "boundaries must be strictly increasing: entry {} ({}) is followed by {}",
                i + 1,
                starts[i],
                starts[i + 1]
            )));
        }
        Ok(Self { starts })
    }

    /// Parse whitespace-separated offsets (one per line in practice).
    pub fn parse(source: &str) -> Result<Self> {
        let starts = source
            .split_whitespace()
            .enumerate()
            .map(|(i, token)| {
                token.parse::<usize>().map_err(|_| {
                    Error::data(format!(
                        "boundary {} is not a non-negative integer: {:?}",
                        i + 1,
                        token
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_starts(starts)
    }

    /// Load the boundary file produced alongside the corpus.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let index = Self::parse(&source)?;
        tracing::debug!(path = %path.display(), documents = index.len(), "loaded boundaries");
        Ok(index)
    }

    /// Map a text position to its 1-based document id.
    ///
    /// Upper-bound search: the number of starts `<= pos` is the id. A
    /// position before the first start clamps to document 1, anything at or
    /// past the last start belongs to the last document.
    #[inline]
    pub fn doc_id(&self, pos: usize) -> usize {
        let id = self.starts.partition_point(|&start| start <= pos);
        id.clamp(1, self.starts.len())
    }

    /// Number of documents `k`.
    #[inline]
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    /// Always false; an empty boundary list is rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    pub fn starts(&self) -> &[usize] {
        &self.starts
    }

    /// Byte span of document `id` inside a corpus of `text_len` bytes.
    pub fn document_span(&self, id: usize, text_len: usize) -> Option<Range<usize>> {
        if id == 0 || id > self.starts.len() {
            return None;
        }
        let start = self.starts[id - 1];
        let end = self.starts.get(id).copied().unwrap_or(text_len);
        Some(start.min(end)..end)
    }

    /// Documents whose span inside a `text_len`-byte corpus holds no bytes.
    pub fn empty_documents(&self, text_len: usize) -> usize {
        (1..=self.len())
            .filter(|&id| self.document_span(id, text_len).map_or(true, |span| span.is_empty()))
            .count()
    }
}
