// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index selection: one capability trait over the suffix array and the FM-index.
//!
//! Callers that only need `count`, `locate` or `doc_locate` hold a
//! `Box<dyn TextIndex>` and pick the structure at runtime with [`IndexKind`].

use std::fmt;
use std::time::{Duration, Instant};

use clap::ValueEnum;

use crate::boundaries::BoundaryIndex;
use crate::corpus::TextCorpus;
use crate::error::Result;
use crate::fm_index::FmIndex;
use crate::locate::{attribute, DocumentIdSet};
use crate::suffix_array::SuffixArrayIndex;

/// Which full-text structure to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IndexKind {
    /// Plain suffix array plus the text
    Sa,
    /// BWT with occurrence checkpoints and a sampled suffix array
    Fm,
}

impl IndexKind {
    /// Label written to the `structure` column of benchmark reports.
    pub fn label(self) -> &'static str {
        match self {
            IndexKind::Sa => "suffix-array",
            IndexKind::Fm => "fm-index",
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Queries every full-text structure answers.
pub trait TextIndex {
    fn kind(&self) -> IndexKind;

    /// Occurrences of `pattern` in the corpus.
    fn count(&self, pattern: &[u8]) -> Result<usize>;

    /// Text positions of every occurrence, in suffix order.
    fn locate(&self, pattern: &[u8]) -> Result<Vec<usize>>;

    /// Distinct documents containing `pattern`.
    fn doc_locate(&self, pattern: &[u8], boundaries: &BoundaryIndex) -> Result<DocumentIdSet> {
        Ok(attribute(self.locate(pattern)?, boundaries))
    }

    /// Approximate heap footprint.
    fn size_in_bytes(&self) -> usize;
}

impl TextIndex for SuffixArrayIndex {
    fn kind(&self) -> IndexKind {
        IndexKind::Sa
    }

    fn count(&self, pattern: &[u8]) -> Result<usize> {
        Ok(self.locate_range(pattern)?.len())
    }

    fn locate(&self, pattern: &[u8]) -> Result<Vec<usize>> {
        let range = self.locate_range(pattern)?;
        Ok(self.occurrences(range).to_vec())
    }

    // Reads positions straight out of the array instead of copying them
    fn doc_locate(&self, pattern: &[u8], boundaries: &BoundaryIndex) -> Result<DocumentIdSet> {
        SuffixArrayIndex::doc_locate(self, pattern, boundaries)
    }

    fn size_in_bytes(&self) -> usize {
        SuffixArrayIndex::size_in_bytes(self)
    }
}

impl TextIndex for FmIndex {
    fn kind(&self) -> IndexKind {
        IndexKind::Fm
    }

    fn count(&self, pattern: &[u8]) -> Result<usize> {
        FmIndex::count(self, pattern)
    }

    fn locate(&self, pattern: &[u8]) -> Result<Vec<usize>> {
        FmIndex::locate(self, pattern)
    }

    fn size_in_bytes(&self) -> usize {
        FmIndex::size_in_bytes(self)
    }
}

/// Construction cost of an index, measured once.
#[derive(Debug, Clone, Copy)]
pub struct BuildStats {
    pub kind: IndexKind,
    pub build_time: Duration,
    pub size_in_bytes: usize,
}

impl BuildStats {
    pub fn build_time_ms(&self) -> f64 {
        self.build_time.as_secs_f64() * 1_000.0
    }

    pub fn memory_mb(&self) -> f64 {
        self.size_in_bytes as f64 / (1024.0 * 1024.0)
    }
}

/// Build the requested structure over `corpus`.
///
/// `sample_rate` only affects the FM-index.
pub fn build_index(
    kind: IndexKind,
    corpus: TextCorpus,
    sample_rate: usize,
) -> Result<Box<dyn TextIndex>> {
    Ok(match kind {
        IndexKind::Sa => Box::new(SuffixArrayIndex::new(corpus)),
        IndexKind::Fm => Box::new(FmIndex::build(&corpus, sample_rate)?),
    })
}

/// [`build_index`], timed.
pub fn build_index_timed(
    kind: IndexKind,
    corpus: TextCorpus,
    sample_rate: usize,
) -> Result<(Box<dyn TextIndex>, BuildStats)> {
    let bytes = corpus.len();
    let start = Instant::now();
    let index = build_index(kind, corpus, sample_rate)?;
    let build_time = start.elapsed();

    let stats = BuildStats {
        kind,
        build_time,
        size_in_bytes: index.size_in_bytes(),
    };
    tracing::info!(
        structure = %kind,
        corpus_bytes = bytes,
        build_ms = stats.build_time_ms(),
        memory_mb = stats.memory_mb(),
        "index built"
    );
    Ok((index, stats))
}
