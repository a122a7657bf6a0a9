// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document-level pattern location over a concatenated corpus.
//!
//! Given a corpus `T` made of documents laid end to end and the offsets where
//! each document starts, `doc_locate(P)` reports the set of documents that
//! contain pattern `P`. A statistical harness times the query against two
//! index representations.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌────────────────┐     ┌──────────────┐
//! │  corpus.rs  │────▶│ suffix_array.rs│────▶│  locate.rs   │
//! │ (TextCorpus)│     │ (SA-IS build,  │     │ (range [L,R],│
//! └─────────────┘     │  comparator)   │     │  doc_locate) │
//!        │            └────────────────┘     └──────────────┘
//!        │            ┌────────────────┐            │
//!        └───────────▶│  fm_index.rs   │            │
//!                     └────────────────┘            ▼
//! ┌─────────────┐     ┌────────────────┐     ┌──────────────┐
//! │boundaries.rs│────▶│   index.rs     │────▶│   bench/     │
//! │ (doc_id)    │     │  (TextIndex)   │     │ (sweep, CSV) │
//! └─────────────┘     └────────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use doclocate::{BoundaryIndex, SuffixArrayIndex, TextCorpus};
//!
//! let corpus = TextCorpus::from_bytes(b"AB$BA$AB$".to_vec()).unwrap();
//! let boundaries = BoundaryIndex::from_starts(vec![0, 3, 6]).unwrap();
//! let index = SuffixArrayIndex::new(corpus);
//!
//! let docs = index.doc_locate(b"AB", &boundaries).unwrap();
//! assert_eq!(docs.into_iter().collect::<Vec<_>>(), vec![1, 3]);
//! ```

pub mod bench;
pub mod boundaries;
pub mod concat;
pub mod contracts;
pub mod corpus;
pub mod error;
pub mod fm_index;
pub mod index;
pub mod locate;
pub mod sais;
pub mod suffix_array;
pub mod testing;

pub use boundaries::BoundaryIndex;
pub use concat::{concatenate, join_documents};
pub use corpus::{TextCorpus, SENTINEL};
pub use error::{Error, Result};
pub use fm_index::FmIndex;
pub use index::{build_index, build_index_timed, BuildStats, IndexKind, TextIndex};
pub use locate::{attribute, DocumentIdSet, SearchRange};
pub use sais::build_suffix_array;
pub use suffix_array::{compare_suffix, is_suffix_array_sorted, SuffixArrayIndex};
