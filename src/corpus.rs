// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The concatenated text `T` with its sentinel.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **SENTINEL_UNIQUE**: `SENTINEL` occurs exactly once in `bytes`, at `len() - 1`.
//! 2. **IMMUTABLE**: the bytes never change after construction.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Terminator appended to every corpus. Smaller than every real symbol.
pub const SENTINEL: u8 = 0;

/// Concatenated corpus bytes with the sentinel appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCorpus {
    bytes: Vec<u8>,
}

impl TextCorpus {
    /// Take ownership of raw corpus bytes and append the sentinel.
    ///
    /// Fails with [`Error::Data`] if the input already contains the sentinel
    /// byte, since the suffix order relies on it being unique.
    pub fn from_bytes(mut raw: Vec<u8>) -> Result<Self> {
        if let Some(pos) = raw.iter().position(|&b| b == SENTINEL) {
            return Err(Error::data(format!(
                "corpus contains a NUL byte at offset {}; NUL is reserved for the sentinel",
                pos
            )));
        }
        raw.push(SENTINEL);
        Ok(Self { bytes: raw })
    }

    /// Read a corpus file fully into memory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(path = %path.display(), bytes = raw.len(), "loaded corpus");
        Self::from_bytes(raw)
    }

    /// All bytes including the trailing sentinel.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The real symbols, without the sentinel.
    #[inline]
    pub fn content(&self) -> &[u8] {
        &self.bytes[..self.bytes.len() - 1]
    }

    /// `n`, counting the sentinel.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the corpus holds nothing but the sentinel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.len() == 1
    }
}
