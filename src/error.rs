// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types shared by the library and the CLI.
//!
//! Every fatal condition is detected before an output artifact is created.
//! A pattern with zero occurrences is not an error: it is an empty range.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for doclocate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading inputs, querying, or benchmarking.
#[derive(Error, Debug)]
pub enum Error {
    /// Bad argument domain, output collision, too few runs.
    #[error("configuration error: {0}")]
    Config(String),

    /// An input or output file could not be read or created.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input content is malformed (boundary list, corpus bytes).
    #[error("data error: {0}")]
    Data(String),

    /// Queries must contain at least one byte.
    #[error("pattern must not be empty")]
    EmptyPattern,

    /// Writing benchmark rows failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Wrap an `io::Error` with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    pub fn data(msg: impl Into<String>) -> Self {
        Error::Data(msg.into())
    }
}
