// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the doclocate command-line interface.
//!
//! Four subcommands: `locate` answers doc_locate queries, `bench` sweeps the
//! pattern length against an index, `probe` sweeps the target position of an
//! array search, and `concat` prepares a corpus from separate documents.
//! Sweep arguments are positional, in the order the result files are named.

pub mod commands;
pub mod display;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use doclocate::bench::{PatternOperation, ProbeMethod, TimeUnit, DEFAULT_PROBE_SIZE};
use doclocate::fm_index::DEFAULT_SAMPLE_RATE;
use doclocate::IndexKind;

#[derive(Parser)]
#[command(
    name = "doclocate",
    about = "Find which documents of a concatenated corpus contain a pattern, and time it",
    version
)]
pub struct Cli {
    /// Log more (-v info, -vv debug). RUST_LOG applies when not given.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Sweep shared by `bench` and `probe`.
#[derive(Args, Debug)]
pub struct SweepArgs {
    /// CSV file to create (must not exist)
    pub output: PathBuf,

    /// Trials per swept value (at least 32)
    pub runs: usize,

    /// First swept value
    pub lower: usize,

    /// Last swept value (inclusive)
    pub upper: usize,

    /// Distance between swept values
    pub step: usize,

    /// Unit of the reported timings
    #[arg(long, value_enum, default_value_t = TimeUnit::Us)]
    pub unit: TimeUnit,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the documents containing each pattern
    Locate {
        /// Concatenated corpus file
        corpus: PathBuf,

        /// Document start offsets, one per line
        boundaries: PathBuf,

        /// Patterns to look up
        #[arg(required = true)]
        patterns: Vec<String>,

        /// Index structure to build
        #[arg(long, value_enum, default_value_t = IndexKind::Sa)]
        index: IndexKind,

        /// Suffix array sampling distance for the FM-index
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Time queries for random patterns of growing length
    Bench {
        #[command(flatten)]
        sweep: SweepArgs,

        /// Concatenated corpus file
        corpus: PathBuf,

        /// Document start offsets, one per line
        boundaries: PathBuf,

        /// Dataset label written to every row
        dataset: String,

        /// Index structure to build
        #[arg(long, value_enum, default_value_t = IndexKind::Sa)]
        index: IndexKind,

        /// Query to time
        #[arg(long, value_enum, default_value_t = PatternOperation::DocLocate)]
        operation: PatternOperation,

        /// Seed for pattern sampling (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Suffix array sampling distance for the FM-index
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: usize,
    },

    /// Time array searches for targets at growing positions
    Probe {
        #[command(flatten)]
        sweep: SweepArgs,

        /// Search method to time
        #[arg(long, value_enum, default_value_t = ProbeMethod::Binary)]
        method: ProbeMethod,

        /// Length of the sorted array searched
        #[arg(long, default_value_t = DEFAULT_PROBE_SIZE)]
        size: usize,
    },

    /// Join documents into a corpus file and a boundary file
    Concat {
        /// Corpus file to create
        corpus_out: PathBuf,

        /// Boundary file to create
        boundaries_out: PathBuf,

        /// Documents, in order
        #[arg(required = true)]
        documents: Vec<PathBuf>,

        /// Single ASCII byte placed between documents
        #[arg(long, default_value_t = '$')]
        delimiter: char,
    },
}
