// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Operations the harness can time.
//!
//! A workload picks its input for a parameter value outside the timed
//! region, then times exactly one call. Results go through
//! [`std::hint::black_box`] so the call is not optimised away.

use std::hint::black_box;
use std::time::{Duration, Instant};

use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::probe::{binary_search, galloping_search, sequential_search};
use crate::boundaries::BoundaryIndex;
use crate::error::{Error, Result};
use crate::index::TextIndex;

/// One timed operation, parameterised by the swept value.
pub trait Workload {
    /// CSV column name of the swept parameter.
    fn parameter(&self) -> &'static str;

    /// Reject sweeps whose largest value the workload cannot serve.
    fn check_upper(&self, upper: usize) -> Result<()>;

    /// Prepare an input for `value`, run the operation once, return its duration.
    fn trial(&mut self, value: usize) -> Result<Duration>;
}

/// Unit the timing samples are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TimeUnit {
    /// Nanoseconds
    Ns,
    /// Microseconds
    #[default]
    Us,
    /// Milliseconds
    Ms,
}

impl TimeUnit {
    pub fn convert(self, elapsed: Duration) -> f64 {
        let secs = elapsed.as_secs_f64();
        match self {
            TimeUnit::Ns => secs * 1e9,
            TimeUnit::Us => secs * 1e6,
            TimeUnit::Ms => secs * 1e3,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Ns => "ns",
            TimeUnit::Us => "µs",
            TimeUnit::Ms => "ms",
        }
    }
}

// ============================================================================
// PATTERN QUERIES
// ============================================================================

/// Query timed by a [`PatternWorkload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PatternOperation {
    /// Number of occurrences
    Count,
    /// Text positions of all occurrences
    Locate,
    /// Distinct documents containing the pattern
    #[default]
    DocLocate,
}

/// Times a query for a random corpus substring of length `n`.
pub struct PatternWorkload<'a> {
    index: &'a dyn TextIndex,
    boundaries: &'a BoundaryIndex,
    content: &'a [u8],
    operation: PatternOperation,
    rng: StdRng,
}

impl<'a> PatternWorkload<'a> {
    /// `content` is the corpus without its sentinel; patterns are cut from it.
    /// A `seed` makes the sampled patterns reproducible.
    pub fn new(
        index: &'a dyn TextIndex,
        boundaries: &'a BoundaryIndex,
        content: &'a [u8],
        operation: PatternOperation,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            index,
            boundaries,
            content,
            operation,
            rng,
        }
    }

    fn sample_pattern(&mut self, len: usize) -> &'a [u8] {
        let content = self.content;
        let start = self.rng.gen_range(0..=content.len() - len);
        &content[start..start + len]
    }

    fn run(&self, pattern: &[u8]) -> Result<usize> {
        match self.operation {
            PatternOperation::Count => self.index.count(pattern),
            PatternOperation::Locate => self.index.locate(pattern).map(|p| p.len()),
            PatternOperation::DocLocate => self
                .index
                .doc_locate(pattern, self.boundaries)
                .map(|d| d.len()),
        }
    }
}

impl Workload for PatternWorkload<'_> {
    fn parameter(&self) -> &'static str {
        "n"
    }

    fn check_upper(&self, upper: usize) -> Result<()> {
        if upper > self.content.len() {
            return Err(Error::config(format!(
                "upper pattern length {} exceeds corpus length {}",
                upper,
                self.content.len()
            )));
        }
        Ok(())
    }

    fn trial(&mut self, value: usize) -> Result<Duration> {
        self.check_upper(value)?;
        let pattern = self.sample_pattern(value);

        let start = Instant::now();
        let outcome = black_box(self.run(black_box(pattern)));
        let elapsed = start.elapsed();

        outcome?;
        Ok(elapsed)
    }
}

// ============================================================================
// ARRAY PROBES
// ============================================================================

/// Search method timed by a [`ProbeWorkload`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ProbeMethod {
    Sequential,
    #[default]
    Binary,
    Galloping,
}

/// Default length of the probed array.
pub const DEFAULT_PROBE_SIZE: usize = 100_000;

/// Times a search for target `k` in the sorted array `[0, size)`.
pub struct ProbeWorkload {
    data: Vec<i64>,
    method: ProbeMethod,
}

impl ProbeWorkload {
    pub fn new(size: usize, method: ProbeMethod) -> Self {
        Self {
            data: (0..size as i64).collect(),
            method,
        }
    }

    fn search(&self, target: i64) -> Option<usize> {
        match self.method {
            ProbeMethod::Sequential => sequential_search(&self.data, target),
            ProbeMethod::Binary => binary_search(&self.data, target),
            ProbeMethod::Galloping => galloping_search(&self.data, target),
        }
    }
}

impl Workload for ProbeWorkload {
    fn parameter(&self) -> &'static str {
        "k"
    }

    fn check_upper(&self, upper: usize) -> Result<()> {
        if upper >= self.data.len() {
            return Err(Error::config(format!(
                "upper target {} must be below the array size {}",
                upper,
                self.data.len()
            )));
        }
        Ok(())
    }

    fn trial(&mut self, value: usize) -> Result<Duration> {
        let target = value as i64;

        let start = Instant::now();
        let found = black_box(self.search(black_box(target)));
        let elapsed = start.elapsed();

        debug_assert_eq!(found, Some(value));
        Ok(elapsed)
    }
}
