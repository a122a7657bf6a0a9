// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! FM-index over the corpus: the compact alternative to the plain suffix array.
//!
//! Stores the BWT (one byte per symbol, remapped to a dense alphabet), the
//! C table, occurrence checkpoints every [`OCC_INTERVAL`] rows, and the suffix
//! array values of rows whose text position is a multiple of the sample rate.
//! The text itself is not kept.
//!
//! | Operation | Time                          |
//! |-----------|-------------------------------|
//! | count     | O(m · OCC_INTERVAL)           |
//! | locate    | count + O(occ · sample_rate · OCC_INTERVAL) |
//!
//! No wavelet tree and no compressed bit vectors: rank is a checkpoint plus a
//! short scan.

use std::mem;
use std::ops::Range;

use crate::corpus::TextCorpus;
use crate::error::{Error, Result};
use crate::sais::build_suffix_array;

/// Rows between occurrence checkpoints.
pub const OCC_INTERVAL: usize = 128;

/// Default distance between sampled text positions.
pub const DEFAULT_SAMPLE_RATE: usize = 32;

/// Marker for bytes that never occur in the corpus.
const ABSENT: u16 = u16::MAX;

/// Backward-search index with sampled locate support.
#[derive(Debug, Clone)]
pub struct FmIndex {
    /// BWT in dense symbol codes.
    bwt: Vec<u8>,
    /// Byte → dense code, `ABSENT` for bytes not in the corpus.
    codes: [u16; 256],
    /// `c_table[c]` = number of BWT symbols with code smaller than `c`.
    c_table: Vec<usize>,
    /// Occurrences of each code before every checkpoint row, `sigma` per checkpoint.
    occ: Vec<u32>,
    sigma: usize,
    /// One bit per row: is this row's SA value sampled?
    sampled_bits: Vec<u64>,
    /// Set bits before each word of `sampled_bits`.
    sampled_rank: Vec<u32>,
    /// SA values of sampled rows, in row order.
    samples: Vec<usize>,
    sample_rate: usize,
}

impl FmIndex {
    /// Build from a sentinel-terminated corpus.
    ///
    /// `sample_rate` trades locate speed for memory; 0 is treated as 1.
    pub fn build(corpus: &TextCorpus, sample_rate: usize) -> Result<Self> {
        let text = corpus.as_bytes();
        let n = text.len();
        if n > u32::MAX as usize {
            return Err(Error::data(format!(
                "corpus of {} bytes exceeds the FM-index limit of {} bytes",
                n,
                u32::MAX
            )));
        }
        let sample_rate = sample_rate.max(1);

        // Dense alphabet: codes follow byte order so the C table stays sorted
        let mut present = [false; 256];
        for &b in text {
            present[b as usize] = true;
        }
        let mut codes = [ABSENT; 256];
        let mut sigma = 0usize;
        for (byte, &is_present) in present.iter().enumerate() {
            if is_present {
                codes[byte] = sigma as u16;
                sigma += 1;
            }
        }
        debug_assert!(sigma <= 256);

        let sa = build_suffix_array(text);

        let bwt: Vec<u8> = sa
            .iter()
            .map(|&pos| {
                let prev = if pos == 0 { n - 1 } else { pos - 1 };
                codes[text[prev] as usize] as u8
            })
            .collect();

        let mut counts = vec![0usize; sigma];
        for &c in &bwt {
            counts[c as usize] += 1;
        }
        let mut c_table = Vec::with_capacity(sigma);
        let mut sum = 0;
        for &count in &counts {
            c_table.push(sum);
            sum += count;
        }

        let checkpoints = n / OCC_INTERVAL + 1;
        let mut occ = vec![0u32; checkpoints * sigma];
        let mut running = vec![0u32; sigma];
        for (row, &c) in bwt.iter().enumerate() {
            if row % OCC_INTERVAL == 0 {
                let base = (row / OCC_INTERVAL) * sigma;
                occ[base..base + sigma].copy_from_slice(&running);
            }
            running[c as usize] += 1;
        }
        if n % OCC_INTERVAL == 0 {
            let base = (n / OCC_INTERVAL) * sigma;
            occ[base..base + sigma].copy_from_slice(&running);
        }

        let words = n.div_ceil(64);
        let mut sampled_bits = vec![0u64; words];
        let mut samples = Vec::with_capacity(n / sample_rate + 1);
        for (row, &pos) in sa.iter().enumerate() {
            if pos % sample_rate == 0 {
                sampled_bits[row / 64] |= 1u64 << (row % 64);
                samples.push(pos);
            }
        }
        let mut sampled_rank = Vec::with_capacity(words);
        let mut ones = 0u32;
        for &word in &sampled_bits {
            sampled_rank.push(ones);
            ones += word.count_ones();
        }

        Ok(Self {
            bwt,
            codes,
            c_table,
            occ,
            sigma,
            sampled_bits,
            sampled_rank,
            samples,
            sample_rate,
        })
    }

    /// Rows in the index (`n`, sentinel included).
    #[inline]
    pub fn len(&self) -> usize {
        self.bwt.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bwt.is_empty()
    }

    pub fn sample_rate(&self) -> usize {
        self.sample_rate
    }

    /// Occurrences of code `c` in `bwt[..row]`.
    #[inline]
    fn rank(&self, c: u8, row: usize) -> usize {
        let block = row / OCC_INTERVAL;
        let base = self.occ[block * self.sigma + c as usize] as usize;
        let from = block * OCC_INTERVAL;
        base + self.bwt[from..row].iter().filter(|&&b| b == c).count()
    }

    /// LF mapping: row of the suffix one position to the left.
    #[inline]
    fn lf(&self, row: usize) -> usize {
        let c = self.bwt[row];
        self.c_table[c as usize] + self.rank(c, row)
    }

    #[inline]
    fn is_sampled(&self, row: usize) -> bool {
        self.sampled_bits[row / 64] & (1u64 << (row % 64)) != 0
    }

    #[inline]
    fn sample_index(&self, row: usize) -> usize {
        let word = self.sampled_bits[row / 64];
        let below = word & ((1u64 << (row % 64)) - 1);
        self.sampled_rank[row / 64] as usize + below.count_ones() as usize
    }

    /// Text position of the suffix at `row`.
    ///
    /// Walks LF at most `sample_rate - 1` times: positions drop by one per
    /// step and position 0 is always sampled.
    fn resolve(&self, mut row: usize) -> usize {
        let mut steps = 0;
        while !self.is_sampled(row) {
            row = self.lf(row);
            steps += 1;
        }
        self.samples[self.sample_index(row)] + steps
    }

    /// Suffix array rows whose suffixes start with `pattern`.
    pub fn backward_search(&self, pattern: &[u8]) -> Range<usize> {
        let mut sp = 0;
        let mut ep = self.len();

        for &byte in pattern.iter().rev() {
            let code = self.codes[byte as usize];
            if code == ABSENT {
                return 0..0;
            }
            let c = code as u8;
            sp = self.c_table[c as usize] + self.rank(c, sp);
            ep = self.c_table[c as usize] + self.rank(c, ep);
            if sp >= ep {
                return 0..0;
            }
        }
        sp..ep
    }

    /// Number of occurrences of a non-empty pattern.
    pub fn count(&self, pattern: &[u8]) -> Result<usize> {
        if pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }
        Ok(self.backward_search(pattern).len())
    }

    /// Text positions of every occurrence, in suffix order.
    pub fn locate(&self, pattern: &[u8]) -> Result<Vec<usize>> {
        if pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }
        Ok(self
            .backward_search(pattern)
            .map(|row| self.resolve(row))
            .collect())
    }

    /// Approximate heap footprint.
    pub fn size_in_bytes(&self) -> usize {
        self.bwt.len()
            + mem::size_of_val(&self.codes)
            + self.c_table.len() * mem::size_of::<usize>()
            + self.occ.len() * mem::size_of::<u32>()
            + self.sampled_bits.len() * mem::size_of::<u64>()
            + self.sampled_rank.len() * mem::size_of::<u32>()
            + self.samples.len() * mem::size_of::<usize>()
    }
}
