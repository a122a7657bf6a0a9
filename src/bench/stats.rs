// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Summary statistics over one parameter value's timing samples.

use crate::contracts::check_quartiles_ordered;
use crate::error::{Error, Result};

/// Mean, sample standard deviation and five-number summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub stdev: f64,
    /// `[Q0, Q1, Q2, Q3, Q4]`: minimum, lower quartile, median, upper quartile, maximum.
    pub quartiles: [f64; 5],
}

pub fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Standard deviation with Bessel's correction (divisor `len - 1`).
pub fn sample_stdev(samples: &[f64], mean: f64) -> Result<f64> {
    if samples.len() < 2 {
        return Err(Error::config(format!(
            "standard deviation needs at least 2 samples, got {}",
            samples.len()
        )));
    }
    let squares: f64 = samples.iter().map(|x| (x - mean) * (x - mean)).sum();
    Ok((squares / (samples.len() - 1) as f64).sqrt())
}

/// Value at 1-based fractional rank `rank`, interpolating between neighbours.
fn interpolate(sorted: &[f64], rank: f64) -> f64 {
    let n = sorted.len();
    let rank = rank.clamp(1.0, n as f64);
    let whole = rank.floor() as usize;
    let frac = rank - whole as f64;
    if whole >= n {
        return sorted[n - 1];
    }
    let (below, above) = (sorted[whole - 1], sorted[whole]);
    // Rounding must not push the result outside its neighbours
    (below + frac * (above - below)).max(below).min(above)
}

/// Five-number summary of ascending `sorted`.
///
/// Q2 is the middle element, or the mean of the two central elements.
/// Q1 and Q3 sit at ranks `(n + 1) / 4` and `3 (n + 1) / 4`.
pub fn quartiles(sorted: &[f64]) -> [f64; 5] {
    let n = sorted.len();
    debug_assert!(n > 0, "quartiles of an empty sample");

    let median = if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    };
    let rank_base = (n + 1) as f64;

    [
        sorted[0],
        interpolate(sorted, rank_base * 0.25),
        median,
        interpolate(sorted, rank_base * 0.75),
        sorted[n - 1],
    ]
}

/// Summarize the samples, sorting them in place.
pub fn summarize(samples: &mut [f64]) -> Result<Summary> {
    let mean = mean(samples);
    let stdev = sample_stdev(samples, mean)?;

    samples.sort_by(f64::total_cmp);
    let quartiles = quartiles(samples);
    check_quartiles_ordered(&quartiles);

    Ok(Summary {
        mean,
        stdev,
        quartiles,
    })
}
