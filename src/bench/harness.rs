// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Sweep driver: validate, run `runs` trials per value, summarize, report.
//!
//! ```text
//!   validate config ──▶ output free? ──▶ workload limits ──▶ create CSV
//!                                                                │
//!        for value in lower..=upper step ◀──────────────────────┘
//!            runs × trial(value) ──▶ summarize ──▶ write row
//! ```
//!
//! Every check before "create CSV" can fail without leaving a file behind.

use std::path::Path;

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

use super::report::{BuildProfile, ReportWriter};
use super::stats::{summarize, Summary};
use super::workload::{TimeUnit, Workload};
use crate::error::{Error, Result};

/// Fewest trials per value that give a usable distribution.
pub const MIN_RUNS: usize = 32;

/// Most trials per value; bounds the per-value sample buffer.
pub const MAX_RUNS: usize = 10_000_000;

/// Sweep parameters: `runs` trials for each value in `lower..=upper` by `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    pub runs: usize,
    pub lower: usize,
    pub upper: usize,
    pub step: usize,
}

impl SweepConfig {
    pub fn validate(&self) -> Result<()> {
        if self.runs < MIN_RUNS {
            return Err(Error::config(format!(
                "runs must be at least {}, got {}",
                MIN_RUNS, self.runs
            )));
        }
        if self.lower < 1 {
            return Err(Error::config("lower bound must be at least 1"));
        }
        if self.step < 1 {
            return Err(Error::config("step must be at least 1"));
        }
        if self.lower > self.upper {
            return Err(Error::config(format!(
                "lower bound {} is greater than upper bound {}",
                self.lower, self.upper
            )));
        }
        if self.runs > MAX_RUNS {
            return Err(Error::config(format!(
                "runs must be at most {}, got {}",
                MAX_RUNS, self.runs
            )));
        }
        if self.runs.checked_mul(self.value_count()).is_none() {
            return Err(Error::config(format!(
                "{} runs over {} values is too many trials",
                self.runs,
                self.value_count()
            )));
        }
        Ok(())
    }

    /// Swept values in ascending order.
    pub fn values(&self) -> impl Iterator<Item = usize> {
        (self.lower..=self.upper).step_by(self.step.max(1))
    }

    pub fn value_count(&self) -> usize {
        (self.upper.saturating_sub(self.lower) / self.step.max(1)).saturating_add(1)
    }

    pub fn total_trials(&self) -> usize {
        self.runs.saturating_mul(self.value_count())
    }
}

/// Fail if `path` already exists.
pub fn check_output_available(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(Error::config(format!(
            "output file {} already exists; refusing to overwrite",
            path.display()
        )));
    }
    Ok(())
}

/// One summarized sweep value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRow {
    pub value: usize,
    pub summary: Summary,
}

#[cfg(feature = "progress")]
fn create_progress_bar(total: usize, parameter: &str) -> ProgressBar {
    let style = ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸");

    let bar = ProgressBar::new(total as u64);
    bar.set_style(style);
    bar.set_prefix(format!("{} sweep", parameter));
    bar
}

/// Run the sweep and stream each row into `report`.
pub fn run_sweep<W, L>(
    config: &SweepConfig,
    workload: &mut L,
    unit: TimeUnit,
    report: &mut ReportWriter<W>,
) -> Result<Vec<SweepRow>>
where
    W: std::io::Write,
    L: Workload + ?Sized,
{
    let parameter = workload.parameter();

    #[cfg(feature = "progress")]
    let bar = create_progress_bar(config.total_trials(), parameter);

    let mut rows = Vec::with_capacity(config.value_count());
    let mut samples = Vec::with_capacity(config.runs);

    for value in config.values() {
        #[cfg(feature = "progress")]
        bar.set_message(format!("{}={}", parameter, value));

        samples.clear();
        for _ in 0..config.runs {
            let elapsed = workload.trial(value)?;
            samples.push(unit.convert(elapsed));

            #[cfg(feature = "progress")]
            bar.inc(1);
        }

        let summary = summarize(&mut samples)?;
        tracing::debug!(
            parameter,
            value,
            mean = summary.mean,
            stdev = summary.stdev,
            median = summary.quartiles[2],
            "sweep value done"
        );
        report.write_row(value, &summary)?;
        rows.push(SweepRow { value, summary });
    }

    #[cfg(feature = "progress")]
    bar.finish_and_clear();

    Ok(rows)
}

/// Validate everything, create `output`, then run the sweep into it.
///
/// Nothing is written if validation fails.
pub fn run_benchmark<L>(
    output: &Path,
    config: &SweepConfig,
    workload: &mut L,
    unit: TimeUnit,
    profile: Option<BuildProfile>,
) -> Result<Vec<SweepRow>>
where
    L: Workload + ?Sized,
{
    config.validate()?;
    check_output_available(output)?;
    workload.check_upper(config.upper)?;

    tracing::info!(
        output = %output.display(),
        runs = config.runs,
        lower = config.lower,
        upper = config.upper,
        step = config.step,
        "starting sweep"
    );

    let mut report = ReportWriter::create(output, workload.parameter(), profile)?;
    run_sweep(config, workload, unit, &mut report)
}
