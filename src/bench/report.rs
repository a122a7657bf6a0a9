// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CSV rows for benchmark sweeps.
//!
//! Plain header: `<param>,t_mean,t_stdev,Q0,Q1,Q2,Q3,Q4`.
//! With a [`BuildProfile`], four columns follow:
//! `dataset,structure,build_time_ms,memory_mb`.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

use super::stats::Summary;
use crate::error::{Error, Result};

const STAT_COLUMNS: [&str; 7] = ["t_mean", "t_stdev", "Q0", "Q1", "Q2", "Q3", "Q4"];
const PROFILE_COLUMNS: [&str; 4] = ["dataset", "structure", "build_time_ms", "memory_mb"];

/// Per-run constants repeated on every row of an extended report.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildProfile {
    pub dataset: String,
    pub structure: String,
    pub build_time_ms: f64,
    pub memory_mb: f64,
}

/// Streams one row per swept value.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
    profile: Option<BuildProfile>,
}

impl ReportWriter<File> {
    /// Create `path` and write the header. Fails if the file already exists.
    pub fn create(
        path: &Path,
        parameter: &str,
        profile: Option<BuildProfile>,
    ) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| Error::io(path, e))?;
        Self::from_writer(file, parameter, profile)
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn from_writer(inner: W, parameter: &str, profile: Option<BuildProfile>) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(inner);

        let mut header = vec![parameter];
        header.extend(STAT_COLUMNS);
        if profile.is_some() {
            header.extend(PROFILE_COLUMNS);
        }
        writer.write_record(&header)?;

        Ok(Self { writer, profile })
    }

    pub fn write_row(&mut self, value: usize, summary: &Summary) -> Result<()> {
        let mut record = Vec::with_capacity(1 + STAT_COLUMNS.len() + PROFILE_COLUMNS.len());
        record.push(value.to_string());
        record.push(format_float(summary.mean));
        record.push(format_float(summary.stdev));
        record.extend(summary.quartiles.iter().copied().map(format_float));

        if let Some(profile) = &self.profile {
            record.push(profile.dataset.clone());
            record.push(profile.structure.clone());
            record.push(format_float(profile.build_time_ms));
            record.push(format_float(profile.memory_mb));
        }

        self.writer.write_record(&record)?;
        // Keep completed rows on disk if a later value fails
        self.writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// Flush and hand back the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| Error::Csv(csv::Error::from(e.into_error())))
    }
}

fn format_float(value: f64) -> String {
    format!("{:.4}", value)
}
