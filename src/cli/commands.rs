// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subcommand handlers. Each one loads its inputs, calls into the library,
//! and prints results to stdout; logs and failures go to stderr.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Serialize;

use doclocate::bench::{
    check_output_available, run_benchmark, BuildProfile, PatternOperation, PatternWorkload,
    ProbeMethod, ProbeWorkload, SweepConfig,
};
use doclocate::{build_index_timed, concatenate, BoundaryIndex, IndexKind, TextCorpus};

use super::display::{document_list, format_size, occurrence_count, styled, sweep_table, BOLD};
use super::SweepArgs;

impl SweepArgs {
    fn config(&self) -> SweepConfig {
        SweepConfig {
            runs: self.runs,
            lower: self.lower,
            upper: self.upper,
            step: self.step,
        }
    }
}

#[derive(Serialize)]
struct LocateReport {
    pattern: String,
    occurrences: usize,
    documents: Vec<usize>,
}

fn load_inputs(corpus: &Path, boundaries: &Path) -> Result<(TextCorpus, BoundaryIndex)> {
    let corpus = TextCorpus::load(corpus).context("Failed to load corpus")?;
    let boundaries = BoundaryIndex::load(boundaries).context("Failed to load boundaries")?;
    let text_len = corpus.content().len();
    let empty = boundaries.empty_documents(text_len);
    if empty > 0 {
        tracing::warn!(
            empty_documents = empty,
            corpus_bytes = text_len,
            "some documents start at or past the end of the corpus"
        );
    }
    Ok((corpus, boundaries))
}

pub fn run_locate(
    corpus: &Path,
    boundaries: &Path,
    patterns: &[String],
    kind: IndexKind,
    sample_rate: usize,
    json: bool,
) -> Result<()> {
    if let Some(i) = patterns.iter().position(String::is_empty) {
        bail!("Pattern {} is empty", i + 1);
    }

    let (corpus, boundaries) = load_inputs(corpus, boundaries)?;
    let (index, stats) = build_index_timed(kind, corpus, sample_rate)?;

    if !json {
        eprintln!(
            "{} built in {:.1} ms, {}",
            styled(&[BOLD], kind.label()),
            stats.build_time_ms(),
            format_size(stats.size_in_bytes)
        );
    }

    let mut reports = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        let occurrences = index.count(pattern.as_bytes())?;
        let documents = index.doc_locate(pattern.as_bytes(), &boundaries)?;

        if json {
            reports.push(LocateReport {
                pattern: pattern.clone(),
                occurrences,
                documents: documents.into_iter().collect(),
            });
        } else {
            println!("{:?}: {}", pattern, occurrence_count(occurrences));
            println!("  {}", document_list(&documents));
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn run_bench(
    sweep: &SweepArgs,
    corpus: &Path,
    boundaries: &Path,
    dataset: &str,
    kind: IndexKind,
    operation: PatternOperation,
    seed: Option<u64>,
    sample_rate: usize,
) -> Result<()> {
    let config = sweep.config();
    // Validate before loading or building anything
    config.validate()?;
    check_output_available(&sweep.output)?;

    let (corpus, boundaries) = load_inputs(corpus, boundaries)?;
    let content = corpus.content().to_vec();
    let (index, stats) = build_index_timed(kind, corpus, sample_rate)?;

    let profile = BuildProfile {
        dataset: dataset.to_string(),
        structure: kind.label().to_string(),
        build_time_ms: stats.build_time_ms(),
        memory_mb: stats.memory_mb(),
    };
    let mut workload = PatternWorkload::new(index.as_ref(), &boundaries, &content, operation, seed);

    let rows = run_benchmark(&sweep.output, &config, &mut workload, sweep.unit, Some(profile))?;

    sweep_table("n", &rows, sweep.unit);
    eprintln!("✅ Wrote {} rows to {}", rows.len(), sweep.output.display());
    Ok(())
}

pub fn run_probe(sweep: &SweepArgs, method: ProbeMethod, size: usize) -> Result<()> {
    let config = sweep.config();
    config.validate()?;
    check_output_available(&sweep.output)?;

    let mut workload = ProbeWorkload::new(size, method);
    let rows = run_benchmark(&sweep.output, &config, &mut workload, sweep.unit, None)?;

    sweep_table("k", &rows, sweep.unit);
    eprintln!("✅ Wrote {} rows to {}", rows.len(), sweep.output.display());
    Ok(())
}

pub fn run_concat(
    corpus_out: &Path,
    boundaries_out: &Path,
    documents: &[PathBuf],
    delimiter: char,
) -> Result<()> {
    if !delimiter.is_ascii() {
        bail!("Delimiter must be a single ASCII character, got {:?}", delimiter);
    }

    let starts = concatenate(documents, delimiter as u8, corpus_out, boundaries_out)?;
    eprintln!(
        "✅ Joined {} documents into {} ({})",
        starts.len(),
        corpus_out.display(),
        boundaries_out.display()
    );
    Ok(())
}
