// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
use cli::commands::{run_bench, run_concat, run_locate, run_probe};
use cli::{Cli, Commands};

/// Logs go to stderr so CSV and JSON on stdout stay clean.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Locate {
            corpus,
            boundaries,
            patterns,
            index,
            sample_rate,
            json,
        } => run_locate(&corpus, &boundaries, &patterns, index, sample_rate, json),
        Commands::Bench {
            sweep,
            corpus,
            boundaries,
            dataset,
            index,
            operation,
            seed,
            sample_rate,
        } => run_bench(
            &sweep,
            &corpus,
            &boundaries,
            &dataset,
            index,
            operation,
            seed,
            sample_rate,
        ),
        Commands::Probe {
            sweep,
            method,
            size,
        } => run_probe(&sweep, method, size),
        Commands::Concat {
            corpus_out,
            boundaries_out,
            documents,
            delimiter,
        } => run_concat(&corpus_out, &boundaries_out, &documents, delimiter),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}
