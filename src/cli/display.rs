// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the doclocate CLI.
//!
//! Plain ANSI colours, switched off by `NO_COLOR` and when stdout is not a
//! terminal, so piped output stays clean.

use doclocate::bench::{SweepRow, TimeUnit};
use doclocate::DocumentIdSet;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    pub const CYAN: &str = "\x1b[36m";
}

pub use colors::*;

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply styles if TTY, otherwise return plain text
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Left-pad a styled string to a fixed visible width
pub fn pad_left(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visible), s)
    }
}

/// Format bytes as human-readable size
pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// `D1, D3, D7`, or a dimmed dash for no documents.
pub fn document_list(docs: &DocumentIdSet) -> String {
    if docs.is_empty() {
        return styled(&[DIM], "-");
    }
    docs.iter()
        .map(|id| format!("D{}", id))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Occurrence count, green when found and dimmed when not.
pub fn occurrence_count(count: usize) -> String {
    let text = format!("{} occurrence{}", count, if count == 1 { "" } else { "s" });
    if count == 0 {
        styled(&[DIM], &text)
    } else {
        styled(&[GREEN, BOLD], &text)
    }
}

/// Timing value colored by its size in microseconds (green=fast, yellow=medium, red=slow)
pub fn timing(value: f64, unit: TimeUnit) -> String {
    let plain = format!("{:>12.3}", value);
    if !use_colors() {
        return plain;
    }
    let micros = match unit {
        TimeUnit::Ns => value / 1_000.0,
        TimeUnit::Us => value,
        TimeUnit::Ms => value * 1_000.0,
    };
    let color = if micros < 10.0 {
        GREEN
    } else if micros < 1_000.0 {
        YELLOW
    } else {
        RED
    };
    format!("{}{}{}", color, plain, RESET)
}

/// Print one line per swept value: value, mean, stdev, median.
pub fn sweep_table(parameter: &str, rows: &[SweepRow], unit: TimeUnit) {
    println!(
        "{} {} {} {}",
        styled(&[BOLD, CYAN], &pad_left(parameter, 8)),
        pad_left(&format!("mean ({})", unit.suffix()), 12),
        pad_left("stdev", 12),
        pad_left("median", 12),
    );
    for row in rows {
        println!(
            "{} {} {:>12.3} {}",
            pad_left(&row.value.to_string(), 8),
            timing(row.summary.mean, unit),
            row.summary.stdev,
            timing(row.summary.quartiles[2], unit),
        );
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
