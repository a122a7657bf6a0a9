// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Statistical benchmark harness.
//!
//! - [`harness`]: sweep validation and the trial loop
//! - [`workload`]: what gets timed (pattern queries, array probes)
//! - [`stats`]: mean, sample standard deviation, quartiles
//! - [`report`]: CSV output
//! - [`probe`]: sequential, binary and galloping array search

pub mod harness;
pub mod probe;
pub mod report;
pub mod stats;
pub mod workload;

pub use harness::{
    check_output_available, run_benchmark, run_sweep, SweepConfig, SweepRow, MAX_RUNS, MIN_RUNS,
};
pub use report::{BuildProfile, ReportWriter};
pub use stats::{summarize, Summary};
pub use workload::{
    PatternOperation, PatternWorkload, ProbeMethod, ProbeWorkload, TimeUnit, Workload,
    DEFAULT_PROBE_SIZE,
};
