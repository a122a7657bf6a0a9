//! Benchmark statistics and CSV layout.

use doclocate::bench::{summarize, BuildProfile, ReportWriter};

#[test]
fn one_through_eight_summary() {
    let mut samples: Vec<f64> = (1..=8).map(f64::from).collect();
    let summary = summarize(&mut samples).unwrap();

    assert!((summary.mean - 4.5).abs() < 1e-12);
    assert_eq!(summary.quartiles[0], 1.0);
    assert_eq!(summary.quartiles[1], 2.25);
    assert_eq!(summary.quartiles[2], 4.5);
    assert_eq!(summary.quartiles[3], 6.75);
    assert_eq!(summary.quartiles[4], 8.0);
}

#[test]
fn csv_row_carries_summary_and_profile() {
    let mut samples: Vec<f64> = (1..=8).map(f64::from).collect();
    let summary = summarize(&mut samples).unwrap();

    let profile = BuildProfile {
        dataset: "dblp".to_string(),
        structure: "suffix-array".to_string(),
        build_time_ms: 1.0,
        memory_mb: 0.5,
    };
    let mut report = ReportWriter::from_writer(Vec::new(), "n", Some(profile)).unwrap();
    report.write_row(8, &summary).unwrap();
    let out = String::from_utf8(report.into_inner().unwrap()).unwrap();

    let mut reader = csv::Reader::from_reader(out.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.len(), 12);
    assert_eq!(&headers[0], "n");

    let record = reader.records().next().unwrap().unwrap();
    let q1: f64 = record[4].parse().unwrap();
    let q3: f64 = record[6].parse().unwrap();
    assert_eq!(q1, 2.25);
    assert_eq!(q3, 6.75);
    assert_eq!(&record[8], "dblp");
    assert_eq!(&record[9], "suffix-array");
}
