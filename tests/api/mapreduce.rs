//! tests/api/mapreduce.rs
use crate::helpers::{settings, test_data_dir};
use chrono::NaiveDate;
use claims::assert_matches;
use search_keyword_performance::error::PipelineError;
use search_keyword_performance::functions::{RawInteraction, Revenue};
use search_keyword_performance::mapreduce::MapReduce;
use search_keyword_performance::sink::TsvSink;
use search_keyword_performance::startup::run_report_to;
use std::fs;

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2009, 9, 27).expect("Invalid date")
}

#[tokio::test]
async fn same_domain_and_keyword_aggregate_to_a_single_record() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let job = MapReduce::new(&settings(dir.path(), 2));

    let records = job
        .run(vec![
            RawInteraction::new("x;y;z;5", "http://www.bing.com/search?q=hat"),
            RawInteraction::new("x;y;z;7", "http://www.bing.com/search?q=hat"),
        ])
        .await
        .expect("Failed to run job");

    assert_eq!(records.len(), 1);
    assert_eq!(
        (records[0].domain(), records[0].keyword(), records[0].revenue()),
        ("bing.com", "hat", Revenue::from(12))
    );
}

#[tokio::test]
async fn should_write_the_report_for_hit_level_data() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let settings = settings(dir.path(), 3);
    let mut input = test_data_dir();
    input.push("data.tsv");

    let sink = TsvSink::new(dir.path()).with_date(report_date());
    let path = run_report_to(&input, &settings, sink)
        .await
        .expect("Failed to run report");

    assert_eq!(
        path.file_name().and_then(|name| name.to_str()),
        Some("2009-09-27_SearchKeywordPerformance.tab")
    );
    let contents = fs::read_to_string(&path).expect("Failed to read report");
    assert_eq!(
        contents,
        "Search Engine Domain\tSearch Keyword\tRevenue\n\
         google.com\tIpod\t490.5\n\
         bing.com\tZune\t250.0\n\
         search.yahoo.com\tcd player\t0.0\n"
    );
}

#[tokio::test]
async fn report_is_the_same_for_any_worker_count() {
    let mut input = test_data_dir();
    input.push("data.tsv");

    let mut reports = Vec::new();
    for workers in [1, 2, 7] {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let sink = TsvSink::new(dir.path()).with_date(report_date());
        let path = run_report_to(&input, &settings(dir.path(), workers), sink)
            .await
            .expect("Failed to run report");
        reports.push(fs::read_to_string(path).expect("Failed to read report"));
    }

    assert!(reports.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test]
async fn missing_input_is_reported_by_the_source() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut input = test_data_dir();
    input.push("non_existent_file.tsv");

    let sink = TsvSink::new(dir.path()).with_date(report_date());
    let error = run_report_to(&input, &settings(dir.path(), 1), sink)
        .await
        .expect_err("Missing input should fail");

    assert_matches!(error, PipelineError::InputNotFound(_));
    assert_eq!(error.stage(), "source");
}

#[tokio::test]
async fn unwritable_output_is_reported_by_the_sink() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let blocker = dir.path().join("report.tab");
    fs::write(&blocker, "").expect("Failed to create file");
    let mut input = test_data_dir();
    input.push("data.tsv");

    let sink = TsvSink::new(&blocker).with_date(report_date());
    let error = run_report_to(&input, &settings(dir.path(), 1), sink)
        .await
        .expect_err("Writing below a file should fail");

    assert_matches!(error, PipelineError::OutputWrite { .. });
    assert_eq!(error.stage(), "sink");
}
