//! tests/api/cli.rs
use crate::helpers::test_data_dir;
use assert_cmd::Command;
use predicates::str::contains;
use search_keyword_performance::sink::OUTPUT_SUFFIX;
use std::fs;

fn command(working_dir: &std::path::Path) -> Command {
    let mut cmd =
        Command::cargo_bin("search-keyword-performance").expect("Failed to find binary");
    cmd.current_dir(working_dir)
        .env("SKP_REPORT__OUTPUT_DIR", working_dir)
        .env("RUST_LOG", "warn");
    cmd
}

#[test]
fn writes_a_dated_report_into_the_output_directory() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let mut input = test_data_dir();
    input.push("data.tsv");

    command(dir.path()).arg(&input).assert().success();

    let reports: Vec<String> = fs::read_dir(dir.path())
        .expect("Failed to list output directory")
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(OUTPUT_SUFFIX))
        .collect();
    assert_eq!(reports.len(), 1);

    let contents =
        fs::read_to_string(dir.path().join(&reports[0])).expect("Failed to read report");
    assert!(contents.starts_with("Search Engine Domain\tSearch Keyword\tRevenue\n"));
    assert!(!contents.contains("esshopzilla.com"));
}

#[test]
fn missing_input_exits_with_a_source_diagnostic() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");

    command(dir.path())
        .arg(dir.path().join("missing.tsv"))
        .assert()
        .code(66)
        .stderr(contains("source stage failed"))
        .stderr(contains("input file not found"));
}

#[test]
fn the_input_path_is_required() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    command(dir.path()).assert().failure();
}
