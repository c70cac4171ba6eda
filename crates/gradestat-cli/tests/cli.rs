// End-to-end tests of the gradestat binary against the JSON fixtures
#![allow(deprecated)] // assert_cmd::Command::cargo_bin

use std::{fs, path::PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn gradestat() -> Command {
    Command::cargo_bin("gradestat").unwrap()
}

#[test]
fn test_compare_records_by_year() {
    gradestat()
        .arg("compare")
        .arg(fixture("grades.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("2019 vs 2022"))
        .stdout(predicate::str::contains("2019 vs 2023"))
        .stdout(predicate::str::contains("2022 vs 2023"))
        .stdout(predicate::str::contains("Yes"))
        .stdout(predicate::str::contains("No"));
}

#[test]
fn test_compare_year_map() {
    gradestat()
        .args(["compare", "--format", "years"])
        .arg(fixture("years.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("2022 vs 2023"))
        .stdout(predicate::str::contains("2022 vs 2024"))
        .stdout(predicate::str::contains("2023 vs 2024"))
        .stdout(predicate::str::contains("0.25"));
}

#[test]
fn test_compare_single_grade_groups_are_reported_not_fatal() {
    gradestat()
        .arg("compare")
        .arg(fixture("grades.json"))
        .args(["--topic", "Software Architecture"])
        .assert()
        .success()
        .stdout(predicate::str::contains("N/A"))
        .stdout(predicate::str::contains("at least 2 required"));
}

#[test]
fn test_compare_json_report() {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("report.json");

    gradestat()
        .arg("compare")
        .arg(fixture("grades.json"))
        .args(["--years", "2022,2019"])
        .arg("--output")
        .arg(&report_path)
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    let comparisons = report["comparisons"].as_array().unwrap();
    assert_eq!(comparisons.len(), 1);
    assert_eq!(comparisons[0]["label_a"], "2022");
    assert_eq!(comparisons[0]["label_b"], "2019");
    assert_eq!(comparisons[0]["significant"], true);
    assert!(comparisons[0]["t_statistic"].as_f64().unwrap() > 0.0);
    assert!(comparisons[0]["error"].is_null());
    assert_eq!(report["filter"]["years"][0], "2022");
}

#[test]
fn test_year_map_rejects_record_filters() {
    gradestat()
        .args(["compare", "--format", "years", "--gender", "Male"])
        .arg(fixture("years.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--format records"));
}

#[test]
fn test_summary_report() {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("summary.json");

    gradestat()
        .args(["summary", "--format", "years"])
        .arg(fixture("years.json"))
        .arg("--output")
        .arg(&report_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("83.60"));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    let years = report["years"].as_array().unwrap();
    assert_eq!(years.len(), 3);
    assert_eq!(years[0]["label"], "2022");
    assert_eq!(years[0]["count"], 5);
    assert_eq!(years[0]["median"], 85.0);
}

#[test]
fn test_export_filtered_csv() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("filtered.csv");

    gradestat()
        .arg("export")
        .arg(fixture("grades.json"))
        .args(["--gender", "Female", "--topic", "Implementation"])
        .arg("--output")
        .arg(&csv_path)
        .assert()
        .success();

    let records =
        gradestat_analysis::export::read_csv(fs::File::open(&csv_path).unwrap()).unwrap();
    assert_eq!(records.len(), 2);
    assert!(
        records
            .iter()
            .all(|r| r.gender == "Female" && r.topic == "Implementation")
    );
    assert_eq!(records[0].semester, "2022.2");
    assert_eq!(records[1].grade, 7.9);
}

#[test]
fn test_export_to_stdout() {
    gradestat()
        .arg("export")
        .arg(fixture("grades.json"))
        .args(["--question-type", "open-ended", "--min-frequency", "0.8"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "semester,gender,topic,frequency,open_ended,grade\n",
        ))
        .stdout(predicate::str::contains("2019.1,Female,Design with UML,0.8,1,6.0"));
}

#[test]
fn test_filter_config_file_with_flag_override() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("filter.json");
    fs::write(
        &config_path,
        r#"{"gender": "Male", "frequency_range": {"min": 0.0, "max": 0.95}}"#,
    )
    .unwrap();

    gradestat()
        .arg("export")
        .arg(fixture("grades.json"))
        .arg("--filter-config")
        .arg(&config_path)
        .args(["--gender", "Female"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Female"))
        .stdout(predicate::str::contains("Male,").not())
        .stdout(predicate::str::contains("2022.1,Female,Design with UML,0.95,1,8.5"));
}

#[test]
fn test_missing_data_file() {
    gradestat()
        .arg("compare")
        .arg(fixture("does-not-exist.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open grade records file"));
}

#[test]
fn test_export_without_matches_writes_header_only() {
    gradestat()
        .arg("export")
        .arg(fixture("grades.json"))
        .args(["--topic", "Databases"])
        .assert()
        .success()
        .stdout("semester,gender,topic,frequency,open_ended,grade\n");
}
