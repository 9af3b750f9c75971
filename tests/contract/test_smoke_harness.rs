use assert_cmd::Command;
use predicates::prelude::*;

/// Contract tests for the `verman-smoke` binary
/// It takes no arguments, prints the start banner, the version report block
/// and the end banner, and always exits successfully

#[test]
fn test_smoke_prints_expected_output() {
    let mut cmd = Command::cargo_bin("verman-smoke").unwrap();
    cmd.assert().success().stdout(predicate::eq(
        "Start of tests!\n\
         Version:{\n\
         \tMajor: 1,\n\
         \tMinor: 2,\n\
         \tBug: 1,\n\
         \tStage: 2,\n\
         \tStageRev: 3,\n\
         }\n\
         End of tests!\n",
    ));
}

#[test]
fn test_smoke_segments_appear_in_order() {
    let output = Command::cargo_bin("verman-smoke").unwrap().output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let start = stdout.find("Start of tests!").unwrap();
    let report = stdout.find("Version:{").unwrap();
    let end = stdout.find("End of tests!").unwrap();
    assert!(start < report);
    assert!(report < end);
}

#[test]
fn test_smoke_reports_each_version_field() {
    let mut cmd = Command::cargo_bin("verman-smoke").unwrap();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\tMajor: 1,"))
        .stdout(predicate::str::contains("\tMinor: 2,"))
        .stdout(predicate::str::contains("\tBug: 1,"))
        .stdout(predicate::str::contains("\tStage: 2,"))
        .stdout(predicate::str::contains("\tStageRev: 3,"));
}

#[test]
fn test_smoke_writes_nothing_to_stderr() {
    let mut cmd = Command::cargo_bin("verman-smoke").unwrap();
    cmd.assert().success().stderr(predicate::str::is_empty());
}

#[test]
fn test_smoke_output_is_identical_across_runs() {
    let first = Command::cargo_bin("verman-smoke").unwrap().output().unwrap();
    let second = Command::cargo_bin("verman-smoke").unwrap().output().unwrap();
    assert_eq!(first.stdout, second.stdout);
}
