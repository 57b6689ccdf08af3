#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("plancharge-cli").unwrap()
}

#[test]
fn build_workload_and_print_periods() {
    let dir = tempdir().unwrap();
    let workload = dir.path().join("workload.json");
    let workload = workload.to_str().unwrap();

    cli()
        .args(["--workload", workload, "add-resource", "--name", "alice"])
        .assert()
        .success();

    cli()
        .args([
            "--workload",
            workload,
            "allocate",
            "--resource",
            "alice",
            "--task",
            "support",
            "--start",
            "2025-03-03",
            "--end",
            "2025-03-10",
            "--effort",
            "10:00",
        ])
        .assert()
        .success();

    // 5 jours ouvrés à 10h pour 40h disponibles : 125%
    cli()
        .args(["--workload", workload, "periods", "--resource", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("125%"));

    cli()
        .args([
            "--workload",
            workload,
            "plot",
            "--from",
            "2025-03-03",
            "--to",
            "2025-03-10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# overload").and(predicate::str::contains("# load")));
}

#[test]
fn unknown_resource_fails() {
    let dir = tempdir().unwrap();
    let workload = dir.path().join("workload.json");

    cli()
        .args([
            "--workload",
            workload.to_str().unwrap(),
            "periods",
            "--resource",
            "nobody",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown resource"));
}

#[test]
fn check_accepts_disjoint_periods() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("periods.csv");
    fs::write(
        &csv,
        "start,end,available,assigned\n\
         2025-03-11,2025-03-21,40:00,20:00\n\
         2025-03-01,2025-03-11,40:00,24:00\n",
    )
    .unwrap();

    cli()
        .args(["check", "--csv", csv.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("no overlap"));
}

#[test]
fn check_reports_overlap_with_exit_code_2() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("periods.csv");
    fs::write(
        &csv,
        "start,end,available,assigned\n\
         2025-03-01,2025-03-11,40:00,24:00\n\
         2025-03-06,2025-03-16,40:00,24:00\n",
    )
    .unwrap();

    cli()
        .args(["check", "--csv", csv.to_str().unwrap()])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("overlaps with"));
}
