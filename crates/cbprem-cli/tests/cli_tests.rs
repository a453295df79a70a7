//! CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn write_sample_data(dir: &std::path::Path) {
    std::fs::write(
        dir.join("instruments.csv"),
        "instrument_id,equity_code,display_name\n113050,601958,Nanyin CB\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("bond_daily.csv"),
        "day,instrument_id,open,high,low,close,volume\n\
         2024-05-06,113050,109.0,111.0,108.5,110.0,50000\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("equity_daily.csv"),
        "day,equity_code,name,open,high,low,close,volume\n\
         2024-05-06,601958,Nanyin,99.0,101.0,98.0,100.0,2000000\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("conversion_prices.csv"),
        "instrument_id,effective_date,price\n113050,2023-11-20,50.0\n",
    )
    .unwrap();
}

#[test]
fn test_premium_known_value() {
    let mut cmd = Command::cargo_bin("cbprem").unwrap();
    cmd.args([
        "premium",
        "--bond",
        "110",
        "--equity",
        "100",
        "--conversion",
        "50",
        "--format",
        "json",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("-45.0"));
}

#[test]
fn test_premium_rejects_zero_conversion_price() {
    let mut cmd = Command::cargo_bin("cbprem").unwrap();
    cmd.args([
        "premium",
        "--bond",
        "110",
        "--equity",
        "100",
        "--conversion",
        "0",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("conversion price must be positive"));
}

#[test]
fn test_enrich_csv_output() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_data(dir.path());

    let mut cmd = Command::cargo_bin("cbprem").unwrap();
    cmd.args([
        "enrich",
        "--data",
        dir.path().to_str().unwrap(),
        "--format",
        "csv",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("113050"))
    .stdout(predicate::str::contains("-45"));
}

#[test]
fn test_snapshot_shows_effective_price() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_data(dir.path());

    let mut cmd = Command::cargo_bin("cbprem").unwrap();
    cmd.args([
        "snapshot",
        "--data",
        dir.path().to_str().unwrap(),
        "--day",
        "2024-05-06",
        "--format",
        "csv",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("113050"))
    .stdout(predicate::str::contains("50"));
}

#[test]
fn test_summary_by_display_name() {
    let dir = tempfile::tempdir().unwrap();
    write_sample_data(dir.path());

    let mut cmd = Command::cargo_bin("cbprem").unwrap();
    cmd.args([
        "summary",
        "--data",
        dir.path().to_str().unwrap(),
        "--instrument",
        "Nanyin CB",
        "--by-name",
        "--from",
        "2024-05-01",
        "--to",
        "2024-05-31",
        "--format",
        "json",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("\"instrument_id\": \"113050\""));
}

#[test]
fn test_missing_table_is_descriptive() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("cbprem").unwrap();
    cmd.args(["enrich", "--data", dir.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}
