//! End-to-end CLI tests against the built binary.

mod harness;

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn snapwarden() -> Command {
    Command::cargo_bin("snapwarden").expect("binary built")
}

#[test]
fn config_validate_accepts_a_good_config() {
    let dir = tempdir().unwrap();
    let config = harness::write_config(dir.path(), &harness::sample_config("prod-a,prod-b"));

    snapwarden()
        .args(["config", "validate", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("configuration OK"));
}

#[test]
fn config_validate_rejects_an_unknown_weekday() {
    let dir = tempdir().unwrap();
    let bad = harness::sample_config("prod-a").replace("Sunday", "Caturday");
    let config = harness::write_config(dir.path(), &bad);

    snapwarden()
        .args(["config", "validate", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Caturday"));
}

#[test]
fn config_validate_rejects_a_missing_file() {
    snapwarden()
        .args(["config", "validate", "--config", "/nonexistent/snapwarden.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn simulate_drives_a_month_and_leaves_the_store_for_inspection() {
    let dir = tempdir().unwrap();
    let config = harness::write_config(dir.path(), &harness::sample_config("demo"));
    let store = dir.path().join("snapstore.json");

    snapwarden()
        .args(["simulate", "--config"])
        .arg(&config)
        .args(["--start", "2024-01-01", "--days", "30", "--store"])
        .arg(&store)
        .assert()
        .success()
        // 2024-01-01 fires yearly and monthly together.
        .stdout(predicate::str::contains("demo-2024-01-01"));

    let contents = fs::read_to_string(&store).expect("store file left in place");
    assert!(contents.contains("yearly monthly"));
    // Four Sundays fall in the January window.
    assert_eq!(contents.matches("\"weekly\"").count(), 4);
}

#[test]
fn simulate_refuses_the_all_selector() {
    let dir = tempdir().unwrap();
    let config = harness::write_config(dir.path(), &harness::sample_config("ALL"));

    snapwarden()
        .args(["simulate", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("explicit cluster list"));
}
