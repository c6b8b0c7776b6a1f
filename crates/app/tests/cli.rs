//! Exit codes and output of the `clubcheck` binary.
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn clubcheck(base_url: &str) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("clubcheck"));
    cmd.env_remove("CLUBCHECK_TOKEN")
        .env_remove("CLUBCHECK_BANNER")
        .env_remove("CLUBCHECK_TIMEOUT_SECS")
        .env("CLUBCHECK_BASE_URL", base_url)
        .env("RUST_LOG", "off");
    cmd
}

#[tokio::test(flavor = "multi_thread")]
async fn test_all_passed_exits_zero() {
    let base_url = common::spawn_backend().await;

    let assert = tokio::task::spawn_blocking(move || clubcheck(&base_url).assert())
        .await
        .unwrap();

    assert
        .success()
        .stdout(predicate::str::contains("✅ PASS: API Health Check"))
        .stdout(predicate::str::contains("✅ Non-existent event returns 404"))
        .stdout(predicate::str::contains("Total Tests: 13"))
        .stdout(predicate::str::contains("Success Rate: 100.0%"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_json_format_prints_summary() {
    let base_url = common::spawn_backend().await;

    let output = tokio::task::spawn_blocking(move || {
        clubcheck(&base_url).args(["--format", "json"]).output().unwrap()
    })
    .await
    .unwrap();

    assert!(output.status.success());
    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["passed"], 13);
    assert_eq!(summary["results"][12]["test"], "Delete Event");
}

#[test]
fn test_failures_exit_one() {
    clubcheck(&common::closed_base_url())
        .args(["--timeout-secs", "2"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("❌ FAIL: API Health Check"))
        .stdout(predicate::str::contains("Failed: 13"));
}

#[test]
fn test_invalid_base_url_exits_two() {
    clubcheck("ftp://club.example.com/api")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid --base-url"));
}
