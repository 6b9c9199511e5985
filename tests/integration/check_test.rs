//! Probe-only `check` subcommand scenarios

use predicates::prelude::*;
use tempfile::TempDir;

use crate::common::health::HealthStub;
use crate::selfheal;

#[test]
fn test_check_healthy_exits_0() {
    let stub = HealthStub::healthy();
    let temp = TempDir::new().unwrap();

    selfheal()
        .args(["check", "--url", stub.url()])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ok"))
        .stdout(predicate::str::contains("healthy"));
}

#[test]
fn test_check_dead_target_exits_1() {
    let dead = HealthStub::dead_url();
    let temp = TempDir::new().unwrap();

    selfheal()
        .args(["check", "--url", &dead])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("fail"))
        .stdout(predicate::str::contains("unhealthy"));
}

#[test]
fn test_check_reports_every_target() {
    let stub = HealthStub::healthy();
    let dead = HealthStub::dead_url();
    let temp = TempDir::new().unwrap();

    let output = selfheal()
        .args(["--json", "check", "--url", stub.url(), "--url", &dead])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["healthy"], false);
    let targets = json["targets"].as_array().unwrap();
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0]["healthy"], true);
    assert_eq!(targets[1]["healthy"], false);
    assert!(targets[1]["reason"].is_string());
}

#[test]
fn test_check_non_success_status_is_unhealthy() {
    let stub = HealthStub::with_status(500, "Internal Server Error");
    let temp = TempDir::new().unwrap();

    let output = selfheal()
        .args(["--json", "check", "--url", stub.url()])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["targets"][0]["reason"], "status 500 Internal Server Error");
}

#[test]
fn test_check_never_touches_a_repository() {
    // Plain directory, not a git repo; check must still work
    let dead = HealthStub::dead_url();
    let temp = TempDir::new().unwrap();

    selfheal()
        .args(["check", "--url", &dead])
        .current_dir(temp.path())
        .assert()
        .code(1);
}
