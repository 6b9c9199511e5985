//! Tests for the selfheal CLI surface

use assert_cmd::cargo;
use predicates::prelude::*;

fn selfheal() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("selfheal"));
    // Keep the invoking environment from leaking into CLI defaults
    cmd.env_remove("SELFHEAL_HEALTH_URLS")
        .env_remove("SELFHEAL_HEALTH_RETRIES")
        .env_remove("SELFHEAL_HEALTH_INTERVAL_SEC")
        .env_remove("SELFHEAL_PROBE_TIMEOUT_SEC")
        .env_remove("SELFHEAL_FORCE_PUSH");
    cmd
}

#[test]
fn test_version_flag() {
    selfheal()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("selfheal"));
}

#[test]
fn test_help() {
    selfheal()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("SAFE_<branch>"));
}

#[test]
fn test_no_args_shows_info() {
    selfheal()
        .assert()
        .success()
        .stdout(predicate::str::contains("selfheal"))
        .stdout(predicate::str::contains("--help"));
}

#[test]
fn test_version_subcommand_json() {
    selfheal()
        .args(["--json", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

#[test]
fn test_run_rejects_malformed_retries() {
    selfheal()
        .args(["run", "--retries", "many"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--retries"));
}

#[test]
fn test_run_rejects_unknown_flag() {
    selfheal().args(["run", "--frobnicate"]).assert().failure();
}
