// tests/cli/smoke_tests.rs
use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_ftp-monitor"))
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ftp-monitor"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn check_prints_summary_for_valid_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.yaml");
    fs::write(
        &config,
        format!(
            "ftp:\n  host: ftp.example.org\n  user: alice\n  password: s3cr3t-value\n  remote_dir: inbox\nmonitor:\n  path: {}\n  interval_seconds: 15\nrules:\n  whitelist: ['*.txt']\n",
            dir.path().display()
        ),
    )
    .unwrap();

    bin()
        .arg("--config")
        .arg(&config)
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration OK"))
        .stdout(predicate::str::contains("ftp.example.org:21"))
        .stdout(predicate::str::contains("scan interval:   15s"))
        .stdout(predicate::str::contains("s3cr3t-value").not());
}

#[test]
fn interval_flag_overrides_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"ftp": {"host": "h", "user": "u"}, "monitor": {"path": "."}}"#).unwrap();

    bin()
        .args(["--check", "--interval", "7", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("scan interval:   7s"));
}

#[test]
fn missing_config_fails() {
    let dir = tempdir().unwrap();
    bin()
        .arg("--config")
        .arg(dir.path().join("absent.yaml"))
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.yaml"));
}

#[test]
fn invalid_retry_attempts_fail_validation() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.yaml");
    fs::write(&config, "ftp: {host: h, user: u}\nmonitor: {path: /tmp, retry_attempts: 0}\n").unwrap();

    bin()
        .arg("--config")
        .arg(&config)
        .arg("--check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("retry_attempts"));
}
