//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;

fn cclip_bin() -> Command {
    Command::cargo_bin("cclip").expect("binary should build")
}

#[test]
fn help_output() {
    cclip_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("clipboard"))
        .stdout(predicate::str::contains("--list"))
        .stdout(predicate::str::contains("--all"))
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--format"));
}

#[test]
fn long_help_explains_list_names() {
    cclip_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("portable"))
        .stdout(predicate::str::contains("native"));
}

#[test]
fn version_output() {
    cclip_bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cclip"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    cclip_bin()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cclip"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_help() {
    cclip_bin()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("path"));
}

#[cfg(target_os = "linux")]
#[test]
fn config_set_get_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    cclip_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "set", "format", "HTML Format"])
        .assert()
        .success();

    cclip_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "get", "format"])
        .assert()
        .success()
        .stdout("HTML Format\n");

    assert!(dir.path().join("cclip").join("config.toml").exists());
}

#[cfg(target_os = "linux")]
#[test]
fn config_get_unset_key() {
    let dir = tempfile::tempdir().unwrap();

    cclip_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "get", "backend"])
        .assert()
        .success()
        .stdout("(not set)\n");
}

#[cfg(target_os = "linux")]
#[test]
fn config_init_twice_fails() {
    let dir = tempfile::tempdir().unwrap();

    cclip_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success();

    cclip_bin()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}
