//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::cmstag_cmd;

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    cmstag_cmd().arg("init").arg(temp.path()).assert().success();

    assert!(temp.path().join(".cmstag").exists());
    assert!(temp.path().join("blocks").is_dir());
    assert!(temp.path().join("snippets").is_dir());

    let config_path = temp.path().join(".cmstag/config.toml");
    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("allow_script = false"));
    assert!(content.contains("max_depth = 32"));
}

#[test]
fn test_init_with_max_depth() {
    let temp = TempDir::new().unwrap();

    cmstag_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--max-depth")
        .arg("6")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized cmstag site"));

    let content = fs::read_to_string(temp.path().join(".cmstag/config.toml")).unwrap();
    assert!(content.contains("max_depth = 6"));
}

#[test]
fn test_init_completes_interrupted_site() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join(".cmstag")).unwrap();

    cmstag_cmd().arg("init").arg(temp.path()).assert().success();

    let content = fs::read_to_string(temp.path().join(".cmstag/config.toml")).unwrap();
    assert!(content.contains("max_depth = 32"));
    assert!(!temp.path().join(".cmstag.init").exists());
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    cmstag_cmd().arg("init").arg(temp.path()).assert().success();

    cmstag_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_config_get_and_set() {
    let temp = TempDir::new().unwrap();
    cmstag_cmd().arg("init").arg(temp.path()).assert().success();

    cmstag_cmd()
        .current_dir(temp.path())
        .args(["config", "allow_script"])
        .assert()
        .success()
        .stdout(predicate::str::contains("false"));

    cmstag_cmd()
        .current_dir(temp.path())
        .args(["config", "allow_script", "true"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set allow_script = true"));

    cmstag_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("allow_script = true"))
        .stdout(predicate::str::contains("max_depth = 32"))
        .stdout(predicate::str::contains("created = "));
}

#[test]
fn test_config_invalid_value_fails() {
    let temp = TempDir::new().unwrap();
    cmstag_cmd().arg("init").arg(temp.path()).assert().success();

    cmstag_cmd()
        .current_dir(temp.path())
        .args(["config", "max_depth", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive integer"));
}

#[test]
fn test_config_outside_site_fails() {
    let temp = TempDir::new().unwrap();

    cmstag_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cmstag init"));
}

#[test]
fn test_site_root_from_env() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    cmstag_cmd().arg("init").arg(temp.path()).assert().success();

    cmstag_cmd()
        .current_dir(elsewhere.path())
        .env("CMSTAG_ROOT", temp.path())
        .args(["config", "max_depth"])
        .assert()
        .success()
        .stdout(predicate::str::contains("32"));
}
