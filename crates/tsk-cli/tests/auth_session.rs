//! Integration tests for `tsk login`, `tsk logout`, and `tsk whoami`.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_login_admin_succeeds_and_persists() {
    let home = TempDir::new().unwrap();

    cargo_bin_cmd!("tsk")
        .env("TSK_HOME", home.path())
        .args(["login", "admin", "123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as admin (admin)"));

    let raw = fs::read_to_string(home.path().join("session.json")).unwrap();
    let session: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(session["userType"], "admin");
    assert!(!session["token"].as_str().unwrap().is_empty());
}

#[test]
fn test_login_user_resolves_user_role() {
    let home = TempDir::new().unwrap();

    cargo_bin_cmd!("tsk")
        .env("TSK_HOME", home.path())
        .args(["login", "user", "123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as user (user)"));
}

#[test]
fn test_login_wrong_password_fails_without_session() {
    let home = TempDir::new().unwrap();

    cargo_bin_cmd!("tsk")
        .env("TSK_HOME", home.path())
        .args(["login", "admin", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid credentials"));

    assert!(!home.path().join("session.json").exists());

    cargo_bin_cmd!("tsk")
        .env("TSK_HOME", home.path())
        .args(["whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in."));
}

#[test]
fn test_session_survives_restart() {
    let home = TempDir::new().unwrap();

    cargo_bin_cmd!("tsk")
        .env("TSK_HOME", home.path())
        .args(["login", "user", "123"])
        .assert()
        .success();

    // A separate process restores the persisted session.
    cargo_bin_cmd!("tsk")
        .env("TSK_HOME", home.path())
        .args(["whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in (user)"));
}

#[test]
fn test_logout_clears_session() {
    let home = TempDir::new().unwrap();

    cargo_bin_cmd!("tsk")
        .env("TSK_HOME", home.path())
        .args(["login", "admin", "123"])
        .assert()
        .success();

    cargo_bin_cmd!("tsk")
        .env("TSK_HOME", home.path())
        .args(["logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out."));

    assert!(!home.path().join("session.json").exists());

    cargo_bin_cmd!("tsk")
        .env("TSK_HOME", home.path())
        .args(["whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in."));
}

#[test]
fn test_logout_when_not_logged_in_is_fine() {
    let home = TempDir::new().unwrap();

    cargo_bin_cmd!("tsk")
        .env("TSK_HOME", home.path())
        .args(["logout"])
        .assert()
        .success();
}
