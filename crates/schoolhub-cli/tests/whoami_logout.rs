//! Headless session commands against a temp app home.
//!
//! With no stored session both commands resolve locally: `whoami` reads the
//! absent store and `logout` is a confirmed no-op, so neither reaches the
//! network.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_whoami_without_session_reports_signed_out() {
    let home = tempfile::tempdir().unwrap();
    cargo_bin_cmd!("schoolhub")
        .env("SCHOOLHUB_HOME", home.path())
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));
}

#[test]
fn test_logout_without_session_succeeds() {
    let home = tempfile::tempdir().unwrap();
    cargo_bin_cmd!("schoolhub")
        .env("SCHOOLHUB_HOME", home.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out"));
}
