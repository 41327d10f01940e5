use predicates::prelude::*;

use crate::common::set_version;

#[test]
fn shows_help() {
    set_version()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--value"))
        .stdout(predicate::str::contains("--path"));
}

#[test]
fn shows_version() {
    set_version()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_a_clap_error() {
    set_version()
        .arg("--bogus")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--bogus"));
}
