use predicates::prelude::*;

use crate::common::{SENTINEL, TempWorkspace, set_version};

#[test]
fn stamps_contract() -> anyhow::Result<()> {
    let ws = TempWorkspace::new("stamp_contract");
    let path = ws.create_file("Versionable.sol", r#"contract X { version = "unset"; }"#);
    let shown = path.display().to_string();

    set_version()
        .args(["--value", "1.2.3", "--path", &shown])
        .assert()
        .success()
        .stdout(format!("supplying file {shown} with 1.2.3 tag...\n"));

    assert_eq!(std::fs::read_to_string(&path)?, r#"contract X { version = "1.2.3"; }"#);
    Ok(())
}

#[test]
fn stamps_every_occurrence() -> anyhow::Result<()> {
    let ws = TempWorkspace::new("stamp_many");
    let body = format!("a {SENTINEL}\nb {SENTINEL}\nc {SENTINEL}\nversion = \"keep\"\n");
    let path = ws.create_file("contracts/Many.sol", &body);

    set_version()
        .arg("--value")
        .arg("2024.1")
        .arg("--path")
        .arg(&path)
        .assert()
        .success();

    let stamped = std::fs::read_to_string(&path)?;
    assert_eq!(stamped.matches("version = \"2024.1\"").count(), 3);
    assert_eq!(stamped.matches(SENTINEL).count(), 0);
    assert_eq!(stamped, body.replace(SENTINEL, "version = \"2024.1\""));
    Ok(())
}

#[test]
fn no_sentinel_is_silent_success() -> anyhow::Result<()> {
    let ws = TempWorkspace::new("stamp_none");
    let path = ws.create_file("Plain.sol", "contract Y {}\n");

    set_version()
        .arg("--value=1.0.0")
        .arg(format!("--path={}", path.display()))
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    assert_eq!(std::fs::read_to_string(&path)?, "contract Y {}\n");
    Ok(())
}

#[test]
fn second_run_leaves_file_unchanged() -> anyhow::Result<()> {
    let ws = TempWorkspace::new("stamp_twice");
    let path = ws.create_file("Twice.sol", format!("{SENTINEL};"));

    for _ in 0..2 {
        set_version()
            .arg("--value")
            .arg("0.9.0")
            .arg("--path")
            .arg(&path)
            .assert()
            .success();
        assert_eq!(ws.read(&path), "version = \"0.9.0\";");
    }
    Ok(())
}

#[test]
fn value_is_not_validated() -> anyhow::Result<()> {
    let ws = TempWorkspace::new("stamp_free_form");
    let path = ws.create_file("Free.sol", SENTINEL);

    set_version()
        .arg("--value")
        .arg("not a version")
        .arg("--path")
        .arg(&path)
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&path)?, "version = \"not a version\"");
    Ok(())
}

#[test]
fn verbose_reports_count_on_stderr() {
    let ws = TempWorkspace::new("stamp_verbose");
    let path = ws.create_file("Loud.sol", SENTINEL);

    set_version()
        .arg("-v")
        .arg("--value")
        .arg("1.0.0")
        .arg("--path")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("1 occurrence(s) stamped"));
}
