//! Tests for error messages and suggestions on the failure paths.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn girder() -> Command {
    Command::cargo_bin("girder").unwrap()
}

#[test]
fn yes_without_org_names_the_missing_flag() {
    girder()
        .args(["new", "demo", "--author", "Jane", "--yes", "--no-init"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--org"));
}

#[test]
fn yes_without_author_names_the_missing_flag() {
    girder()
        .args(["new", "demo", "--org", "acme", "--yes", "--no-init"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--author"));
}

#[test]
fn dotfile_project_name_is_rejected() {
    let temp = TempDir::new().unwrap();

    girder()
        .current_dir(temp.path())
        .args([
            "new", ".hidden", "--org", "acme", "--author", "Jane", "--yes", "--no-init",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("name"));

    assert!(!temp.path().join(".hidden").exists());
}

#[test]
fn name_with_separator_is_rejected() {
    let temp = TempDir::new().unwrap();

    girder()
        .current_dir(temp.path())
        .args([
            "new", "a/b", "--org", "acme", "--author", "Jane", "--yes", "--no-init",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("path separators"));
}

#[test]
fn explicit_missing_config_file_is_an_error() {
    girder()
        .args([
            "--config",
            "/definitely/not/here/girder.toml",
            "new",
            "demo",
            "--org",
            "acme",
            "--author",
            "Jane",
            "--yes",
            "--no-init",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("config"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    girder()
        .args(["new", "demo", "--frobnicate"])
        .assert()
        .failure()
        .code(2);
}
