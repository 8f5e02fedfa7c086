//! End-to-end tests for the `girder` binary.
//!
//! Every invocation passes `--yes` and `--no-init` so no prompt is driven
//! and no external tool (git, go) is required on the test host.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn girder() -> Command {
    Command::cargo_bin("girder").unwrap()
}

#[test]
fn help_flag_exits_zero_on_stdout() {
    girder()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("girder"))
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("completions"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn version_flag_exits_zero_on_stdout() {
    girder()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stderr(predicate::str::is_empty());
}

#[test]
fn new_command_help() {
    girder()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--org"))
        .stdout(predicate::str::contains("--author"))
        .stdout(predicate::str::contains("--drone"))
        .stdout(predicate::str::contains("--no-init"));
}

#[test]
fn new_project_materializes_full_tree() {
    let temp = TempDir::new().unwrap();

    girder()
        .current_dir(temp.path())
        .args([
            "new", "demo", "--org", "acme", "--author", "Jane Doe", "--yes", "--no-init",
        ])
        .assert()
        .success();

    let project = temp.path().join("demo");
    assert!(project.is_dir());
    for file in [
        "README.md",
        ".gitignore",
        "main.go",
        "Makefile",
        "Dockerfile",
        "handler/routes.go",
        "runtime/config.go",
        "runtime/logger.go",
        "runtime/server.go",
        "demo.json",
    ] {
        assert!(project.join(file).is_file(), "missing {file}");
    }

    // Manifest stub is an empty JSON object.
    assert_eq!(fs::read_to_string(project.join("demo.json")).unwrap(), "{}");

    // Placeholders substituted, template suffixes gone.
    let readme = fs::read_to_string(project.join("README.md")).unwrap();
    assert!(readme.contains("demo"));
    assert!(!readme.contains("###__"));
    assert!(!project.join("README.md.tpl").exists());
}

#[test]
fn drone_flag_emits_ci_descriptor() {
    let temp = TempDir::new().unwrap();

    girder()
        .current_dir(temp.path())
        .args([
            "new", "demo", "--org", "acme", "--author", "Jane", "--drone", "--yes", "--no-init",
        ])
        .assert()
        .success();

    let descriptor = fs::read_to_string(temp.path().join("demo/.drone.yml")).unwrap();
    assert!(descriptor.contains("acme"));
    assert!(descriptor.contains("demo"));
    assert!(!descriptor.contains("###__"));
}

#[test]
fn ci_descriptor_absent_by_default() {
    let temp = TempDir::new().unwrap();

    girder()
        .current_dir(temp.path())
        .args([
            "new", "demo", "--org", "acme", "--author", "Jane", "--yes", "--no-init",
        ])
        .assert()
        .success();

    assert!(!temp.path().join("demo/.drone.yml").exists());
}

#[test]
fn existing_target_fails_without_force() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("demo")).unwrap();
    fs::write(temp.path().join("demo/keep.txt"), "precious").unwrap();

    girder()
        .current_dir(temp.path())
        .args([
            "new", "demo", "--org", "acme", "--author", "Jane", "--yes", "--no-init",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));

    // The existing directory is untouched.
    assert_eq!(
        fs::read_to_string(temp.path().join("demo/keep.txt")).unwrap(),
        "precious"
    );
}

#[test]
fn force_replaces_existing_target() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("demo")).unwrap();
    fs::write(temp.path().join("demo/stale.txt"), "old").unwrap();

    girder()
        .current_dir(temp.path())
        .args([
            "new", "demo", "--org", "acme", "--author", "Jane", "--yes", "--no-init", "--force",
        ])
        .assert()
        .success();

    let project = temp.path().join("demo");
    assert!(!project.join("stale.txt").exists());
    assert!(project.join("main.go").is_file());
}

#[test]
fn path_flag_overrides_target_directory() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("nested/services/demo");

    girder()
        .current_dir(temp.path())
        .args([
            "new",
            "demo",
            "--org",
            "acme",
            "--author",
            "Jane",
            "--path",
            target.to_str().unwrap(),
            "--yes",
            "--no-init",
        ])
        .assert()
        .success();

    assert!(target.join("main.go").is_file());
}

#[test]
fn quiet_mode_prints_nothing_on_success() {
    let temp = TempDir::new().unwrap();

    girder()
        .current_dir(temp.path())
        .args([
            "-q", "new", "demo", "--org", "acme", "--author", "Jane", "--yes", "--no-init",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("demo/main.go").is_file());
}

#[test]
fn shell_completions_render() {
    girder()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn no_arguments_shows_help() {
    girder()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}
