//! # m2repo Binary
//!
//! Runs the built binary against a temporary repository and checks stdout
//! and exit codes.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn touch(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let clean = "org/apache/maven/plugins/maven-clean-plugin";
    touch(root, &format!("{clean}/2.5/maven-clean-plugin-2.5.jar"));
    touch(root, &format!("{clean}/3.0/maven-clean-plugin-3.0.jar.lastUpdated"));
    dir
}

fn m2repo(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_m2repo"))
        .arg("--repository")
        .arg(root)
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn group_found() {
    let dir = fixture();
    let out = m2repo(dir.path(), &["group", "org.apache.maven.plugins"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(
        stdout(&out),
        "Searching group: org.apache.maven.plugins\n\tgroup found\n"
    );
}

#[test]
fn group_not_found() {
    let dir = fixture();
    let out = m2repo(dir.path(), &["group", "org.apache.maven.p"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("group not found"));
}

#[test]
fn stalled_version_is_not_found() {
    let dir = fixture();
    let out = m2repo(
        dir.path(),
        &["check", "org.apache.maven.plugins:maven-clean-plugin:3.0"],
    );
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("\tversion not found"));
}

#[test]
fn versions_as_json() {
    let dir = fixture();
    let out = m2repo(
        dir.path(),
        &[
            "--format",
            "json",
            "versions",
            "org.apache.maven.plugins",
            "maven-clean-plugin",
        ],
    );
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["query"], "versions");
    assert_eq!(value["versions"], serde_json::json!(["2.5"]));
}

#[test]
fn malformed_group_exits_with_error() {
    let dir = fixture();
    let out = m2repo(dir.path(), &["group", "org..apache"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
}
