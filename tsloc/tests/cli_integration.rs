//! Integration tests for tsloc CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn run_tsloc(cwd: &Path, args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_tsloc"))
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

fn create_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn create_project(root: &Path) {
    create_file(&root.join("src/main.ts"), "a\nb\nc\n");
    create_file(&root.join("src/app/app.module.js"), "a\n\nb");
    create_file(&root.join("src/notes.txt"), "1\n2\n3\n4\n5\n6\n7\n8\n9\n10\n");
    create_file(&root.join("src/node_modules/dep/index.ts"), "x\ny\nz\nw\nv\n");
    create_file(&root.join("src/.git/hooks/hook.js"), "x\n");
}

#[test]
fn test_cli_help() {
    let temp = tempdir().unwrap();
    let (stdout, _, success) = run_tsloc(temp.path(), &["--help"]);

    assert!(success);
    assert!(stdout.contains("tsloc"));
    assert!(stdout.contains("--exclude-dir"));
    assert!(stdout.contains("--suffix"));
    assert!(stdout.contains("--skip-unreadable"));
}

#[test]
fn test_cli_version() {
    let temp = tempdir().unwrap();
    let (stdout, _, success) = run_tsloc(temp.path(), &["--version"]);

    assert!(success);
    assert!(stdout.contains("tsloc"));
}

#[test]
fn test_default_root_is_src() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, stderr, success) = run_tsloc(temp.path(), &[]);

    assert!(success, "stderr: {stderr}");
    assert_eq!(stdout, "Total lines of code: 6\n");
}

#[test]
fn test_missing_default_root_prints_zero() {
    let temp = tempdir().unwrap();

    let (stdout, _, success) = run_tsloc(temp.path(), &[]);

    assert!(success);
    assert_eq!(stdout, "Total lines of code: 0\n");
}

#[test]
fn test_explicit_path_and_options() {
    let temp = tempdir().unwrap();
    create_project(temp.path());

    let (stdout, _, success) = run_tsloc(temp.path(), &["src", "--non-blank"]);
    assert!(success);
    assert_eq!(stdout, "Total lines of code: 5\n");

    let (stdout, _, success) = run_tsloc(temp.path(), &["src", "--suffix", ".txt"]);
    assert!(success);
    assert_eq!(stdout, "Total lines of code: 10\n");

    let (stdout, _, success) = run_tsloc(temp.path(), &["src", "--exclude-dir", "app"]);
    assert!(success);
    assert_eq!(stdout, "Total lines of code: 9\n");
}

#[test]
fn test_undecodable_file_fails() {
    let temp = tempdir().unwrap();
    create_project(temp.path());
    fs::write(temp.path().join("src/bad.ts"), [0xff, 0xfe, 0xfd]).unwrap();

    let (stdout, stderr, success) = run_tsloc(temp.path(), &[]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("bad.ts"));
}

#[test]
fn test_undecodable_file_skipped() {
    let temp = tempdir().unwrap();
    create_project(temp.path());
    fs::write(temp.path().join("src/bad.ts"), [0xff, 0xfe, 0xfd]).unwrap();

    let (stdout, stderr, success) = run_tsloc(temp.path(), &["--skip-unreadable"]);

    assert!(success);
    assert_eq!(stdout, "Total lines of code: 6\n");
    assert!(stderr.contains("bad.ts"));
}
