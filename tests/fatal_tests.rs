// Fatal path tests
//
// A fatal helper ends the process, so each case re-runs this test binary with
// only that test selected and TMOS_FATAL_CHILD set. The child performs the
// fatal call; the parent asserts on the child's exit status and stderr.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;
use tmos::fatal::{self, OrExit};
use tmos::file_tools;

const CHILD_ENV: &str = "TMOS_FATAL_CHILD";
const TARGET_ENV: &str = "TMOS_FATAL_TARGET";

fn in_child() -> bool {
    std::env::var(CHILD_ENV).as_deref() == Ok("1")
}

fn child_target() -> String {
    std::env::var(TARGET_ENV).expect("child needs a target path")
}

fn run_child(test_name: &str, target: &Path) -> Output {
    let exe = std::env::current_exe().expect("Failed to locate test binary");
    Command::new(exe)
        .args([test_name, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .env(TARGET_ENV, target)
        .output()
        .expect("Failed to spawn child test process")
}

fn assert_fatal(output: &Output, diagnostic: &str) {
    assert_eq!(
        output.status.code(),
        Some(fatal::EXIT_FATAL),
        "wrong exit code; stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(diagnostic),
        "stderr should contain {:?}, got: {}",
        diagnostic,
        stderr
    );
}

#[test]
fn must_write_file_exits_on_directory() {
    if in_child() {
        fatal::must_write_file(child_target(), b"test", 0o644);
        return;
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_child("must_write_file_exits_on_directory", temp_dir.path());
    assert_fatal(&output, "must_write_file failed");
}

#[test]
fn must_write_file_exits_on_missing_parent() {
    if in_child() {
        fatal::must_write_file(child_target(), b"test", 0o644);
        return;
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let target = temp_dir.path().join("missing").join("config.toml");
    let output = run_child("must_write_file_exits_on_missing_parent", &target);
    assert_fatal(&output, "must_write_file failed");
    assert!(!target.exists());
}

#[test]
fn must_read_file_exits_on_missing_file() {
    if in_child() {
        fatal::must_read_file(child_target());
        return;
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let target = temp_dir.path().join("nonexistent.json");
    let output = run_child("must_read_file_exits_on_missing_file", &target);
    assert_fatal(&output, "must_read_file failed: File not found");
}

#[test]
fn must_read_file_exits_on_directory() {
    if in_child() {
        fatal::must_read_file(child_target());
        return;
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_child("must_read_file_exits_on_directory", temp_dir.path());
    assert_fatal(&output, "must_read_file failed");
}

#[test]
fn or_exit_reports_context() {
    if in_child() {
        file_tools::file_copy(child_target(), "unused.copy").or_exit("backing up state");
        return;
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let target = temp_dir.path().join("state.db");
    let output = run_child("or_exit_reports_context", &target);
    assert_fatal(&output, "backing up state: Failed to open source");
}

#[test]
fn exit_prints_message() {
    if in_child() {
        fatal::exit("node key is corrupt");
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output = run_child("exit_prints_message", temp_dir.path());
    assert_fatal(&output, "node key is corrupt");
}

#[test]
fn must_helpers_return_on_success() {
    if in_child() {
        let target = child_target();
        fatal::must_write_file(&target, b"hello world", 0o644);
        assert_eq!(fatal::must_read_file(&target), b"hello world");
        return;
    }

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let target = temp_dir.path().join("ok.txt");
    let output = run_child("must_helpers_return_on_success", &target);
    assert!(
        output.status.success(),
        "child should exit normally; stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(std::fs::read(&target).unwrap(), b"hello world");
}

#[cfg(unix)]
#[test]
fn must_write_file_returns_on_dev_null() {
    if in_child() {
        fatal::must_write_file(child_target(), b"hello", 0o644);
        return;
    }

    let output = run_child("must_write_file_returns_on_dev_null", Path::new("/dev/null"));
    assert!(
        output.status.success(),
        "child should exit normally; stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}
