//! Shared helpers for end-to-end CLI tests.
#![allow(dead_code)] // Each test binary uses a different subset

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the elevation-architect binary
pub fn elevation_bin() -> String {
    std::env::var("CARGO_BIN_EXE_elevation-architect")
        .unwrap_or_else(|_| "target/debug/elevation-architect".to_string())
}

/// Creates an empty directory to use as an isolated config dir.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// Builds a command whose configuration lives in `config_dir`.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(elevation_bin());
    cmd.env("ELEVATION_ARCHITECT_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Runs a command against a fresh default configuration.
pub fn run(args: &[&str]) -> Output {
    let config_dir = temp_config_dir();
    run_in(args, config_dir.path())
}

/// Runs a command against the configuration in `config_dir`.
pub fn run_in(args: &[&str], config_dir: &Path) -> Output {
    isolated_command(args, config_dir)
        .output()
        .expect("Failed to execute command")
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Parses stdout as JSON, failing the test with stderr on error.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "stdout is not valid JSON ({e}). stdout: {} stderr: {}",
            stdout(output),
            stderr(output)
        )
    })
}

/// Asserts the process exited with `code`, printing stderr otherwise.
pub fn assert_exit(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "unexpected exit code. stdout: {} stderr: {}",
        stdout(output),
        stderr(output)
    );
}

/// Approximate float comparison on a JSON number.
pub fn assert_json_number(value: &serde_json::Value, expected: f64) {
    let actual = value
        .as_f64()
        .unwrap_or_else(|| panic!("expected a number, got {value}"));
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
