//! Shared CLI plumbing: exit codes, errors and output helpers.

use crate::models::{Severity, ValidationWarning};
use serde::Serialize;
use std::fmt;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitCode {
    /// Command succeeded
    Success = 0,
    /// Validation failed (or warnings were found under `--strict`)
    ValidationFailed = 1,
    /// File system, serialization or export failure
    IoError = 2,
    /// Unknown ids, malformed values or conflicting flags
    InvalidArguments = 3,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code the process should end with
    pub kind: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// I/O or export failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::ValidationFailed,
            message: message.into(),
        }
    }

    /// Invalid command-line arguments.
    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self {
            kind: ExitCode::InvalidArguments,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

/// Parses a flag value with its `FromStr`, mapping failures to invalid-argument errors.
pub fn parse_arg<T>(value: &str) -> CliResult<T>
where
    T: std::str::FromStr<Err = anyhow::Error>,
{
    value
        .parse()
        .map_err(|e: anyhow::Error| CliError::invalid_args(e.to_string()))
}

/// Rejects negative, zero or non-finite sizes.
pub fn require_positive(flag: &str, value: f64) -> CliResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CliError::invalid_args(format!(
            "{flag} must be a positive number, got {value}"
        )))
    }
}

/// Rejects non-finite values.
pub fn require_finite(flag: &str, value: f64) -> CliResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CliError::invalid_args(format!(
            "{flag} must be a finite number, got {value}"
        )))
    }
}

/// Prints warnings in human-readable form.
pub fn print_warnings(warnings: &[ValidationWarning]) {
    if warnings.is_empty() {
        return;
    }
    println!();
    println!("Warnings:");
    for warning in warnings {
        let prefix = match warning.severity {
            Severity::Error => "  ✗",
            Severity::Warning => "  ⚠",
        };
        println!("{prefix} {}", warning.message);
    }
}

/// Findings are advisory; they only fail the command under `--strict`.
pub fn check_warnings(warnings: &[ValidationWarning], strict: bool) -> CliResult<()> {
    if strict && !warnings.is_empty() {
        return Err(CliError::validation(format!(
            "{} finding(s) reported in strict mode",
            warnings.len()
        )));
    }
    Ok(())
}
