//! Shared types for CLI command handlers.
//!
//! Every command's `execute` returns a [`CliResult`]; `main` maps the error
//! variant to a process exit code so scripts can distinguish bad input from
//! environment failures.

use serde::Serialize;

/// Process exit codes for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Input failed validation (broken references, bad layout, ...)
    ValidationFailed = 1,
    /// An I/O or environment error prevented the command from running
    IoError = 2,
}

impl ExitCode {
    /// The numeric code handed to the operating system.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Errors surfaced by CLI commands.
#[derive(Debug, Clone)]
pub enum CliError {
    /// File system or environment failure
    Io(String),
    /// The input is well-formed enough to read but fails validation
    Validation(String),
}

impl CliError {
    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// The exit code this error maps to.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io(_) => ExitCode::IoError,
            Self::Validation(_) => ExitCode::ValidationFailed,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(message) | Self::Validation(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Per-check status block of the validate command's JSON response.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationChecks {
    /// Theme color reference check status
    pub colors: String,
    /// Icon reference check status
    pub icons: String,
}

impl ValidationChecks {
    /// All checks marked as passed.
    #[must_use]
    pub fn all_passed() -> Self {
        Self {
            colors: "passed".to_string(),
            icons: "passed".to_string(),
        }
    }
}

/// A single message in the validate command's JSON response.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationMessage {
    /// "error" for now; reserved for future warning support
    pub severity: String,
    /// Which check produced the message ("color" or "icon")
    pub kind: String,
    /// Human-readable description of the violation
    pub message: String,
}

/// JSON response of the validate command.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResponse {
    /// True when every check passed
    pub valid: bool,
    /// Collected violation messages
    pub errors: Vec<ValidationMessage>,
    /// Per-check status summary
    pub checks: ValidationChecks,
}
