//! Exit codes for the roclab CLI.
//!
//! Exit code ranges:
//! - 0: Success
//! - 10-19: User/input errors (recoverable by user action)
//! - 20-29: Internal and I/O errors

use roc_common::{Error, ErrorCategory};

/// Exit codes for roclab operations.
///
/// These codes are a stable contract for scripts driving the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Clean = 0,

    // ========================================================================
    // User / Input Errors (10-19)
    // ========================================================================
    /// Invalid arguments
    ArgsError = 10,

    /// Configuration could not be loaded or failed validation
    ConfigError = 11,

    /// Sample set is malformed or lacks one of the two classes
    DataError = 12,

    // ========================================================================
    // Internal Errors (20-29)
    // ========================================================================
    /// Internal error (bug - please report)
    InternalError = 20,

    /// I/O error
    IoError = 21,
}

impl ExitCode {
    /// Convert to i32 for process exit.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the error code name as a string constant (for JSON output).
    pub fn code_name(&self) -> &'static str {
        match self {
            ExitCode::Clean => "OK",
            ExitCode::ArgsError => "ERR_ARGS",
            ExitCode::ConfigError => "ERR_CONFIG",
            ExitCode::DataError => "ERR_DATA",
            ExitCode::InternalError => "ERR_INTERNAL",
            ExitCode::IoError => "ERR_IO",
        }
    }

    /// Map a library error onto its process exit code.
    pub fn from_error(error: &Error) -> Self {
        match error.category() {
            ErrorCategory::Config => ExitCode::ConfigError,
            ErrorCategory::Data => ExitCode::DataError,
            ErrorCategory::Io => ExitCode::IoError,
            ErrorCategory::Internal => ExitCode::InternalError,
        }
    }
}
