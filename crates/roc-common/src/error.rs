//! Error types for ROC Lab.
//!
//! The evaluation engine itself never fails; errors come from the edges:
//! configuration, sample files, and I/O. Every variant carries a stable
//! numeric code and a category so the CLI can map it to an exit code.
//!
//! ```text
//! ✗ Data Error
//!   Reason: sample set has 0 positive and 12 negative samples
//!   Fix: Provide at least one sample of each class.
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for ROC Lab operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Configuration file errors.
    Config,
    /// Sample set content errors.
    Data,
    /// File I/O and serialization errors.
    Io,
    /// Bugs.
    Internal,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Data => write!(f, "data"),
            ErrorCategory::Io => write!(f, "io"),
            ErrorCategory::Internal => write!(f, "internal"),
        }
    }
}

/// Unified error type for ROC Lab.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors (10-19)
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("schema version mismatch: expected {expected}, got {actual}")]
    SchemaVersion { expected: String, actual: String },

    // Data errors (20-29)
    #[error("invalid sample data: {0}")]
    InvalidSamples(String),

    #[error("sample set has {positives} positive and {negatives} negative samples; both classes are required")]
    DegenerateSamples { positives: usize, negatives: usize },

    // I/O errors (60-69)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Internal errors (90-99)
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Returns the error code for this error type.
    ///
    /// - 10-19: Configuration errors
    /// - 20-29: Data errors
    /// - 60-69: I/O errors
    /// - 90-99: Internal errors
    pub fn code(&self) -> u32 {
        match self {
            Error::Config(_) => 10,
            Error::InvalidValue { .. } => 11,
            Error::SchemaVersion { .. } => 12,
            Error::InvalidSamples(_) => 20,
            Error::DegenerateSamples { .. } => 21,
            Error::Io(_) => 60,
            Error::Json(_) => 61,
            Error::Internal(_) => 90,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Config(_) | Error::InvalidValue { .. } | Error::SchemaVersion { .. } => {
                ErrorCategory::Config
            }
            Error::InvalidSamples(_) | Error::DegenerateSamples { .. } => ErrorCategory::Data,
            Error::Io(_) | Error::Json(_) => ErrorCategory::Io,
            Error::Internal(_) => ErrorCategory::Internal,
        }
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::Config(_) | Error::InvalidValue { .. } => {
                "Run 'roclab config validate' to check the configuration file."
            }
            Error::SchemaVersion { .. } => {
                "Regenerate the configuration with 'roclab config show > roclab.json'."
            }
            Error::InvalidSamples(_) => {
                "Sample files are JSON arrays of {\"score\": <number>, \"label\": <bool or 0/1>} objects."
            }
            Error::DegenerateSamples { .. } => "Provide at least one sample of each class.",
            Error::Io(_) => "Check that the path exists and is readable.",
            Error::Json(_) => "Invalid JSON. Check syntax with 'jq . <file>'.",
            Error::Internal(_) => "This is a bug. Please report it with the command line used.",
        }
    }

    /// Format as the multi-line human message shown on stderr.
    pub fn format_human(&self) -> String {
        let headline = match self.category() {
            ErrorCategory::Config => "Configuration Error",
            ErrorCategory::Data => "Data Error",
            ErrorCategory::Io => "I/O Error",
            ErrorCategory::Internal => "Internal Error",
        };
        format!(
            "✗ {}\n  Reason: {}\n  Fix: {}",
            headline,
            self,
            self.remediation()
        )
    }

    /// Structured form for JSON error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.code(),
            "category": self.category(),
            "message": self.to_string(),
            "remediation": self.remediation(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_category_ranges() {
        let cases = [
            (Error::Config("x".into()), ErrorCategory::Config),
            (
                Error::DegenerateSamples {
                    positives: 0,
                    negatives: 3,
                },
                ErrorCategory::Data,
            ),
            (
                Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
                ErrorCategory::Io,
            ),
            (Error::Internal("x".into()), ErrorCategory::Internal),
        ];
        for (err, category) in cases {
            assert_eq!(err.category(), category);
            let code = err.code();
            let range = match category {
                ErrorCategory::Config => 10..20,
                ErrorCategory::Data => 20..30,
                ErrorCategory::Io => 60..70,
                ErrorCategory::Internal => 90..100,
            };
            assert!(range.contains(&code), "{err}: code {code}");
        }
    }

    #[test]
    fn degenerate_message_names_counts() {
        let err = Error::DegenerateSamples {
            positives: 0,
            negatives: 12,
        };
        let human = err.format_human();
        assert!(human.starts_with("✗ Data Error"));
        assert!(human.contains("0 positive and 12 negative"));
    }

    #[test]
    fn json_form_has_stable_keys() {
        let err = Error::SchemaVersion {
            expected: "1.0.0".into(),
            actual: "0.9.0".into(),
        };
        let v = err.to_json();
        assert_eq!(v["code"], 12);
        assert_eq!(v["category"], "config");
        assert!(v["message"].as_str().unwrap().contains("0.9.0"));
    }
}
