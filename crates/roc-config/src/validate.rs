//! Configuration validation errors and semantic validation.

use crate::lab::LabConfig;
use roc_common::{GenerationSpec, ScoreDistribution, SweepStrategy};
use thiserror::Error;

/// Validation result type.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Configuration validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: String, actual: String },
}

impl ValidationError {
    /// Error code for structured error reporting.
    pub fn code(&self) -> u32 {
        match self {
            ValidationError::IoError(_) => 60,
            ValidationError::ParseError(_) => 61,
            ValidationError::InvalidValue { .. } => 65,
            ValidationError::VersionMismatch { .. } => 66,
        }
    }

    fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<ValidationError> for roc_common::Error {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::IoError(msg) | ValidationError::ParseError(msg) => {
                roc_common::Error::Config(msg)
            }
            ValidationError::InvalidValue { field, message } => {
                roc_common::Error::InvalidValue { field, message }
            }
            ValidationError::VersionMismatch { expected, actual } => {
                roc_common::Error::SchemaVersion { expected, actual }
            }
        }
    }
}

/// Validate a loaded configuration semantically.
pub fn validate_config(config: &LabConfig) -> ValidationResult<()> {
    if config.schema_version != crate::CONFIG_SCHEMA_VERSION {
        return Err(ValidationError::VersionMismatch {
            expected: crate::CONFIG_SCHEMA_VERSION.to_string(),
            actual: config.schema_version.clone(),
        });
    }

    if !config.default_threshold.is_finite() {
        return Err(ValidationError::invalid(
            "default_threshold",
            format!("must be finite, got {}", config.default_threshold),
        ));
    }

    if config.samples.preset.is_some() && config.samples.spec.is_some() {
        return Err(ValidationError::invalid(
            "samples",
            "set either 'preset' or 'spec', not both",
        ));
    }

    if let Some(ref spec) = config.samples.spec {
        validate_generation_spec("samples.spec", spec)?;
    }

    validate_sweep("evaluation.sweep", &config.evaluation.sweep)?;

    Ok(())
}

/// Validate generation parameters.
///
/// The engine tolerates zero counts (it reports degenerate rates), but a
/// configured dataset that can never be evaluated is rejected here.
pub fn validate_generation_spec(field: &str, spec: &GenerationSpec) -> ValidationResult<()> {
    if spec.positive_count == 0 {
        return Err(ValidationError::invalid(
            format!("{}.positive_count", field),
            "must be at least 1",
        ));
    }
    if spec.negative_count == 0 {
        return Err(ValidationError::invalid(
            format!("{}.negative_count", field),
            "must be at least 1",
        ));
    }

    validate_distribution(&format!("{}.positive", field), &spec.positive)?;
    validate_distribution(&format!("{}.negative", field), &spec.negative)?;

    let clamp = spec.clamp;
    if !clamp.is_valid() || clamp.lo < 0.0 || clamp.hi > 1.0 {
        return Err(ValidationError::invalid(
            format!("{}.clamp", field),
            format!(
                "must satisfy 0 <= lo <= hi <= 1, got [{}, {}]",
                clamp.lo, clamp.hi
            ),
        ));
    }

    Ok(())
}

fn validate_distribution(field: &str, dist: &ScoreDistribution) -> ValidationResult<()> {
    if !dist.is_valid() {
        return Err(ValidationError::invalid(
            field,
            format!(
                "mean must be finite and std_dev finite and >= 0, got mean={} std_dev={}",
                dist.mean(),
                dist.std_dev()
            ),
        ));
    }
    Ok(())
}

fn validate_sweep(field: &str, sweep: &SweepStrategy) -> ValidationResult<()> {
    if let SweepStrategy::CoarseGrid { steps } = *sweep {
        if steps == 0 {
            return Err(ValidationError::invalid(
                format!("{}.steps", field),
                "must be at least 1",
            ));
        }
    }
    Ok(())
}
