//! ROC Lab common types and errors.
//!
//! This crate provides the vocabulary shared by the engine, the
//! configuration layer, and the CLI:
//! - Threshold comparison rules and sweep strategies
//! - Parametric score distributions for synthetic sample sets
//! - The unified error type
//! - Output format selection

pub mod error;
pub mod output;
pub mod params;

pub use error::{Error, ErrorCategory, Result};
pub use output::OutputFormat;
pub use params::{
    EvaluationConfig, GenerationSpec, ScoreDistribution, SweepStrategy, ThresholdRule,
    DEFAULT_GRID_STEPS, DEFAULT_SCORE_CLAMP,
};
pub use roc_math::Interval;

/// Version stamped on every JSON payload the CLI emits.
pub const SCHEMA_VERSION: &str = "1.0.0";
