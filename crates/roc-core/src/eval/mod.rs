//! Binary classifier evaluation engine.
//!
//! A pure pipeline over (score, label) samples:
//!
//! 1. [`generate_samples`] or [`load_samples`] produces a [`SampleSet`]
//! 2. [`confusion_matrix`] partitions it at one threshold
//! 3. [`metrics`] / [`checked_metrics`] derive the rates
//! 4. [`roc_curve`] / [`roc_sweep`] assemble (FPR, TPR) points
//! 5. [`auc`] integrates them with the trapezoidal rule
//!
//! Nothing here holds state between calls; the same inputs always give
//! bit-identical outputs.
//!
//! # Usage
//!
//! ```
//! use roc_core::eval::{evaluate, SampleSet};
//! use roc_common::EvaluationConfig;
//!
//! let samples = SampleSet::from_pairs(&[(0.9, true), (0.8, true), (0.4, false), (0.3, false), (0.6, true)]);
//! let eval = evaluate(&samples, 0.5, &EvaluationConfig::exact());
//! assert_eq!(eval.metrics.sensitivity, 1.0);
//! assert_eq!(eval.auc, 1.0);
//! ```

pub mod auc;
pub mod confusion;
pub mod generate;
pub mod io;
pub mod rates;
pub mod roc;
pub mod sample;

pub use auc::auc;
pub use confusion::{confusion_matrix, confusion_matrix_with, ConfusionMatrix};
pub use generate::{
    generate_samples, generate_with_models, model_fn, standard_normal, FnModel,
    GenerationOptions, ScoreModel,
};
pub use io::{load_samples, parse_samples, save_samples, samples_to_json, SampleIoError};
pub use rates::{checked_metrics, metrics, CheckedMetrics, Metrics};
pub use roc::{
    exact_roc_curve, exact_thresholds, grid_thresholds, operating_point, roc_curve,
    roc_curve_with, roc_sweep, sweep_thresholds, RocCurve, RocPoint,
};
pub use sample::{Sample, SampleSet};

use roc_common::EvaluationConfig;
use serde::{Deserialize, Serialize};

/// Everything a host needs to render one threshold setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub threshold: f64,
    pub config: EvaluationConfig,
    pub sample_count: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    pub matrix: ConfusionMatrix,
    pub metrics: Metrics,
    pub checked: CheckedMetrics,
    /// Where the current threshold sits in ROC space.
    pub operating_point: RocPoint,
    pub auc: f64,
    pub curve: RocCurve,
}

/// Run the full pipeline for one threshold.
pub fn evaluate(samples: &SampleSet, threshold: f64, config: &EvaluationConfig) -> Evaluation {
    let matrix = confusion_matrix_with(samples, threshold, config.rule);
    let checked = checked_metrics(&matrix);
    let curve = roc_sweep(samples, config);
    let area = auc(&curve);

    tracing::debug!(
        threshold,
        rule = %config.rule,
        sweep = %config.sweep,
        samples = samples.len(),
        points = curve.len(),
        auc = area,
        "evaluated sample set"
    );

    Evaluation {
        threshold,
        config: *config,
        sample_count: samples.len(),
        positive_count: samples.positive_count(),
        negative_count: samples.negative_count(),
        matrix,
        metrics: checked.or_zero(),
        checked,
        operating_point: RocPoint::from_matrix(&matrix, threshold),
        auc: area,
        curve,
    }
}
