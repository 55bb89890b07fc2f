//! Evaluation and generation parameters shared across crates.
//!
//! These are plain serde types so they can live in configuration files;
//! the behavior behind them is implemented in `roc-core::eval`.

use roc_math::Interval;
use serde::{Deserialize, Serialize};

/// Default clamp for generated scores. Keeps log-odds finite.
pub const DEFAULT_SCORE_CLAMP: Interval = Interval::new(0.01, 0.99);

/// Default number of grid steps (101 thresholds: 0.00, 0.01, ..., 1.00).
pub const DEFAULT_GRID_STEPS: usize = 100;

/// How a score is compared against the decision threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdRule {
    /// Predicted positive iff `score >= threshold`.
    #[default]
    Inclusive,
    /// Predicted positive iff `score > threshold`.
    Exclusive,
}

impl ThresholdRule {
    /// Classify a single score.
    #[inline]
    pub fn is_positive(self, score: f64, threshold: f64) -> bool {
        match self {
            ThresholdRule::Inclusive => score >= threshold,
            ThresholdRule::Exclusive => score > threshold,
        }
    }
}

impl std::fmt::Display for ThresholdRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThresholdRule::Inclusive => write!(f, "inclusive"),
            ThresholdRule::Exclusive => write!(f, "exclusive"),
        }
    }
}

/// How the threshold sequence of an ROC curve is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SweepStrategy {
    /// Thresholds `i / steps` for `i` in `0..=steps`.
    CoarseGrid { steps: usize },
    /// One threshold per distinct observed score, plus one sentinel.
    ExactScores,
}

impl Default for SweepStrategy {
    fn default() -> Self {
        SweepStrategy::CoarseGrid {
            steps: DEFAULT_GRID_STEPS,
        }
    }
}

impl std::fmt::Display for SweepStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SweepStrategy::CoarseGrid { steps } => write!(f, "grid({})", steps),
            SweepStrategy::ExactScores => write!(f, "exact"),
        }
    }
}

/// Threshold rule plus sweep strategy: the two knobs that distinguish the
/// historical variants of the evaluation pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvaluationConfig {
    #[serde(default)]
    pub rule: ThresholdRule,
    #[serde(default)]
    pub sweep: SweepStrategy,
}

impl EvaluationConfig {
    pub fn new(rule: ThresholdRule, sweep: SweepStrategy) -> Self {
        Self { rule, sweep }
    }

    /// Inclusive rule, one point per distinct score.
    pub fn exact() -> Self {
        Self::new(ThresholdRule::Inclusive, SweepStrategy::ExactScores)
    }
}

/// Parametric family a synthetic score is drawn from.
///
/// Both families draw a standard normal deviate `z` and clamp the result
/// afterwards; they differ in where the normal lives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreDistribution {
    /// `sigmoid(mean + std_dev * z)`: normal on the log-odds scale.
    LogitNormal { mean: f64, std_dev: f64 },
    /// `mean + std_dev * z`: normal directly on the probability scale.
    Normal { mean: f64, std_dev: f64 },
}

impl ScoreDistribution {
    pub fn mean(&self) -> f64 {
        match *self {
            ScoreDistribution::LogitNormal { mean, .. } | ScoreDistribution::Normal { mean, .. } => {
                mean
            }
        }
    }

    pub fn std_dev(&self) -> f64 {
        match *self {
            ScoreDistribution::LogitNormal { std_dev, .. }
            | ScoreDistribution::Normal { std_dev, .. } => std_dev,
        }
    }

    /// True when both parameters are finite and the spread is non-negative.
    pub fn is_valid(&self) -> bool {
        self.mean().is_finite() && self.std_dev().is_finite() && self.std_dev() >= 0.0
    }
}

/// Everything needed to draw one synthetic sample set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationSpec {
    pub positive_count: usize,
    pub negative_count: usize,
    pub positive: ScoreDistribution,
    pub negative: ScoreDistribution,
    #[serde(default = "default_clamp")]
    pub clamp: Interval,
    #[serde(default)]
    pub shuffle: bool,
}

fn default_clamp() -> Interval {
    DEFAULT_SCORE_CLAMP
}

impl GenerationSpec {
    pub fn total(&self) -> usize {
        self.positive_count + self.negative_count
    }
}
