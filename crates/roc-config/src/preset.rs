//! Named sample-generation presets.
//!
//! Both presets draw a 10:1 negative-to-positive imbalance with moderately
//! overlapping classes; they differ in the scale the noise lives on.

use roc_common::{GenerationSpec, ScoreDistribution, DEFAULT_SCORE_CLAMP};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresetName {
    /// Normal on the log-odds scale, squashed; AUC around 0.75.
    #[default]
    LogitImbalanced,
    /// Normal directly on the probability scale; AUC around 0.8.
    LinearImbalanced,
}

impl PresetName {
    /// All available preset names.
    pub const ALL: &'static [PresetName] =
        &[PresetName::LogitImbalanced, PresetName::LinearImbalanced];

    /// Get preset name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PresetName::LogitImbalanced => "logit-imbalanced",
            PresetName::LinearImbalanced => "linear-imbalanced",
        }
    }

    /// Parse preset name from string.
    pub fn parse(s: &str) -> Option<PresetName> {
        match s.to_lowercase().as_str() {
            "logit-imbalanced" | "logit" | "logistic" => Some(PresetName::LogitImbalanced),
            "linear-imbalanced" | "linear" | "normal" => Some(PresetName::LinearImbalanced),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PresetName::LogitImbalanced => {
                "100 positives ~ logit N(-0.5, 0.9), 1000 negatives ~ logit N(-1.5, 0.8), shuffled"
            }
            PresetName::LinearImbalanced => {
                "100 positives ~ N(0.65, 0.22), 1000 negatives ~ N(0.35, 0.22)"
            }
        }
    }
}

impl std::fmt::Display for PresetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PresetName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PresetName::parse(s).ok_or_else(|| format!("unknown preset: {}", s))
    }
}

/// Generation parameters for a preset.
pub fn get_preset(name: PresetName) -> GenerationSpec {
    match name {
        PresetName::LogitImbalanced => GenerationSpec {
            positive_count: 100,
            negative_count: 1000,
            positive: ScoreDistribution::LogitNormal {
                mean: -0.5,
                std_dev: 0.9,
            },
            negative: ScoreDistribution::LogitNormal {
                mean: -1.5,
                std_dev: 0.8,
            },
            clamp: DEFAULT_SCORE_CLAMP,
            shuffle: true,
        },
        PresetName::LinearImbalanced => GenerationSpec {
            positive_count: 100,
            negative_count: 1000,
            positive: ScoreDistribution::Normal {
                mean: 0.65,
                std_dev: 0.22,
            },
            negative: ScoreDistribution::Normal {
                mean: 0.35,
                std_dev: 0.22,
            },
            clamp: DEFAULT_SCORE_CLAMP,
            shuffle: false,
        },
    }
}
