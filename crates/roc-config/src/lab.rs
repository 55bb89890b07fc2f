//! The `roclab.json` configuration model.

use crate::preset::{get_preset, PresetName};
use crate::resolve::{resolve_config, ConfigSource};
use crate::validate::{validate_config, ValidationError, ValidationResult};
use roc_common::{EvaluationConfig, GenerationSpec};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

fn default_schema_version() -> String {
    crate::CONFIG_SCHEMA_VERSION.to_string()
}

fn default_threshold() -> f64 {
    0.5
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabConfig {
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Where synthetic samples come from.
    #[serde(default)]
    pub samples: SamplesConfig,

    /// Threshold rule and sweep strategy.
    #[serde(default)]
    pub evaluation: EvaluationConfig,

    /// Threshold used when the CLI is not given one.
    #[serde(default = "default_threshold")]
    pub default_threshold: f64,
}

impl Default for LabConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            samples: SamplesConfig::default(),
            evaluation: EvaluationConfig::default(),
            default_threshold: default_threshold(),
        }
    }
}

/// Sample generation settings: a named preset or explicit parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SamplesConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<PresetName>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec: Option<GenerationSpec>,

    /// RNG seed. Absent means fresh entropy per run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl SamplesConfig {
    /// Explicit spec if present, else the named preset, else the default preset.
    pub fn generation_spec(&self) -> GenerationSpec {
        match (self.spec, self.preset) {
            (Some(spec), _) => spec,
            (None, Some(preset)) => get_preset(preset),
            (None, None) => get_preset(PresetName::default()),
        }
    }
}

impl LabConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> ValidationResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ValidationError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json(json: &str) -> ValidationResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ValidationError::ParseError(format!("Invalid JSON: {}", e)))
    }

    /// Pretty JSON, as written by `roclab config show`.
    pub fn to_json_pretty(&self) -> ValidationResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ValidationError::ParseError(format!("Serialize failed: {}", e)))
    }
}

/// A validated configuration plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: LabConfig,
    pub path: Option<PathBuf>,
    pub source: ConfigSource,
}

/// Resolve, read, and validate the configuration.
///
/// Falls back to [`LabConfig::default`] when no file is found.
pub fn load_config(cli_path: Option<&Path>) -> ValidationResult<LoadedConfig> {
    let resolved = resolve_config(cli_path);
    let config = match resolved.path {
        Some(ref path) => LabConfig::from_file(path)?,
        None => LabConfig::default(),
    };
    validate_config(&config)?;
    Ok(LoadedConfig {
        config,
        path: resolved.path,
        source: resolved.source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use roc_common::{SweepStrategy, ThresholdRule};

    #[test]
    fn empty_object_uses_defaults() {
        let config = LabConfig::from_json("{}").unwrap();
        assert_eq!(config, LabConfig::default());
        assert_eq!(config.default_threshold, 0.5);
        assert_eq!(config.evaluation.rule, ThresholdRule::Inclusive);
    }

    #[test]
    fn full_document_parses() {
        let json = r#"{
            "schema_version": "1.0.0",
            "samples": { "preset": "linear-imbalanced", "seed": 42 },
            "evaluation": { "rule": "exclusive", "sweep": { "kind": "exact_scores" } },
            "default_threshold": 0.3
        }"#;
        let config = LabConfig::from_json(json).unwrap();
        assert_eq!(config.samples.preset, Some(PresetName::LinearImbalanced));
        assert_eq!(config.samples.seed, Some(42));
        assert_eq!(config.evaluation.rule, ThresholdRule::Exclusive);
        assert_eq!(config.evaluation.sweep, SweepStrategy::ExactScores);
        assert_eq!(config.default_threshold, 0.3);
    }

    #[test]
    fn generation_spec_precedence() {
        let mut samples = SamplesConfig::default();
        assert_eq!(
            samples.generation_spec(),
            get_preset(PresetName::LogitImbalanced)
        );

        samples.preset = Some(PresetName::LinearImbalanced);
        assert_eq!(
            samples.generation_spec(),
            get_preset(PresetName::LinearImbalanced)
        );

        let mut custom = get_preset(PresetName::LinearImbalanced);
        custom.positive_count = 7;
        samples.spec = Some(custom);
        assert_eq!(samples.generation_spec().positive_count, 7);
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = LabConfig::from_json("{ not json").unwrap_err();
        assert_eq!(err.code(), 61);
    }

    #[test]
    fn pretty_json_round_trips() {
        let config = LabConfig::default();
        let text = config.to_json_pretty().unwrap();
        assert_eq!(LabConfig::from_json(&text).unwrap(), config);
    }
}
