//! ROC Lab configuration loading and validation.
//!
//! This crate provides:
//! - The typed `roclab.json` model
//! - Named sample-generation presets
//! - Config resolution (CLI → env → XDG → system → defaults)
//! - Semantic validation

pub mod lab;
pub mod preset;
pub mod resolve;
pub mod validate;

pub use lab::{load_config, LabConfig, LoadedConfig, SamplesConfig};
pub use preset::{get_preset, PresetName};
pub use resolve::{resolve_config, ConfigPath, ConfigSource};
pub use validate::{validate_config, ValidationError, ValidationResult};

/// Schema version for configuration files.
pub const CONFIG_SCHEMA_VERSION: &str = "1.0.0";
