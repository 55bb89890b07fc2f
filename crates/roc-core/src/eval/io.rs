//! Loading and saving sample sets as JSON.
//!
//! The file format is a JSON array of `{"score": <number>, "label": <bool|0|1>}`.

use super::sample::SampleSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleIoError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid sample JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("sample {index} has score {score}; scores must lie in [0, 1]")]
    InvalidScore { index: usize, score: f64 },
}

impl From<SampleIoError> for roc_common::Error {
    fn from(err: SampleIoError) -> Self {
        match err {
            SampleIoError::Read { path, source } | SampleIoError::Write { path, source } => {
                let message = format!("{}: {}", path.display(), source);
                roc_common::Error::Io(std::io::Error::new(source.kind(), message))
            }
            SampleIoError::Parse(e) => roc_common::Error::InvalidSamples(e.to_string()),
            invalid @ SampleIoError::InvalidScore { .. } => {
                roc_common::Error::InvalidSamples(invalid.to_string())
            }
        }
    }
}

/// Parse and range-check a sample set.
pub fn parse_samples(json: &str) -> Result<SampleSet, SampleIoError> {
    let set: SampleSet = serde_json::from_str(json)?;
    for (index, sample) in set.iter().enumerate() {
        if !(0.0..=1.0).contains(&sample.score) {
            return Err(SampleIoError::InvalidScore {
                index,
                score: sample.score,
            });
        }
    }
    Ok(set)
}

pub fn load_samples(path: &Path) -> Result<SampleSet, SampleIoError> {
    let content = std::fs::read_to_string(path).map_err(|source| SampleIoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let set = parse_samples(&content)?;
    tracing::debug!(path = %path.display(), samples = set.len(), "loaded sample set");
    Ok(set)
}

pub fn samples_to_json(set: &SampleSet) -> Result<String, SampleIoError> {
    Ok(serde_json::to_string_pretty(set)?)
}

pub fn save_samples(path: &Path, set: &SampleSet) -> Result<(), SampleIoError> {
    let json = samples_to_json(set)?;
    std::fs::write(path, json).map_err(|source| SampleIoError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::sample::Sample;
    use tempfile::TempDir;

    #[test]
    fn parse_rejects_out_of_range_scores() {
        let err = parse_samples(r#"[{"score":0.5,"label":1},{"score":1.5,"label":0}]"#)
            .unwrap_err();
        match err {
            SampleIoError::InvalidScore { index, score } => {
                assert_eq!(index, 1);
                assert_eq!(score, 1.5);
            }
            other => panic!("unexpected: {other}"),
        }
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(matches!(
            parse_samples("[{\"score\": 0.1}]"),
            Err(SampleIoError::Parse(_))
        ));
    }

    #[test]
    fn save_then_load_preserves_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("samples.json");
        let set = SampleSet::new(vec![
            Sample::positive(0.9),
            Sample::negative(0.4),
            Sample::positive(0.6),
        ]);
        save_samples(&path, &set).unwrap();
        assert_eq!(load_samples(&path).unwrap(), set);
    }

    #[test]
    fn missing_file_maps_to_io_error() {
        let err = load_samples(Path::new("/nonexistent/samples.json")).unwrap_err();
        let common: roc_common::Error = err.into();
        assert_eq!(common.category(), roc_common::ErrorCategory::Io);
        assert!(common.to_string().contains("/nonexistent/samples.json"));
        match common {
            roc_common::Error::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("unexpected: {other}"),
        }
    }
}
