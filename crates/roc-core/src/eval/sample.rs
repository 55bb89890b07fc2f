//! Samples and sample sets.

use roc_common::Error;
use serde::{Deserialize, Deserializer, Serialize};

/// One scored observation. `label = true` is the positive class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Predicted score in [0, 1].
    pub score: f64,
    /// Ground truth. Files may spell it `true`/`false` or `1`/`0`.
    #[serde(deserialize_with = "deserialize_label")]
    pub label: bool,
}

impl Sample {
    pub const fn new(score: f64, label: bool) -> Self {
        Self { score, label }
    }

    pub const fn positive(score: f64) -> Self {
        Self::new(score, true)
    }

    pub const fn negative(score: f64) -> Self {
        Self::new(score, false)
    }
}

fn deserialize_label<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawLabel {
        Bool(bool),
        Int(i64),
    }

    match RawLabel::deserialize(deserializer)? {
        RawLabel::Bool(b) => Ok(b),
        RawLabel::Int(1) => Ok(true),
        RawLabel::Int(0) => Ok(false),
        RawLabel::Int(other) => Err(serde::de::Error::custom(format!(
            "label must be a boolean or 0/1, got {}",
            other
        ))),
    }
}

/// An ordered, immutable collection of samples.
///
/// Order does not affect any metric but is kept stable so seeded runs are
/// reproducible element for element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Build from `(score, label)` pairs.
    pub fn from_pairs(pairs: &[(f64, bool)]) -> Self {
        pairs
            .iter()
            .map(|&(score, label)| Sample::new(score, label))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    pub fn into_vec(self) -> Vec<Sample> {
        self.samples
    }

    pub fn positive_count(&self) -> usize {
        self.samples.iter().filter(|s| s.label).count()
    }

    pub fn negative_count(&self) -> usize {
        self.samples.len() - self.positive_count()
    }

    /// Both classes present, so every rate has a non-zero denominator
    /// somewhere along a sweep.
    pub fn is_evaluable(&self) -> bool {
        let positives = self.positive_count();
        positives > 0 && positives < self.samples.len()
    }

    /// Like [`is_evaluable`](Self::is_evaluable) but reports the class counts.
    pub fn check_evaluable(&self) -> Result<(), Error> {
        if self.is_evaluable() {
            return Ok(());
        }
        Err(Error::DegenerateSamples {
            positives: self.positive_count(),
            negatives: self.negative_count(),
        })
    }

    /// Lowest and highest score, or None when empty.
    pub fn score_range(&self) -> Option<(f64, f64)> {
        let mut iter = self.samples.iter().map(|s| s.score);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x))))
    }
}

impl FromIterator<Sample> for SampleSet {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl From<Vec<Sample>> for SampleSet {
    fn from(samples: Vec<Sample>) -> Self {
        Self::new(samples)
    }
}
