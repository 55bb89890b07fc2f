//! Confusion matrices at a single threshold.

use super::sample::SampleSet;
use roc_common::ThresholdRule;
use serde::{Deserialize, Serialize};

/// 2x2 tally of predicted vs. actual class.
///
/// Invariant: `tp + fp + tn + fn_ == |samples|` for the set it was built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub tp: u64,
    pub fp: u64,
    pub tn: u64,
    #[serde(rename = "fn")]
    pub fn_: u64,
}

impl ConfusionMatrix {
    pub const fn new(tp: u64, fp: u64, tn: u64, fn_: u64) -> Self {
        Self { tp, fp, tn, fn_ }
    }

    /// Tally one sample.
    #[inline]
    pub fn record(&mut self, predicted_positive: bool, actual_positive: bool) {
        match (predicted_positive, actual_positive) {
            (true, true) => self.tp += 1,
            (true, false) => self.fp += 1,
            (false, false) => self.tn += 1,
            (false, true) => self.fn_ += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.tp + self.fp + self.tn + self.fn_
    }

    pub fn actual_positives(&self) -> u64 {
        self.tp + self.fn_
    }

    pub fn actual_negatives(&self) -> u64 {
        self.tn + self.fp
    }

    pub fn predicted_positives(&self) -> u64 {
        self.tp + self.fp
    }

    pub fn predicted_negatives(&self) -> u64 {
        self.tn + self.fn_
    }

    /// True-positive rate, 0 when there are no actual positives.
    pub fn tpr(&self) -> f64 {
        ratio_or_zero(self.tp, self.actual_positives())
    }

    /// False-positive rate, 0 when there are no actual negatives.
    pub fn fpr(&self) -> f64 {
        ratio_or_zero(self.fp, self.actual_negatives())
    }
}

pub(crate) fn ratio_or_zero(num: u64, den: u64) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

/// Confusion matrix with the inclusive rule: positive iff `score >= threshold`.
///
/// An empty set yields all-zero counts. Thresholds outside [0, 1] are
/// accepted and classify everything one way.
pub fn confusion_matrix(samples: &SampleSet, threshold: f64) -> ConfusionMatrix {
    confusion_matrix_with(samples, threshold, ThresholdRule::Inclusive)
}

/// Confusion matrix under an explicit threshold rule.
pub fn confusion_matrix_with(
    samples: &SampleSet,
    threshold: f64,
    rule: ThresholdRule,
) -> ConfusionMatrix {
    let mut matrix = ConfusionMatrix::default();
    for sample in samples {
        matrix.record(rule.is_positive(sample.score, threshold), sample.label);
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> SampleSet {
        SampleSet::from_pairs(&[
            (0.9, true),
            (0.8, true),
            (0.4, false),
            (0.3, false),
            (0.6, true),
        ])
    }

    #[test]
    fn five_sample_scenario() {
        let m = confusion_matrix(&five(), 0.5);
        assert_eq!(m, ConfusionMatrix::new(3, 0, 2, 0));
        assert_eq!(m.total(), 5);
    }

    #[test]
    fn inclusive_boundary_counts_as_positive() {
        let set = SampleSet::from_pairs(&[(0.5, true), (0.5, false)]);
        let inc = confusion_matrix(&set, 0.5);
        assert_eq!(inc, ConfusionMatrix::new(1, 1, 0, 0));

        let exc = confusion_matrix_with(&set, 0.5, ThresholdRule::Exclusive);
        assert_eq!(exc, ConfusionMatrix::new(0, 0, 1, 1));
    }

    #[test]
    fn threshold_zero_classifies_all_positive() {
        let m = confusion_matrix(&five(), 0.0);
        assert_eq!(m.fn_, 0);
        assert_eq!(m.tn, 0);
        assert_eq!(m.tp, 3);
        assert_eq!(m.fp, 2);
    }

    #[test]
    fn threshold_above_one_classifies_all_negative() {
        let m = confusion_matrix(&five(), 1.01);
        assert_eq!(m.tp, 0);
        assert_eq!(m.fp, 0);
        assert_eq!(m.total(), 5);
    }

    #[test]
    fn out_of_range_thresholds_accepted() {
        assert_eq!(confusion_matrix(&five(), -3.0).predicted_positives(), 5);
        assert_eq!(confusion_matrix(&five(), 42.0).predicted_negatives(), 5);
    }

    #[test]
    fn empty_set_all_zero() {
        let m = confusion_matrix(&SampleSet::default(), 0.5);
        assert_eq!(m, ConfusionMatrix::default());
        assert_eq!(m.tpr(), 0.0);
        assert_eq!(m.fpr(), 0.0);
    }

    #[test]
    fn serializes_fn_field_as_fn() {
        let json = serde_json::to_value(ConfusionMatrix::new(1, 2, 3, 4)).unwrap();
        assert_eq!(json["fn"], 4);
        assert!(json.get("fn_").is_none());
    }
}
