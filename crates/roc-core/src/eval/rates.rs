//! Rates derived from a confusion matrix.
//!
//! Two views of the same numbers: [`Metrics`] substitutes 0 for any rate
//! whose denominator is zero (the usual display convention), while
//! [`CheckedMetrics`] keeps those rates as `None` so a host can render
//! "N/A" instead.

use super::confusion::ConfusionMatrix;
use serde::{Deserialize, Serialize};

/// Rates with the zero-for-undefined policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// tp / (tp + fn). Also the true-positive rate / recall.
    pub sensitivity: f64,
    /// tn / (tn + fp). Also the true-negative rate.
    pub specificity: f64,
    /// (tp + tn) / total.
    pub accuracy: f64,
    /// tp / (tp + fp). Also precision.
    pub ppv: f64,
    /// tn / (tn + fn).
    pub npv: f64,
}

/// Rates that are `None` where the denominator is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckedMetrics {
    pub sensitivity: Option<f64>,
    pub specificity: Option<f64>,
    pub accuracy: Option<f64>,
    pub ppv: Option<f64>,
    pub npv: Option<f64>,
}

impl CheckedMetrics {
    /// Collapse undefined rates to 0.
    pub fn or_zero(&self) -> Metrics {
        Metrics {
            sensitivity: self.sensitivity.unwrap_or(0.0),
            specificity: self.specificity.unwrap_or(0.0),
            accuracy: self.accuracy.unwrap_or(0.0),
            ppv: self.ppv.unwrap_or(0.0),
            npv: self.npv.unwrap_or(0.0),
        }
    }

    /// True when every rate is defined.
    pub fn is_complete(&self) -> bool {
        self.sensitivity.is_some()
            && self.specificity.is_some()
            && self.accuracy.is_some()
            && self.ppv.is_some()
            && self.npv.is_some()
    }
}

fn ratio(num: u64, den: u64) -> Option<f64> {
    (den != 0).then(|| num as f64 / den as f64)
}

pub fn checked_metrics(matrix: &ConfusionMatrix) -> CheckedMetrics {
    let m = matrix;
    CheckedMetrics {
        sensitivity: ratio(m.tp, m.tp + m.fn_),
        specificity: ratio(m.tn, m.tn + m.fp),
        accuracy: ratio(m.tp + m.tn, m.total()),
        ppv: ratio(m.tp, m.tp + m.fp),
        npv: ratio(m.tn, m.tn + m.fn_),
    }
}

/// Sensitivity, specificity, accuracy, PPV and NPV; 0 where undefined.
pub fn metrics(matrix: &ConfusionMatrix) -> Metrics {
    checked_metrics(matrix).or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_rates() {
        let m = metrics(&ConfusionMatrix::new(40, 20, 80, 10));
        assert_eq!(m.sensitivity, 0.8);
        assert_eq!(m.specificity, 0.8);
        assert_eq!(m.accuracy, 0.8);
        assert!((m.ppv - 40.0 / 60.0).abs() < 1e-12);
        assert!((m.npv - 80.0 / 90.0).abs() < 1e-12);
        assert!((m.ppv - 0.667).abs() < 1e-3);
        assert!((m.npv - 0.889).abs() < 1e-3);
    }

    #[test]
    fn no_positives_gives_zero_sensitivity() {
        let matrix = ConfusionMatrix::new(0, 3, 7, 0);
        let m = metrics(&matrix);
        assert_eq!(m.sensitivity, 0.0);
        assert!(!m.sensitivity.is_nan());

        let checked = checked_metrics(&matrix);
        assert_eq!(checked.sensitivity, None);
        assert_eq!(checked.specificity, Some(0.7));
        assert!(!checked.is_complete());
    }

    #[test]
    fn empty_matrix_all_zero() {
        let m = metrics(&ConfusionMatrix::default());
        assert_eq!(m, Metrics::default());
        assert_eq!(checked_metrics(&ConfusionMatrix::default()), CheckedMetrics::default());
    }

    #[test]
    fn checked_and_plain_agree_when_defined() {
        let matrix = ConfusionMatrix::new(5, 2, 9, 1);
        let checked = checked_metrics(&matrix);
        assert!(checked.is_complete());
        let plain = metrics(&matrix);
        assert_eq!(checked.sensitivity, Some(plain.sensitivity));
        assert_eq!(checked.npv, Some(plain.npv));
    }
}
