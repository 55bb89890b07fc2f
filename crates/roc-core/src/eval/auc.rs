//! Area under the ROC curve.

use super::roc::RocCurve;
use roc_math::trapezoid_sum;

/// Trapezoidal AUC over consecutive points of an FPR-sorted curve.
///
/// No endpoint padding: a curve that never reaches FPR = 1 (a coarse grid
/// whose lowest threshold still rejects some negatives) underestimates.
/// Sweep every distinct score for the exact area.
pub fn auc(curve: &RocCurve) -> f64 {
    trapezoid_sum(curve.iter().map(|p| (p.fpr, p.tpr)))
}
