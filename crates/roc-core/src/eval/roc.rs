//! ROC curve assembly.
//!
//! Two sweeps are supported:
//! - a caller-chosen threshold list (typically the 101-point grid), one
//!   confusion matrix per threshold, O(n·k);
//! - an exact sweep at every distinct score, one sort plus cumulative
//!   counts, O(n log n).
//!
//! Either way the points end up sorted by ascending FPR with ties broken by
//! descending threshold, and plateaus are kept.

use super::confusion::{confusion_matrix_with, ratio_or_zero, ConfusionMatrix};
use super::sample::SampleSet;
use roc_common::{EvaluationConfig, SweepStrategy, ThresholdRule};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Gap between the extreme observed score and the exact-sweep sentinel.
pub const SENTINEL_MARGIN: f64 = 0.01;

/// One (FPR, TPR) pair and the threshold that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocPoint {
    pub fpr: f64,
    pub tpr: f64,
    pub threshold: f64,
}

impl RocPoint {
    pub const fn new(fpr: f64, tpr: f64, threshold: f64) -> Self {
        Self {
            fpr,
            tpr,
            threshold,
        }
    }

    /// The point a confusion matrix sits at, with the zero-rate policy.
    pub fn from_matrix(matrix: &ConfusionMatrix, threshold: f64) -> Self {
        Self::new(matrix.fpr(), matrix.tpr(), threshold)
    }
}

/// ROC points sorted by non-decreasing FPR.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RocCurve {
    points: Vec<RocPoint>,
}

impl RocCurve {
    /// Sort `points` into curve order.
    pub fn from_points(mut points: Vec<RocPoint>) -> Self {
        points.sort_by(curve_order);
        Self { points }
    }

    pub fn points(&self) -> &[RocPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RocPoint> {
        self.points.iter()
    }

    pub fn first(&self) -> Option<&RocPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&RocPoint> {
        self.points.last()
    }

    /// True when the curve starts at (0, 0) and ends at (1, 1).
    ///
    /// Only such curves give an unbiased trapezoidal AUC.
    pub fn spans_unit_square(&self) -> bool {
        match (self.first(), self.last()) {
            (Some(a), Some(b)) => a.fpr == 0.0 && a.tpr == 0.0 && b.fpr == 1.0 && b.tpr == 1.0,
            _ => false,
        }
    }

    pub fn into_points(self) -> Vec<RocPoint> {
        self.points
    }
}

impl<'a> IntoIterator for &'a RocCurve {
    type Item = &'a RocPoint;
    type IntoIter = std::slice::Iter<'a, RocPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

fn curve_order(a: &RocPoint, b: &RocPoint) -> Ordering {
    a.fpr
        .total_cmp(&b.fpr)
        .then_with(|| b.threshold.total_cmp(&a.threshold))
}

/// ROC curve at the given thresholds, inclusive rule.
pub fn roc_curve(samples: &SampleSet, thresholds: &[f64]) -> RocCurve {
    roc_curve_with(samples, thresholds, ThresholdRule::Inclusive)
}

/// ROC curve at the given thresholds under an explicit rule.
///
/// One point per threshold, including duplicates.
pub fn roc_curve_with(samples: &SampleSet, thresholds: &[f64], rule: ThresholdRule) -> RocCurve {
    let points = thresholds
        .iter()
        .map(|&t| RocPoint::from_matrix(&confusion_matrix_with(samples, t, rule), t))
        .collect();
    RocCurve::from_points(points)
}

/// Evenly spaced thresholds `0, 1/steps, ..., 1`. `steps = 0` is treated as 1.
pub fn grid_thresholds(steps: usize) -> Vec<f64> {
    let steps = steps.max(1);
    (0..=steps).map(|i| i as f64 / steps as f64).collect()
}

/// Distinct scores in descending order, plus a sentinel that makes the curve
/// reach its missing corner.
///
/// Under the inclusive rule the sentinel sits above the highest score so
/// nothing is predicted positive, giving (0, 0). Under the exclusive rule it
/// sits below the lowest score so everything is positive, giving (1, 1).
pub fn exact_thresholds(samples: &SampleSet, rule: ThresholdRule) -> Vec<f64> {
    let mut scores: Vec<f64> = samples.iter().map(|s| s.score).collect();
    scores.sort_by(|a, b| b.total_cmp(a));
    scores.dedup();

    let (lo, hi) = samples.score_range().unwrap_or((0.0, 1.0));
    match rule {
        ThresholdRule::Inclusive => {
            let mut out = Vec::with_capacity(scores.len() + 1);
            out.push(hi.max(1.0) + SENTINEL_MARGIN);
            out.extend(scores);
            out
        }
        ThresholdRule::Exclusive => {
            scores.push(lo.min(0.0) - SENTINEL_MARGIN);
            scores
        }
    }
}

/// The threshold sequence a sweep strategy visits, in descending order.
pub fn sweep_thresholds(
    samples: &SampleSet,
    strategy: SweepStrategy,
    rule: ThresholdRule,
) -> Vec<f64> {
    match strategy {
        SweepStrategy::CoarseGrid { steps } => {
            let mut grid = grid_thresholds(steps);
            grid.reverse();
            grid
        }
        SweepStrategy::ExactScores => exact_thresholds(samples, rule),
    }
}

/// ROC curve for a sweep strategy.
pub fn roc_sweep(samples: &SampleSet, config: &EvaluationConfig) -> RocCurve {
    match config.sweep {
        SweepStrategy::CoarseGrid { .. } => {
            let thresholds = sweep_thresholds(samples, config.sweep, config.rule);
            roc_curve_with(samples, &thresholds, config.rule)
        }
        SweepStrategy::ExactScores => exact_roc_curve(samples, config.rule),
    }
}

/// Exact sweep via one descending sort and running counts.
///
/// Produces the same points as [`roc_curve_with`] over
/// [`exact_thresholds`], tied scores collapsing into a single point.
pub fn exact_roc_curve(samples: &SampleSet, rule: ThresholdRule) -> RocCurve {
    let positives = samples.positive_count() as u64;
    let negatives = samples.negative_count() as u64;

    let mut sorted: Vec<_> = samples.iter().collect();
    sorted.sort_by(|a, b| b.score.total_cmp(&a.score));

    let point = |tp: u64, fp: u64, threshold: f64| {
        RocPoint::new(
            ratio_or_zero(fp, negatives),
            ratio_or_zero(tp, positives),
            threshold,
        )
    };

    let mut points = Vec::with_capacity(sorted.len() + 1);
    let (lo, hi) = samples.score_range().unwrap_or((0.0, 1.0));
    if rule == ThresholdRule::Inclusive {
        points.push(point(0, 0, hi.max(1.0) + SENTINEL_MARGIN));
    }

    let (mut tp, mut fp) = (0u64, 0u64);
    let mut i = 0;
    while i < sorted.len() {
        let score = sorted[i].score;
        if rule == ThresholdRule::Exclusive {
            // Strictly greater scores only: counts before this tie group.
            points.push(point(tp, fp, score));
        }
        // `==` so that -0.0 and 0.0 share a group, as they do under `>=`.
        while i < sorted.len() && sorted[i].score == score {
            if sorted[i].label {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }
        if rule == ThresholdRule::Inclusive {
            points.push(point(tp, fp, score));
        }
    }

    if rule == ThresholdRule::Exclusive {
        points.push(point(tp, fp, lo.min(0.0) - SENTINEL_MARGIN));
    }

    RocCurve::from_points(points)
}

/// The curve point whose threshold is nearest `threshold`.
///
/// The first such point in curve order wins a tie. None for an empty curve.
pub fn operating_point(curve: &RocCurve, threshold: f64) -> Option<RocPoint> {
    curve
        .iter()
        .fold(None::<(f64, &RocPoint)>, |best, p| {
            let dist = (p.threshold - threshold).abs();
            match best {
                Some((d, _)) if d <= dist => best,
                _ => Some((dist, p)),
            }
        })
        .map(|(_, p)| *p)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed() -> SampleSet {
        SampleSet::from_pairs(&[
            (0.9, true),
            (0.7, false),
            (0.7, true),
            (0.4, false),
            (0.2, true),
            (0.1, false),
        ])
    }

    #[test]
    fn grid_has_inclusive_endpoints() {
        let grid = grid_thresholds(100);
        assert_eq!(grid.len(), 101);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[100], 1.0);
        assert_eq!(grid_thresholds(0), vec![0.0, 1.0]);
    }

    #[test]
    fn curve_is_fpr_sorted() {
        let curve = roc_curve(&mixed(), &grid_thresholds(20));
        assert_eq!(curve.len(), 21);
        for w in curve.points().windows(2) {
            assert!(w[0].fpr <= w[1].fpr);
            if w[0].fpr == w[1].fpr {
                assert!(w[0].threshold >= w[1].threshold);
            }
        }
    }

    #[test]
    fn unsorted_threshold_input_still_sorted() {
        let curve = roc_curve(&mixed(), &[0.5, 0.0, 1.0, 0.8, 0.3]);
        let fprs: Vec<f64> = curve.iter().map(|p| p.fpr).collect();
        let mut sorted = fprs.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(fprs, sorted);
    }

    #[test]
    fn plateaus_are_kept() {
        let set = SampleSet::from_pairs(&[(0.9, true), (0.1, false)]);
        let curve = roc_curve(&set, &grid_thresholds(10));
        // Thresholds 0.2..=0.9 all yield (0, 1).
        let plateau = curve.iter().filter(|p| p.fpr == 0.0 && p.tpr == 1.0).count();
        assert_eq!(plateau, 8);
    }

    #[test]
    fn exact_inclusive_spans_unit_square() {
        let curve = exact_roc_curve(&mixed(), ThresholdRule::Inclusive);
        // sentinel + 5 distinct scores
        assert_eq!(curve.len(), 6);
        assert!(curve.spans_unit_square());
        assert_eq!(curve.first().unwrap().threshold, 1.0 + SENTINEL_MARGIN);
    }

    #[test]
    fn exact_exclusive_spans_unit_square() {
        let curve = exact_roc_curve(&mixed(), ThresholdRule::Exclusive);
        assert_eq!(curve.len(), 6);
        assert!(curve.spans_unit_square());
        assert_eq!(curve.last().unwrap().threshold, -SENTINEL_MARGIN);
    }

    #[test]
    fn exact_sweep_matches_per_threshold_matrices() {
        for rule in [ThresholdRule::Inclusive, ThresholdRule::Exclusive] {
            let set = mixed();
            let fast = exact_roc_curve(&set, rule);
            let slow = roc_curve_with(&set, &exact_thresholds(&set, rule), rule);
            assert_eq!(fast, slow, "rule {rule}");
        }
    }

    #[test]
    fn signed_zeros_form_one_tie_group() {
        let set = SampleSet::from_pairs(&[(0.0, true), (-0.0, false), (0.7, true), (0.2, false)]);
        for rule in [ThresholdRule::Inclusive, ThresholdRule::Exclusive] {
            let fast = exact_roc_curve(&set, rule);
            let slow = roc_curve_with(&set, &exact_thresholds(&set, rule), rule);
            assert_eq!(fast, slow, "rule {rule}");
        }
        let curve = exact_roc_curve(&set, ThresholdRule::Inclusive);
        assert_eq!(curve.len(), 4);
        let at_zero = curve.iter().find(|p| p.threshold == 0.0).unwrap();
        assert_eq!((at_zero.fpr, at_zero.tpr), (1.0, 1.0));
    }

    #[test]
    fn tie_group_forms_one_point() {
        let curve = exact_roc_curve(&mixed(), ThresholdRule::Inclusive);
        let at_tie: Vec<_> = curve.iter().filter(|p| p.threshold == 0.7).collect();
        assert_eq!(at_tie.len(), 1);
        assert!((at_tie[0].tpr - 2.0 / 3.0).abs() < 1e-12);
        assert!((at_tie[0].fpr - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn sweep_thresholds_descend() {
        let set = mixed();
        for strategy in [SweepStrategy::CoarseGrid { steps: 10 }, SweepStrategy::ExactScores] {
            let ts = sweep_thresholds(&set, strategy, ThresholdRule::Inclusive);
            for w in ts.windows(2) {
                assert!(w[0] > w[1], "{strategy}: {:?}", ts);
            }
        }
    }

    #[test]
    fn roc_sweep_dispatches() {
        let set = mixed();
        let grid = roc_sweep(&set, &EvaluationConfig::default());
        assert_eq!(grid.len(), 101);
        let exact = roc_sweep(&set, &EvaluationConfig::exact());
        assert_eq!(exact, exact_roc_curve(&set, ThresholdRule::Inclusive));
    }

    #[test]
    fn empty_set_exact_sweep() {
        let curve = exact_roc_curve(&SampleSet::default(), ThresholdRule::Inclusive);
        assert_eq!(curve.len(), 1);
        assert_eq!(curve.points()[0].fpr, 0.0);
        assert_eq!(curve.points()[0].tpr, 0.0);
    }

    #[test]
    fn operating_point_nearest_threshold() {
        let curve = exact_roc_curve(&mixed(), ThresholdRule::Inclusive);
        let p = operating_point(&curve, 0.68).unwrap();
        assert_eq!(p.threshold, 0.7);
        let p = operating_point(&curve, 5.0).unwrap();
        assert_eq!(p.threshold, 1.01);
        assert!(operating_point(&RocCurve::default(), 0.5).is_none());
    }
}
