//! Property-based tests for roc-math scalar functions.

use proptest::prelude::*;
use roc_math::{box_muller, logit, sigmoid, trapezoid_sum, Interval};

const TOL: f64 = 1e-9;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// sigmoid stays inside [0, 1] for any finite input.
    #[test]
    fn sigmoid_bounded(x in -1.0e6..1.0e6f64) {
        let p = sigmoid(x);
        prop_assert!((0.0..=1.0).contains(&p), "sigmoid({})={}", x, p);
    }

    /// sigmoid is monotone non-decreasing.
    #[test]
    fn sigmoid_monotone(a in -50.0..50.0f64, b in -50.0..50.0f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(sigmoid(lo) <= sigmoid(hi));
    }

    /// sigmoid(-x) = 1 - sigmoid(x).
    #[test]
    fn sigmoid_symmetry(x in -30.0..30.0f64) {
        prop_assert!((sigmoid(-x) - (1.0 - sigmoid(x))).abs() < TOL);
    }

    /// logit undoes sigmoid away from saturation.
    #[test]
    fn logit_round_trip(x in -20.0..20.0f64) {
        let back = logit(sigmoid(x));
        prop_assert!((back - x).abs() < 1e-6, "logit(sigmoid({}))={}", x, back);
    }

    /// Box-Muller never yields NaN or infinity for uniforms in [0, 1).
    #[test]
    fn box_muller_finite(u1 in 0.0..1.0f64, u2 in 0.0..1.0f64) {
        prop_assert!(box_muller(u1, u2).is_finite());
    }

    /// Clamping always lands inside a valid interval.
    #[test]
    fn clamp_lands_inside(lo in -1.0..0.5f64, width in 0.0..1.0f64, x in -10.0..10.0f64) {
        let iv = Interval::new(lo, lo + width);
        prop_assert!(iv.contains(iv.clamp(x)));
    }

    /// A monotone staircase inside the unit square integrates into [0, 1].
    #[test]
    fn trapezoid_sum_unit_square(mut ys in prop::collection::vec(0.0..=1.0f64, 2..50)) {
        ys.sort_by(|a, b| a.total_cmp(b));
        let n = ys.len() - 1;
        let pts: Vec<(f64, f64)> = ys
            .iter()
            .enumerate()
            .map(|(i, &y)| (i as f64 / n as f64, y))
            .collect();
        let area = trapezoid_sum(pts);
        prop_assert!((-TOL..=1.0 + TOL).contains(&area), "area={}", area);
    }
}
