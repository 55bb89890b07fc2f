//! Structured fuzz target for the ROC sweep.
//!
//! Checks the partition invariant, curve ordering, and AUC bounds on
//! arbitrary sample sets and thresholds.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use roc_common::{EvaluationConfig, SweepStrategy, ThresholdRule};
use roc_core::eval::{auc, confusion_matrix_with, roc_sweep, SampleSet};

#[derive(Debug, Arbitrary)]
struct Input {
    /// Scores quantized to 1/255 so ties are frequent.
    samples: Vec<(u8, bool)>,
    threshold: u8,
    exclusive: bool,
    exact: bool,
    steps: u8,
}

fuzz_target!(|input: Input| {
    let pairs: Vec<(f64, bool)> = input
        .samples
        .iter()
        .map(|&(q, label)| (f64::from(q) / 255.0, label))
        .collect();
    let samples = SampleSet::from_pairs(&pairs);
    let rule = if input.exclusive {
        ThresholdRule::Exclusive
    } else {
        ThresholdRule::Inclusive
    };

    let m = confusion_matrix_with(&samples, f64::from(input.threshold) / 255.0, rule);
    assert_eq!(m.total(), samples.len() as u64);

    let sweep = if input.exact {
        SweepStrategy::ExactScores
    } else {
        SweepStrategy::CoarseGrid {
            steps: usize::from(input.steps).max(1),
        }
    };
    let curve = roc_sweep(&samples, &EvaluationConfig::new(rule, sweep));
    for w in curve.points().windows(2) {
        assert!(w[0].fpr <= w[1].fpr);
    }
    let area = auc(&curve);
    assert!((0.0..=1.0 + 1e-9).contains(&area));
});
