//! Synthetic sample generation.
//!
//! Randomness always comes from a caller-owned generator; seed it
//! (`StdRng::seed_from_u64`) for reproducible sets.

use super::sample::{Sample, SampleSet};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use roc_common::{GenerationSpec, Interval, ScoreDistribution, DEFAULT_SCORE_CLAMP};
use roc_math::{box_muller, scale_normal, sigmoid};

/// Source of raw (unclamped) scores for one class.
pub trait ScoreModel {
    fn draw(&self, rng: &mut dyn RngCore) -> f64;
}

/// One standard normal deviate via Box-Muller.
pub fn standard_normal(rng: &mut dyn RngCore) -> f64 {
    let u1: f64 = rng.random();
    let u2: f64 = rng.random();
    box_muller(u1, u2)
}

impl ScoreModel for ScoreDistribution {
    fn draw(&self, rng: &mut dyn RngCore) -> f64 {
        let z = standard_normal(rng);
        match *self {
            ScoreDistribution::LogitNormal { mean, std_dev } => {
                sigmoid(scale_normal(z, mean, std_dev))
            }
            ScoreDistribution::Normal { mean, std_dev } => scale_normal(z, mean, std_dev),
        }
    }
}

/// Adapter turning a closure into a [`ScoreModel`].
#[derive(Debug, Clone, Copy)]
pub struct FnModel<F>(pub F);

impl<F> ScoreModel for FnModel<F>
where
    F: Fn(&mut dyn RngCore) -> f64,
{
    fn draw(&self, rng: &mut dyn RngCore) -> f64 {
        (self.0)(rng)
    }
}

/// Wrap a closure as a score model.
pub fn model_fn<F>(f: F) -> FnModel<F>
where
    F: Fn(&mut dyn RngCore) -> f64,
{
    FnModel(f)
}

/// Counts and post-processing for [`generate_with_models`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    pub positive_count: usize,
    pub negative_count: usize,
    pub clamp: Interval,
    pub shuffle: bool,
}

impl GenerationOptions {
    pub fn new(positive_count: usize, negative_count: usize) -> Self {
        Self {
            positive_count,
            negative_count,
            clamp: DEFAULT_SCORE_CLAMP,
            shuffle: false,
        }
    }

    pub fn with_clamp(mut self, clamp: Interval) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }
}

/// Draw a sample set from a [`GenerationSpec`].
pub fn generate_samples(spec: &GenerationSpec, rng: &mut dyn RngCore) -> SampleSet {
    let options = GenerationOptions {
        positive_count: spec.positive_count,
        negative_count: spec.negative_count,
        clamp: spec.clamp,
        shuffle: spec.shuffle,
    };
    generate_with_models(&options, &spec.positive, &spec.negative, rng)
}

/// Draw `positive_count` positives then `negative_count` negatives, clamp
/// every score, and optionally shuffle with the same generator.
///
/// Zero counts are allowed; the resulting set just is not evaluable.
pub fn generate_with_models(
    options: &GenerationOptions,
    positive: &dyn ScoreModel,
    negative: &dyn ScoreModel,
    rng: &mut dyn RngCore,
) -> SampleSet {
    let clamp = options.clamp;
    let mut samples = Vec::with_capacity(options.positive_count + options.negative_count);

    for _ in 0..options.positive_count {
        samples.push(Sample::positive(clamp.clamp(positive.draw(rng))));
    }
    for _ in 0..options.negative_count {
        samples.push(Sample::negative(clamp.clamp(negative.draw(rng))));
    }

    if options.shuffle {
        samples.shuffle(rng);
    }

    tracing::debug!(
        positives = options.positive_count,
        negatives = options.negative_count,
        shuffled = options.shuffle,
        "generated sample set"
    );

    SampleSet::new(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn linear_spec() -> GenerationSpec {
        GenerationSpec {
            positive_count: 30,
            negative_count: 300,
            positive: ScoreDistribution::Normal {
                mean: 0.65,
                std_dev: 0.22,
            },
            negative: ScoreDistribution::Normal {
                mean: 0.35,
                std_dev: 0.22,
            },
            clamp: DEFAULT_SCORE_CLAMP,
            shuffle: false,
        }
    }

    #[test]
    fn same_seed_same_samples() {
        let spec = linear_spec();
        let a = generate_samples(&spec, &mut StdRng::seed_from_u64(7));
        let b = generate_samples(&spec, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        let c = generate_samples(&spec, &mut StdRng::seed_from_u64(8));
        assert_ne!(a, c);
    }

    #[test]
    fn counts_and_order_without_shuffle() {
        let set = generate_samples(&linear_spec(), &mut StdRng::seed_from_u64(1));
        assert_eq!(set.len(), 330);
        assert_eq!(set.positive_count(), 30);
        assert!(set.as_slice()[..30].iter().all(|s| s.label));
        assert!(set.as_slice()[30..].iter().all(|s| !s.label));
    }

    #[test]
    fn scores_respect_clamp() {
        let mut spec = linear_spec();
        spec.positive = ScoreDistribution::Normal {
            mean: 0.5,
            std_dev: 5.0,
        };
        let set = generate_samples(&spec, &mut StdRng::seed_from_u64(3));
        assert!(set.iter().all(|s| (0.01..=0.99).contains(&s.score)));
        // Spread this wide must hit both bounds.
        assert!(set.iter().any(|s| s.score == 0.01));
        assert!(set.iter().any(|s| s.score == 0.99));
    }

    #[test]
    fn shuffle_keeps_class_counts() {
        let mut spec = linear_spec();
        spec.shuffle = true;
        let set = generate_samples(&spec, &mut StdRng::seed_from_u64(11));
        assert_eq!(set.positive_count(), 30);
        assert_eq!(set.negative_count(), 300);
        assert!(!set.as_slice()[..30].iter().all(|s| s.label));
    }

    #[test]
    fn logit_normal_centers_on_sigmoid_of_mean() {
        let dist = ScoreDistribution::LogitNormal {
            mean: -1.5,
            std_dev: 0.8,
        };
        let mut rng = StdRng::seed_from_u64(5);
        let n = 4000;
        let mut scores: Vec<f64> = (0..n).map(|_| dist.draw(&mut rng)).collect();
        scores.sort_by(|a, b| a.total_cmp(b));
        let median = scores[n / 2];
        // The median is invariant under the monotone squash.
        assert!((median - sigmoid(-1.5)).abs() < 0.02, "median {median}");
    }

    #[test]
    fn closure_models_are_accepted() {
        let options = GenerationOptions::new(2, 3).with_clamp(Interval::unit());
        let pos = model_fn(|_rng: &mut dyn RngCore| 0.8);
        let neg = model_fn(|rng: &mut dyn RngCore| rng.random::<f64>() * 0.5);
        let set = generate_with_models(&options, &pos, &neg, &mut StdRng::seed_from_u64(0));
        assert_eq!(set.len(), 5);
        assert!(set.iter().filter(|s| s.label).all(|s| s.score == 0.8));
        assert!(set.iter().filter(|s| !s.label).all(|s| s.score < 0.5));
    }

    #[test]
    fn zero_counts_give_unevaluable_set() {
        let options = GenerationOptions::new(0, 4);
        let dist = ScoreDistribution::Normal {
            mean: 0.3,
            std_dev: 0.1,
        };
        let set = generate_with_models(&options, &dist, &dist, &mut StdRng::seed_from_u64(0));
        assert_eq!(set.len(), 4);
        assert!(!set.is_evaluable());
    }
}
