//! Logistic link and its inverse.
//!
//! The sample generators draw scores on the log-odds scale and squash them
//! back into probabilities, so both directions need to stay finite at the
//! extremes.

/// Logistic sigmoid 1 / (1 + exp(-x)).
///
/// Evaluated on the branch that never exponentiates a large positive number.
pub fn sigmoid(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// Log-odds ln(p / (1 - p)).
///
/// Returns -inf at 0, +inf at 1, and NaN outside [0, 1].
pub fn logit(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }
    p.ln() - (-p).ln_1p()
}
