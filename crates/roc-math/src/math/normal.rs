//! Normal deviates from uniform pairs.

use std::f64::consts::PI;

/// Smallest first uniform accepted by [`box_muller`]; keeps ln(u1) finite.
pub const MIN_UNIFORM: f64 = 1e-300;

/// Box-Muller transform (cosine branch).
///
/// Maps two uniforms in [0, 1) to one standard normal deviate. `u1` is
/// floored at [`MIN_UNIFORM`] because generators are allowed to return 0.
pub fn box_muller(u1: f64, u2: f64) -> f64 {
    let u1 = u1.max(MIN_UNIFORM);
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

/// Shift and scale a standard normal deviate.
pub fn scale_normal(z: f64, mean: f64, std_dev: f64) -> f64 {
    mean + std_dev * z
}
