//! Closed intervals and trapezoidal integration.

use serde::{Deserialize, Serialize};

/// Closed interval [lo, hi] used to clamp generated scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// The unit interval [0, 1].
    pub const fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// True when both bounds are finite and lo <= hi.
    pub fn is_valid(&self) -> bool {
        self.lo.is_finite() && self.hi.is_finite() && self.lo <= self.hi
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.lo && x <= self.hi
    }

    /// Clamp `x` into the interval. NaN maps to `lo`.
    ///
    /// Uses max/min rather than `f64::clamp` so an inverted interval does
    /// not panic.
    pub fn clamp(&self, x: f64) -> f64 {
        if x.is_nan() {
            return self.lo;
        }
        x.max(self.lo).min(self.hi)
    }
}

/// Area of one trapezoid between (x0, y0) and (x1, y1).
///
/// Signed: a step backwards in x contributes negative area.
pub fn trapezoid(x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    (x1 - x0) * (y0 + y1) / 2.0
}

/// Trapezoidal rule over consecutive (x, y) points, in the given order.
///
/// Fewer than two points integrate to 0.
pub fn trapezoid_sum<I>(points: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut iter = points.into_iter();
    let Some(mut prev) = iter.next() else {
        return 0.0;
    };
    let mut area = 0.0;
    for next in iter {
        area += trapezoid(prev.0, prev.1, next.0, next.1);
        prev = next;
    }
    area
}
