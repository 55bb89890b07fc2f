//! ROC Lab math utilities.

pub mod math;

pub use math::integrate::*;
pub use math::logistic::*;
pub use math::normal::*;
