//! Core math modules.

pub mod integrate;
pub mod logistic;
pub mod normal;
