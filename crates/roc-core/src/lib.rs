//! roclab core library.
//!
//! This crate provides the evaluation engine behind the `roclab` binary:
//! - Labeled score sets and synthetic sample generation
//! - Confusion matrices and derived rates at a threshold
//! - ROC sweeps (coarse grid or exact) and trapezoidal AUC
//! - Output rendering, exit codes and logging for the CLI

pub mod eval;
pub mod exit_codes;
pub mod logging;
pub mod output;
