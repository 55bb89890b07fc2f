//! Fuzz target for sample-file parsing.
//!
//! Accepted sets must satisfy the score range check and survive evaluation.

#![no_main]

use libfuzzer_sys::fuzz_target;
use roc_common::EvaluationConfig;
use roc_core::eval::{evaluate, parse_samples};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(samples) = parse_samples(text) {
        assert!(samples.iter().all(|s| (0.0..=1.0).contains(&s.score)));
        let eval = evaluate(&samples, 0.5, &EvaluationConfig::exact());
        assert_eq!(eval.matrix.total(), samples.len() as u64);
    }
});
