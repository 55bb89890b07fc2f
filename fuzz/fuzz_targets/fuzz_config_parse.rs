//! Fuzz target for roclab.json configuration parsing.
//!
//! Parsing and validation must reject bad input with an error, never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use roc_config::{validate_config, LabConfig};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = LabConfig::from_json(text) {
        let _ = validate_config(&config);
        let _ = config.samples.generation_spec();
    }
});
