//! Fuzz target for line-by-line stateful processing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use structured_bidi::ExpertRegistry;

fuzz_target!(|data: &str| {
    let registry = ExpertRegistry::with_builtins();
    for name in ["file", "property", "sql"] {
        let Ok(mut expert) = registry.stateful_expert(name, None) else {
            continue;
        };
        let full = expert.process_lines(data);
        assert!(full.len() >= data.len());
        expert.clear_state();
    }
});
