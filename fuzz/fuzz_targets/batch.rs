#![no_main]
use libfuzzer_sys::fuzz_target;
use tagquery::{run_batch, ParserConfig};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = run_batch(s, &ParserConfig::default());
    }
});
