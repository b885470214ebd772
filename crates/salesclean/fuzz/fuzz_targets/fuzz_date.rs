//! Fuzz target for best-effort date parsing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use salesclean::transform::parse_datetime;

fuzz_target!(|data: &[u8]| {
    if data.len() > 1_000 {
        return;
    }

    if let Ok(input) = std::str::from_utf8(data) {
        let _ = parse_datetime(input);
    }
});
