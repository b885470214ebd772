//! Fuzz target for loading and cleaning.
//!
//! Checks that arbitrary bytes either fail to load with an error or run
//! through every stage without panicking, and that the cleaned table
//! always renders back to CSV.

#![no_main]

use libfuzzer_sys::fuzz_target;
use salesclean::{Parser, Pipeline, Writer};

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    let Ok(table) = Parser::new().parse_bytes(data) else {
        return;
    };

    let (cleaned, report) = Pipeline::standard().run(table);
    assert_eq!(report.rows_final, cleaned.row_count());

    let _ = Writer::new().write_string(&cleaned);
});
