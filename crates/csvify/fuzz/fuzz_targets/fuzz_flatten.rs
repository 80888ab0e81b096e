//! Fuzz target for input parsing, flattening and document assembly.
//!
//! Checks that arbitrary JSON text never panics the pipeline and that
//! flattened values are always primitive.

#![no_main]

use csvify::{create_csv_as_string, parse_records, FlattenStrategy, Flattener};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(records) = parse_records(text) else {
        return;
    };

    let flattener = Flattener::new();
    for record in &records {
        if let Ok(flat) = flattener.flatten(record, None) {
            assert!(flat.values().all(|v| !v.is_object() && !v.is_array()));
        }
    }

    let _ = create_csv_as_string(&records, &FlattenStrategy::Recursive, None, None);
});
