//! Fuzz target for field escaping.

#![no_main]

use csvify::sanitize_string_for_csv;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(field) = std::str::from_utf8(data) {
        let out = sanitize_string_for_csv(field);
        if field.is_empty() {
            assert!(out.is_empty());
        } else {
            assert!(out.starts_with('"') && out.ends_with('"') && out.len() >= 2);
        }
    }
});
