//! Property-based tests for the flattener and CSV writer.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p csvify --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p csvify --test property_tests
//! ```

use proptest::prelude::*;
use serde_json::{Map, Value};

use csvify::{
    create_csv_as_string, create_flat_data_with_header, flatten, sanitize_string_for_csv,
    ColumnFilter, FlattenStrategy, Flattener,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// Object keys without the separator, so paths stay unambiguous.
fn key() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9]{0,7}"
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[ -~]{0,20}".prop_map(Value::String),
    ]
}

/// Nested objects only (no arrays), a few levels deep.
fn record() -> impl Strategy<Value = Value> {
    let nested = leaf().prop_recursive(4, 32, 5, |inner| {
        prop::collection::vec((key(), inner), 1..5).prop_map(|entries| {
            Value::Object(entries.into_iter().collect::<Map<String, Value>>())
        })
    });

    prop::collection::vec((key(), nested), 1..6)
        .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<String, Value>>()))
}

/// Every leaf path of a value, joined the same way the flattener joins keys.
fn leaf_paths(value: &Value, prefix: &str, out: &mut Vec<String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let path = if prefix.is_empty() { k.clone() } else { format!("{prefix}_{k}") };
            match v {
                Value::Object(_) => leaf_paths(v, &path, out),
                _ => out.push(path),
            }
        }
    }
}

// =============================================================================
// Flattener Properties
// =============================================================================

proptest! {
    /// Flat records never hold objects or arrays.
    #[test]
    fn flat_values_are_primitive(r in record()) {
        let flat = flatten(&r, None).unwrap();
        for value in flat.values() {
            prop_assert!(!value.is_object() && !value.is_array());
        }
    }

    /// Every flat key resolves to the same leaf in the original record.
    #[test]
    fn flat_keys_are_paths(r in record()) {
        let mut paths = Vec::new();
        leaf_paths(&r, "", &mut paths);

        let flat = flatten(&r, None).unwrap();
        for key in flat.keys() {
            prop_assert!(paths.contains(key), "unexpected key {}", key);
        }
    }

    /// Without a filter each distinct leaf path shows up exactly once.
    #[test]
    fn unfiltered_keeps_every_leaf(r in record()) {
        let mut paths = Vec::new();
        leaf_paths(&r, "", &mut paths);
        paths.sort();
        paths.dedup();

        let flat = flatten(&r, None).unwrap();
        let mut keys: Vec<String> = flat.keys().cloned().collect();
        keys.sort();
        prop_assert_eq!(keys, paths);
    }

    /// An empty filter keeps nothing.
    #[test]
    fn empty_filter_keeps_nothing(r in record()) {
        let flat = flatten(&r, Some(&ColumnFilter::default())).unwrap();
        prop_assert!(flat.is_empty());
    }

    /// Filtering keeps exactly the listed keys that exist.
    #[test]
    fn filter_is_a_subset(r in record(), pick in prop::collection::vec(any::<prop::sample::Index>(), 0..4)) {
        let full = flatten(&r, None).unwrap();
        let keys: Vec<&String> = full.keys().collect();
        let chosen: Vec<String> = pick.iter().map(|i| keys[i.index(keys.len())].clone()).collect();
        let filter = ColumnFilter::new(chosen.iter().cloned());

        let filtered = flatten(&r, Some(&filter)).unwrap();
        for (k, v) in &filtered {
            prop_assert!(filter.contains(k));
            prop_assert_eq!(Some(v), full.get(k));
        }
        prop_assert_eq!(filtered.len(), filter.len());
    }

    /// Flattening is deterministic.
    #[test]
    fn flatten_is_deterministic(r in record()) {
        prop_assert_eq!(flatten(&r, None).unwrap(), flatten(&r, None).unwrap());
    }
}

// =============================================================================
// Header Properties
// =============================================================================

proptest! {
    /// Headers are distinct and every flat key appears among them.
    #[test]
    fn headers_cover_all_keys(records in prop::collection::vec(record(), 1..5)) {
        let data = create_flat_data_with_header(
            &records,
            &Flattener::new(),
            &FlattenStrategy::Recursive,
            None,
        ).unwrap();

        let mut distinct = data.headers.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(distinct.len(), data.headers.len());

        for item in &data.items {
            for key in item.keys() {
                prop_assert!(data.headers.contains(key));
            }
        }
        prop_assert_eq!(data.items.len(), records.len());
    }

    /// The first record's keys lead the header list in their own order.
    #[test]
    fn first_record_keys_lead(records in prop::collection::vec(record(), 1..5)) {
        let data = create_flat_data_with_header(
            &records,
            &Flattener::new(),
            &FlattenStrategy::Recursive,
            None,
        ).unwrap();

        let first: Vec<&String> = data.items[0].keys().collect();
        let lead: Vec<&String> = data.headers.iter().take(first.len()).collect();
        prop_assert_eq!(lead, first);
    }
}

// =============================================================================
// Escaping Properties
// =============================================================================

proptest! {
    /// Non-empty fields always come back wrapped in quotes.
    #[test]
    fn sanitized_fields_are_wrapped(s in "[ -~]{1,40}") {
        let out = sanitize_string_for_csv(&s);
        prop_assert!(out.len() >= 2);
        prop_assert!(out.starts_with('"') && out.ends_with('"'));
    }

    /// Inside the wrapping quotes, quotes only appear doubled.
    #[test]
    fn inner_quotes_are_doubled(s in "[a-z\" ,]{1,40}") {
        let out = sanitize_string_for_csv(&s);
        let inner = &out[1..out.len() - 1];
        prop_assert_eq!(inner.matches('"').count() % 2, 0);
        prop_assert!(!inner.replace("\"\"", "").contains('"'));
    }

    /// Documents re-read by a CSV reader give back each record's strings.
    #[test]
    fn documents_reparse(values in prop::collection::vec("[ -~\n]{0,20}", 1..6)) {
        let records: Vec<Value> = values
            .iter()
            .map(|v| serde_json::json!({"field": v}))
            .collect();
        let csv = create_csv_as_string(&records, &FlattenStrategy::Recursive, None, None).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv.as_bytes());
        let parsed: Vec<String> = reader
            .records()
            .map(|r| r.unwrap()[0].to_string())
            .collect();
        prop_assert_eq!(parsed, values);
    }
}
