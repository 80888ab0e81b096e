//! Recursive record flattener.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::{CsvifyError, Result};

use super::leaf::{
    DateLeafFormatter, LeafFormatter, DEFAULT_DATE_FIELDS, DEFAULT_DATE_FORMAT,
    DEFAULT_DATE_MARKER,
};
use super::record::{ColumnFilter, FlatRecord};

/// Separator placed between path segments in flattened keys.
pub const KEY_SEPARATOR: &str = "_";

/// Default nesting limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Flattener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlattenOptions {
    /// Maximum nesting depth below the root.
    pub max_depth: usize,
    /// Keep descending into an object after a leaf formatter claimed it.
    ///
    /// The formatted value and the object's own leaves are then both emitted.
    pub descend_into_formatted: bool,
    /// Marker field identifying date wrapper objects.
    pub date_marker: String,
    /// Fields of a date wrapper holding the date text, in lookup order.
    pub date_fields: Vec<String>,
    /// Output format for wrapped dates.
    pub date_format: String,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            descend_into_formatted: true,
            date_marker: DEFAULT_DATE_MARKER.to_string(),
            date_fields: DEFAULT_DATE_FIELDS.iter().map(|f| f.to_string()).collect(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Flattens nested records into underscore-joined key paths.
///
/// Objects are walked in key order and arrays by index, so `{"a": {"b": [1]}}`
/// becomes `{"a_b_0": 1}`. Later writes to the same key replace earlier ones.
#[derive(Clone)]
pub struct Flattener {
    options: FlattenOptions,
    leaf_formatter: Option<Arc<dyn LeafFormatter>>,
}

impl Flattener {
    /// Create a flattener with default options and the date formatter installed.
    pub fn new() -> Self {
        Self::with_options(FlattenOptions::default())
    }

    /// Create a flattener from options. The date formatter follows the
    /// options' marker, fields and format.
    pub fn with_options(options: FlattenOptions) -> Self {
        let dates = DateLeafFormatter::new(
            options.date_marker.clone(),
            options.date_fields.clone(),
            options.date_format.clone(),
        );

        Self {
            options,
            leaf_formatter: Some(Arc::new(dates)),
        }
    }

    /// Replace the leaf formatter.
    pub fn with_leaf_formatter(mut self, formatter: impl LeafFormatter + 'static) -> Self {
        self.leaf_formatter = Some(Arc::new(formatter));
        self
    }

    /// Remove the leaf formatter so every object is descended into.
    pub fn without_leaf_formatter(mut self) -> Self {
        self.leaf_formatter = None;
        self
    }

    /// Options in effect.
    pub fn options(&self) -> &FlattenOptions {
        &self.options
    }

    /// Flatten one record.
    ///
    /// With `filter` set, only leaves whose full key is in the filter are kept;
    /// an empty filter keeps nothing. Objects and arrays are walked whether or
    /// not their own key is listed.
    pub fn flatten(&self, record: &Value, filter: Option<&ColumnFilter>) -> Result<FlatRecord> {
        let mut flat = FlatRecord::new();

        match record {
            Value::Object(_) | Value::Array(_) => {
                self.flatten_into(record, "", filter, 0, &mut flat)?;
            }
            other => {
                warn!(kind = value_kind(other), "Record is not an object or array, nothing to flatten");
            }
        }

        Ok(flat)
    }

    fn flatten_into(
        &self,
        value: &Value,
        prefix: &str,
        filter: Option<&ColumnFilter>,
        depth: usize,
        out: &mut FlatRecord,
    ) -> Result<()> {
        for (name, child) in entries(value) {
            let key = if prefix.is_empty() {
                name.into_owned()
            } else {
                format!("{}{}{}", prefix, KEY_SEPARATOR, name)
            };

            let formatted = self
                .leaf_formatter
                .as_ref()
                .and_then(|f| f.format(child))
                .filter(|v| !is_container(v));

            if let Some(formatted) = formatted {
                if is_included(&key, filter) {
                    out.insert(key.clone(), formatted);
                }
                // Only objects and arrays keep their own leaves after a claim.
                if !(is_container(child) && self.options.descend_into_formatted) {
                    continue;
                }
            }

            if is_container(child) {
                if depth >= self.options.max_depth {
                    return Err(CsvifyError::DepthExceeded {
                        path: key,
                        max_depth: self.options.max_depth,
                    });
                }
                self.flatten_into(child, &key, filter, depth + 1, out)?;
            } else if is_included(&key, filter) {
                out.insert(key, child.clone());
            }
        }

        Ok(())
    }
}

impl Default for Flattener {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Flattener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flattener")
            .field("options", &self.options)
            .field("leaf_formatter", &self.leaf_formatter.is_some())
            .finish()
    }
}

/// Flatten a record with the default flattener.
pub fn flatten(record: &Value, filter: Option<&ColumnFilter>) -> Result<FlatRecord> {
    Flattener::new().flatten(record, filter)
}

fn entries(value: &Value) -> Box<dyn Iterator<Item = (Cow<'_, str>, &Value)> + '_> {
    match value {
        Value::Object(map) => Box::new(map.iter().map(|(k, v)| (Cow::Borrowed(k.as_str()), v))),
        Value::Array(items) => Box::new(
            items
                .iter()
                .enumerate()
                .map(|(i, v)| (Cow::Owned(i.to_string()), v)),
        ),
        _ => Box::new(std::iter::empty()),
    }
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}

/// Empty keys never become columns.
fn is_included(key: &str, filter: Option<&ColumnFilter>) -> bool {
    !key.is_empty() && filter.is_none_or(|f| f.contains(key))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
