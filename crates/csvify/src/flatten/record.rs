//! Flat record and column selection types.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A record reduced to a single level of primitive-valued keys.
///
/// Keys keep insertion order. Re-inserting an existing key replaces its value
/// in place.
pub type FlatRecord = IndexMap<String, Value>;

/// Display-name substitution applied to the header row only.
pub type AliasMap = IndexMap<String, String>;

/// Inclusion set restricting which flattened keys survive.
///
/// An empty filter keeps nothing. Use `Option<&ColumnFilter>` with `None`
/// to keep every key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnFilter {
    columns: IndexSet<String>,
}

impl ColumnFilter {
    /// Create a filter from column names.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a flattened key is retained.
    pub fn contains(&self, key: &str) -> bool {
        self.columns.contains(key)
    }

    /// Number of columns in the filter.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the filter retains nothing.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate over the column names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ColumnFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
