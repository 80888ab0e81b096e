//! Selection between the recursive flattener and a caller-supplied transform.

use std::fmt;

use serde_json::Value;

use super::record::FlatRecord;

/// How records are reduced to flat records for one export.
#[derive(Default)]
pub enum FlattenStrategy<'a> {
    /// Walk every record with the exporter's [`Flattener`](super::Flattener).
    #[default]
    Recursive,
    /// Hand every record to a caller-supplied transform. Column filters are
    /// not applied; the transform decides which keys to emit.
    Custom(Box<dyn Fn(&Value) -> FlatRecord + 'a>),
}

impl<'a> FlattenStrategy<'a> {
    /// Wrap a custom transform.
    pub fn custom(transform: impl Fn(&Value) -> FlatRecord + 'a) -> Self {
        FlattenStrategy::Custom(Box::new(transform))
    }

    /// Whether this strategy uses the recursive flattener.
    pub fn is_recursive(&self) -> bool {
        matches!(self, FlattenStrategy::Recursive)
    }
}

impl fmt::Debug for FlattenStrategy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlattenStrategy::Recursive => write!(f, "Recursive"),
            FlattenStrategy::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}
