//! Batch flattening with header collection.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::Result;

use super::flattener::Flattener;
use super::record::{ColumnFilter, FlatRecord};
use super::strategy::FlattenStrategy;

/// Flat records plus the ordered union of their keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlatData {
    /// Distinct keys in first-seen order.
    pub headers: Vec<String>,
    /// One flat record per input record, in input order.
    pub items: Vec<FlatRecord>,
}

impl FlatData {
    /// Number of flat records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no flat records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Flatten every record and collect the header set.
///
/// Headers are appended the first time a key appears, walking records in order
/// and each record's keys in order. `filter` only reaches the recursive
/// flattener.
pub fn create_flat_data_with_header(
    records: &[Value],
    flattener: &Flattener,
    strategy: &FlattenStrategy<'_>,
    filter: Option<&ColumnFilter>,
) -> Result<FlatData> {
    if filter.is_some() && !strategy.is_recursive() {
        debug!("Column filter ignored by custom flattener");
    }

    let mut headers: IndexSet<String> = IndexSet::new();
    let mut items = Vec::with_capacity(records.len());

    for record in records {
        let flat = match strategy {
            FlattenStrategy::Recursive => flattener.flatten(record, filter)?,
            FlattenStrategy::Custom(transform) => transform(record),
        };

        for key in flat.keys() {
            if !headers.contains(key) {
                headers.insert(key.clone());
            }
        }
        items.push(flat);
    }

    debug!(records = items.len(), headers = headers.len(), "Flattened records");

    Ok(FlatData {
        headers: headers.into_iter().collect(),
        items,
    })
}
