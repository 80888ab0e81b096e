//! Flattening of nested records into single-level key paths.

mod batch;
mod flattener;
mod leaf;
mod record;
mod strategy;

pub use batch::{create_flat_data_with_header, FlatData};
pub use flattener::{flatten, FlattenOptions, Flattener, DEFAULT_MAX_DEPTH, KEY_SEPARATOR};
pub use leaf::{DateLeafFormatter, LeafFormatter};
pub use record::{AliasMap, ColumnFilter, FlatRecord};
pub use strategy::FlattenStrategy;
