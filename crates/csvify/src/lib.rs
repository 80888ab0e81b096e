//! csvify: flatten nested JSON records into CSV documents.
//!
//! Records are walked recursively and every leaf becomes a column named by
//! its underscore-joined path (`address.city` becomes `address_city`). The
//! flat records are then written as CSV with every field quoted and lines
//! separated by CRLF.
//!
//! # Example
//!
//! ```
//! use csvify::{CsvExporter, FlattenStrategy};
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"name": "Bob", "tags": {"vip": true}}),
//!     json!({"name": "Eve", "tags": {"vip": false}}),
//! ];
//!
//! let csv = CsvExporter::new()
//!     .create_csv_as_string(&records, &FlattenStrategy::Recursive)
//!     .unwrap();
//! assert_eq!(csv, "name,tags_vip\r\n\"Bob\",\"true\"\r\n\"Eve\",\"false\"");
//! ```

pub mod config;
pub mod error;
pub mod flatten;
pub mod input;
pub mod output;
pub mod sink;

mod exporter;

pub use crate::exporter::CsvExporter;
pub use config::ExportConfig;
pub use error::{CsvifyError, Result};
pub use flatten::{
    create_flat_data_with_header, flatten, AliasMap, ColumnFilter, DateLeafFormatter, FlatData,
    FlatRecord, FlattenOptions, FlattenStrategy, Flattener, LeafFormatter,
};
pub use input::{load_records, parse_records, read_records};
pub use output::{
    create_csv_as_string, create_csv_record_array_from_data, map_column_names,
    sanitize_string_for_csv, NullStyle, RowKeySource,
};
pub use sink::{CsvSink, FileSink, WriterSink, CSV_MIME_TYPE};
