//! CSV rendering of flattened records.

mod document;
mod header;
mod rows;
mod sanitize;

pub use document::{create_csv_as_string, DocumentBuilder, LINE_SEPARATOR};
pub use header::map_column_names;
pub use rows::{create_csv_record_array_from_data, NullStyle, RowKeySource, RowWriter, FIELD_SEPARATOR};
pub use sanitize::sanitize_string_for_csv;
