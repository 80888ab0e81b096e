//! CSV document assembly.

use serde_json::Value;
use tracing::debug;

use crate::error::{CsvifyError, Result};
use crate::flatten::{
    create_flat_data_with_header, AliasMap, ColumnFilter, FlatData, FlattenStrategy, Flattener,
};

use super::header::map_column_names;
use super::rows::{RowKeySource, RowWriter, FIELD_SEPARATOR};

/// Line terminator between document lines. There is no trailing terminator.
pub const LINE_SEPARATOR: &str = "\r\n";

/// Assembles header and data rows into a document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentBuilder {
    row_keys: RowKeySource,
    rows: RowWriter,
}

impl DocumentBuilder {
    /// Create a builder with union row keys and bare-empty nulls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose which keys drive data row columns.
    pub fn row_keys(mut self, row_keys: RowKeySource) -> Self {
        self.row_keys = row_keys;
        self
    }

    /// Choose how fields are rendered.
    pub fn row_writer(mut self, rows: RowWriter) -> Self {
        self.rows = rows;
        self
    }

    /// Render flattened data. The header row is aliased but never escaped.
    pub fn build(&self, data: &FlatData, aliases: Option<&AliasMap>) -> Result<String> {
        if data.is_empty() {
            return Err(CsvifyError::EmptyInput("No records to export".to_string()));
        }

        let header = map_column_names(&data.headers, aliases);

        let rows = match self.row_keys {
            RowKeySource::HeaderUnion => self.rows.rows(&data.items, &data.headers),
            RowKeySource::FirstRecord => self.rows.rows_from_first_record(&data.items)?,
        };

        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(header.join(FIELD_SEPARATOR));
        lines.extend(rows);

        debug!(columns = header.len(), rows = data.len(), "Assembled CSV document");
        Ok(lines.join(LINE_SEPARATOR))
    }
}

/// Flatten records and render them as a CSV document.
///
/// Uses the default flattener and document settings. See
/// [`CsvExporter`](crate::CsvExporter) to change them.
///
/// ```
/// use csvify::{create_csv_as_string, FlattenStrategy};
/// use serde_json::json;
///
/// let records = vec![json!({"name": "Bob", "tags": {"vip": true}})];
/// let csv = create_csv_as_string(&records, &FlattenStrategy::Recursive, None, None).unwrap();
/// assert_eq!(csv, "name,tags_vip\r\n\"Bob\",\"true\"");
/// ```
pub fn create_csv_as_string(
    records: &[Value],
    strategy: &FlattenStrategy<'_>,
    filter: Option<&ColumnFilter>,
    aliases: Option<&AliasMap>,
) -> Result<String> {
    if records.is_empty() {
        return Err(CsvifyError::EmptyInput("No records to export".to_string()));
    }

    let data = create_flat_data_with_header(records, &Flattener::new(), strategy, filter)?;
    DocumentBuilder::new().build(&data, aliases)
}
