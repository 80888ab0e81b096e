//! Row serialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{CsvifyError, Result};
use crate::flatten::FlatRecord;

use super::sanitize::{quote_field, sanitize_string_for_csv};

/// Field separator within a row.
pub const FIELD_SEPARATOR: &str = ",";

/// Which keys drive the columns of each data row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKeySource {
    /// The ordered union of keys across all records (the header row's keys).
    #[default]
    HeaderUnion,
    /// The keys of the first record only. Keys introduced by later records are
    /// dropped from the rows.
    FirstRecord,
}

/// How `null` values are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NullStyle {
    /// A bare empty field, the same as a missing key.
    #[default]
    Empty,
    /// An empty quoted field (`""`).
    QuotedEmpty,
}

/// Serializes flat records into CSV rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowWriter {
    null_style: NullStyle,
}

impl RowWriter {
    /// Create a writer with the default null rendering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with the given null rendering.
    pub fn with_null_style(null_style: NullStyle) -> Self {
        Self { null_style }
    }

    /// Render one field. `None` is a key the record does not have.
    pub fn field(&self, value: Option<&Value>) -> String {
        match value {
            None => String::new(),
            Some(Value::Null) => match self.null_style {
                NullStyle::Empty => String::new(),
                NullStyle::QuotedEmpty => quote_field(""),
            },
            Some(Value::String(s)) => quote_field(s),
            Some(Value::Bool(b)) => sanitize_string_for_csv(if *b { "true" } else { "false" }),
            Some(Value::Number(n)) => sanitize_string_for_csv(&n.to_string()),
            Some(nested @ (Value::Array(_) | Value::Object(_))) => quote_field(&nested.to_string()),
        }
    }

    /// Render one record against an explicit column list.
    pub fn row<S: AsRef<str>>(&self, record: &FlatRecord, columns: &[S]) -> String {
        columns
            .iter()
            .map(|column| self.field(record.get(column.as_ref())))
            .collect::<Vec<_>>()
            .join(FIELD_SEPARATOR)
    }

    /// Render every record against an explicit column list.
    pub fn rows<S: AsRef<str>>(&self, records: &[FlatRecord], columns: &[S]) -> Vec<String> {
        records.iter().map(|record| self.row(record, columns)).collect()
    }

    /// Render every record using the first record's keys as columns.
    pub fn rows_from_first_record(&self, records: &[FlatRecord]) -> Result<Vec<String>> {
        let first = records.first().ok_or_else(|| {
            CsvifyError::EmptyInput("No records to derive row columns from".to_string())
        })?;
        let columns: Vec<&str> = first.keys().map(String::as_str).collect();

        let dropped = records
            .iter()
            .skip(1)
            .flat_map(|r| r.keys())
            .filter(|k| !first.contains_key(k.as_str()))
            .count();
        if dropped > 0 {
            debug!(dropped, "Values under keys absent from the first record were dropped");
        }

        Ok(self.rows(records, &columns))
    }
}

/// Convert flat records into CSV rows without a header.
///
/// Columns come from the first record's keys. Keys only later records carry
/// are not emitted, and keys a later record lacks render as empty fields.
pub fn create_csv_record_array_from_data(records: &[FlatRecord]) -> Result<Vec<String>> {
    RowWriter::new().rows_from_first_record(records)
}
