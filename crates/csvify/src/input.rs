//! Loading records from JSON documents.

use std::fs;
use std::io::Read;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::error::{CsvifyError, Result};

/// Parse records from a JSON array or JSON Lines text.
///
/// Text whose first non-whitespace character is `[` is read as one array and
/// a single object is one record. Anything else is read as one record per
/// non-blank line.
pub fn parse_records(text: &str) -> Result<Vec<Value>> {
    let trimmed = text.trim_start();

    if trimmed.is_empty() {
        return Err(CsvifyError::EmptyInput("Input contains no records".to_string()));
    }

    if trimmed.starts_with('[') {
        return match serde_json::from_str::<Value>(trimmed)? {
            Value::Array(records) => Ok(records),
            _ => Err(CsvifyError::InvalidInput("Expected a JSON array of records".to_string())),
        };
    }

    // A lone object, possibly pretty-printed, is one record.
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
        return Ok(vec![Value::Object(map)]);
    }

    let mut records = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|e| {
            CsvifyError::InvalidInput(format!("Line {}: {}", line_no + 1, e))
        })?;
        records.push(record);
    }

    debug!(records = records.len(), "Parsed JSON Lines input");
    Ok(records)
}

/// Read records from a file.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<Value>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| CsvifyError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_records(&text)
}

/// Read records from any reader.
pub fn read_records(mut reader: impl Read) -> Result<Vec<Value>> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(|e| CsvifyError::Io {
        path: "<stdin>".into(),
        source: e,
    })?;
    parse_records(&text)
}
