//! Export configuration and its JSON persistence.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::error::{CsvifyError, Result};
use crate::flatten::{AliasMap, ColumnFilter, FlattenOptions};
use crate::output::{NullStyle, RowKeySource};

/// Configuration for a CSV export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Flattened keys to keep (None = all).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    /// Header display names keyed by flattened key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<AliasMap>,
    /// Which keys drive data row columns.
    pub row_keys: RowKeySource,
    /// How `null` values are rendered.
    pub null_style: NullStyle,
    /// Flattener options.
    pub flatten: FlattenOptions,
}

impl ExportConfig {
    /// Settings that reproduce the legacy output byte for byte: first-record
    /// row keys and quoted empty nulls.
    pub fn legacy() -> Self {
        Self {
            row_keys: RowKeySource::FirstRecord,
            null_style: NullStyle::QuotedEmpty,
            ..Self::default()
        }
    }

    /// Column filter built from `columns`.
    pub fn column_filter(&self) -> Option<ColumnFilter> {
        self.columns.as_ref().map(|c| ColumnFilter::new(c.iter().cloned()))
    }

    /// Check option values that deserialize fine but cannot work.
    pub fn validate(&self) -> Result<()> {
        if self.flatten.max_depth == 0 {
            return Err(CsvifyError::Config("flatten.max_depth must be at least 1".to_string()));
        }
        if self.flatten.date_format.trim().is_empty() {
            return Err(CsvifyError::Config("flatten.date_format must not be empty".to_string()));
        }
        if StrftimeItems::new(&self.flatten.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(CsvifyError::Config(format!(
                "flatten.date_format '{}' is not a valid format string",
                self.flatten.date_format
            )));
        }
        Ok(())
    }

    /// Load a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|e| CsvifyError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let reader = BufReader::new(file);
        let config: ExportConfig = serde_json::from_reader(reader).map_err(|e| {
            CsvifyError::Config(format!("Failed to parse config '{}': {}", path.display(), e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| CsvifyError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let file = File::create(path).map_err(|e| CsvifyError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }
}
