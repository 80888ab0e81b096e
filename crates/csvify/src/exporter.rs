//! Main exporter struct and public API.

use std::path::PathBuf;

use serde_json::Value;
use tracing::debug;

use crate::config::ExportConfig;
use crate::error::{CsvifyError, Result};
use crate::flatten::{
    create_flat_data_with_header, FlatData, FlatRecord, FlattenStrategy, Flattener, LeafFormatter,
};
use crate::output::{DocumentBuilder, RowWriter};
use crate::sink::CsvSink;

/// Flattens records and renders them as CSV documents.
#[derive(Debug, Clone)]
pub struct CsvExporter {
    config: ExportConfig,
    flattener: Flattener,
}

impl CsvExporter {
    /// Create an exporter with default configuration.
    pub fn new() -> Self {
        Self::with_config(ExportConfig::default())
    }

    /// Create an exporter with custom configuration.
    ///
    /// The configuration is not validated; see [`CsvExporter::try_with_config`].
    pub fn with_config(config: ExportConfig) -> Self {
        let flattener = Flattener::with_options(config.flatten.clone());
        Self { config, flattener }
    }

    /// Create an exporter after validating the configuration.
    pub fn try_with_config(config: ExportConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Replace the leaf formatter used by the recursive flattener.
    pub fn with_leaf_formatter(mut self, formatter: impl LeafFormatter + 'static) -> Self {
        self.flattener = self.flattener.with_leaf_formatter(formatter);
        self
    }

    /// Configuration in effect.
    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Flatten one record, applying the configured columns.
    pub fn flatten(&self, record: &Value) -> Result<FlatRecord> {
        let filter = self.config.column_filter();
        self.flattener.flatten(record, filter.as_ref())
    }

    /// Flatten every record and collect the header set.
    pub fn flatten_all(&self, records: &[Value], strategy: &FlattenStrategy<'_>) -> Result<FlatData> {
        let filter = self.config.column_filter();
        create_flat_data_with_header(records, &self.flattener, strategy, filter.as_ref())
    }

    /// Flatten records and render them as a CSV document.
    pub fn create_csv_as_string(
        &self,
        records: &[Value],
        strategy: &FlattenStrategy<'_>,
    ) -> Result<String> {
        if records.is_empty() {
            return Err(CsvifyError::EmptyInput("No records to export".to_string()));
        }

        let data = self.flatten_all(records, strategy)?;
        self.render(&data)
    }

    /// Render already flattened data as a CSV document.
    pub fn render(&self, data: &FlatData) -> Result<String> {
        self.document().build(data, self.config.aliases.as_ref())
    }

    /// Render records and hand the document to `sink` under `file_name`.
    ///
    /// `file_name` carries no extension; sinks that write files add one.
    pub fn export_to_csv_file(
        &self,
        records: &[Value],
        strategy: &FlattenStrategy<'_>,
        file_name: &str,
        sink: &mut dyn CsvSink,
    ) -> Result<Option<PathBuf>> {
        let csv = self.create_csv_as_string(records, strategy)?;
        debug!(file_name, bytes = csv.len(), "Delivering CSV document");
        sink.deliver(file_name, &csv)
    }

    fn document(&self) -> DocumentBuilder {
        DocumentBuilder::new()
            .row_keys(self.config.row_keys)
            .row_writer(RowWriter::with_null_style(self.config.null_style))
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}
