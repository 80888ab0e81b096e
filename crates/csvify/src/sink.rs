//! Delivery of finished CSV documents.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::error::{CsvifyError, Result};

/// MIME type for delivered documents.
pub const CSV_MIME_TYPE: &str = "text/csv;charset=utf-8;";

/// Extension appended to delivered file names.
pub const CSV_EXTENSION: &str = "csv";

/// Receives a finished document and a file name without extension.
pub trait CsvSink {
    /// Deliver `csv` under `file_name`. Returns the written path, if any.
    fn deliver(&mut self, file_name: &str, csv: &str) -> Result<Option<PathBuf>>;
}

/// Writes documents as `<dir>/<file_name>.csv`.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    /// Create a sink writing into `dir`. The directory is created on delivery.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path a document named `file_name` is written to.
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", file_name, CSV_EXTENSION))
    }
}

impl CsvSink for FileSink {
    fn deliver(&mut self, file_name: &str, csv: &str) -> Result<Option<PathBuf>> {
        if file_name.trim().is_empty() {
            return Err(CsvifyError::Persistence("File name must not be empty".to_string()));
        }

        if !self.dir.as_os_str().is_empty() && !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| {
                CsvifyError::Persistence(format!(
                    "Failed to create directory '{}': {}",
                    self.dir.display(),
                    e
                ))
            })?;
        }

        let path = self.path_for(file_name);
        fs::write(&path, csv).map_err(|e| CsvifyError::Io {
            path: path.clone(),
            source: e,
        })?;

        info!(path = %path.display(), bytes = csv.len(), "Wrote CSV file");
        Ok(Some(path))
    }
}

/// Writes documents to any writer, ignoring the file name.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> CsvSink for WriterSink<W> {
    fn deliver(&mut self, _file_name: &str, csv: &str) -> Result<Option<PathBuf>> {
        self.writer
            .write_all(csv.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|e| CsvifyError::Persistence(format!("Failed to write CSV: {}", e)))?;
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_sink_appends_extension() {
        let dir = TempDir::new().unwrap();
        let mut sink = FileSink::new(dir.path().join("out"));

        let path = sink.deliver("report", "a\r\n\"1\"").unwrap().unwrap();
        assert_eq!(path, dir.path().join("out").join("report.csv"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\r\n\"1\"");
    }

    #[test]
    fn test_file_sink_rejects_empty_name() {
        let dir = TempDir::new().unwrap();
        let mut sink = FileSink::new(dir.path());
        assert!(matches!(sink.deliver("  ", "x"), Err(CsvifyError::Persistence(_))));
    }

    #[test]
    fn test_writer_sink() {
        let mut sink = WriterSink::new(Vec::new());
        assert_eq!(sink.deliver("ignored", "x,y").unwrap(), None);
        assert_eq!(sink.into_inner(), b"x,y".to_vec());
    }
}
