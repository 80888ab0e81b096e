//! CLI command implementations.

pub mod export;
pub mod flatten;
pub mod headers;
pub mod init_config;

use std::path::Path;

use csvify::{create_flat_data_with_header, ColumnFilter, FlatData, FlattenStrategy, Flattener};
use serde_json::Value;

/// Read records from a file, or from stdin when the path is `-`.
pub(crate) fn read_input(input: &Path) -> Result<Vec<Value>, Box<dyn std::error::Error>> {
    if input == Path::new("-") {
        return Ok(csvify::read_records(std::io::stdin().lock())?);
    }

    if !input.exists() {
        return Err(format!("Input file not found: {}", input.display()).into());
    }

    Ok(csvify::load_records(input)?)
}

/// Column filter from repeated `--column` flags; none given means no filter.
pub(crate) fn column_filter(columns: &[String]) -> Option<ColumnFilter> {
    if columns.is_empty() {
        None
    } else {
        Some(ColumnFilter::new(columns.iter().cloned()))
    }
}

/// Read and flatten the input with the default flattener.
pub(crate) fn flatten_input(
    input: &Path,
    columns: &[String],
) -> Result<FlatData, Box<dyn std::error::Error>> {
    let records = read_input(input)?;
    let filter = column_filter(columns);

    Ok(create_flat_data_with_header(
        &records,
        &Flattener::new(),
        &FlattenStrategy::Recursive,
        filter.as_ref(),
    )?)
}
