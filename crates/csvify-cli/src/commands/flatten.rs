//! Flatten command - print flattened records as JSON.

use std::path::PathBuf;

pub fn run(
    input: PathBuf,
    columns: Vec<String>,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = super::flatten_input(&input, &columns)?;

    println!("{}", serde_json::to_string_pretty(&data.items)?);
    Ok(())
}
