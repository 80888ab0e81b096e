//! Headers command - list the columns an export would produce.

use std::path::PathBuf;

use colored::Colorize;

pub fn run(
    input: PathBuf,
    columns: Vec<String>,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = super::flatten_input(&input, &columns)?;

    if json_output {
        let summary = serde_json::json!({
            "file": input.display().to_string(),
            "records": data.items.len(),
            "headers": data.headers,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{} {} columns across {} records",
        "Found".cyan().bold(),
        data.headers.len().to_string().white().bold(),
        data.items.len()
    );
    println!();

    for (index, header) in data.headers.iter().enumerate() {
        if verbose {
            let filled = data.items.iter().filter(|item| item.contains_key(header)).count();
            println!(
                "  {:>3}. {} {}",
                index + 1,
                header.white().bold(),
                format!("({}/{} records)", filled, data.items.len()).dimmed()
            );
        } else {
            println!("  {:>3}. {}", index + 1, header.white().bold());
        }
    }

    Ok(())
}
