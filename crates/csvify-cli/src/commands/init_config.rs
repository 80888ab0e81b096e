//! Init-config command - write a default export configuration.

use std::path::PathBuf;

use colored::Colorize;
use csvify::ExportConfig;

pub fn run(path: PathBuf, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() && !force {
        return Err(format!(
            "Config file already exists: {}\nUse --force to overwrite.",
            path.display()
        )
        .into());
    }

    ExportConfig::default().save(&path)?;

    println!(
        "{} {}",
        "Wrote".green().bold(),
        path.display().to_string().cyan()
    );
    Ok(())
}
