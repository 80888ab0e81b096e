//! Export command - flatten records and write them as CSV.

use std::path::PathBuf;

use colored::Colorize;
use csvify::{
    AliasMap, CsvExporter, CsvSink, ExportConfig, FileSink, FlattenStrategy, NullStyle,
    RowKeySource, WriterSink,
};
use tracing::debug;

use crate::cli::{AliasArg, RowKeyChoice};

/// Arguments of the export command.
pub struct ExportArgs {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub name: Option<String>,
    pub columns: Vec<String>,
    pub aliases: Vec<AliasArg>,
    pub config: Option<PathBuf>,
    pub row_keys: Option<RowKeyChoice>,
    pub legacy_nulls: bool,
    pub stdout: bool,
}

pub fn run(args: ExportArgs, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(&args)?;
    debug!(?config, "Export configuration");

    let exporter = CsvExporter::try_with_config(config)?;
    let records = super::read_input(&args.input)?;

    let data = exporter.flatten_all(&records, &FlattenStrategy::Recursive)?;
    let csv = exporter.render(&data)?;

    if args.stdout {
        WriterSink::new(std::io::stdout().lock()).deliver("stdout", &csv)?;
        return Ok(());
    }

    let name = args.name.clone().unwrap_or_else(|| default_name(&args.input));
    let path = FileSink::new(&args.output_dir).deliver(&name, &csv)?;

    println!(
        "{} {} records",
        "Exported".green().bold(),
        records.len().to_string().white().bold()
    );
    if let Some(path) = path {
        println!("  {}", path.display().to_string().cyan());
    }

    if verbose {
        println!("  {} columns", data.headers.len().to_string().white().bold());
    }

    Ok(())
}

/// Merge a config file with command-line flags. Flags win.
fn build_config(args: &ExportArgs) -> Result<ExportConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => ExportConfig::load(path)?,
        None => ExportConfig::default(),
    };

    if !args.columns.is_empty() {
        config.columns = Some(args.columns.clone());
    }

    if !args.aliases.is_empty() {
        let aliases = config.aliases.get_or_insert_with(AliasMap::new);
        for AliasArg { column, alias } in &args.aliases {
            aliases.insert(column.clone(), alias.clone());
        }
    }

    if let Some(choice) = &args.row_keys {
        config.row_keys = match choice {
            RowKeyChoice::Union => RowKeySource::HeaderUnion,
            RowKeyChoice::First => RowKeySource::FirstRecord,
        };
    }

    if args.legacy_nulls {
        config.null_style = NullStyle::QuotedEmpty;
    }

    Ok(config)
}

/// Input file stem, or "export" for stdin.
fn default_name(input: &std::path::Path) -> String {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty() && s != "-")
        .unwrap_or_else(|| "export".to_string())
}
