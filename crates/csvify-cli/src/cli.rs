//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// csvify: flatten nested JSON records into CSV
#[derive(Parser)]
#[command(name = "csvify")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Export records to a CSV file
    Export {
        /// JSON array or JSON Lines file ("-" for stdin)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Directory to write the CSV file into
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// File name without extension (default: input file stem)
        #[arg(short, long)]
        name: Option<String>,

        /// Flattened column to keep (repeatable; default: all)
        #[arg(short, long = "column", value_name = "COLUMN")]
        columns: Vec<String>,

        /// Header alias as COLUMN=ALIAS (repeatable)
        #[arg(short, long = "alias", value_name = "COLUMN=ALIAS")]
        aliases: Vec<AliasArg>,

        /// JSON export configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Keys that drive data row columns
        #[arg(long)]
        row_keys: Option<RowKeyChoice>,

        /// Render nulls as "" like the legacy exporter
        #[arg(long)]
        legacy_nulls: bool,

        /// Write the document to stdout instead of a file
        #[arg(long)]
        stdout: bool,
    },

    /// Print flattened records as JSON
    Flatten {
        /// JSON array or JSON Lines file ("-" for stdin)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Flattened column to keep (repeatable; default: all)
        #[arg(short, long = "column", value_name = "COLUMN")]
        columns: Vec<String>,
    },

    /// List the columns an export would produce
    Headers {
        /// JSON array or JSON Lines file ("-" for stdin)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Flattened column to keep (repeatable; default: all)
        #[arg(short, long = "column", value_name = "COLUMN")]
        columns: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default export configuration file
    InitConfig {
        /// Path for the configuration file
        #[arg(value_name = "PATH", default_value = "csvify.json")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// A `COLUMN=ALIAS` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AliasArg {
    pub column: String,
    pub alias: String,
}

impl std::str::FromStr for AliasArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((column, alias)) if !column.is_empty() => Ok(AliasArg {
                column: column.to_string(),
                alias: alias.to_string(),
            }),
            _ => Err(format!("Invalid alias: {}. Use COLUMN=ALIAS.", s)),
        }
    }
}

/// Row key source choice
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RowKeyChoice {
    /// Union of keys across all records
    #[default]
    Union,
    /// Keys of the first record only
    First,
}

impl std::str::FromStr for RowKeyChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "union" | "header_union" | "all" => Ok(RowKeyChoice::Union),
            "first" | "first_record" => Ok(RowKeyChoice::First),
            _ => Err(format!("Unknown row key source: {}. Use union or first.", s)),
        }
    }
}

impl std::fmt::Display for RowKeyChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RowKeyChoice::Union => write!(f, "union"),
            RowKeyChoice::First => write!(f, "first"),
        }
    }
}
