//! csvify CLI - flatten nested JSON records into CSV.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Export {
            input,
            output_dir,
            name,
            columns,
            aliases,
            config,
            row_keys,
            legacy_nulls,
            stdout,
        } => commands::export::run(
            commands::export::ExportArgs {
                input,
                output_dir,
                name,
                columns,
                aliases,
                config,
                row_keys,
                legacy_nulls,
                stdout,
            },
            cli.verbose,
        ),

        Commands::Flatten { input, columns } => commands::flatten::run(input, columns, cli.verbose),

        Commands::Headers {
            input,
            columns,
            json,
        } => commands::headers::run(input, columns, json, cli.verbose),

        Commands::InitConfig { path, force } => commands::init_config::run(path, force),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
