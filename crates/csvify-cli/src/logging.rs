//! Tracing setup for the CLI.

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "csvify=info";
const VERBOSE_LOG_FILTER: &str = "csvify=debug";

/// Initialize tracing on stderr. `RUST_LOG` wins over `--verbose`.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A subscriber may already be installed by an embedding process.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
