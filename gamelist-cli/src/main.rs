//! gamelist CLI
//!
//! Command-line interface for merging storefront library exports into a
//! single deduplicated game list.

mod cli_types;
mod commands;
mod error;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;

use gamelist_import::PipelineConfig;

use cli_types::{Cli, Commands};
pub(crate) use error::CliError;

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}

/// Initialise `env_logger`. `RUST_LOG` wins over the default level, which
/// `--quiet` / `--verbose` adjust.
fn init_logging(quiet: bool, verbose: bool) {
    let default = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(default))
        .format(move |buf, record| {
            if record.level() <= log::Level::Warn || verbose {
                writeln!(buf, "[{}] {}", record.level(), record.args())
            } else {
                writeln!(buf, "{}", record.args())
            }
        })
        .init();
}

/// Resolve the pipeline configuration for the library at `root`.
pub(crate) fn load_config(root: Option<PathBuf>) -> Result<PipelineConfig, CliError> {
    let root = root.unwrap_or_else(|| PathBuf::from("."));
    PipelineConfig::load(root).map_err(|e| CliError::config(e.to_string()))
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let result = match cli.command {
        Commands::Merge {
            sources,
            output,
            skip,
            dry_run,
        } => commands::merge::run_merge(cli.root, sources, output, skip, dry_run),
        Commands::Dlc { snapshot } => commands::dlc::run_dlc(cli.root, snapshot.snapshot),
        Commands::Unknowns { snapshot } => {
            commands::unknowns::run_unknowns(cli.root, snapshot.snapshot)
        }
        Commands::Stats { snapshot } => commands::stats::run_stats(cli.root, snapshot.snapshot),
        Commands::Sources => commands::sources::run_sources(cli.root),
    };

    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
