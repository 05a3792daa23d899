use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_catalog::Storefront;

use crate::CliError;

/// Show the resolved export path for every storefront.
pub(crate) fn run_sources(root: Option<PathBuf>) -> Result<(), CliError> {
    let config = crate::load_config(root)?;

    log::info!(
        "{}",
        "Storefront exports".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Sources dir: {}", config.sources_dir.display());
    log::info!("  Snapshot:    {}", config.snapshot_path.display());
    crate::log_blank();

    for &store in Storefront::all() {
        let path = config.source_path(store);
        let status = if path.is_file() {
            format!("{}", "(exists)".if_supports_color(Stdout, |t| t.green()))
        } else {
            format!("{}", "(missing)".if_supports_color(Stdout, |t| t.dimmed()))
        };
        log::info!(
            "  {:<10} {} {}",
            store.tag(),
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            status,
        );
        log::debug!(
            "    override with {} (aliases: {})",
            store.env_key(),
            store.aliases().join(", ")
        );
    }

    Ok(())
}
