use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_import::library_stats;

use crate::CliError;

use super::load_report_snapshot;

pub(crate) fn run_stats(root: Option<PathBuf>, snapshot: Option<PathBuf>) -> Result<(), CliError> {
    let (path, records) = load_report_snapshot(root, snapshot)?;

    if records.is_empty() {
        log::warn!("No games in {}", path.display());
        log::info!("Run 'gamelist merge' to create the snapshot.");
        return Ok(());
    }

    let stats = library_stats(&records);

    log::info!(
        "{}",
        "Library Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Snapshot: {}", path.display());
    crate::log_blank();
    log::info!("  Games:          {:>6}", stats.live());
    log::info!("  DLC:            {:>6}", stats.dlc);
    log::info!("  Played:         {:>6}", stats.played);
    log::info!("  To play:        {:>6}", stats.to_play);
    log::info!("  Need genres:    {:>6}", stats.needs_genres);
    log::info!("  Deleted:        {:>6}", stats.deleted);
    crate::log_blank();
    log::info!("{}", "By store".if_supports_color(Stdout, |t| t.bold()));
    for (tag, count) in &stats.per_store {
        log::info!("  {:<14}  {:>6}", tag, count);
    }

    Ok(())
}
