use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_import::missing_genres;

use crate::CliError;

use super::load_report_snapshot;

/// List games still waiting for genre enrichment.
pub(crate) fn run_unknowns(
    root: Option<PathBuf>,
    snapshot: Option<PathBuf>,
) -> Result<(), CliError> {
    let (path, records) = load_report_snapshot(root, snapshot)?;
    let pending = missing_genres(&records);

    if pending.is_empty() {
        log::info!(
            "{} Every game in {} has genres",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            path.display(),
        );
        return Ok(());
    }

    log::info!(
        "{}",
        "Games without genres".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();
    for record in &pending {
        let platforms: Vec<_> = record.platforms.iter().map(String::as_str).collect();
        log::info!(
            "  {} [{}]",
            record.display_title(),
            platforms.join(", ").if_supports_color(Stdout, |t| t.cyan()),
        );
    }
    crate::log_blank();
    log::info!("{} of {} games need genres", pending.len(), records.len());

    Ok(())
}
