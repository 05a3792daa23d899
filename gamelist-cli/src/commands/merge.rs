use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_catalog::Storefront;
use gamelist_import::{LogProgress, SourceOutcome, run_pipeline};

use crate::CliError;

/// Run the merge pipeline against the library at `root`.
pub(crate) fn run_merge(
    root: Option<PathBuf>,
    sources: Option<PathBuf>,
    output: Option<PathBuf>,
    skip: Option<Vec<Storefront>>,
    dry_run: bool,
) -> Result<(), CliError> {
    let mut config = crate::load_config(root)?;
    if let Some(dir) = sources {
        config.set_sources_dir(dir);
    }
    if let Some(path) = output {
        config.set_snapshot_path(path);
    }
    config.skip_stores(skip.unwrap_or_default());

    if dry_run {
        log::info!(
            "{}",
            "Dry run: nothing will be written".if_supports_color(Stdout, |t| t.yellow()),
        );
    }

    let summary =
        run_pipeline(&config, dry_run, &LogProgress).map_err(|e| CliError::pipeline(e.to_string()))?;

    crate::log_blank();
    log::info!("{}", "Sources".if_supports_color(Stdout, |t| t.bold()));
    for (store, outcome) in &summary.sources {
        let status = match outcome {
            SourceOutcome::Loaded(n) => format!(
                "{} {} titles",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                n
            ),
            SourceOutcome::Missing => {
                format!("{}", "not found".if_supports_color(Stdout, |t| t.dimmed()))
            }
            SourceOutcome::Malformed(e) => format!(
                "{} unreadable ({})",
                "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                e
            ),
            SourceOutcome::Skipped => {
                format!("{}", "skipped".if_supports_color(Stdout, |t| t.dimmed()))
            }
        };
        log::info!("  {:<10} {}", store.tag(), status);
    }

    let stats = &summary.stats;
    crate::log_blank();
    log::info!("{}", "Merge".if_supports_color(Stdout, |t| t.bold()));
    log::info!("  From snapshot:  {:>6}", stats.seeded);
    log::info!("  New games:      {:>6}", stats.created);
    log::info!("  Updated:        {:>6}", stats.updated);
    if stats.skipped > 0 {
        log::info!("  Untitled:       {:>6}", stats.skipped);
    }
    if stats.prior_dropped + stats.prior_collapsed > 0 {
        log::warn!(
            "  Snapshot rows dropped: {}, collapsed into duplicates: {}",
            stats.prior_dropped,
            stats.prior_collapsed,
        );
    }
    log::info!("  Total games:    {:>6}", summary.records.len());

    crate::log_blank();
    if summary.written {
        log::info!(
            "{} Wrote {} and {}",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            config
                .snapshot_path
                .display()
                .if_supports_color(Stdout, |t| t.cyan()),
            config
                .mirror_path
                .display()
                .if_supports_color(Stdout, |t| t.cyan()),
        );
    } else {
        log::info!(
            "Dry run complete; {} left unchanged",
            config.snapshot_path.display()
        );
    }

    Ok(())
}
