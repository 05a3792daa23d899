use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamelist_catalog::RULESET_VERSION;
use gamelist_import::dlc_report;

use crate::CliError;

use super::load_report_snapshot;

/// Re-run the DLC rules over a snapshot without modifying it.
pub(crate) fn run_dlc(root: Option<PathBuf>, snapshot: Option<PathBuf>) -> Result<(), CliError> {
    let (path, records) = load_report_snapshot(root, snapshot)?;
    let findings = dlc_report(&records);

    log::info!(
        "{}",
        format!("DLC report (rules v{})", RULESET_VERSION).if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Snapshot: {}", path.display());
    crate::log_blank();

    if findings.is_empty() {
        log::info!(
            "{}",
            "No DLC found.".if_supports_color(Stdout, |t| t.dimmed())
        );
        return Ok(());
    }

    let (disagreements, agreed): (Vec<_>, Vec<_>) =
        findings.iter().partition(|f| f.is_disagreement());

    for finding in &agreed {
        log::info!(
            "  {} [{}] {}",
            finding.title.if_supports_color(Stdout, |t| t.bold()),
            finding.platforms.join(", "),
            finding
                .reason
                .unwrap_or("")
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    if !disagreements.is_empty() {
        crate::log_blank();
        log::info!(
            "{}",
            "Stored flag differs from current rules:".if_supports_color(Stdout, |t| t.yellow()),
        );
        for finding in &disagreements {
            log::info!(
                "  {} stored={} rules={}{}",
                finding.title.if_supports_color(Stdout, |t| t.bold()),
                finding.stored,
                finding.classified,
                finding
                    .reason
                    .map(|r| format!(" ({})", r))
                    .unwrap_or_default(),
            );
        }
    }

    crate::log_blank();
    log::info!(
        "{} flagged, {} disagreements, {} records total",
        agreed.len(),
        disagreements.len(),
        records.len()
    );

    Ok(())
}
