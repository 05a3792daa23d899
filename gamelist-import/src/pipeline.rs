//! The batch run: read snapshot, read every export, merge, write snapshot.
//!
//! Strictly sequential. The snapshot on disk is only replaced by the final
//! atomic write, so a run that fails or is interrupted earlier leaves the
//! previous snapshot untouched.

use gamelist_catalog::{
    CanonicalGameRecord, SnapshotError, StoredGameRecord, Storefront, load_snapshot,
    write_snapshot,
};
use thiserror::Error;

use crate::config::PipelineConfig;
use crate::merge::{MergeStats, SourceBatch, merge};
use crate::progress::{ImportProgress, SourceOutcome};
use crate::sources::read_source;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// What a pipeline run did.
#[derive(Debug)]
pub struct RunSummary {
    /// Per-store read result, in adapter order.
    pub sources: Vec<(Storefront, SourceOutcome)>,
    pub stats: MergeStats,
    /// The merged list, as written (or as it would have been on a dry run).
    pub records: Vec<CanonicalGameRecord>,
    pub written: bool,
}

/// Load the previous snapshot as canonical records, backfilling old rows.
pub fn load_prior(
    path: &std::path::Path,
) -> Result<Vec<CanonicalGameRecord>, SnapshotError> {
    Ok(load_snapshot(path)?
        .into_iter()
        .map(StoredGameRecord::into_canonical)
        .collect())
}

/// Read every configured export. Missing and malformed exports are reported,
/// never fatal.
pub fn collect_sources(
    config: &PipelineConfig,
    progress: &dyn ImportProgress,
) -> (Vec<SourceBatch>, Vec<(Storefront, SourceOutcome)>) {
    let mut batches = Vec::new();
    let mut outcomes = Vec::new();

    for &store in Storefront::all() {
        let outcome = if config.is_skipped(store) {
            SourceOutcome::Skipped
        } else {
            let path = config.source_path(store);
            log::debug!("Reading {} export from {}", store, path.display());
            match read_source(store, &path) {
                Ok(Some(records)) => {
                    let count = records.len();
                    batches.push(SourceBatch::new(store, records));
                    SourceOutcome::Loaded(count)
                }
                Ok(None) => SourceOutcome::Missing,
                Err(e) => {
                    log::warn!(
                        "Ignoring unreadable {} export {}: {}",
                        store,
                        path.display(),
                        e
                    );
                    SourceOutcome::Malformed(e.to_string())
                }
            }
        };
        progress.on_source(store, &outcome);
        outcomes.push((store, outcome));
    }

    (batches, outcomes)
}

/// Run the whole pipeline. With `dry_run` nothing is written.
pub fn run_pipeline(
    config: &PipelineConfig,
    dry_run: bool,
    progress: &dyn ImportProgress,
) -> Result<RunSummary, PipelineError> {
    progress.on_phase(&format!(
        "Reading snapshot {}",
        config.snapshot_path.display()
    ));
    let prior = load_prior(&config.snapshot_path)?;

    progress.on_phase(&format!(
        "Reading storefront exports from {}",
        config.sources_dir.display()
    ));
    let (batches, sources) = collect_sources(config, progress);

    progress.on_phase("Merging");
    let outcome = merge(prior, &batches);

    if !dry_run {
        write_snapshot(&config.snapshot_path, &config.mirror_path, &outcome.records)?;
    }

    progress.on_complete(&format!(
        "{} unique games ({} new, {} from snapshot)",
        outcome.records.len(),
        outcome.stats.created,
        outcome.stats.seeded,
    ));

    Ok(RunSummary {
        sources,
        stats: outcome.stats,
        records: outcome.records,
        written: !dry_run,
    })
}
