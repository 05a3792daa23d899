//! Ingest storefront library exports and merge them into the canonical
//! game list.
//!
//! This crate owns the ETL side: one adapter per storefront export format,
//! the merge fold that deduplicates titles across stores while carrying
//! manual edits forward from the previous snapshot, and the batch pipeline
//! that ties them to the files on disk.

pub mod config;
pub mod merge;
pub mod pipeline;
pub mod progress;
pub mod report;
pub mod sources;

pub use config::{ConfigError, PipelineConfig};
pub use merge::{Accumulator, MergeOutcome, MergeStats, SourceBatch, merge};
pub use pipeline::{PipelineError, RunSummary, collect_sources, load_prior, run_pipeline};
pub use progress::{ImportProgress, LogProgress, SilentProgress, SourceOutcome};
pub use report::{DlcFinding, LibraryStats, dlc_report, library_stats, missing_genres};
pub use sources::{SourceError, adapt, read_source};
