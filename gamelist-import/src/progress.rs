//! Pipeline progress reporting.

use gamelist_catalog::Storefront;

/// What happened when a store's export was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOutcome {
    /// Export parsed; this many partial records were produced.
    Loaded(usize),
    /// No export file at the configured path.
    Missing,
    /// Export present but unreadable or of the wrong shape; treated as missing.
    Malformed(String),
    /// Disabled for this run.
    Skipped,
}

/// Trait for receiving pipeline progress updates.
pub trait ImportProgress {
    /// Called when a phase starts (e.g., "Reading snapshot").
    fn on_phase(&self, message: &str);

    /// Called once per storefront after its export has been read.
    fn on_source(&self, store: Storefront, outcome: &SourceOutcome);

    /// Called when the run is complete.
    fn on_complete(&self, message: &str);
}

/// A no-op progress reporter that discards all updates.
pub struct SilentProgress;

impl ImportProgress for SilentProgress {
    fn on_phase(&self, _message: &str) {}
    fn on_source(&self, _store: Storefront, _outcome: &SourceOutcome) {}
    fn on_complete(&self, _message: &str) {}
}

/// A progress reporter that logs to the `log` crate.
pub struct LogProgress;

impl ImportProgress for LogProgress {
    fn on_phase(&self, message: &str) {
        log::info!("{}", message);
    }

    fn on_source(&self, store: Storefront, outcome: &SourceOutcome) {
        match outcome {
            SourceOutcome::Loaded(n) => log::info!("  {}: {} titles", store, n),
            SourceOutcome::Missing => log::info!("  {}: no export found, skipping", store),
            SourceOutcome::Malformed(_) => log::info!("  {}: unreadable export, skipping", store),
            SourceOutcome::Skipped => log::debug!("  {}: disabled", store),
        }
    }

    fn on_complete(&self, message: &str) {
        log::info!("{}", message);
    }
}
