//! Storefront export adapters.
//!
//! Each submodule maps one store's export document onto [`PartialRecord`]s.
//! Adapters know nothing about the merge: they only extract titles, and
//! genres / play state / device where the format carries them.

pub mod amazon;
pub mod ea;
pub mod epic;
pub mod gog;
pub mod microsoft;
pub mod steam;

use std::path::Path;

use gamelist_catalog::{PartialRecord, Storefront};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Unexpected {store} export layout: {detail}")]
    Shape { store: Storefront, detail: String },
}

impl SourceError {
    pub(crate) fn shape(store: Storefront, detail: impl Into<String>) -> Self {
        Self::Shape {
            store,
            detail: detail.into(),
        }
    }
}

/// The `extra` block Amazon and GOG exports attach to each game.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ExtraInfo {
    pub genres: Option<Vec<String>>,
}

impl ExtraInfo {
    pub(crate) fn genres(extra: Option<ExtraInfo>) -> Vec<String> {
        extra.and_then(|e| e.genres).unwrap_or_default()
    }
}

/// Map an export document to partial records using the store's adapter.
pub fn adapt(store: Storefront, contents: &str) -> Result<Vec<PartialRecord>, SourceError> {
    // Windows tools like to prepend a BOM to both JSON and CSV exports.
    let contents = contents.trim_start_matches('\u{feff}');
    match store {
        Storefront::Amazon => amazon::adapt(contents),
        Storefront::Epic => epic::adapt(contents),
        Storefront::Gog => gog::adapt(contents),
        Storefront::Ea => ea::adapt(contents),
        Storefront::Microsoft => microsoft::adapt(contents),
        Storefront::Steam => steam::adapt(contents),
    }
}

/// Read and adapt one export file.
///
/// Returns `Ok(None)` when the file does not exist; a missing export is not an
/// error, the store simply contributes nothing this run.
pub fn read_source(
    store: Storefront,
    path: &Path,
) -> Result<Option<Vec<PartialRecord>>, SourceError> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path).map_err(|e| SourceError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    adapt(store, &contents).map(Some)
}
