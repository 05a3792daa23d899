//! Pipeline file locations.
//!
//! Resolution order, later wins:
//!
//! 1. built-in defaults relative to the base directory
//! 2. `KEY=value` lines in `<base>/.env`
//! 3. the same keys in the process environment
//! 4. explicit setters (CLI flags)
//!
//! The `.env` file is read without touching the process environment.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use gamelist_catalog::Storefront;
use thiserror::Error;

/// Key overriding the sources directory (relative paths resolve against the base).
pub const SOURCES_DIR_KEY: &str = "SOURCES_DIR";

const DEFAULT_SOURCES_DIR: &str = "sources";
const DEFAULT_SNAPSHOT: &str = "merged_games.json";
const ENV_FILE: &str = ".env";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    EnvFile {
        path: String,
        source: dotenvy::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub base_dir: PathBuf,
    pub sources_dir: PathBuf,
    pub snapshot_path: PathBuf,
    /// Browser mirror; always the snapshot path with a `.js` extension.
    pub mirror_path: PathBuf,
    /// Export filename per store, relative to `sources_dir` unless absolute.
    pub filenames: BTreeMap<Storefront, String>,
    /// Stores not read this run.
    pub skip: BTreeSet<Storefront>,
}

impl PipelineConfig {
    /// Defaults only: `<base>/sources/<store>_library.*` and `<base>/merged_games.json`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();
        let snapshot_path = base_dir.join(DEFAULT_SNAPSHOT);
        Self {
            sources_dir: base_dir.join(DEFAULT_SOURCES_DIR),
            mirror_path: snapshot_path.with_extension("js"),
            snapshot_path,
            filenames: Storefront::all()
                .iter()
                .map(|s| (*s, s.default_filename().to_string()))
                .collect(),
            skip: BTreeSet::new(),
            base_dir,
        }
    }

    /// Defaults, then `<base>/.env`, then the process environment.
    pub fn load(base_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Self::load_with_env(base_dir, |key| std::env::var(key).ok())
    }

    /// Like [`load`](Self::load) with an injectable environment lookup.
    pub fn load_with_env<F>(base_dir: impl Into<PathBuf>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(base_dir);

        let env_path = config.base_dir.join(ENV_FILE);
        if env_path.is_file() {
            log::info!("Loading configuration from {}", env_path.display());
            config.apply_overrides(read_env_file(&env_path)?);
        }

        let process_vars = std::iter::once(SOURCES_DIR_KEY)
            .chain(Storefront::all().iter().map(|s| s.env_key()))
            .filter_map(|key| env(key).map(|value| (key.to_string(), value)));
        config.apply_overrides(process_vars);

        Ok(config)
    }

    /// Apply `KEY=value` pairs. Unknown keys and empty values are ignored.
    pub fn apply_overrides<I>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            if key == SOURCES_DIR_KEY {
                self.sources_dir = self.base_dir.join(value);
                continue;
            }
            if let Some(store) = Storefront::all().iter().find(|s| s.env_key() == key) {
                log::debug!("{} export file: {}", store, value);
                self.filenames.insert(*store, value.to_string());
            }
        }
    }

    pub fn set_sources_dir(&mut self, dir: impl Into<PathBuf>) {
        self.sources_dir = dir.into();
    }

    /// Point the snapshot elsewhere; the mirror follows it.
    pub fn set_snapshot_path(&mut self, path: impl Into<PathBuf>) {
        self.snapshot_path = path.into();
        self.mirror_path = self.snapshot_path.with_extension("js");
    }

    pub fn skip_stores<I: IntoIterator<Item = Storefront>>(&mut self, stores: I) {
        self.skip.extend(stores);
    }

    /// Full path of a store's export file.
    pub fn source_path(&self, store: Storefront) -> PathBuf {
        let filename = self
            .filenames
            .get(&store)
            .map(String::as_str)
            .unwrap_or(store.default_filename());
        self.sources_dir.join(filename)
    }

    /// Whether `store` is disabled for this run.
    pub fn is_skipped(&self, store: Storefront) -> bool {
        self.skip.contains(&store)
    }
}

fn read_env_file(path: &Path) -> Result<Vec<(String, String)>, ConfigError> {
    let to_err = |e| ConfigError::EnvFile {
        path: path.display().to_string(),
        source: e,
    };
    let mut vars = Vec::new();
    for item in dotenvy::from_path_iter(path).map_err(to_err)? {
        match item {
            Ok(pair) => vars.push(pair),
            Err(e) => log::warn!("Ignoring unreadable line in {}: {}", path.display(), e),
        }
    }
    Ok(vars)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
