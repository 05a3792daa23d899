//! Reading and writing the canonical snapshot.
//!
//! The snapshot is a pretty-printed JSON array of [`CanonicalGameRecord`]s.
//! Next to it sits a browser mirror: the same JSON wrapped in a
//! `window.gamesData = ...;` assignment so a static viewer can load it without
//! a server. Both are replaced atomically (write to a sibling temp file, then
//! rename), so an interrupted run leaves the previous files intact.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::{CanonicalGameRecord, StoredGameRecord};

/// Global variable the browser mirror assigns.
pub const MIRROR_GLOBAL: &str = "window.gamesData";

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error reading {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("I/O error writing {path}: {source}")]
    Write { path: String, source: io::Error },
    #[error("JSON parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    #[error("JSON serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load a snapshot from disk.
///
/// A missing file is an empty snapshot. A file that exists but does not parse
/// is an error: silently treating it as empty would drop every manual edit on
/// the next write.
pub fn load_snapshot(path: &Path) -> Result<Vec<StoredGameRecord>, SnapshotError> {
    if !path.exists() {
        log::info!("No snapshot at {}; starting empty", path.display());
        return Ok(Vec::new());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| SnapshotError::Read {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_snapshot(&contents).map_err(|e| SnapshotError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Parse snapshot JSON. Whitespace-only content counts as an empty snapshot.
pub fn parse_snapshot(contents: &str) -> Result<Vec<StoredGameRecord>, serde_json::Error> {
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(contents)
}

/// Serialize records in the persisted form: two-space indented JSON, non-ASCII
/// kept verbatim, no trailing newline.
pub fn render_snapshot(records: &[CanonicalGameRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Wrap rendered snapshot JSON as a script assignment for the browser viewer.
pub fn render_js_mirror(snapshot_json: &str) -> String {
    format!("{MIRROR_GLOBAL} = {snapshot_json};")
}

/// Write the snapshot and its browser mirror.
///
/// The JSON snapshot is replaced first; if that fails nothing has changed on
/// disk. The mirror is derived data and is regenerated on every run.
pub fn write_snapshot(
    json_path: &Path,
    js_path: &Path,
    records: &[CanonicalGameRecord],
) -> Result<(), SnapshotError> {
    let json = render_snapshot(records)?;

    write_atomic(json_path, &json).map_err(|e| SnapshotError::Write {
        path: json_path.display().to_string(),
        source: e,
    })?;

    write_atomic(js_path, &render_js_mirror(&json)).map_err(|e| SnapshotError::Write {
        path: js_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Replace `path` with `contents` via a sibling temp file and a rename.
fn write_atomic(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let tmp = temp_path(path);
    if let Err(e) = std::fs::write(&tmp, contents).and_then(|()| std::fs::rename(&tmp, path)) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e);
    }
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
