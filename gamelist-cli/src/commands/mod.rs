pub(crate) mod dlc;
pub(crate) mod merge;
pub(crate) mod sources;
pub(crate) mod stats;
pub(crate) mod unknowns;

use std::path::PathBuf;

use gamelist_catalog::CanonicalGameRecord;

use crate::CliError;

/// Load the snapshot a report command should read: `--snapshot` when given,
/// otherwise the configured one.
pub(crate) fn load_report_snapshot(
    root: Option<PathBuf>,
    snapshot: Option<PathBuf>,
) -> Result<(PathBuf, Vec<CanonicalGameRecord>), CliError> {
    let path = match snapshot {
        Some(path) => path,
        None => crate::load_config(root)?.snapshot_path,
    };

    let records = gamelist_import::load_prior(&path)
        .map_err(|e| CliError::snapshot(e.to_string()))?;
    Ok((path, records))
}
