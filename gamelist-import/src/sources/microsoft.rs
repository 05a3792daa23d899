//! Microsoft Store / Xbox app export: `{"games": ["Title", ...]}`.

use gamelist_catalog::PartialRecord;
use serde::Deserialize;

use super::SourceError;

#[derive(Debug, Deserialize)]
struct MicrosoftExport {
    games: Vec<String>,
}

pub fn adapt(contents: &str) -> Result<Vec<PartialRecord>, SourceError> {
    let export: MicrosoftExport = serde_json::from_str(contents)?;

    Ok(export
        .games
        .into_iter()
        .filter(|title| !title.trim().is_empty())
        .map(PartialRecord::new)
        .collect())
}
