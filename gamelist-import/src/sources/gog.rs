//! GOG Galaxy export: `{"games": [{"title", "extra": {"genres"}}]}`.

use gamelist_catalog::PartialRecord;
use serde::Deserialize;

use super::{ExtraInfo, SourceError};

#[derive(Debug, Deserialize)]
struct GogExport {
    games: Vec<GogGame>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GogGame {
    title: Option<String>,
    extra: Option<ExtraInfo>,
}

pub fn adapt(contents: &str) -> Result<Vec<PartialRecord>, SourceError> {
    let export: GogExport = serde_json::from_str(contents)?;

    Ok(export
        .games
        .into_iter()
        .filter_map(|game| {
            let title = game.title.filter(|t| !t.trim().is_empty())?;
            Some(PartialRecord::new(title).with_genres(ExtraInfo::genres(game.extra)))
        })
        .collect())
}
