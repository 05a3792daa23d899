//! Epic Games Store export (as produced by Legendary/Heroic).
//!
//! Either `{"library": [...]}` or a bare array. Entries without a `title`
//! fall back to `app_name`, then to `"Unknown"`. No genres.

use gamelist_catalog::PartialRecord;
use serde::Deserialize;

use super::SourceError;

/// Title used when an entry names neither a title nor an app name.
const FALLBACK_TITLE: &str = "Unknown";

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EpicExport {
    Wrapped { library: Vec<EpicGame> },
    Bare(Vec<EpicGame>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EpicGame {
    title: Option<String>,
    app_name: Option<String>,
}

pub fn adapt(contents: &str) -> Result<Vec<PartialRecord>, SourceError> {
    let games = match serde_json::from_str(contents)? {
        EpicExport::Wrapped { library } => library,
        EpicExport::Bare(games) => games,
    };

    Ok(games
        .into_iter()
        .map(|game| {
            let title = game
                .title
                .filter(|t| !t.trim().is_empty())
                .or(game.app_name.filter(|a| !a.trim().is_empty()))
                .unwrap_or_else(|| FALLBACK_TITLE.to_string());
            PartialRecord::new(title)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_library() {
        let records = adapt(r#"{"library": [{"title": "Control", "app_name": "Calluna"}]}"#).unwrap();
        assert_eq!(records, vec![PartialRecord::new("Control")]);
    }

    #[test]
    fn bare_array() {
        let records = adapt(r#"[{"title": "Alan Wake"}, {"title": "Hades"}]"#).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn falls_back_to_app_name_then_unknown() {
        let records = adapt(r#"[{"app_name": "Fortnite"}, {"title": ""}, {}]"#).unwrap();
        let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Fortnite", "Unknown", "Unknown"]);
    }

    #[test]
    fn never_supplies_genres() {
        let records = adapt(r#"[{"title": "Control", "genres": ["Action"]}]"#).unwrap();
        assert!(records[0].genres.is_empty());
    }

    #[test]
    fn scalar_document_is_malformed() {
        assert!(adapt("42").is_err());
    }
}
