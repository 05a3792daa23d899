//! Steam Web API `GetOwnedGames` response:
//! `{"response": {"games": [{"name", "playtime_forever"}]}}`.
//!
//! The only export with play time: any recorded minutes mark the game played.

use gamelist_catalog::PartialRecord;
use serde::Deserialize;

use super::SourceError;

#[derive(Debug, Deserialize)]
struct SteamExport {
    response: SteamResponse,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SteamResponse {
    games: Option<Vec<SteamGame>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SteamGame {
    name: Option<String>,
    /// Minutes played, all time.
    playtime_forever: u64,
}

pub fn adapt(contents: &str) -> Result<Vec<PartialRecord>, SourceError> {
    let export: SteamExport = serde_json::from_str(contents)?;

    let Some(games) = export.response.games else {
        // Private profiles answer with an empty `response` object.
        log::warn!("Steam response has no games list (private profile?)");
        return Ok(Vec::new());
    };

    Ok(games
        .into_iter()
        .filter_map(|game| {
            let name = game.name.filter(|n| !n.trim().is_empty())?;
            Some(PartialRecord::new(name).with_played(game.playtime_forever > 0))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playtime_sets_played_hint() {
        let records = adapt(
            r#"{"response": {"game_count": 2, "games": [
                {"appid": 620, "name": "Portal 2", "playtime_forever": 120},
                {"appid": 400, "name": "Portal", "playtime_forever": 0}
            ]}}"#,
        )
        .unwrap();
        assert_eq!(records[0].played_hint, Some(true));
        assert_eq!(records[1].played_hint, Some(false));
    }

    #[test]
    fn missing_playtime_means_unplayed() {
        let records = adapt(r#"{"response": {"games": [{"name": "Dota 2"}]}}"#).unwrap();
        assert_eq!(records[0].played_hint, Some(false));
    }

    #[test]
    fn nameless_entries_skipped() {
        let records =
            adapt(r#"{"response": {"games": [{"appid": 1, "playtime_forever": 5}]}}"#).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn empty_response_contributes_nothing() {
        assert!(adapt(r#"{"response": {}}"#).unwrap().is_empty());
    }

    #[test]
    fn missing_response_is_malformed() {
        assert!(adapt(r#"{"games": []}"#).is_err());
    }
}
