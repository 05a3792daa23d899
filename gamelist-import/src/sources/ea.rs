//! EA app / Origin entitlement export.
//!
//! The account-data download is a semicolon-separated CSV:
//! ```text
//! Entitlement_Name;Entitlement_Platform;...
//! Mass Effect 2 - PC - WW (Origin);PCWIN;...
//! ```
//! Entitlement names carry SKU noise (`- PCDD - WW`, `(Origin.com)`, ...)
//! that is stripped before the title reaches the merge. The platform column
//! maps to a device. A pre-cleaned JSON list (`[{"title", "device"}]` or
//! `{"library": [...]}`) is accepted too.

use std::sync::LazyLock;

use gamelist_catalog::{DEFAULT_DEVICE, PartialRecord, Storefront};
use regex::{Regex, RegexBuilder};
use serde::Deserialize;

use super::SourceError;

const NAME_COLUMN: &str = "Entitlement_Name";
const PLATFORM_COLUMN: &str = "Entitlement_Platform";

/// Marker on promotional entitlements that are not games.
const NOT_FOR_RETAIL: &str = "**NOT FOR RETAIL SALE**";

/// SKU suffixes and tags removed from entitlement names (case-insensitive).
const NOISE_PATTERNS: &[&str] = &[
    r"\s*-\s*PCDD\s*-\s*.*$",
    r"\s*-\s*PDLC\s*-\s*.*$",
    r"\s*-\s*PC\s*-\s*.*$",
    r"\s*-\s*Mac/PC\s*-\s*.*$",
    r"\s*-\s*WW\b.*$",
    r"\s*-\s*ROW\b.*$",
    r"\s*-\s*Twitch Prime.*$",
    r"\s*\(Origin[^)]*\)",
    r"\s*\(3PDD[^)]*\)",
    r"\s*\(RTP\)",
    r"\s*\(IP\s*\d+\)",
    r"\s*\(Pre-Order\)",
    r"\s*\(reward item.*\)",
    r"\s*\(Bundled.*\)",
    r"\s*\(incl.*\)",
    r"\s*\(Legacy.*\)",
    r"\s*\(WEST EU\)",
    r"\s*\(MP Pack \d+\)",
];

#[allow(clippy::expect_used)]
static NOISE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    NOISE_PATTERNS
        .iter()
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .expect("static EA noise pattern")
        })
        .collect()
});

#[allow(clippy::expect_used)]
static TRAILING_DASH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*-\s*$").expect("static trailing dash pattern"));

/// Strip EA SKU noise from an entitlement name.
///
/// ```
/// use gamelist_import::sources::ea::clean_entitlement_name;
///
/// assert_eq!(clean_entitlement_name("Mass Effect 2 - PC - WW (Origin)"), "Mass Effect 2");
/// assert_eq!(clean_entitlement_name("Rocket Arena (WEST EU)"), "Rocket Arena");
/// ```
pub fn clean_entitlement_name(name: &str) -> String {
    let mut cleaned = name.to_string();
    for re in NOISE.iter() {
        cleaned = re.replace_all(&cleaned, "").into_owned();
    }
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    TRAILING_DASH.replace(&collapsed, "").trim().to_string()
}

/// Map an `Entitlement_Platform` value to a device name.
pub fn map_device(platform: &str) -> &'static str {
    match platform.trim().to_uppercase().as_str() {
        "PS3" => "PS3",
        "XBOX" => "Xbox 360",
        // PCWIN, MAC, UNKNOWN and anything unrecognised.
        _ => DEFAULT_DEVICE,
    }
}

pub fn adapt(contents: &str) -> Result<Vec<PartialRecord>, SourceError> {
    match contents.trim_start().chars().next() {
        Some('[') | Some('{') => adapt_json(contents),
        _ => adapt_csv(contents),
    }
}

fn adapt_csv(contents: &str) -> Result<Vec<PartialRecord>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .from_reader(contents.as_bytes());

    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h.trim() == name);
    let name_idx = column(NAME_COLUMN).ok_or_else(|| {
        SourceError::shape(Storefront::Ea, format!("missing {NAME_COLUMN} column"))
    })?;
    let platform_idx = column(PLATFORM_COLUMN);

    let mut records = Vec::new();
    for result in reader.records() {
        let row = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping malformed EA CSV row: {e}");
                continue;
            }
        };

        let raw_name = row.get(name_idx).unwrap_or("").trim();
        if raw_name.is_empty() || raw_name.contains(NOT_FOR_RETAIL) {
            continue;
        }

        let title = clean_entitlement_name(raw_name);
        if title.is_empty() {
            log::debug!("EA entitlement '{raw_name}' is empty after cleaning");
            continue;
        }

        let platform = platform_idx.and_then(|i| row.get(i)).unwrap_or("UNKNOWN");
        records.push(PartialRecord::new(title).with_device(map_device(platform)));
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EaJson {
    Wrapped { library: Vec<EaJsonGame> },
    Bare(Vec<EaJsonGame>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EaJsonGame {
    title: Option<String>,
    device: Option<Vec<String>>,
}

fn adapt_json(contents: &str) -> Result<Vec<PartialRecord>, SourceError> {
    let games = match serde_json::from_str(contents)? {
        EaJson::Wrapped { library } => library,
        EaJson::Bare(games) => games,
    };

    Ok(games
        .into_iter()
        .filter_map(|game| {
            let title = game.title.filter(|t| !t.trim().is_empty())?;
            let record = game
                .device
                .unwrap_or_default()
                .into_iter()
                .fold(PartialRecord::new(title), |record, device| record.with_device(device));
            Some(record)
        })
        .collect())
}

#[cfg(test)]
#[path = "../tests/ea_tests.rs"]
mod tests;
