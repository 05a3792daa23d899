//! Data model types for the merged game library.
//!
//! [`CanonicalGameRecord`] is the persisted shape, one per distinct game.
//! [`PartialRecord`] is what a storefront adapter contributes before merging.
//! [`StoredGameRecord`] is the lenient read-side form of a snapshot row, so
//! files written by older tooling (missing `device`, `is_dlc`, ...) still load.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::dlc;

/// Hardware target assigned when a source says nothing about the device.
pub const DEFAULT_DEVICE: &str = "PC";

/// Genre placeholder meaning "enrichment ran and found nothing".
pub const UNKNOWN_GENRE: &str = "Unknown";

// ── Storefront ──────────────────────────────────────────────────────────────

/// Storefronts whose library exports can be merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Storefront {
    Amazon,
    Epic,
    Gog,
    Ea,
    Microsoft,
    Steam,
}

/// All storefronts in adapter run order.
const ALL_STOREFRONTS: &[Storefront] = &[
    Storefront::Amazon,
    Storefront::Epic,
    Storefront::Gog,
    Storefront::Ea,
    Storefront::Microsoft,
    Storefront::Steam,
];

impl Storefront {
    /// Tag stored in a record's `platforms` set.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Amazon => "Amazon",
            Self::Epic => "Epic",
            Self::Gog => "GOG",
            Self::Ea => "EA",
            Self::Microsoft => "Microsoft",
            Self::Steam => "Steam",
        }
    }

    /// Lowercase identifier used on the command line.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Amazon => "amazon",
            Self::Epic => "epic",
            Self::Gog => "gog",
            Self::Ea => "ea",
            Self::Microsoft => "microsoft",
            Self::Steam => "steam",
        }
    }

    /// Key in `.env` or the process environment that overrides the export filename.
    pub fn env_key(&self) -> &'static str {
        match self {
            Self::Amazon => "AMAZON_LIBRARY",
            Self::Epic => "EPIC_LIBRARY",
            Self::Gog => "GOG_LIBRARY",
            Self::Ea => "EA_LIBRARY",
            Self::Microsoft => "MICROSOFT_LIBRARY",
            Self::Steam => "STEAM_LIBRARY",
        }
    }

    /// Export filename looked up in the sources directory when not overridden.
    pub fn default_filename(&self) -> &'static str {
        match self {
            Self::Amazon => "amazon_library.json",
            Self::Epic => "epic_library.json",
            Self::Gog => "gog_library.json",
            Self::Ea => "ea_library.csv",
            Self::Microsoft => "microsoft_library.json",
            Self::Steam => "steam_library.json",
        }
    }

    /// Accepted names (lowercase). The first entry is always `short_name()`.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Amazon => &["amazon", "prime", "prime gaming", "luna"],
            Self::Epic => &["epic", "egs", "epic games"],
            Self::Gog => &["gog", "gog galaxy"],
            Self::Ea => &["ea", "origin", "ea app"],
            Self::Microsoft => &["microsoft", "ms", "xbox", "game pass"],
            Self::Steam => &["steam", "valve"],
        }
    }

    /// Whether this store's export carries genre lists.
    pub fn provides_genres(&self) -> bool {
        matches!(self, Self::Amazon | Self::Gog)
    }

    /// All storefronts, in the fixed order adapters run.
    pub fn all() -> &'static [Storefront] {
        ALL_STOREFRONTS
    }
}

impl std::fmt::Display for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Error returned when a string cannot be parsed into a `Storefront`.
#[derive(Debug, Clone)]
pub struct StorefrontParseError(pub String);

impl std::fmt::Display for StorefrontParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown storefront: '{}'", self.0)
    }
}

impl std::error::Error for StorefrontParseError {}

impl std::str::FromStr for Storefront {
    type Err = StorefrontParseError;

    /// Parse a storefront from its tag or any alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_STOREFRONTS
            .iter()
            .copied()
            .find(|store| {
                store.tag().to_lowercase() == lower || store.aliases().contains(&lower.as_str())
            })
            .ok_or_else(|| StorefrontParseError(s.to_string()))
    }
}

// ── Canonical record ────────────────────────────────────────────────────────

/// One distinct game in the merged library, keyed by its normalized title.
///
/// Field order here is the field order of the persisted snapshot. Sets are
/// `BTreeSet` so they serialize sorted without a separate pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalGameRecord {
    /// First display title seen for this game. Never rewritten by merges.
    pub title: String,
    /// Manual rename; only ever set outside the pipeline.
    pub custom_title: Option<String>,
    pub platforms: BTreeSet<String>,
    pub device: BTreeSet<String>,
    pub genres: BTreeSet<String>,
    pub is_dlc: bool,
    pub notes: String,
    pub played: bool,
    pub rating: Option<i64>,
    pub to_play: bool,
    pub to_play_order: Option<i64>,
    pub description: Option<String>,
    pub release_date: Option<String>,
    pub deleted: bool,
}

impl CanonicalGameRecord {
    /// Build a fully-populated record for a title seen for the first time.
    ///
    /// The DLC verdict is computed here, once; later merges never recompute it.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let is_dlc = dlc::is_dlc(&title);
        Self {
            title,
            custom_title: None,
            platforms: BTreeSet::new(),
            device: default_device(),
            genres: BTreeSet::new(),
            is_dlc,
            notes: String::new(),
            played: false,
            rating: None,
            to_play: false,
            to_play_order: None,
            description: None,
            release_date: None,
            deleted: false,
        }
    }

    /// The title to show to a person: the manual override when present.
    pub fn display_title(&self) -> &str {
        self.custom_title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.title)
    }

    /// Remove the `"Unknown"` sentinel once a real genre is present.
    pub fn drop_sentinel_genre(&mut self) {
        if self.genres.len() > 1 {
            self.genres.remove(UNKNOWN_GENRE);
        }
    }

    /// True when the record still needs genre enrichment.
    pub fn needs_genres(&self) -> bool {
        self.genres.is_empty() || (self.genres.len() == 1 && self.genres.contains(UNKNOWN_GENRE))
    }
}

fn default_device() -> BTreeSet<String> {
    BTreeSet::from([DEFAULT_DEVICE.to_string()])
}

// ── Stored (read-side) record ───────────────────────────────────────────────

/// A snapshot row as found on disk. Every field is optional so rows written by
/// older revisions, or hand-edited ones with `null`s, still deserialize.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoredGameRecord {
    pub title: Option<String>,
    pub custom_title: Option<String>,
    pub platforms: Option<Vec<String>>,
    pub device: Option<Vec<String>>,
    pub genres: Option<Vec<String>>,
    pub is_dlc: Option<bool>,
    pub notes: Option<String>,
    pub played: Option<bool>,
    pub rating: Option<i64>,
    pub to_play: Option<bool>,
    pub to_play_order: Option<i64>,
    pub description: Option<String>,
    pub release_date: Option<String>,
    pub deleted: Option<bool>,
}

impl StoredGameRecord {
    /// Convert into the canonical shape, filling every absent field with its
    /// documented default.
    ///
    /// A row without `is_dlc` is classified now; a row that has one keeps it.
    pub fn into_canonical(self) -> CanonicalGameRecord {
        let title = self.title.unwrap_or_default();
        let is_dlc = self.is_dlc.unwrap_or_else(|| dlc::is_dlc(&title));
        let device: BTreeSet<String> = self.device.unwrap_or_default().into_iter().collect();

        CanonicalGameRecord {
            title,
            custom_title: self.custom_title,
            platforms: self.platforms.unwrap_or_default().into_iter().collect(),
            device: if device.is_empty() {
                default_device()
            } else {
                device
            },
            genres: self.genres.unwrap_or_default().into_iter().collect(),
            is_dlc,
            notes: self.notes.unwrap_or_default(),
            played: self.played.unwrap_or(false),
            rating: self.rating,
            to_play: self.to_play.unwrap_or(false),
            to_play_order: self.to_play_order,
            description: self.description,
            release_date: self.release_date,
            deleted: self.deleted.unwrap_or(false),
        }
    }
}

// ── Partial record ──────────────────────────────────────────────────────────

/// What one storefront export says about one title, before merging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialRecord {
    pub title: String,
    /// Empty when the source format carries no genres.
    pub genres: BTreeSet<String>,
    /// `Some` only for sources that expose play time.
    pub played_hint: Option<bool>,
    /// `Some` only for sources that know the hardware target.
    pub device: Option<BTreeSet<String>>,
}

impl PartialRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres.extend(
            genres
                .into_iter()
                .map(Into::into)
                .filter(|g: &String| !g.trim().is_empty()),
        );
        self
    }

    pub fn with_played(mut self, played: bool) -> Self {
        self.played_hint = Some(played);
        self
    }

    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device
            .get_or_insert_with(BTreeSet::new)
            .insert(device.into());
        self
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
