//! Read-only reports over a snapshot.
//!
//! None of these modify records; they exist so the DLC rules and the
//! enrichment backlog can be reviewed before (or after) a merge.

use std::collections::BTreeMap;

use gamelist_catalog::{CanonicalGameRecord, classify};

/// A record the DLC rules and/or the stored flag consider add-on content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DlcFinding {
    pub title: String,
    pub platforms: Vec<String>,
    /// `is_dlc` as stored in the snapshot.
    pub stored: bool,
    /// Verdict of the current rule table.
    pub classified: bool,
    /// Reason of the rule that decided `classified`.
    pub reason: Option<&'static str>,
}

impl DlcFinding {
    /// Stored flag and current rules disagree (e.g. after a rule change).
    pub fn is_disagreement(&self) -> bool {
        self.stored != self.classified
    }
}

/// List every record flagged as DLC by the snapshot or by the current rules.
pub fn dlc_report(records: &[CanonicalGameRecord]) -> Vec<DlcFinding> {
    records
        .iter()
        .filter_map(|record| {
            let classification = classify(&record.title);
            if !record.is_dlc && !classification.is_dlc {
                return None;
            }
            Some(DlcFinding {
                title: record.title.clone(),
                platforms: record.platforms.iter().cloned().collect(),
                stored: record.is_dlc,
                classified: classification.is_dlc,
                reason: classification.rule.map(|r| r.reason),
            })
        })
        .collect()
}

/// Live records whose genres are empty or only the `"Unknown"` sentinel.
pub fn missing_genres(records: &[CanonicalGameRecord]) -> Vec<&CanonicalGameRecord> {
    records
        .iter()
        .filter(|r| !r.deleted && r.needs_genres())
        .collect()
}

/// Library-wide counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryStats {
    pub total: usize,
    pub deleted: usize,
    pub dlc: usize,
    pub played: usize,
    pub to_play: usize,
    pub needs_genres: usize,
    /// Live records per store tag; a game owned on two stores counts twice.
    pub per_store: BTreeMap<String, usize>,
}

impl LibraryStats {
    /// Records not soft-deleted.
    pub fn live(&self) -> usize {
        self.total - self.deleted
    }
}

pub fn library_stats(records: &[CanonicalGameRecord]) -> LibraryStats {
    let mut stats = LibraryStats {
        total: records.len(),
        ..LibraryStats::default()
    };

    for record in records {
        if record.deleted {
            stats.deleted += 1;
            continue;
        }
        stats.dlc += usize::from(record.is_dlc);
        stats.played += usize::from(record.played);
        stats.to_play += usize::from(record.to_play);
        stats.needs_genres += usize::from(record.needs_genres());
        for tag in &record.platforms {
            *stats.per_store.entry(tag.clone()).or_default() += 1;
        }
    }

    stats
}
