//! Cross-store merge with manual-edit preservation.
//!
//! The merge is a fold over an explicit [`Accumulator`] keyed by normalized
//! title:
//!
//! 1. [`Accumulator::seed`] loads the previous snapshot verbatim, so custom
//!    titles, ratings, notes and enrichment survive a re-run.
//! 2. [`Accumulator::fold_source`] applies one store's partial records:
//!    unseen titles get a fresh record named after the first spelling seen
//!    (trademark glyphs removed), every title gets the store tag, genres are
//!    unioned and a played hint can only turn `played` on.
//! 3. [`Accumulator::finalize`] drops the `"Unknown"` genre where real genres
//!    exist and sorts by title.
//!
//! Nothing here touches the filesystem.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use gamelist_catalog::{
    CanonicalGameRecord, PartialRecord, Storefront, display_title, normalize_title,
};

/// One store's adapter output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBatch {
    pub store: Storefront,
    pub records: Vec<PartialRecord>,
}

impl SourceBatch {
    pub fn new(store: Storefront, records: Vec<PartialRecord>) -> Self {
        Self { store, records }
    }
}

/// Counters from a single merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Snapshot rows carried into the accumulator.
    pub seeded: u64,
    /// Snapshot rows whose title has no usable key.
    pub prior_dropped: u64,
    /// Snapshot rows folded into an earlier row with the same key.
    pub prior_collapsed: u64,
    /// Records created for titles not seen before.
    pub created: u64,
    /// Partial records applied to an existing record.
    pub updated: u64,
    /// Partial records skipped for having no usable key.
    pub skipped: u64,
}

/// The finished record list plus counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub records: Vec<CanonicalGameRecord>,
    pub stats: MergeStats,
}

/// Records under construction, keyed by normalized title.
#[derive(Debug, Default)]
pub struct Accumulator {
    entries: BTreeMap<String, CanonicalGameRecord>,
    stats: MergeStats,
}

impl Accumulator {
    /// Start from the previous snapshot, copying every field as-is.
    pub fn seed(prior: Vec<CanonicalGameRecord>) -> Self {
        prior.into_iter().fold(Self::default(), Self::seed_record)
    }

    fn seed_record(mut self, record: CanonicalGameRecord) -> Self {
        let key = normalize_title(&record.title);
        if key.is_empty() {
            log::warn!(
                "Dropping snapshot row with unusable title {:?}",
                record.title
            );
            self.stats.prior_dropped += 1;
            return self;
        }

        match self.entries.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(record);
                self.stats.seeded += 1;
            }
            Entry::Occupied(mut slot) => {
                log::warn!(
                    "Snapshot rows {:?} and {:?} share a key; keeping the first",
                    slot.get().title,
                    record.title
                );
                absorb_duplicate(slot.get_mut(), record);
                self.stats.prior_collapsed += 1;
            }
        }
        self
    }

    /// Apply one store's partial records.
    pub fn fold_source(mut self, store: Storefront, records: &[PartialRecord]) -> Self {
        for partial in records {
            self.apply(store.tag(), partial);
        }
        self
    }

    fn apply(&mut self, tag: &str, partial: &PartialRecord) {
        let key = normalize_title(&partial.title);
        if key.is_empty() {
            log::debug!("Skipping {} title with no usable key: {:?}", tag, partial.title);
            self.stats.skipped += 1;
            return;
        }

        let device = partial.device.as_ref().filter(|d| !d.is_empty());
        let record = match self.entries.entry(key) {
            Entry::Vacant(slot) => {
                self.stats.created += 1;
                let mut record = CanonicalGameRecord::new(display_title(&partial.title));
                if let Some(device) = device {
                    record.device = device.clone();
                }
                slot.insert(record)
            }
            Entry::Occupied(slot) => {
                self.stats.updated += 1;
                let record = slot.into_mut();
                if let Some(device) = device {
                    record.device.extend(device.iter().cloned());
                }
                record
            }
        };

        record.platforms.insert(tag.to_string());
        record.genres.extend(partial.genres.iter().cloned());
        if partial.played_hint == Some(true) {
            record.played = true;
        }
    }

    /// Enforce the genre sentinel rule and sort by title (byte order).
    pub fn finalize(self) -> MergeOutcome {
        let mut records: Vec<CanonicalGameRecord> = self
            .entries
            .into_values()
            .map(|mut record| {
                record.drop_sentinel_genre();
                record
            })
            .collect();
        // Stable sort: equal titles keep key order.
        records.sort_by(|a, b| a.title.cmp(&b.title));

        MergeOutcome {
            records,
            stats: self.stats,
        }
    }
}

/// Merge a previous snapshot with this run's adapter output.
pub fn merge(prior: Vec<CanonicalGameRecord>, batches: &[SourceBatch]) -> MergeOutcome {
    batches
        .iter()
        .fold(Accumulator::seed(prior), |acc, batch| {
            acc.fold_source(batch.store, &batch.records)
        })
        .finalize()
}

/// Fold a later snapshot row into an earlier one sharing its key.
///
/// Sets are unioned and `played` is ORed. Scalar fields keep the first row's
/// value and only take the later row's where the first has none. `to_play`
/// and `to_play_order` move as a pair.
fn absorb_duplicate(kept: &mut CanonicalGameRecord, other: CanonicalGameRecord) {
    kept.platforms.extend(other.platforms);
    kept.device.extend(other.device);
    kept.genres.extend(other.genres);
    kept.played |= other.played;
    if kept.notes.is_empty() {
        kept.notes = other.notes;
    }
    kept.custom_title = kept.custom_title.take().or(other.custom_title);
    kept.rating = kept.rating.or(other.rating);
    if !kept.to_play && kept.to_play_order.is_none() {
        kept.to_play = other.to_play;
        kept.to_play_order = other.to_play_order;
    }
    kept.description = kept.description.take().or(other.description);
    kept.release_date = kept.release_date.take().or(other.release_date);
}
