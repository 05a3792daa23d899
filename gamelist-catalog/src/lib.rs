//! Game library data model, title normalization, DLC classification, and
//! snapshot I/O.
//!
//! This crate defines the canonical merged record shape without any knowledge
//! of storefront export formats. `gamelist-import` maps the per-store exports
//! onto these types and folds them together.

pub mod dlc;
pub mod snapshot;
pub mod title;
pub mod types;

pub use dlc::{Classification, DlcRule, RULESET_VERSION, Verdict, classify, is_dlc};
pub use snapshot::{
    SnapshotError, load_snapshot, parse_snapshot, render_js_mirror, render_snapshot,
    write_snapshot,
};
pub use title::{display_title, normalize_title};
pub use types::*;
