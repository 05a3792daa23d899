//! CLI type definitions: command enum and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use gamelist_catalog::Storefront;

#[derive(Parser)]
#[command(name = "gamelist")]
#[command(about = "Merge storefront game library exports into one list", long_about = None)]
pub(crate) struct Cli {
    /// Library directory holding .env, sources/ and the snapshot (defaults to current directory)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Snapshot selection shared by the read-only report commands.
#[derive(Args, Clone)]
pub(crate) struct SnapshotArgs {
    /// Snapshot to read (default: <root>/merged_games.json)
    #[arg(short, long)]
    pub snapshot: Option<PathBuf>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Read every storefront export and merge into the snapshot
    Merge {
        /// Directory holding the storefront exports (default: <root>/sources)
        #[arg(long)]
        sources: Option<PathBuf>,

        /// Snapshot to write; the browser mirror is written next to it with a .js extension
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Storefronts to leave out of this run (e.g., ea,steam)
        #[arg(long, value_delimiter = ',')]
        skip: Option<Vec<Storefront>>,

        /// Merge and report without writing anything
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// List titles the DLC rules flag, and where they disagree with the snapshot
    Dlc {
        #[command(flatten)]
        snapshot: SnapshotArgs,
    },

    /// List games still missing genres
    Unknowns {
        #[command(flatten)]
        snapshot: SnapshotArgs,
    },

    /// Show library statistics
    Stats {
        #[command(flatten)]
        snapshot: SnapshotArgs,
    },

    /// Show where each storefront export is expected and whether it exists
    Sources,
}
