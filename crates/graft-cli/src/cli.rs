//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// Graft - Import marked content between documents
#[derive(Parser, Debug)]
#[command(name = "graft")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Preview the update and purge results for a file
    ///
    /// Processes the provided file and shows what it would look like after
    /// `update` or `purge`, without touching anything on disk.
    #[command(visible_aliases = ["pre", "p"])]
    Preview {
        /// File to preview
        file: String,

        /// Show only the purged result
        #[arg(short, long)]
        purge: bool,

        /// Show only the updated result
        #[arg(short, long)]
        update: bool,

        /// Show line numbers
        #[arg(long)]
        lines: bool,

        /// Show a unified diff from the current content to the updated result
        #[arg(long)]
        diff: bool,
    },

    /// Replace the file content with all imports resolved
    Update {
        /// File to update in place
        file: String,
    },

    /// Replace the file content with imported content removed
    Purge {
        /// File to purge in place
        file: String,
    },
}
