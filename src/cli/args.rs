//! Command line argument parsing for the Xiphos CLI using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Xiphos - a small single-node text search engine
#[derive(Parser, Debug, Clone)]
#[command(name = "xiphos")]
#[command(about = "A small single-node inverted-index text search engine")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct XiphosArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit results as JSON
    #[arg(long)]
    pub json: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl XiphosArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Build an index from a documents file
    Index(IndexArgs),

    /// Run a single query against an index
    Search(SearchArgs),

    /// Interactive query loop ('q' to exit)
    Repl(ReplArgs),
}

/// Arguments for building an index
#[derive(Parser, Debug, Clone)]
pub struct IndexArgs {
    /// Documents file: one document per line, optionally "id<TAB>text"
    #[arg(short, long)]
    pub docs: PathBuf,

    /// Where to write the index file
    #[arg(short, long, default_value = "xiphos.idx")]
    pub index_path: PathBuf,

    /// Build a boolean (doc-ids only) index instead of a positional one
    #[arg(long)]
    pub boolean: bool,

    /// Keep stop words instead of filtering them
    #[arg(long)]
    pub keep_stop_words: bool,
}

/// Arguments for a one-shot search
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// The index file to search
    #[arg(short, long, default_value = "xiphos.idx")]
    pub index_path: PathBuf,

    /// Query text; wrap in quotes for a phrase query
    pub query: String,

    /// Evaluate as a boolean AND/OR/NOT query instead of a ranked one
    #[arg(long)]
    pub boolean: bool,

    /// Maximum number of ranked hits to print
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the interactive loop
#[derive(Parser, Debug, Clone)]
pub struct ReplArgs {
    /// The index file to search
    #[arg(short, long, default_value = "xiphos.idx")]
    pub index_path: PathBuf,

    /// Evaluate queries as boolean AND/OR/NOT queries
    #[arg(long)]
    pub boolean: bool,
}
