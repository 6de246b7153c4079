//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cursor-paginated list client
#[derive(Parser, Debug)]
#[command(name = "solidafy-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL, overrides the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// API key, overrides the config file and environment
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Fetch one page, or the whole collection with --all
    List {
        /// Endpoint path, relative to the base URL
        path: String,

        /// Walk every page; --limit is ignored
        #[arg(long)]
        all: bool,

        /// Page size for a single page; ignored with --all
        #[arg(long)]
        limit: Option<u32>,

        /// Start after this cursor
        #[arg(long)]
        after: Option<String>,

        /// Start before this cursor
        #[arg(long)]
        before: Option<String>,
    },

    /// Load `{name, value}` options from an endpoint
    Options {
        /// Endpoint path, relative to the base URL
        path: String,
    },

    /// Validate configuration
    Validate,
}
