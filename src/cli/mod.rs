//! CLI argument parsing for wayfind
//!
//! Global flags: --graph, --format, --quiet, --verbose, --log-level, --log-json

pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use output::OutputFormat;

/// Wayfind - step-by-step graph search explorer
#[derive(Parser, Debug)]
#[command(name = "wayfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Problem file (.json, .yaml, .yml, .toml); defaults to the built-in demo
    #[arg(long, global = true, env = "WAYFIND_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, or wayfind_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one search strategy
    Search {
        /// Strategy name or menu index (1-5); falls back to the configured default
        strategy: Option<String>,

        /// Start vertex (overrides the problem file)
        #[arg(long)]
        start: Option<String>,

        /// Goal vertex (overrides the problem file)
        #[arg(long)]
        goal: Option<String>,

        /// Omit the frontier trace from the output
        #[arg(long)]
        no_trace: bool,
    },

    /// List the available strategies
    Strategies,

    /// Run every strategy and summarize the results
    Compare {
        /// Start vertex (overrides the problem file)
        #[arg(long)]
        start: Option<String>,

        /// Goal vertex (overrides the problem file)
        #[arg(long)]
        goal: Option<String>,
    },

    /// Interactive menu: pick strategies by number until 0 is entered
    Menu,

    /// Show or change the global configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration and its file location
    Show,

    /// Persist one setting (default-strategy, show-trace, graph)
    Set {
        /// Setting name
        key: String,

        /// New value
        value: String,
    },

    /// Restore one setting to its default
    Unset {
        /// Setting name
        key: String,
    },
}
