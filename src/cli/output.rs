use clap::ValueEnum;

/// Output format for wayfind commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Readable, concise output for terminal use
    #[default]
    Human,
    /// Stable, machine-readable JSON
    Json,
    /// Line-oriented records, one fact per line
    Records,
}
