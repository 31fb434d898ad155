//! `wayfind config` command - show or change the global configuration

use std::io::{self, Write};

use wayfind_core::config::GlobalConfig;
use wayfind_core::error::Result;

use crate::cli::{Cli, ConfigCommands, OutputFormat};

/// Execute a config subcommand against the already-loaded configuration
pub fn execute(cli: &Cli, loaded: &GlobalConfig, command: &ConfigCommands) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        ConfigCommands::Show => {
            let path = GlobalConfig::config_path()?;
            write_config(&mut out, cli.format, loaded, &path.display().to_string())?;
        }
        ConfigCommands::Set { key, value } => {
            let mut config = loaded.clone();
            config.set(key, value)?;
            config.save()?;
            tracing::debug!(key = %key, value = %value, "config_set");
            if !cli.quiet {
                writeln!(out, "Set {} = {}", key, value)?;
            }
        }
        ConfigCommands::Unset { key } => {
            let mut config = loaded.clone();
            config.unset(key)?;
            config.save()?;
            tracing::debug!(key = %key, "config_unset");
            if !cli.quiet {
                writeln!(out, "Unset {}", key)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn write_config(
    out: &mut impl Write,
    format: OutputFormat,
    config: &GlobalConfig,
    path: &str,
) -> Result<()> {
    let strategy = config.default_strategy.as_deref().unwrap_or("ucs");
    let graph = config
        .graph
        .as_ref()
        .map(|p| p.display().to_string());

    match format {
        OutputFormat::Human => {
            writeln!(out, "Config file: {}", path)?;
            writeln!(out, "default-strategy = {}", strategy)?;
            writeln!(out, "show-trace = {}", config.show_trace)?;
            writeln!(out, "graph = {}", graph.as_deref().unwrap_or("(built-in demo)"))?;
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "path": path,
                "default_strategy": strategy,
                "show_trace": config.show_trace,
                "graph": graph,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Records => {
            writeln!(out, "H wayfind=1 records=config path={}", path)?;
            writeln!(out, "K default-strategy {}", strategy)?;
            writeln!(out, "K show-trace {}", config.show_trace)?;
            writeln!(out, "K graph {}", graph.as_deref().unwrap_or("-"))?;
        }
    }
    Ok(())
}
