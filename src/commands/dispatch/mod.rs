//! Command dispatch logic for wayfind

use std::time::Instant;

use tracing::debug;
use wayfind_core::config::GlobalConfig;
use wayfind_core::error::Result;

use crate::cli::Cli;

mod command;
mod commands;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = GlobalConfig::load()?;

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
