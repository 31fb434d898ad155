//! Command trait and context for dispatching commands

use std::time::Instant;

use wayfind_core::config::GlobalConfig;
use wayfind_core::demo;
use wayfind_core::error::Result;
use wayfind_core::problem::Problem;

use crate::cli::Cli;

/// Load the problem named by `--graph`, else the configured one, else the demo
pub fn load_problem(cli: &Cli, config: &GlobalConfig) -> Result<Problem> {
    match cli.graph.as_ref().or(config.graph.as_ref()) {
        Some(path) => Problem::load(path),
        None => {
            tracing::debug!("using built-in demo problem");
            Ok(demo::problem())
        }
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: GlobalConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: GlobalConfig, start: Instant) -> Self {
        Self { cli, config, start }
    }

    pub fn load_problem(&self) -> Result<Problem> {
        load_problem(self.cli, &self.config)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("wayfind {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Step-by-step graph search explorer.");
        println!();
        println!("Run `wayfind --help` for usage information, or `wayfind menu` to explore.");
        Ok(())
    }
}
