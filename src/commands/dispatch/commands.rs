//! Command implementations for all wayfind commands

use wayfind_core::bail_usage;
use wayfind_core::error::Result;
use wayfind_core::problem::Problem;
use wayfind_core::search::Strategy;

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{compare, config, menu, search, strategies};

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Search {
                strategy,
                start,
                goal,
                no_trace,
            } => execute_search(
                ctx,
                strategy.as_deref(),
                start.as_deref(),
                goal.as_deref(),
                *no_trace,
            ),
            Commands::Strategies => strategies::execute(ctx.cli),
            Commands::Compare { start, goal } => {
                execute_compare(ctx, start.as_deref(), goal.as_deref())
            }
            Commands::Menu => execute_menu(ctx),
            Commands::Config(subcmd) => config::execute(ctx.cli, &ctx.config, subcmd),
        }
    }
}

/// The requested strategy, else the configured default, else uniform-cost
fn resolve_strategy(ctx: &CommandContext, requested: Option<&str>) -> Result<Strategy> {
    match requested {
        Some(name) => name.parse(),
        None => Ok(ctx
            .config
            .default_strategy()?
            .unwrap_or(Strategy::UniformCost)),
    }
}

fn resolve_endpoints(
    problem: &Problem,
    start: Option<&str>,
    goal: Option<&str>,
) -> Result<(String, String)> {
    for (flag, value) in [("--start", start), ("--goal", goal)] {
        if value.is_some_and(|v| v.trim().is_empty()) {
            bail_usage!(format!("{} must not be empty", flag));
        }
    }
    Ok((problem.resolve_start(start)?, problem.resolve_goal(goal)?))
}

fn execute_search(
    ctx: &CommandContext,
    strategy: Option<&str>,
    start: Option<&str>,
    goal: Option<&str>,
    no_trace: bool,
) -> Result<()> {
    let strategy = resolve_strategy(ctx, strategy)?;
    let problem = ctx.load_problem()?;
    let (start, goal) = resolve_endpoints(&problem, start, goal)?;
    let show_trace = ctx.config.show_trace && !no_trace;

    tracing::debug!(
        elapsed = ?ctx.start.elapsed(),
        strategy = strategy.short_name(),
        start = %start,
        goal = %goal,
        "search_ready"
    );

    search::execute(ctx.cli, &problem, strategy, &start, &goal, show_trace)
}

fn execute_compare(ctx: &CommandContext, start: Option<&str>, goal: Option<&str>) -> Result<()> {
    let problem = ctx.load_problem()?;
    let (start, goal) = resolve_endpoints(&problem, start, goal)?;
    compare::execute(ctx.cli, &problem, &start, &goal)
}

fn execute_menu(ctx: &CommandContext) -> Result<()> {
    let problem = ctx.load_problem()?;
    let (start, goal) = resolve_endpoints(&problem, None, None)?;
    menu::execute(&menu::MenuSession {
        problem: &problem,
        start: &start,
        goal: &goal,
        show_trace: ctx.config.show_trace,
    })
}
