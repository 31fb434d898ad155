//! `wayfind compare` command - run every strategy on one problem
//!
//! A failing strategy (e.g. hill-climbing without heuristics) is reported
//! in its own row; the remaining strategies still run.

use std::io::{self, Write};

use wayfind_core::error::{Result, WayfindError};
use wayfind_core::format::{format_path, format_weight};
use wayfind_core::problem::Problem;
use wayfind_core::search::{search, SearchOutcome, Strategy};

use crate::cli::{Cli, OutputFormat};

/// One strategy's result within a comparison
#[derive(Debug)]
pub struct CompareRow {
    pub strategy: Strategy,
    pub result: Result<SearchOutcome>,
}

/// Run all strategies in menu order
pub fn compare(problem: &Problem, start: &str, goal: &str) -> Vec<CompareRow> {
    Strategy::ALL
        .into_iter()
        .map(|strategy| {
            let result = search(
                strategy,
                &problem.graph,
                start,
                goal,
                problem.heuristics.as_ref(),
            );
            if let Err(e) = &result {
                tracing::warn!(strategy = strategy.short_name(), error = %e, "strategy_failed");
            }
            CompareRow { strategy, result }
        })
        .collect()
}

/// Execute the compare command
pub fn execute(cli: &Cli, problem: &Problem, start: &str, goal: &str) -> Result<()> {
    let rows = compare(problem, start, goal);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        OutputFormat::Human => output_human(&mut out, &rows, cli.quiet)?,
        OutputFormat::Json => output_json(&mut out, &rows, start, goal)?,
        OutputFormat::Records => output_records(&mut out, &rows, start, goal)?,
    }
    out.flush()?;
    Ok(())
}

fn output_human(out: &mut impl Write, rows: &[CompareRow], quiet: bool) -> Result<()> {
    if !quiet {
        writeln!(
            out,
            "{:<3}{:<28}{:>6}{:>6}{:>10}{:>11}  Path",
            "#", "Strategy", "Cost", "Hops", "Expanded", "Snapshots"
        )?;
    }

    for row in rows {
        let prefix = format!("{:<3}{:<28}", row.strategy.index(), row.strategy.display_name());
        match &row.result {
            Ok(outcome) if outcome.is_found() => writeln!(
                out,
                "{}{:>6}{:>6}{:>10}{:>11}  {}",
                prefix,
                format_weight(outcome.cost),
                outcome.hop_count(),
                outcome.expansions,
                outcome.frontier_trace.len(),
                format_path(&outcome.path)
            )?,
            Ok(outcome) => writeln!(
                out,
                "{}{:>6}{:>6}{:>10}{:>11}  (no path)",
                prefix,
                "-",
                "-",
                outcome.expansions,
                outcome.frontier_trace.len()
            )?,
            Err(e) => writeln!(out, "{}error: {}", prefix, e)?,
        }
    }
    Ok(())
}

fn error_json(error: &WayfindError) -> serde_json::Value {
    serde_json::json!({
        "type": error.error_type(),
        "message": error.to_string(),
    })
}

fn output_json(out: &mut impl Write, rows: &[CompareRow], start: &str, goal: &str) -> Result<()> {
    let results: Vec<_> = rows
        .iter()
        .map(|row| {
            let mut obj = serde_json::json!({
                "index": row.strategy.index(),
                "strategy": row.strategy.short_name(),
            });
            match &row.result {
                Ok(outcome) => {
                    obj["found"] = serde_json::json!(outcome.is_found());
                    obj["path"] = serde_json::json!(outcome.path);
                    obj["cost"] = serde_json::json!(outcome.cost);
                    obj["hops"] = serde_json::json!(outcome.hop_count());
                    obj["expansions"] = serde_json::json!(outcome.expansions);
                    obj["snapshots"] = serde_json::json!(outcome.frontier_trace.len());
                }
                Err(e) => obj["error"] = error_json(e),
            }
            obj
        })
        .collect();

    let output = serde_json::json!({
        "start": start,
        "goal": goal,
        "results": results,
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

fn output_records(
    out: &mut impl Write,
    rows: &[CompareRow],
    start: &str,
    goal: &str,
) -> Result<()> {
    writeln!(
        out,
        "H wayfind=1 records=compare start={} goal={} count={}",
        start,
        goal,
        rows.len()
    )?;
    for row in rows {
        match &row.result {
            Ok(outcome) => writeln!(
                out,
                "R {} {} found={} cost={} hops={} expanded={} path={}",
                row.strategy.index(),
                row.strategy.short_name(),
                outcome.is_found(),
                format_weight(outcome.cost),
                outcome.hop_count(),
                outcome.expansions,
                outcome.path.join(",")
            )?,
            Err(e) => writeln!(
                out,
                "E {} {} {}",
                row.strategy.index(),
                row.strategy.short_name(),
                e.error_type()
            )?,
        }
    }
    Ok(())
}
