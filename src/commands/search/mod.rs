//! `wayfind search` command - run one strategy and report the result
//!
//! - Path, cost and hop count
//! - Station labels and the journey narrative when the problem carries them
//! - One frontier snapshot per expansion step (unless `--no-trace`)

pub mod format;

use std::io::{self, Write};

use wayfind_core::error::Result;
use wayfind_core::problem::Problem;
use wayfind_core::search::{self, SearchOutcome, Strategy};

use crate::cli::{Cli, OutputFormat};

use self::format::{output_human, output_json, output_records};

/// Everything a renderer needs to present one search call
#[derive(Debug)]
pub struct SearchReport<'a> {
    pub strategy: Strategy,
    pub start: &'a str,
    pub goal: &'a str,
    pub outcome: &'a SearchOutcome,
    pub narrative: Option<String>,
    pub labels: Option<Vec<&'a str>>,
    pub show_trace: bool,
}

impl<'a> SearchReport<'a> {
    /// Attach the problem's narration to `outcome`.
    ///
    /// Narration is only looked up for a found path; a vertex missing from
    /// a non-empty descriptions or labels table is an error.
    pub fn build(
        problem: &'a Problem,
        strategy: Strategy,
        start: &'a str,
        goal: &'a str,
        outcome: &'a SearchOutcome,
        show_trace: bool,
    ) -> Result<Self> {
        let journey = &problem.journey;

        let narrative = if outcome.is_found() && !journey.descriptions.is_empty() {
            Some(journey.describe(&outcome.path)?)
        } else {
            None
        };

        let labels = if outcome.is_found() && !journey.labels.is_empty() {
            Some(journey.labels_for(&outcome.path)?)
        } else {
            None
        };

        Ok(Self {
            strategy,
            start,
            goal,
            outcome,
            narrative,
            labels,
            show_trace,
        })
    }
}

/// Execute the search command
pub fn execute(
    cli: &Cli,
    problem: &Problem,
    strategy: Strategy,
    start: &str,
    goal: &str,
    show_trace: bool,
) -> Result<()> {
    let outcome = search::search(
        strategy,
        &problem.graph,
        start,
        goal,
        problem.heuristics.as_ref(),
    )?;

    let report = SearchReport::build(problem, strategy, start, goal, &outcome, show_trace)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, cli.format, &report, cli.quiet)?;
    out.flush()?;
    Ok(())
}

pub fn write_report(
    out: &mut impl Write,
    format: OutputFormat,
    report: &SearchReport,
    quiet: bool,
) -> Result<()> {
    match format {
        OutputFormat::Human => output_human(out, report, quiet)?,
        OutputFormat::Json => output_json(out, report)?,
        OutputFormat::Records => output_records(out, report)?,
    }
    Ok(())
}
