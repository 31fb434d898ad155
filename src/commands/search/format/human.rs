//! Human-readable output formatting for the search command

use std::io::Write;

use wayfind_core::error::Result;
use wayfind_core::format::{format_path, format_snapshot, format_weight};

use crate::commands::search::SearchReport;

/// Output in human-readable format
pub fn output_human(out: &mut impl Write, report: &SearchReport, quiet: bool) -> Result<()> {
    let outcome = report.outcome;

    writeln!(out, "Strategy: {}", report.strategy)?;

    if outcome.is_found() {
        writeln!(out, "Path: {}", format_path(&outcome.path))?;
        writeln!(out, "Cost: {}", format_weight(outcome.cost))?;
        writeln!(out, "Hops: {}", outcome.hop_count())?;
        if let Some(labels) = &report.labels {
            writeln!(out, "Stations: {}", format_path(labels))?;
        }
    } else {
        writeln!(out, "No path found from {} to {}", report.start, report.goal)?;
    }

    if quiet {
        return Ok(());
    }

    if let Some(narrative) = &report.narrative {
        writeln!(out)?;
        writeln!(out, "Journey:")?;
        writeln!(out, "{}", narrative)?;
    }

    if report.show_trace {
        writeln!(out)?;
        writeln!(out, "Frontier:")?;
        for (i, snapshot) in outcome.frontier_trace.snapshots().iter().enumerate() {
            writeln!(out, "  {}: {}", i + 1, format_snapshot(snapshot))?;
        }
    }

    Ok(())
}
