//! JSON output formatting for the search command

use std::io::Write;

use wayfind_core::error::Result;

use crate::commands::search::SearchReport;

/// Build the JSON object for one search call
pub fn report_json(report: &SearchReport) -> serde_json::Value {
    let outcome = report.outcome;

    let mut output = serde_json::json!({
        "strategy": report.strategy.short_name(),
        "strategy_name": report.strategy.display_name(),
        "start": report.start,
        "goal": report.goal,
        "found": outcome.is_found(),
        "path": outcome.path,
        "cost": outcome.cost,
        "hops": outcome.hop_count(),
        "expansions": outcome.expansions,
    });

    if report.show_trace {
        output["frontier_trace"] = serde_json::json!(outcome.frontier_trace);
    }

    if report.narrative.is_some() || report.labels.is_some() {
        let mut journey = serde_json::Map::new();
        if let Some(narrative) = &report.narrative {
            journey.insert("narrative".to_string(), serde_json::json!(narrative));
        }
        if let Some(labels) = &report.labels {
            journey.insert("labels".to_string(), serde_json::json!(labels));
        }
        output["journey"] = serde_json::Value::Object(journey);
    }

    output
}

/// Output in JSON format
pub fn output_json(out: &mut impl Write, report: &SearchReport) -> Result<()> {
    writeln!(
        out,
        "{}",
        serde_json::to_string_pretty(&report_json(report))?
    )?;
    Ok(())
}
