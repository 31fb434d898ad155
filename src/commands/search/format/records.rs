//! Records output formatting for the search command
//!
//! ```text
//! H wayfind=1 strategy=ucs start=S goal=R found=true
//! P S D R
//! C 25
//! F 1 -
//! F 2 S,A|S,B
//! ```

use std::io::Write;

use wayfind_core::error::Result;
use wayfind_core::format::format_weight;
use wayfind_core::search::Snapshot;

use crate::commands::search::SearchReport;

/// Output in records format
pub fn output_records(out: &mut impl Write, report: &SearchReport) -> Result<()> {
    let outcome = report.outcome;

    writeln!(
        out,
        "H wayfind=1 strategy={} start={} goal={} found={}",
        report.strategy.short_name(),
        report.start,
        report.goal,
        outcome.is_found()
    )?;

    if outcome.is_found() {
        writeln!(out, "P {}", outcome.path.join(" "))?;
        writeln!(out, "C {}", format_weight(outcome.cost))?;
    }

    if report.show_trace {
        for (i, snapshot) in outcome.frontier_trace.snapshots().iter().enumerate() {
            writeln!(out, "F {} {}", i + 1, snapshot_record(snapshot))?;
        }
    }

    Ok(())
}

/// `S,A|S,B`, or `-` for an empty snapshot
fn snapshot_record(snapshot: &Snapshot) -> String {
    if snapshot.is_empty() {
        return "-".to_string();
    }
    snapshot
        .paths()
        .iter()
        .map(|path| path.join(","))
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::search::format::fixtures::demo_outcome;
    use wayfind_core::search::Strategy;

    #[test]
    fn test_snapshot_record() {
        let snapshot = Snapshot::from(vec![
            vec!["S".to_string(), "A".to_string()],
            vec!["S".to_string(), "B".to_string()],
        ]);
        assert_eq!(snapshot_record(&snapshot), "S,A|S,B");
        assert_eq!(snapshot_record(&Snapshot::default()), "-");
    }

    #[test]
    fn test_records_lines() {
        let (problem, outcome) = demo_outcome(Strategy::AStar);
        let report =
            SearchReport::build(&problem, Strategy::AStar, "S", "R", &outcome, true).unwrap();
        let mut buf = Vec::new();
        output_records(&mut buf, &report).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "H wayfind=1 strategy=astar start=S goal=R found=true"
        );
        assert_eq!(lines[1], "P S D R");
        assert_eq!(lines[2], "C 25");
        assert!(lines[3..].iter().all(|l| l.starts_with("F ")));
        assert_eq!(lines.len() - 3, outcome.frontier_trace.len());
    }
}
