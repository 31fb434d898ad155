//! `wayfind strategies` command - list the available strategies in menu order

use std::io::{self, Write};

use wayfind_core::error::Result;
use wayfind_core::search::Strategy;

use crate::cli::{Cli, OutputFormat};

/// Execute the strategies command
pub fn execute(cli: &Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_strategies(&mut out, cli.format)?;
    out.flush()?;
    Ok(())
}

pub fn write_strategies(out: &mut impl Write, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            for strategy in Strategy::ALL {
                let needs = if strategy.requires_heuristics() {
                    " (needs heuristics)"
                } else {
                    ""
                };
                writeln!(
                    out,
                    "{}. {} [{}]{}",
                    strategy.index(),
                    strategy.display_name(),
                    strategy.short_name(),
                    needs
                )?;
            }
        }
        OutputFormat::Json => {
            let output: Vec<_> = Strategy::ALL
                .iter()
                .map(|strategy| {
                    serde_json::json!({
                        "index": strategy.index(),
                        "name": strategy.short_name(),
                        "display_name": strategy.display_name(),
                        "requires_heuristics": strategy.requires_heuristics(),
                    })
                })
                .collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Records => {
            writeln!(out, "H wayfind=1 records=strategies count={}", Strategy::ALL.len())?;
            for strategy in Strategy::ALL {
                writeln!(
                    out,
                    "S {} {} heuristics={} \"{}\"",
                    strategy.index(),
                    strategy.short_name(),
                    strategy.requires_heuristics(),
                    strategy.display_name()
                )?;
            }
        }
    }
    Ok(())
}
