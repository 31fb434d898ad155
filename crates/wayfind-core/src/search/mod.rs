//! Search engine
//!
//! Five strategies share one signature and one result shape:
//! `(graph, start, goal[, heuristics]) -> (path, cost, frontier_trace)`.
//! Each call owns its pending collection, visited set and trace; nothing
//! is shared between calls.
//!
//! None of the strategies has a cancellation or step limit. DFS, BFS and
//! uniform-cost are bounded by the visited set, so a finite graph always
//! terminates; callers must not feed unbounded graphs.

pub mod algos;
pub mod frontier;
pub mod node;
pub mod types;

pub use algos::{a_star, breadth_first, depth_first, hill_climbing, uniform_cost};
pub use frontier::{FrontierTrace, Snapshot};
pub use node::{Cost, Node};
pub use types::{SearchOutcome, Strategy};

use std::time::Instant;

use crate::error::{Result, WayfindError};
use crate::graph::{Graph, Heuristics};

/// Run `strategy` from `start` to `goal`.
///
/// `heuristics` is ignored by the uninformed strategies and required by
/// A* and hill-climbing.
pub fn search(
    strategy: Strategy,
    graph: &Graph,
    start: &str,
    goal: &str,
    heuristics: Option<&Heuristics>,
) -> Result<SearchOutcome> {
    let started = Instant::now();

    let outcome = match strategy {
        Strategy::DepthFirst => depth_first(graph, start, goal),
        Strategy::BreadthFirst => breadth_first(graph, start, goal),
        Strategy::UniformCost => uniform_cost(graph, start, goal),
        Strategy::AStar => a_star(graph, start, goal, require_heuristics(strategy, heuristics)?),
        Strategy::HillClimbing => {
            hill_climbing(graph, start, goal, require_heuristics(strategy, heuristics)?)
        }
    }?;

    crate::trace_time!(
        started,
        "search",
        strategy = strategy.short_name(),
        found = outcome.is_found()
    );
    Ok(outcome)
}

fn require_heuristics(strategy: Strategy, heuristics: Option<&Heuristics>) -> Result<&Heuristics> {
    heuristics.ok_or_else(|| WayfindError::MissingHeuristics {
        strategy: strategy.display_name().to_string(),
    })
}

#[cfg(test)]
mod tests;
