use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::Graph;
use crate::search::algos::shared::TraversalState;
use crate::search::node::{Cost, Node};
use crate::search::types::SearchOutcome;

/// Breadth-first search over a FIFO queue.
///
/// Expansion order ignores edge weights: the result has the fewest hops,
/// not the lowest cost. Among equal-hop paths the first discovered wins.
#[tracing::instrument(skip(graph), fields(start = %start, goal = %goal))]
pub fn breadth_first(graph: &Graph, start: &str, goal: &str) -> Result<SearchOutcome> {
    let mut state = TraversalState::new();
    let mut queue = VecDeque::from([Node::new(start, Vec::new(), Cost::scalar(0.0))]);

    while let Some(current) = queue.pop_front() {
        let snapshot = state.observe(&queue);

        if current.name == goal {
            return Ok(state.finish_with_trail(snapshot, &current));
        }

        if state.visit(&current.name) {
            tracing::trace!(vertex = %current.name, pending = queue.len(), "expand");
            for edge in graph.neighbors(&current.name)? {
                let cost = Cost::scalar(current.cost.accumulated + edge.weight);
                queue.push_back(current.successor(edge.to.clone(), cost));
            }
        }
    }

    Ok(state.exhausted())
}
