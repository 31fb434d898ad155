use crate::error::Result;
use crate::graph::Graph;
use crate::search::algos::shared::TraversalState;
use crate::search::node::{Cost, Node};
use crate::search::types::SearchOutcome;

/// Uniform-cost search.
///
/// The pending list is stably re-sorted by accumulated cost before every
/// pop, so equal costs leave in insertion order and each snapshot lists
/// pending paths cheapest first. The goal test runs before the visited
/// check.
#[tracing::instrument(skip(graph), fields(start = %start, goal = %goal))]
pub fn uniform_cost(graph: &Graph, start: &str, goal: &str) -> Result<SearchOutcome> {
    let mut state = TraversalState::new();
    let mut pending = vec![Node::new(start, Vec::new(), Cost::scalar(0.0))];

    while !pending.is_empty() {
        pending.sort_by(|a, b| a.cost.cmp_accumulated(&b.cost));
        let current = pending.remove(0);
        let snapshot = state.observe(&pending);

        if current.name == goal {
            return Ok(state.finish_with_trail(snapshot, &current));
        }

        if state.visit(&current.name) {
            tracing::trace!(
                vertex = %current.name,
                cost = current.cost.accumulated,
                pending = pending.len(),
                "expand"
            );
            for edge in graph.neighbors(&current.name)? {
                let cost = Cost::scalar(current.cost.accumulated + edge.weight);
                pending.push(current.successor(edge.to.clone(), cost));
            }
        }
    }

    Ok(state.exhausted())
}
