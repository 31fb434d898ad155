use crate::error::Result;
use crate::graph::Graph;
use crate::search::algos::shared::TraversalState;
use crate::search::node::{Cost, Node};
use crate::search::types::SearchOutcome;

/// Depth-first search over a LIFO stack.
///
/// Visited filtering happens on pop, so the same vertex can sit on the
/// stack more than once. The last-declared edge of a vertex is explored
/// first.
#[tracing::instrument(skip(graph), fields(start = %start, goal = %goal))]
pub fn depth_first(graph: &Graph, start: &str, goal: &str) -> Result<SearchOutcome> {
    let mut state = TraversalState::new();
    let mut stack = vec![Node::new(start, Vec::new(), Cost::scalar(0.0))];

    while let Some(current) = stack.pop() {
        let snapshot = state.observe(&stack);

        if current.name == goal {
            return Ok(state.finish_with_trail(snapshot, &current));
        }

        if state.visit(&current.name) {
            tracing::trace!(vertex = %current.name, pending = stack.len(), "expand");
            for edge in graph.neighbors(&current.name)? {
                let cost = Cost::scalar(current.cost.accumulated + edge.weight);
                stack.push(current.successor(edge.to.clone(), cost));
            }
        }
    }

    Ok(state.exhausted())
}
