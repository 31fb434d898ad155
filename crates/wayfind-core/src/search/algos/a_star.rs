use crate::error::Result;
use crate::graph::{Graph, Heuristics};
use crate::search::algos::shared::TraversalState;
use crate::search::node::{Cost, Node};
use crate::search::types::SearchOutcome;

/// A* search ordered by `g + h`.
///
/// Node paths include the node itself. A vertex is closed the first time
/// it is popped: later pops of it are discarded and closed neighbors are
/// never re-enqueued. There is no reopening, so the result is only optimal
/// when the heuristic is admissible and consistent; with a non-monotonic
/// heuristic a cheaper route to a closed vertex is ignored.
#[tracing::instrument(skip(graph, heuristics), fields(start = %start, goal = %goal))]
pub fn a_star(
    graph: &Graph,
    start: &str,
    goal: &str,
    heuristics: &Heuristics,
) -> Result<SearchOutcome> {
    let mut state = TraversalState::new();
    let mut pending = vec![Node::new(
        start,
        vec![start.to_string()],
        Cost::with_estimate(0.0, heuristics.get(start)?),
    )];

    while !pending.is_empty() {
        pending.sort_by(|a, b| a.cost.cmp_estimate(&b.cost));
        let current = pending.remove(0);
        state.observe(&pending);

        if !state.visit(&current.name) {
            continue;
        }

        if current.name == goal {
            return Ok(state.finish_with_path(current));
        }

        tracing::trace!(
            vertex = %current.name,
            g = current.cost.accumulated,
            f = current.cost.estimate,
            pending = pending.len(),
            "expand"
        );
        for edge in graph.neighbors(&current.name)? {
            if state.is_visited(&edge.to) {
                continue;
            }
            let accumulated = current.cost.accumulated + edge.weight;
            let estimate = heuristics.get(&edge.to)? + accumulated;
            pending.push(current.extended(edge.to.clone(), Cost::with_estimate(accumulated, estimate)));
        }
    }

    Ok(state.exhausted())
}
