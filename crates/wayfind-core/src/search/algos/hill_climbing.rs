use crate::error::Result;
use crate::graph::{Graph, Heuristics};
use crate::search::algos::shared::TraversalState;
use crate::search::node::{Cost, Node};
use crate::search::types::SearchOutcome;

/// Hill-climbing restricted to strictly improving neighbors.
///
/// Cost is `(h(self), accumulated)`. Before each pop the pending list is
/// sorted ascending by that pair and the LAST element is removed, which
/// picks the pending node with the worst heuristic. A neighbor is admitted
/// only when its heuristic is strictly below the current node's, so the
/// search can stop with no path even when one exists.
#[tracing::instrument(skip(graph, heuristics), fields(start = %start, goal = %goal))]
pub fn hill_climbing(
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

    loop {
        pending.sort_by(|a, b| a.cost.cmp_estimate_then_accumulated(&b.cost));
        let Some(current) = pending.pop() else {
            break;
        };
        state.observe(&pending);

        if current.name == goal {
            return Ok(state.finish_with_path(current));
        }

        if !state.visit(&current.name) {
            continue;
        }

        let mut admitted = 0usize;
        for edge in graph.neighbors(&current.name)? {
            if state.is_visited(&edge.to) {
                continue;
            }
            let estimate = heuristics.get(&edge.to)?;
            if estimate < current.cost.estimate {
                let accumulated = current.cost.accumulated + edge.weight;
                pending.push(current.extended(edge.to.clone(), Cost::with_estimate(accumulated, estimate)));
                admitted += 1;
            }
        }

        if admitted == 0 {
            tracing::trace!(vertex = %current.name, h = current.cost.estimate, "no_improving_neighbor");
        } else {
            tracing::trace!(vertex = %current.name, h = current.cost.estimate, admitted, "expand");
        }
    }

    Ok(state.exhausted())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descends_to_goal() {
        let graph = Graph::from_adjacency([
            ("S", vec![("A", 2.0)]),
            ("A", vec![("R", 3.0)]),
            ("R", vec![]),
        ]);
        let h: Heuristics = [("S", 10.0), ("A", 5.0), ("R", 0.0)].into_iter().collect();

        let outcome = hill_climbing(&graph, "S", "R", &h).unwrap();

        assert_eq!(outcome.path, vec!["S", "A", "R"]);
        assert_eq!(outcome.cost, 5.0);
    }

    #[test]
    fn test_plateau_is_a_dead_end() {
        // A path exists, but A does not improve on S
        let graph = Graph::from_adjacency([
            ("S", vec![("A", 1.0)]),
            ("A", vec![("R", 1.0)]),
            ("R", vec![]),
        ]);
        let h: Heuristics = [("S", 5.0), ("A", 5.0), ("R", 0.0)].into_iter().collect();

        let outcome = hill_climbing(&graph, "S", "R", &h).unwrap();

        assert!(outcome.path.is_empty());
        assert_eq!(outcome.cost, 0.0);
        assert_eq!(outcome.frontier_trace.len(), 1);
    }

    #[test]
    fn test_pops_worst_heuristic_first() {
        // Both B and C improve on S; the larger heuristic (B) is popped first
        let graph = Graph::from_adjacency([
            ("S", vec![("B", 1.0), ("C", 1.0)]),
            ("B", vec![("R", 1.0)]),
            ("C", vec![("R", 1.0)]),
            ("R", vec![]),
        ]);
        let h: Heuristics = [("S", 10.0), ("B", 8.0), ("C", 2.0), ("R", 0.0)]
            .into_iter()
            .collect();

        let outcome = hill_climbing(&graph, "S", "R", &h).unwrap();

        // B is expanded first, leaving C pending; C is expanded next; the
        // two copies of R tie on (0, 2) and the later one (via C) is popped
        let snapshots = outcome.frontier_trace.snapshots();
        assert_eq!(snapshots.len(), 3);
        assert_eq!(
            snapshots[1].paths(),
            &[vec!["S".to_string(), "C".to_string()]]
        );
        assert_eq!(
            snapshots[2].paths(),
            &[vec!["S".to_string(), "B".to_string(), "R".to_string()]]
        );
        assert_eq!(outcome.path, vec!["S", "C", "R"]);
        assert_eq!(outcome.cost, 2.0);
    }
}
