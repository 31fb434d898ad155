use super::*;
use crate::error::{LookupTable, WayfindError};

fn demo_graph() -> Graph {
    Graph::from_adjacency([
        ("A", vec![("B", 2.0), ("R", 30.0)]),
        ("B", vec![("A", 1.0), ("C", 12.0), ("D", 3.0), ("E", 3.0)]),
        ("C", vec![("D", 6.0), ("E", 2.0)]),
        ("D", vec![("E", 5.0), ("R", 21.0)]),
        ("E", vec![("R", 40.0)]),
        ("S", vec![("A", 5.0), ("B", 8.0), ("D", 4.0), ("E", 1.0)]),
        ("R", vec![]),
    ])
}

fn demo_heuristics() -> Heuristics {
    [
        ("A", 40.0),
        ("B", 30.0),
        ("C", 30.0),
        ("D", 35.0),
        ("E", 2.0),
        ("S", 25.0),
        ("R", 0.0),
    ]
    .into_iter()
    .collect()
}

fn scenario_graph() -> Graph {
    Graph::from_adjacency([
        ("S", vec![("A", 5.0), ("B", 8.0)]),
        ("A", vec![("R", 30.0)]),
        ("B", vec![("R", 1.0)]),
        ("R", vec![]),
    ])
}

/// Heuristic equal to the true remaining cost: admissible and consistent
fn exact_heuristics(graph: &Graph, goal: &str) -> Heuristics {
    graph
        .vertices()
        .into_iter()
        .map(|v| {
            let outcome = uniform_cost(graph, v, goal).unwrap();
            (v, outcome.cost)
        })
        .collect()
}

/// Every simple start-to-goal path, by exhaustive enumeration
fn simple_paths(graph: &Graph, start: &str, goal: &str) -> Vec<(Vec<String>, f64)> {
    fn walk(
        graph: &Graph,
        goal: &str,
        trail: &mut Vec<String>,
        cost: f64,
        out: &mut Vec<(Vec<String>, f64)>,
    ) {
        let current = trail.last().cloned().unwrap_or_default();
        if current == goal {
            out.push((trail.clone(), cost));
            return;
        }
        for edge in graph.neighbors(&current).unwrap_or(&[]) {
            if trail.contains(&edge.to) {
                continue;
            }
            trail.push(edge.to.clone());
            walk(graph, goal, trail, cost + edge.weight, out);
            trail.pop();
        }
    }

    let mut out = Vec::new();
    walk(graph, goal, &mut vec![start.to_string()], 0.0, &mut out);
    out
}

fn run_all(graph: &Graph, start: &str, goal: &str, h: &Heuristics) -> Vec<(Strategy, SearchOutcome)> {
    Strategy::ALL
        .into_iter()
        .map(|s| (s, search(s, graph, start, goal, Some(h)).unwrap()))
        .collect()
}

#[test]
fn test_scenario_uniform_cost_takes_cheapest() {
    let outcome = search(Strategy::UniformCost, &scenario_graph(), "S", "R", None).unwrap();
    assert_eq!(outcome.path, vec!["S", "B", "R"]);
    assert_eq!(outcome.cost, 9.0);
}

#[test]
fn test_scenario_breadth_first_takes_first_discovered() {
    let outcome = search(Strategy::BreadthFirst, &scenario_graph(), "S", "R", None).unwrap();
    assert_eq!(outcome.path, vec!["S", "A", "R"]);
    assert_eq!(outcome.cost, 35.0);
    assert_eq!(outcome.hop_count(), 2);
}

#[test]
fn test_expansions_count_expanded_vertices() {
    let graph = scenario_graph();
    for strategy in [Strategy::BreadthFirst, Strategy::UniformCost] {
        let outcome = search(strategy, &graph, "S", "R", None).unwrap();
        assert_eq!(outcome.expansions, 3, "{strategy}");
    }

    // Goal test precedes the visit, so nothing is expanded
    let outcome = search(Strategy::DepthFirst, &graph, "S", "S", None).unwrap();
    assert_eq!(outcome.expansions, 0);
}

#[test]
fn test_no_path_is_empty_with_zero_cost() {
    let graph = Graph::from_adjacency([
        ("S", vec![("A", 1.0)]),
        ("A", vec![("S", 2.0)]),
        ("R", vec![("S", 1.0)]),
    ]);
    let h: Heuristics = [("S", 2.0), ("A", 1.0), ("R", 0.0)].into_iter().collect();

    for (strategy, outcome) in run_all(&graph, "S", "R", &h) {
        assert!(outcome.path.is_empty(), "{strategy} found a path");
        assert_eq!(outcome.cost, 0.0, "{strategy} reported a cost");
        assert!(!outcome.frontier_trace.is_empty(), "{strategy} recorded nothing");
    }
}

#[test]
fn test_start_equals_goal() {
    let graph = demo_graph();
    let h = demo_heuristics();

    for (strategy, outcome) in run_all(&graph, "S", "S", &h) {
        assert_eq!(outcome.path, vec!["S"], "{strategy}");
        assert_eq!(outcome.cost, 0.0, "{strategy}");
    }
}

#[test]
fn test_start_equals_goal_trace_for_trail_strategies() {
    let graph = demo_graph();
    for strategy in [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::UniformCost,
    ] {
        let outcome = search(strategy, &graph, "S", "S", None).unwrap();
        let snapshots = outcome.frontier_trace.snapshots();
        assert_eq!(snapshots.len(), 2, "{strategy}");
        assert!(snapshots[0].is_empty());
        assert_eq!(snapshots[1].paths(), &[vec!["S".to_string()]]);
    }
}

#[test]
fn test_demo_results_per_strategy() {
    let graph = demo_graph();
    let h = demo_heuristics();
    let expected: [(Strategy, &[&str], f64); 5] = [
        (Strategy::DepthFirst, &["S", "E", "R"], 41.0),
        (Strategy::BreadthFirst, &["S", "A", "R"], 35.0),
        (Strategy::UniformCost, &["S", "D", "R"], 25.0),
        (Strategy::AStar, &["S", "D", "R"], 25.0),
        (Strategy::HillClimbing, &["S", "E", "R"], 41.0),
    ];

    for (strategy, path, cost) in expected {
        let outcome = search(strategy, &graph, "S", "R", Some(&h)).unwrap();
        assert_eq!(outcome.path, path, "{strategy}");
        assert_eq!(outcome.cost, cost, "{strategy}");
        assert_eq!(
            crate::graph::path_cost(&graph, &outcome.path).unwrap(),
            cost,
            "{strategy} cost disagrees with its path"
        );
    }
}

#[test]
fn test_uniform_cost_matches_exhaustive_minimum() {
    let graphs = [
        (demo_graph(), "S", "R"),
        (scenario_graph(), "S", "R"),
        (
            Graph::from_adjacency([
                ("S", vec![("A", 1.0), ("B", 4.0), ("C", 10.0)]),
                ("A", vec![("B", 1.0), ("G", 12.0)]),
                ("B", vec![("C", 1.0), ("A", 0.0)]),
                ("C", vec![("G", 2.0)]),
                ("G", vec![]),
            ]),
            "S",
            "G",
        ),
    ];

    for (graph, start, goal) in graphs {
        let best = simple_paths(&graph, start, goal)
            .into_iter()
            .map(|(_, cost)| cost)
            .fold(f64::INFINITY, f64::min);
        let outcome = uniform_cost(&graph, start, goal).unwrap();
        assert_eq!(outcome.cost, best);
        assert_eq!(crate::graph::path_cost(&graph, &outcome.path).unwrap(), best);
    }
}

#[test]
fn test_a_star_with_exact_heuristic_is_optimal() {
    let graph = demo_graph();
    let h = exact_heuristics(&graph, "R");

    let astar = a_star(&graph, "S", "R", &h).unwrap();
    let ucs = uniform_cost(&graph, "S", "R").unwrap();

    assert_eq!(astar.cost, ucs.cost);
}

#[test]
fn test_a_star_with_zero_heuristic_is_optimal() {
    let graph = Graph::from_adjacency([
        ("S", vec![("A", 2.0), ("B", 1.0)]),
        ("A", vec![("G", 1.0)]),
        ("B", vec![("C", 1.0)]),
        ("C", vec![("G", 5.0)]),
        ("G", vec![]),
    ]);
    let h: Heuristics = graph.vertices().into_iter().map(|v| (v, 0.0)).collect();

    let astar = a_star(&graph, "S", "G", &h).unwrap();

    assert_eq!(astar.path, vec!["S", "A", "G"]);
    assert_eq!(astar.cost, uniform_cost(&graph, "S", "G").unwrap().cost);
}

#[test]
fn test_breadth_first_minimizes_hops() {
    let graph = demo_graph();
    let fewest = simple_paths(&graph, "S", "R")
        .into_iter()
        .map(|(path, _)| path.len() - 1)
        .min()
        .unwrap();

    let outcome = breadth_first(&graph, "S", "R").unwrap();

    assert_eq!(outcome.hop_count(), fewest);
}

#[test]
fn test_hill_climbing_dead_end_with_reachable_goal() {
    // Every neighbor of S is no better than S itself
    let graph = Graph::from_adjacency([
        ("S", vec![("A", 1.0), ("B", 1.0)]),
        ("A", vec![("R", 1.0)]),
        ("B", vec![("R", 1.0)]),
        ("R", vec![]),
    ]);
    let h: Heuristics = [("S", 4.0), ("A", 4.0), ("B", 9.0), ("R", 0.0)]
        .into_iter()
        .collect();

    assert!(uniform_cost(&graph, "S", "R").unwrap().is_found());

    let outcome = hill_climbing(&graph, "S", "R", &h).unwrap();
    assert!(outcome.path.is_empty());
    assert_eq!(outcome.cost, 0.0);
}

#[test]
fn test_traces_never_repeat_a_snapshot() {
    let graph = demo_graph();
    let h = demo_heuristics();

    for (strategy, outcome) in run_all(&graph, "S", "R", &h) {
        let snapshots = outcome.frontier_trace.snapshots();
        for (i, a) in snapshots.iter().enumerate() {
            for b in &snapshots[i + 1..] {
                assert_ne!(a, b, "{strategy} repeated a snapshot");
            }
        }
        for snapshot in snapshots {
            let paths = snapshot.paths();
            for (i, p) in paths.iter().enumerate() {
                assert!(!paths[i + 1..].contains(p), "{strategy} repeated a path");
            }
        }
    }
}

#[test]
fn test_missing_heuristics_table() {
    let graph = demo_graph();
    for strategy in [Strategy::AStar, Strategy::HillClimbing] {
        let err = search(strategy, &graph, "S", "R", None).unwrap_err();
        assert!(matches!(err, WayfindError::MissingHeuristics { .. }));
    }
}

#[test]
fn test_uninformed_strategies_ignore_heuristics() {
    let graph = scenario_graph();
    let empty = Heuristics::default();
    let with = search(Strategy::UniformCost, &graph, "S", "R", Some(&empty)).unwrap();
    let without = search(Strategy::UniformCost, &graph, "S", "R", None).unwrap();
    assert_eq!(with, without);
}

#[test]
fn test_missing_neighbor_heuristic_fails() {
    let graph = scenario_graph();
    let h: Heuristics = [("S", 1.0), ("B", 0.5), ("R", 0.0)].into_iter().collect();

    let err = a_star(&graph, "S", "R", &h).unwrap_err();

    assert!(matches!(
        err,
        WayfindError::VertexNotFound { table: LookupTable::Heuristics, ref vertex } if vertex == "A"
    ));
}

#[test]
fn test_calls_do_not_share_state() {
    let graph = demo_graph();
    let first = depth_first(&graph, "S", "R").unwrap();
    let second = depth_first(&graph, "S", "R").unwrap();
    assert_eq!(first, second);
}
