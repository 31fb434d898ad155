use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::frontier::FrontierTrace;
use crate::error::WayfindError;
use crate::graph::{VertexId, Weight};

/// The five interchangeable search strategies, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    AStar,
    HillClimbing,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::UniformCost,
        Strategy::AStar,
        Strategy::HillClimbing,
    ];

    /// One-based position in the menu
    pub fn index(&self) -> usize {
        match self {
            Strategy::DepthFirst => 1,
            Strategy::BreadthFirst => 2,
            Strategy::UniformCost => 3,
            Strategy::AStar => 4,
            Strategy::HillClimbing => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Strategy> {
        index
            .checked_sub(1)
            .and_then(|i| Strategy::ALL.get(i))
            .copied()
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
            Strategy::UniformCost => "ucs",
            Strategy::AStar => "astar",
            Strategy::HillClimbing => "hill",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Strategy::DepthFirst => "Depth-First Search (DFS)",
            Strategy::BreadthFirst => "Breadth-First Search (BFS)",
            Strategy::UniformCost => "Uniform Cost Search",
            Strategy::AStar => "A* Search",
            Strategy::HillClimbing => "Hill Climbing",
        }
    }

    /// A* and hill-climbing read the heuristic table
    pub fn requires_heuristics(&self) -> bool {
        matches!(self, Strategy::AStar | Strategy::HillClimbing)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Strategy {
    type Err = WayfindError;

    /// Accepts a menu index, a short name or alias, or the display name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<usize>() {
            return Strategy::from_index(index)
                .ok_or_else(|| WayfindError::UnknownStrategy(s.to_string()));
        }

        let lowered = trimmed.to_lowercase();
        let strategy = match lowered.as_str() {
            "dfs" | "depth-first" | "depth_first" => Strategy::DepthFirst,
            "bfs" | "breadth-first" | "breadth_first" => Strategy::BreadthFirst,
            "ucs" | "uniform-cost" | "uniform_cost" | "dijkstra" => Strategy::UniformCost,
            "astar" | "a*" | "a-star" | "a_star" => Strategy::AStar,
            "hill" | "hill-climbing" | "hill_climbing" => Strategy::HillClimbing,
            other => Strategy::ALL
                .into_iter()
                .find(|strategy| strategy.display_name().to_lowercase() == other)
                .ok_or_else(|| WayfindError::UnknownStrategy(s.to_string()))?,
        };
        Ok(strategy)
    }
}

/// Result of one search call.
///
/// An exhausted search is not an error: `path` is empty and `cost` is zero,
/// and `frontier_trace` holds whatever was recorded before exhaustion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub path: Vec<VertexId>,
    pub cost: Weight,
    pub frontier_trace: FrontierTrace,
    /// Vertices whose edges were expanded
    #[serde(default)]
    pub expansions: usize,
}

impl SearchOutcome {
    pub fn found(path: Vec<VertexId>, cost: Weight, frontier_trace: FrontierTrace) -> Self {
        Self {
            path,
            cost,
            frontier_trace,
            expansions: 0,
        }
    }

    pub fn exhausted(frontier_trace: FrontierTrace) -> Self {
        Self {
            path: Vec::new(),
            cost: 0.0,
            frontier_trace,
            expansions: 0,
        }
    }

    pub fn with_expansions(mut self, expansions: usize) -> Self {
        self.expansions = expansions;
        self
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges on the path (zero when no path was found)
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// `(path, cost, frontier_trace)`, in that order
    pub fn into_parts(self) -> (Vec<VertexId>, Weight, FrontierTrace) {
        (self.path, self.cost, self.frontier_trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_by_index() {
        assert_eq!("1".parse::<Strategy>().unwrap(), Strategy::DepthFirst);
        assert_eq!("5".parse::<Strategy>().unwrap(), Strategy::HillClimbing);
        assert!("0".parse::<Strategy>().is_err());
        assert!("6".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_parse_by_name() {
        assert_eq!("UCS".parse::<Strategy>().unwrap(), Strategy::UniformCost);
        assert_eq!("a*".parse::<Strategy>().unwrap(), Strategy::AStar);
        assert_eq!(
            "Hill Climbing".parse::<Strategy>().unwrap(),
            Strategy::HillClimbing
        );
        assert_eq!(
            " breadth-first ".parse::<Strategy>().unwrap(),
            Strategy::BreadthFirst
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "beam".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, WayfindError::UnknownStrategy(ref s) if s == "beam"));
    }

    #[test]
    fn test_index_round_trip_covers_menu() {
        for (i, strategy) in Strategy::ALL.iter().enumerate() {
            assert_eq!(strategy.index(), i + 1);
            assert_eq!(Strategy::from_index(i + 1), Some(*strategy));
        }
    }

    #[test]
    fn test_requires_heuristics() {
        let needing: Vec<_> = Strategy::ALL
            .into_iter()
            .filter(Strategy::requires_heuristics)
            .collect();
        assert_eq!(needing, vec![Strategy::AStar, Strategy::HillClimbing]);
    }

    #[test]
    fn test_exhausted_outcome() {
        let outcome = SearchOutcome::exhausted(FrontierTrace::new());
        assert!(!outcome.is_found());
        assert_eq!(outcome.hop_count(), 0);
        assert_eq!(outcome.cost, 0.0);
    }

    #[test]
    fn test_into_parts_order() {
        let outcome = SearchOutcome::found(
            vec!["S".into(), "R".into()],
            4.0,
            FrontierTrace::new(),
        );
        let (path, cost, trace) = outcome.into_parts();
        assert_eq!(path, vec!["S", "R"]);
        assert_eq!(cost, 4.0);
        assert!(trace.is_empty());
    }
}
