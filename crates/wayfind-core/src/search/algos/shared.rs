use std::collections::HashSet;

use crate::graph::VertexId;
use crate::search::frontier::{FrontierTrace, Snapshot};
use crate::search::node::Node;
use crate::search::types::SearchOutcome;

/// State owned by a single search call
#[derive(Debug, Default)]
pub struct TraversalState {
    visited: HashSet<VertexId>,
    trace: FrontierTrace,
    expansions: usize,
}

impl TraversalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the still-pending nodes and record it in the trace
    pub fn observe<'a, I>(&mut self, pending: I) -> Snapshot
    where
        I: IntoIterator<Item = &'a Node>,
    {
        let snapshot = Snapshot::of(pending);
        self.trace.record(snapshot.clone());
        snapshot
    }

    /// Mark `name` visited. Returns false if it already was.
    pub fn visit(&mut self, name: &str) -> bool {
        if self.visited.contains(name) {
            return false;
        }
        self.visited.insert(name.to_string());
        self.expansions += 1;
        true
    }

    pub fn is_visited(&self, name: &str) -> bool {
        self.visited.contains(name)
    }

    /// Goal reached by a strategy whose node paths hold ancestors only.
    /// The terminal snapshot is the last one plus the completed path.
    pub fn finish_with_trail(mut self, snapshot: Snapshot, goal: &Node) -> SearchOutcome {
        let trail = goal.trail();
        self.trace.record(snapshot.with_completed(trail.clone()));
        tracing::debug!(
            expansions = self.expansions,
            snapshots = self.trace.len(),
            cost = goal.cost.accumulated,
            "goal_reached"
        );
        SearchOutcome::found(trail, goal.cost.accumulated, self.trace)
            .with_expansions(self.expansions)
    }

    /// Goal reached by a strategy whose node paths already end at the node
    pub fn finish_with_path(self, goal: Node) -> SearchOutcome {
        tracing::debug!(
            expansions = self.expansions,
            snapshots = self.trace.len(),
            cost = goal.cost.accumulated,
            "goal_reached"
        );
        SearchOutcome::found(goal.path, goal.cost.accumulated, self.trace)
            .with_expansions(self.expansions)
    }

    /// Pending collection ran dry without reaching the goal
    pub fn exhausted(self) -> SearchOutcome {
        tracing::debug!(
            expansions = self.expansions,
            snapshots = self.trace.len(),
            "frontier_exhausted"
        );
        SearchOutcome::exhausted(self.trace).with_expansions(self.expansions)
    }
}
