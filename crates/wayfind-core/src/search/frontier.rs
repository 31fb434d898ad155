//! Frontier snapshots recorded once per expansion step.
//!
//! A snapshot lists the paths of every pending node, in pending-collection
//! order, with repeated paths dropped. The trace keeps a snapshot only when
//! no equal snapshot was recorded earlier in the same search.

use serde::{Deserialize, Serialize};

use super::node::Node;
use crate::graph::VertexId;

/// Deduplicated, order-preserving view of all pending paths at one instant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot(Vec<Vec<VertexId>>);

impl Snapshot {
    /// Snapshot of `pending`, visited in collection order
    pub fn of<'a, I>(pending: I) -> Self
    where
        I: IntoIterator<Item = &'a Node>,
    {
        let mut paths: Vec<Vec<VertexId>> = Vec::new();
        for node in pending {
            if !paths.contains(&node.path) {
                paths.push(node.path.clone());
            }
        }
        Snapshot(paths)
    }

    /// This snapshot followed by a completed start-to-goal path
    pub fn with_completed(&self, path: Vec<VertexId>) -> Self {
        let mut paths = self.0.clone();
        paths.push(path);
        Snapshot(paths)
    }

    pub fn paths(&self) -> &[Vec<VertexId>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Vec<VertexId>>> for Snapshot {
    fn from(paths: Vec<Vec<VertexId>>) -> Self {
        Snapshot(paths)
    }
}

/// Ordered sequence of distinct snapshots for one search call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrontierTrace(Vec<Snapshot>);

impl FrontierTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `snapshot` unless an equal one is already anywhere in the trace.
    /// Returns whether it was appended.
    pub fn record(&mut self, snapshot: Snapshot) -> bool {
        if self.0.contains(&snapshot) {
            return false;
        }
        self.0.push(snapshot);
        true
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
