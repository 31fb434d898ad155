use std::cmp::Ordering;

use crate::graph::{VertexId, Weight};

/// Cost carried by a pending node.
///
/// Every strategy uses the same pair. `accumulated` is the edge-weight sum
/// from the start. `estimate` depends on the strategy:
/// - depth-first, breadth-first, uniform-cost: unused, always zero
/// - A*: `accumulated + h(name)`, the priority key
/// - hill-climbing: `h(name)` alone
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cost {
    pub accumulated: Weight,
    pub estimate: Weight,
}

impl Cost {
    pub fn scalar(accumulated: Weight) -> Self {
        Self {
            accumulated,
            estimate: 0.0,
        }
    }

    pub fn with_estimate(accumulated: Weight, estimate: Weight) -> Self {
        Self {
            accumulated,
            estimate,
        }
    }

    pub fn cmp_accumulated(&self, other: &Self) -> Ordering {
        self.accumulated.total_cmp(&other.accumulated)
    }

    pub fn cmp_estimate(&self, other: &Self) -> Ordering {
        self.estimate.total_cmp(&other.estimate)
    }

    /// Estimate first, accumulated cost second
    pub fn cmp_estimate_then_accumulated(&self, other: &Self) -> Ordering {
        self.cmp_estimate(other)
            .then_with(|| self.cmp_accumulated(other))
    }
}

/// A discovered vertex waiting in a pending collection.
///
/// Nodes are never mutated once built; extending a path always produces a
/// new node through [`Node::successor`] or [`Node::extended`].
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: VertexId,
    /// Trail used to reach `name`. Depth-first, breadth-first and
    /// uniform-cost store ancestors only; A* and hill-climbing include
    /// `name` itself as the last element.
    pub path: Vec<VertexId>,
    pub cost: Cost,
}

impl Node {
    pub fn new(name: impl Into<VertexId>, path: Vec<VertexId>, cost: Cost) -> Self {
        Self {
            name: name.into(),
            path,
            cost,
        }
    }

    /// The node's path followed by its own name
    pub fn trail(&self) -> Vec<VertexId> {
        let mut trail = Vec::with_capacity(self.path.len() + 1);
        trail.extend(self.path.iter().cloned());
        trail.push(self.name.clone());
        trail
    }

    /// Successor whose path is this node's trail (ancestors-only paths)
    pub fn successor(&self, name: impl Into<VertexId>, cost: Cost) -> Node {
        Node::new(name, self.trail(), cost)
    }

    /// Successor whose path is this node's path plus its own name
    /// (self-inclusive paths)
    pub fn extended(&self, name: impl Into<VertexId>, cost: Cost) -> Node {
        let name = name.into();
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend(self.path.iter().cloned());
        path.push(name.clone());
        Node::new(name, path, cost)
    }
}
