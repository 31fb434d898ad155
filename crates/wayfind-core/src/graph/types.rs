use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{LookupTable, Result, WayfindError};

/// Identifier of a graph vertex
pub type VertexId = String;

/// Edge weight, heuristic estimate, and accumulated path cost
pub type Weight = f64;

/// A directed, weighted edge to a neighbor
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub to: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(to: impl Into<VertexId>, weight: Weight) -> Self {
        Self {
            to: to.into(),
            weight,
        }
    }
}

/// Directed weighted graph keyed by vertex identifier.
///
/// Outgoing edges keep the order they were declared in; every strategy
/// expands neighbors in that order, so it decides stack/queue order and
/// insertion-order tie-breaks. Vertex declaration order is kept too so
/// that a loaded graph serializes back the way it was written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    adjacency: HashMap<VertexId, Vec<Edge>>,
    order: Vec<VertexId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(vertex, [(neighbor, weight)])` entries
    pub fn from_adjacency<V, I, N>(entries: I) -> Self
    where
        V: Into<VertexId>,
        N: IntoIterator<Item = (V, Weight)>,
        I: IntoIterator<Item = (V, N)>,
    {
        let mut graph = Graph::new();
        for (vertex, neighbors) in entries {
            let vertex = vertex.into();
            graph.add_vertex(vertex.clone());
            for (to, weight) in neighbors {
                graph.add_edge(vertex.clone(), to, weight);
            }
        }
        graph
    }

    /// Register a vertex with no outgoing edges (no-op if present)
    pub fn add_vertex(&mut self, vertex: impl Into<VertexId>) {
        let vertex = vertex.into();
        if !self.adjacency.contains_key(&vertex) {
            self.order.push(vertex.clone());
            self.adjacency.insert(vertex, Vec::new());
        }
    }

    /// Append an edge. Creates `from` if needed but never `to`: a target
    /// that is not itself a key fails only when a search tries to expand it.
    pub fn add_edge(&mut self, from: impl Into<VertexId>, to: impl Into<VertexId>, weight: Weight) {
        let from = from.into();
        self.add_vertex(from.clone());
        if let Some(edges) = self.adjacency.get_mut(&from) {
            edges.push(Edge::new(to, weight));
        }
    }

    fn set_adjacency(&mut self, vertex: VertexId, edges: Vec<Edge>) {
        if !self.adjacency.contains_key(&vertex) {
            self.order.push(vertex.clone());
        }
        self.adjacency.insert(vertex, edges);
    }

    /// Outgoing edges of `vertex`, in declaration order
    pub fn neighbors(&self, vertex: &str) -> Result<&[Edge]> {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .ok_or_else(|| WayfindError::vertex_not_found(LookupTable::Graph, vertex))
    }

    pub fn contains(&self, vertex: &str) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Weight of the first `from -> to` edge, if any
    pub fn weight(&self, from: &str, to: &str) -> Option<Weight> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|edge| edge.to == to)
            .map(|edge| edge.weight)
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Vertex identifiers, sorted for deterministic listing
    pub fn vertices(&self) -> Vec<&str> {
        let mut vertices: Vec<&str> = self.order.iter().map(String::as_str).collect();
        vertices.sort_unstable();
        vertices
    }
}

impl Serialize for Graph {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for vertex in &self.order {
            let edges = self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[]);
            map.serialize_entry(vertex, &AdjacencyRef(edges))?;
        }
        map.end()
    }
}

struct AdjacencyRef<'a>(&'a [Edge]);

impl Serialize for AdjacencyRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for edge in self.0 {
            map.serialize_entry(&edge.to, &edge.weight)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Graph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct GraphVisitor;

        impl<'de> Visitor<'de> for GraphVisitor {
            type Value = Graph;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from vertex to a map of neighbor weights")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Graph, A::Error> {
                let mut graph = Graph::new();
                while let Some((vertex, adjacency)) = map.next_entry::<VertexId, Adjacency>()? {
                    graph.set_adjacency(vertex, adjacency.0);
                }
                Ok(graph)
            }
        }

        deserializer.deserialize_map(GraphVisitor)
    }
}

/// Neighbor map read in document order
struct Adjacency(Vec<Edge>);

impl<'de> Deserialize<'de> for Adjacency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct AdjacencyVisitor;

        impl<'de> Visitor<'de> for AdjacencyVisitor {
            type Value = Adjacency;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from neighbor to edge weight")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Adjacency, A::Error> {
                let mut edges = Vec::new();
                while let Some((to, weight)) = map.next_entry::<VertexId, Weight>()? {
                    edges.push(Edge { to, weight });
                }
                Ok(Adjacency(edges))
            }
        }

        deserializer.deserialize_map(AdjacencyVisitor)
    }
}

/// Estimated remaining cost to the goal for each vertex.
///
/// Admissibility and consistency are not checked; the table is trusted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Heuristics(HashMap<VertexId, Weight>);

impl Heuristics {
    /// Estimate for `vertex`
    pub fn get(&self, vertex: &str) -> Result<Weight> {
        self.0
            .get(vertex)
            .copied()
            .ok_or_else(|| WayfindError::vertex_not_found(LookupTable::Heuristics, vertex))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V: Into<VertexId>> FromIterator<(V, Weight)> for Heuristics {
    fn from_iter<I: IntoIterator<Item = (V, Weight)>>(iter: I) -> Self {
        Heuristics(iter.into_iter().map(|(v, w)| (v.into(), w)).collect())
    }
}
