//! Graph model shared by every search strategy
//!
//! - `Graph`: directed adjacency with declaration-ordered edges
//! - `Heuristics`: per-vertex remaining-cost estimates
//! - `path_cost`: weight of a concrete path, for checking reported costs

pub mod types;

pub use types::{Edge, Graph, Heuristics, VertexId, Weight};

use crate::bail_invalid;
use crate::error::Result;

/// Sum of edge weights along `path`.
///
/// An empty or single-vertex path costs zero. Consecutive vertices that are
/// not joined by an edge are rejected.
pub fn path_cost<S: AsRef<str>>(graph: &Graph, path: &[S]) -> Result<Weight> {
    let mut total = 0.0;
    for pair in path.windows(2) {
        let (from, to) = (pair[0].as_ref(), pair[1].as_ref());
        match graph.weight(from, to) {
            Some(weight) => total += weight,
            None => bail_invalid!("path step", format!("{} -> {}", from, to)),
        }
    }
    Ok(total)
}
