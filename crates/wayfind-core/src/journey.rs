//! Narrative text and display labels for a found path

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{LookupTable, Result, WayfindError};
use crate::graph::VertexId;

/// Per-vertex narration and short labels
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Journey {
    #[serde(default)]
    pub descriptions: HashMap<VertexId, String>,
    #[serde(default)]
    pub labels: HashMap<VertexId, String>,
}

impl Journey {
    /// Descriptions of each vertex on `path`, joined by single spaces
    pub fn describe<S: AsRef<str>>(&self, path: &[S]) -> Result<String> {
        let parts = path
            .iter()
            .map(|vertex| {
                let vertex = vertex.as_ref();
                self.descriptions.get(vertex).map(String::as_str).ok_or_else(|| {
                    WayfindError::vertex_not_found(LookupTable::Descriptions, vertex)
                })
            })
            .collect::<Result<Vec<&str>>>()?;
        Ok(parts.join(" "))
    }

    /// Label of each vertex on `path`, in order
    pub fn labels_for<S: AsRef<str>>(&self, path: &[S]) -> Result<Vec<&str>> {
        path.iter()
            .map(|vertex| {
                let vertex = vertex.as_ref();
                self.labels
                    .get(vertex)
                    .map(String::as_str)
                    .ok_or_else(|| WayfindError::vertex_not_found(LookupTable::Labels, vertex))
            })
            .collect()
    }
}
