//! Search problems loaded from JSON, YAML, or TOML documents
//!
//! ```toml
//! start = "S"
//! goal = "R"
//!
//! [graph]
//! S = { A = 5, B = 8 }
//! A = { R = 30 }
//! B = { R = 1 }
//! R = {}
//!
//! [heuristics]
//! S = 6
//! A = 30
//! B = 1
//! R = 0
//! ```
//!
//! Edge order inside each adjacency map is kept as written.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bail_unsupported;
use crate::error::{Result, WayfindError};
use crate::graph::{Graph, Heuristics, VertexId};
use crate::journey::Journey;

const SUPPORTED_EXTENSIONS: &str = "json, yaml, yml, toml";

/// A graph plus everything a caller needs to run and narrate a search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub graph: Graph,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heuristics: Option<Heuristics>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<VertexId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<VertexId>,
    #[serde(flatten)]
    pub journey: Journey,
}

impl Problem {
    /// Load a problem, choosing the parser from the file extension
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let content = fs::read_to_string(path)
            .map_err(|e| WayfindError::io_operation("read problem", path.display(), e))?;

        let problem = match extension.as_str() {
            "json" => Self::from_json(&content)?,
            "yaml" | "yml" => Self::from_yaml(&content)?,
            "toml" => Self::from_toml(&content)?,
            _ => bail_unsupported!(
                "problem file extension",
                format!("{:?}", extension),
                SUPPORTED_EXTENSIONS
            ),
        };

        tracing::debug!(
            path = %path.display(),
            vertices = problem.graph.vertex_count(),
            edges = problem.graph.edge_count(),
            heuristics = problem.heuristics.as_ref().map_or(0, Heuristics::len),
            "problem_loaded"
        );
        Ok(problem)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// `requested` if given, else the problem's own start vertex
    pub fn resolve_start(&self, requested: Option<&str>) -> Result<String> {
        requested
            .map(str::to_string)
            .or_else(|| self.start.clone())
            .ok_or_else(|| WayfindError::MissingEndpoint {
                which: "start".to_string(),
            })
    }

    /// `requested` if given, else the problem's own goal vertex
    pub fn resolve_goal(&self, requested: Option<&str>) -> Result<String> {
        requested
            .map(str::to_string)
            .or_else(|| self.goal.clone())
            .ok_or_else(|| WayfindError::MissingEndpoint {
                which: "goal".to_string(),
            })
    }
}
