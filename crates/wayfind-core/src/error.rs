//! Error types and exit codes for wayfind
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown strategy)
//! - 3: Data error (missing vertex, missing heuristics, missing endpoint)
//!
//! A search that exhausts its frontier without reaching the goal is not an
//! error: it returns an empty path with zero cost.

mod macros;

use std::fmt;

use thiserror::Error;

/// The lookup table a vertex identifier was missing from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupTable {
    /// Adjacency mapping of the graph
    Graph,
    /// Heuristic estimates (A* and hill-climbing)
    Heuristics,
    /// Journey narrative text
    Descriptions,
    /// Per-vertex display labels
    Labels,
}

impl LookupTable {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupTable::Graph => "graph",
            LookupTable::Heuristics => "heuristics",
            LookupTable::Descriptions => "descriptions",
            LookupTable::Labels => "labels",
        }
    }
}

impl fmt::Display for LookupTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exit codes for the wayfind CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - lookup failures, incomplete problem definitions (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while loading a problem or running a search
#[derive(Error, Debug)]
pub enum WayfindError {
    // Usage errors (exit code 2)
    #[error("unknown strategy: {0} (expected 1-5, dfs, bfs, ucs, astar, or hill)")]
    UnknownStrategy(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("vertex not found in {table}: {vertex}")]
    VertexNotFound { table: LookupTable, vertex: String },

    #[error("{strategy} requires a heuristic table")]
    MissingHeuristics { strategy: String },

    #[error("no {which} vertex given and the problem does not define one")]
    MissingEndpoint { which: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl WayfindError {
    /// Create an error for an identifier missing from one of the lookup tables
    pub fn vertex_not_found(table: LookupTable, vertex: impl Into<String>) -> Self {
        WayfindError::VertexNotFound {
            table,
            vertex: vertex.into(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl fmt::Display) -> Self {
        WayfindError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl fmt::Display,
        supported: impl fmt::Display,
    ) -> Self {
        WayfindError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl fmt::Display,
        error: impl fmt::Display,
    ) -> Self {
        WayfindError::Other(format!("failed to {} {}: {}", operation, path, error))
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WayfindError::UnknownStrategy(_)
            | WayfindError::UsageError(_)
            | WayfindError::InvalidValue { .. }
            | WayfindError::Unsupported { .. } => ExitCode::Usage,

            WayfindError::VertexNotFound { .. }
            | WayfindError::MissingHeuristics { .. }
            | WayfindError::MissingEndpoint { .. } => ExitCode::Data,

            WayfindError::Io(_)
            | WayfindError::Yaml(_)
            | WayfindError::Json(_)
            | WayfindError::Toml(_)
            | WayfindError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WayfindError::UnknownStrategy(_) => "unknown_strategy",
            WayfindError::UsageError(_) => "usage_error",
            WayfindError::InvalidValue { .. } => "invalid_value",
            WayfindError::Unsupported { .. } => "unsupported",
            WayfindError::VertexNotFound { .. } => "vertex_not_found",
            WayfindError::MissingHeuristics { .. } => "missing_heuristics",
            WayfindError::MissingEndpoint { .. } => "missing_endpoint",
            WayfindError::Io(_) => "io_error",
            WayfindError::Yaml(_) => "yaml_error",
            WayfindError::Json(_) => "json_error",
            WayfindError::Toml(_) => "toml_error",
            WayfindError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        let mut error_obj = serde_json::json!({
            "code": self.exit_code() as i32,
            "type": self.error_type(),
            "message": self.to_string(),
        });

        if let WayfindError::VertexNotFound { table, vertex } = self {
            error_obj["table"] = serde_json::json!(table.as_str());
            error_obj["vertex"] = serde_json::json!(vertex);
        }

        serde_json::json!({ "error": error_obj })
    }
}

/// Result type alias for wayfind operations
pub type Result<T> = std::result::Result<T, WayfindError>;
