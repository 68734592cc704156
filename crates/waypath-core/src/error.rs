//! Error types and exit codes for waypath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid graph or query)
//! - 3: Data error (missing or unreadable configuration)
//! - 130: Run cancelled (Ctrl-C or superseded by a reset)

mod macros;

use std::path::PathBuf;

use thiserror::Error;

use crate::graph::NodeId;

/// Exit codes for the waypath binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args, invalid graph or query (2)
    Usage = 2,
    /// Data error - missing or malformed configuration (3)
    Data = 3,
    /// Cancelled run (130, the conventional SIGINT status)
    Interrupted = 130,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while validating or running a computation
#[derive(Error, Debug)]
pub enum WaypathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid node index for {role}: {node} (graph has {num_nodes} nodes)")]
    InvalidNodeIndex {
        role: String,
        node: NodeId,
        num_nodes: usize,
    },

    #[error("negative weight {weight} on edge {from} -> {to}")]
    NegativeWeight {
        from: NodeId,
        to: NodeId,
        weight: f64,
    },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("config not found: {path:?}")]
    ConfigNotFound { path: PathBuf },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),

    #[error("run cancelled")]
    Cancelled,
}

impl WaypathError {
    /// Create an error for a node index outside `[0, num_nodes)`
    pub fn invalid_node(role: &str, node: NodeId, num_nodes: usize) -> Self {
        WaypathError::InvalidNodeIndex {
            role: role.to_string(),
            node,
            num_nodes,
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        WaypathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed operation with a displayable cause
    pub fn failed(operation: &str, error: impl std::fmt::Display) -> Self {
        WaypathError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WaypathError::UnknownFormat(_)
            | WaypathError::UsageError(_)
            | WaypathError::InvalidNodeIndex { .. }
            | WaypathError::NegativeWeight { .. }
            | WaypathError::InvalidValue { .. } => ExitCode::Usage,

            WaypathError::ConfigNotFound { .. } | WaypathError::Toml(_) => ExitCode::Data,

            WaypathError::Io(_)
            | WaypathError::Json(_)
            | WaypathError::FailedOperation { .. }
            | WaypathError::Other(_) => ExitCode::Failure,

            WaypathError::Cancelled => ExitCode::Interrupted,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            WaypathError::UnknownFormat(_) => "unknown_format",
            WaypathError::UsageError(_) => "usage_error",
            WaypathError::InvalidNodeIndex { .. } => "invalid_node_index",
            WaypathError::NegativeWeight { .. } => "negative_weight",
            WaypathError::InvalidValue { .. } => "invalid_value",
            WaypathError::ConfigNotFound { .. } => "config_not_found",
            WaypathError::Toml(_) => "toml_error",
            WaypathError::Io(_) => "io_error",
            WaypathError::Json(_) => "json_error",
            WaypathError::FailedOperation { .. } => "failed_operation",
            WaypathError::Other(_) => "other",
            WaypathError::Cancelled => "cancelled",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for waypath operations
pub type Result<T> = std::result::Result<T, WaypathError>;
