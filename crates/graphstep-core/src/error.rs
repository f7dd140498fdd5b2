//! Error types and exit codes for graphstep
//!
//! Exit codes:
//! - 0: Success (a shortest-path search that finds no path is still a success)
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid engine arguments)
//! - 3: Data error (unreadable graph source or config)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the graphstep CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unreadable graph source or config (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graphstep operations
#[derive(Error, Debug)]
pub enum GraphstepError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {argument}: {reason}")]
    InvalidArgument { argument: String, reason: String },

    // Data errors (exit code 3)
    #[error("cannot read graph from {path:?}: {reason}")]
    GraphSourceUnreadable { path: PathBuf, reason: String },

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("event out of order: expected step {expected}, got {found}")]
    OutOfOrderEvent { expected: u64, found: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),

    #[error("traversal interrupted")]
    Interrupted,
}

impl GraphstepError {
    /// Create an error for a missing or malformed engine argument
    pub fn invalid_argument(argument: &str, reason: impl std::fmt::Display) -> Self {
        GraphstepError::InvalidArgument {
            argument: argument.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for a graph source that could not be read
    pub fn graph_source(path: impl Into<PathBuf>, error: impl std::fmt::Display) -> Self {
        GraphstepError::GraphSourceUnreadable {
            path: path.into(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphstepError::UnknownFormat(_)
            | GraphstepError::UsageError(_)
            | GraphstepError::InvalidArgument { .. } => ExitCode::Usage,

            GraphstepError::GraphSourceUnreadable { .. } | GraphstepError::InvalidConfig { .. } => {
                ExitCode::Data
            }

            GraphstepError::OutOfOrderEvent { .. }
            | GraphstepError::Io(_)
            | GraphstepError::Json(_)
            | GraphstepError::Other(_)
            | GraphstepError::Interrupted => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GraphstepError::UnknownFormat(_) => "unknown_format",
            GraphstepError::UsageError(_) => "usage_error",
            GraphstepError::InvalidArgument { .. } => "invalid_argument",
            GraphstepError::GraphSourceUnreadable { .. } => "graph_source_unreadable",
            GraphstepError::InvalidConfig { .. } => "invalid_config",
            GraphstepError::OutOfOrderEvent { .. } => "out_of_order_event",
            GraphstepError::Io(_) => "io_error",
            GraphstepError::Json(_) => "json_error",
            GraphstepError::Other(_) => "other",
            GraphstepError::Interrupted => "interrupted",
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

/// Result type alias for graphstep operations
pub type Result<T> = std::result::Result<T, GraphstepError>;
