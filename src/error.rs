//! Error types for treepick
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::{Level, NodeKind};

/// Result type alias for tree operations
pub type TreeResult<T> = Result<T, TreeError>;

/// Why an unfold commit was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnfoldRejection {
    /// Children are already known (filled, merged, or known-empty after a fetch)
    AlreadyResolved,
    /// A fetch was in flight; this unfold closed the branch and cancelled it
    InFlight,
}

impl std::fmt::Display for UnfoldRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnfoldRejection::AlreadyResolved => write!(f, "children already resolved"),
            UnfoldRejection::InFlight => write!(f, "fetch in flight was cancelled"),
        }
    }
}

/// Main error type for tree operations
#[derive(Error, Debug)]
pub enum TreeError {
    /// Level string that is not a dotted index path rooted at `0`
    #[error("invalid level '{input}': {reason}")]
    InvalidLevel { input: String, reason: String },

    /// No branch lives at this level
    #[error("no branch at level {level}")]
    UnknownBranch { level: Level },

    /// No leaf lives at this level
    #[error("no leaf at level {level}")]
    UnknownLeaf { level: Level },

    /// The element named in a command is of the wrong kind for the action
    #[error("action '{action}' is not applicable to a {kind} at level {level}")]
    NotApplicable {
        action: &'static str,
        kind: NodeKind,
        level: Level,
    },

    /// Unfold refused; the caller must not fetch
    #[error("unfold of {level} rejected: {reason}")]
    UnfoldRejected {
        level: Level,
        reason: UnfoldRejection,
    },

    /// Malformed command string (CLI `--op` syntax)
    #[error("invalid operation '{input}': {reason}")]
    InvalidOperation { input: String, reason: String },

    /// Input file could not be parsed as JSON
    #[error("invalid tree data in {file}: {message}")]
    InvalidData { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
