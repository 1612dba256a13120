//! Error types for rankgrid.
//!
//! The dataset itself cannot fail: every grid cell is a [`Category`](crate::Category)
//! by construction. Errors only arise at the edges, where strings from the
//! selector, the command line or a layout file are turned into typed values.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for rankgrid operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GridError {
    /// A string that is not one of the category keys
    #[error("unknown category '{0}' (expected one of: parade, awards, 60m, ncis, other)")]
    UnknownCategory(String),

    /// A selector value that is neither "All" nor a category
    #[error("unknown selection '{0}' (expected all, parade, awards, 60m, ncis or other)")]
    UnknownSelection(String),

    /// Layout parameters that would produce overlapping or degenerate geometry
    #[error("invalid layout: {field} {reason}")]
    InvalidLayout { field: &'static str, reason: String },

    /// Layout file that could not be parsed
    #[error("failed to parse layout file {path:?}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization failed")]
    Json(#[from] serde_json::Error),

    /// HTTP server failures (bind errors, malformed headers)
    #[error("server error: {0}")]
    Server(String),
}

impl GridError {
    /// Wrap an IO error with the path it happened at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            source,
        }
    }

    pub(crate) fn invalid_layout(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidLayout {
            field,
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for GridError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;
