//! Loader error types.

use std::convert::Infallible;
use std::path::PathBuf;

use crate::domain::RoutingError;

/// Errors that can occur while reading and loading network data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV file could not be parsed
    #[error("malformed CSV in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Network JSON could not be parsed
    #[error("malformed network JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A field parsed but holds a bad value
    #[error("invalid {field} {value:?}: {reason}")]
    InvalidField {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// The records conflict with each other
    #[error(transparent)]
    Routing(#[from] RoutingError),
}

impl From<Infallible> for LoadError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl LoadError {
    pub(crate) fn invalid(field: &'static str, value: &str, reason: impl Into<String>) -> Self {
        LoadError::InvalidField {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
