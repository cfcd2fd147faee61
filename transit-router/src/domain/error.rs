//! Routing error types.
//!
//! These errors cover network construction conflicts and query failures.
//! They are distinct from file/format errors, which live in the loader.

/// Errors raised while building a network or answering a route query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoutingError {
    /// The id or name is already bound to a different stop.
    #[error("stop {code} ({name}) conflicts with an existing stop")]
    DuplicateStop { code: String, name: String },

    /// No stop is registered under this name, code or id.
    #[error("unknown stop: {0}")]
    UnknownStop(String),

    /// Travel times must be non-negative.
    #[error("invalid travel time {seconds}s from {from} to {to}: must be non-negative")]
    InvalidWeight {
        from: String,
        to: String,
        seconds: i64,
    },

    /// Both stops exist but the destination cannot be reached.
    #[error("no route from {from} to {to}")]
    NoPathFound { from: String, to: String },

    /// An edge endpoint is not a registered stop.
    #[error("edge from {from} to {to} references an unregistered stop")]
    DanglingEdge { from: String, to: String },
}
