//! Domain types for the transit router.
//!
//! Stops, travel-time edges and the error type shared by every layer that
//! builds or queries a network. Identifiers are validated once at the
//! boundary so the search code can work on plain indices.

mod error;
mod stop;
mod travel;

pub use error::RoutingError;
pub use stop::{Coordinates, Stop, StopId};
pub use travel::{Edge, Seconds};
