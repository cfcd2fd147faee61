//! In-memory transit network.
//!
//! A network is a [`StopRegistry`] (who the stops are) plus a [`RouteGraph`]
//! (how long it takes to get between them). [`NetworkBuilder`] keeps the two
//! in step while data is being loaded.

mod builder;
mod graph;
mod registry;

pub use builder::NetworkBuilder;
pub use graph::{EdgeInsert, RouteGraph};
pub use registry::StopRegistry;
