//! Shortest-path planner.
//!
//! This module answers "what is the fastest way from stop A to stop B?"
//! over a loaded network. Two searches are provided:
//!
//! - Dijkstra (uniform-cost search), which expands stops in order of
//!   travel time from the origin.
//! - A*, which adds an admissible estimate of the remaining time to each
//!   frontier entry. Without positional data the estimate is zero and A*
//!   expands exactly what Dijkstra does.
//!
//! Both searches settle each stop at most once, break frontier ties by stop
//! code, and stop as soon as the destination is settled.

mod astar;
mod config;
mod dijkstra;
mod frontier;
mod heuristic;
mod router;
mod state;

#[cfg(test)]
mod search_tests;

pub use config::{HeuristicKind, PlannerConfig};
pub use heuristic::{GeographicHeuristic, Heuristic, ZeroHeuristic};
pub use router::{Algorithm, PathResult, TransitRouter};
