//! Incremental network construction.

use crate::domain::{Coordinates, RoutingError, StopId};
use crate::planner::{PlannerConfig, TransitRouter};

use super::{EdgeInsert, RouteGraph, StopRegistry};

/// Builds a registry and graph together, addressing stops by timetable code.
///
/// The builder guarantees every registered stop has an adjacency entry, so an
/// edge between two known codes can never dangle.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    registry: StopRegistry,
    graph: RouteGraph,
}

impl NetworkBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stop. See [`StopRegistry::register_with`].
    pub fn add_stop(
        &mut self,
        code: impl Into<String>,
        name: impl Into<String>,
        coordinates: Option<Coordinates>,
    ) -> Result<StopId, RoutingError> {
        let id = self.registry.register_with(code, name, coordinates)?;
        self.graph.ensure_stops(self.registry.len());
        Ok(id)
    }

    /// Bind an extra code to an existing stop. See [`StopRegistry::alias`].
    pub fn alias(&mut self, code: impl Into<String>, id: StopId) -> Result<(), RoutingError> {
        self.registry.alias(code, id)
    }

    /// Add a directed travel time between two stop codes.
    ///
    /// Fails with [`RoutingError::DanglingEdge`] if either code is unknown.
    pub fn add_travel_time(
        &mut self,
        from: &str,
        to: &str,
        seconds: i64,
    ) -> Result<EdgeInsert, RoutingError> {
        let dangling = || RoutingError::DanglingEdge {
            from: from.to_string(),
            to: to.to_string(),
        };
        let from_id = self.registry.resolve(from).map_err(|_| dangling())?;
        let to_id = self.registry.resolve(to).map_err(|_| dangling())?;

        self.graph
            .add_edge(from_id, to_id, seconds)
            .map_err(|e| match e {
                RoutingError::InvalidWeight { seconds, .. } => RoutingError::InvalidWeight {
                    from: from.to_string(),
                    to: to.to_string(),
                    seconds,
                },
                other => other,
            })
    }

    pub fn registry(&self) -> &StopRegistry {
        &self.registry
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    /// Finish loading and hand the network to a router.
    pub fn build(self, config: PlannerConfig) -> Result<TransitRouter, RoutingError> {
        TransitRouter::new(self.registry, self.graph, config)
    }

    pub fn into_parts(self) -> (StopRegistry, RouteGraph) {
        (self.registry, self.graph)
    }
}
