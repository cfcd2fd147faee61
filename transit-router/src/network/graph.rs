//! Adjacency structure over stop ids.

use std::collections::BTreeMap;

use tracing::trace;

use crate::domain::{Edge, RoutingError, Seconds, StopId};

/// Outcome of [`RouteGraph::add_edge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeInsert {
    /// No edge existed between the two stops.
    Added,
    /// An edge existed with a different travel time and was overwritten.
    Updated { previous: Seconds },
    /// The same edge was already present.
    Unchanged,
}

/// Directed, weighted graph of travel times between stops.
///
/// Each stop owns a map from destination to travel time, so there is at most
/// one edge per ordered (from, to) pair. Re-inserting a pair replaces its
/// weight (last write wins). Maps are ordered by destination id so iteration,
/// and therefore search, is deterministic.
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    adjacency: Vec<BTreeMap<StopId, Seconds>>,
}

impl RouteGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with `count` stops and no edges.
    pub fn with_stops(count: usize) -> Self {
        Self {
            adjacency: vec![BTreeMap::new(); count],
        }
    }

    /// Add a stop with no edges and return its id.
    pub fn add_stop(&mut self) -> StopId {
        self.adjacency.push(BTreeMap::new());
        StopId::new(self.adjacency.len() - 1)
    }

    /// Grow the graph so it covers at least `count` stops.
    pub fn ensure_stops(&mut self, count: usize) {
        if self.adjacency.len() < count {
            self.adjacency.resize_with(count, BTreeMap::new);
        }
    }

    pub fn stop_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeMap::len).sum()
    }

    fn contains(&self, id: StopId) -> bool {
        id.index() < self.adjacency.len()
    }

    /// Insert or overwrite the edge `from -> to`.
    ///
    /// Fails with [`RoutingError::DanglingEdge`] if either endpoint is not in
    /// the graph and with [`RoutingError::InvalidWeight`] if `seconds` is
    /// negative. Self-loops are accepted.
    pub fn add_edge(
        &mut self,
        from: StopId,
        to: StopId,
        seconds: i64,
    ) -> Result<EdgeInsert, RoutingError> {
        if !self.contains(from) || !self.contains(to) {
            return Err(RoutingError::DanglingEdge {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        let weight = Seconds::try_from(seconds).map_err(|_| RoutingError::InvalidWeight {
            from: from.to_string(),
            to: to.to_string(),
            seconds,
        })?;

        let outcome = match self.adjacency[from.index()].insert(to, weight) {
            None => EdgeInsert::Added,
            Some(previous) if previous == weight => EdgeInsert::Unchanged,
            Some(previous) => EdgeInsert::Updated { previous },
        };

        if let EdgeInsert::Updated { previous } = outcome {
            trace!(%from, %to, previous, weight, "edge weight replaced");
        }

        Ok(outcome)
    }

    /// Outgoing edges of `id` as a destination -> travel time map.
    ///
    /// A stop without outgoing edges yields an empty map. Fails with
    /// [`RoutingError::UnknownStop`] if `id` is not in the graph.
    pub fn neighbors(&self, id: StopId) -> Result<&BTreeMap<StopId, Seconds>, RoutingError> {
        self.adjacency
            .get(id.index())
            .ok_or_else(|| RoutingError::UnknownStop(id.to_string()))
    }

    /// Outgoing edges for an id already known to be in range.
    pub(crate) fn outgoing(&self, id: StopId) -> &BTreeMap<StopId, Seconds> {
        &self.adjacency[id.index()]
    }

    /// Iterate over every edge, ordered by source then destination.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(i, out)| {
            let from = StopId::new(i);
            out.iter().map(move |(&to, &seconds)| Edge::new(from, to, seconds))
        })
    }
}
