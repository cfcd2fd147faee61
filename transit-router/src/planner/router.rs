//! The routing engine.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::domain::{Coordinates, RoutingError, Seconds, Stop, StopId};
use crate::network::{RouteGraph, StopRegistry};

use super::astar::astar;
use super::config::{HeuristicKind, PlannerConfig};
use super::dijkstra::dijkstra;
use super::heuristic::{GeographicHeuristic, ZeroHeuristic};
use super::state::SearchOutcome;

/// Shortest-path algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Dijkstra,
    AStar,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => f.write_str("Dijkstra"),
            Algorithm::AStar => f.write_str("A*"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Algorithm::AStar),
            other => Err(format!("unknown algorithm: {other}")),
        }
    }
}

/// A computed route.
///
/// Produced fresh for each query; the caller owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    /// Algorithm that produced this route.
    pub algorithm: Algorithm,
    /// Stops from origin to destination, both inclusive.
    pub stops: Vec<StopId>,
    /// Total travel time.
    pub total: Seconds,
    /// Wall-clock time spent searching.
    pub elapsed: Duration,
    /// Number of stops settled before the destination was reached.
    pub settled: usize,
}

impl PathResult {
    pub fn origin(&self) -> Option<StopId> {
        self.stops.first().copied()
    }

    pub fn destination(&self) -> Option<StopId> {
        self.stops.last().copied()
    }

    /// Number of edges travelled.
    pub fn hop_count(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }
}

/// A loaded network ready to answer route queries.
///
/// The router owns the registry and graph for its whole lifetime and never
/// mutates them after construction. Names are resolved to ids once per query;
/// the searches themselves only see ids.
#[derive(Debug)]
pub struct TransitRouter {
    registry: StopRegistry,
    graph: RouteGraph,
    ranks: Vec<u32>,
    positions: Option<Vec<Coordinates>>,
    metres_per_second: Option<f64>,
    heuristic: HeuristicKind,
}

impl TransitRouter {
    /// Take ownership of a registry and graph.
    ///
    /// Fails with [`RoutingError::DanglingEdge`] if the graph has edges to
    /// stops the registry does not know. A graph with fewer stops than the
    /// registry is padded with edge-less stops.
    pub fn new(
        registry: StopRegistry,
        mut graph: RouteGraph,
        config: PlannerConfig,
    ) -> Result<Self, RoutingError> {
        if graph.stop_count() > registry.len() {
            let dangling = graph
                .edges()
                .find(|e| !registry.contains(e.from) || !registry.contains(e.to));
            if let Some(edge) = dangling {
                return Err(RoutingError::DanglingEdge {
                    from: edge.from.to_string(),
                    to: edge.to.to_string(),
                });
            }
        }
        graph.ensure_stops(registry.len());

        let ranks = registry.lexical_ranks();

        let (positions, metres_per_second, heuristic) = match config.heuristic {
            HeuristicKind::Zero => (None, None, HeuristicKind::Zero),
            HeuristicKind::Geographic => {
                let positions = registry.positions();
                let speed = positions
                    .as_deref()
                    .and_then(|p| GeographicHeuristic::fastest_speed(&graph, p));
                match speed {
                    Some(speed) => (positions, Some(speed), HeuristicKind::Geographic),
                    None => {
                        warn!("geographic heuristic unavailable, falling back to zero");
                        (None, None, HeuristicKind::Zero)
                    }
                }
            }
        };

        info!(
            stops = registry.len(),
            edges = graph.edge_count(),
            heuristic = %heuristic,
            "transit network ready"
        );

        Ok(Self {
            registry,
            graph,
            ranks,
            positions,
            metres_per_second,
            heuristic,
        })
    }

    pub fn registry(&self) -> &StopRegistry {
        &self.registry
    }

    pub fn graph(&self) -> &RouteGraph {
        &self.graph
    }

    /// The heuristic A* actually uses (after any fallback).
    pub fn heuristic(&self) -> HeuristicKind {
        self.heuristic
    }

    /// Check whether a stop with this display name exists.
    pub fn stop_exists(&self, name: &str) -> bool {
        self.registry.exists(name)
    }

    /// Find the fastest route between two stops given by display name.
    ///
    /// Fails with [`RoutingError::UnknownStop`] if either name is not
    /// registered and [`RoutingError::NoPathFound`] if the destination cannot
    /// be reached. The reported `elapsed` covers the search only, not name
    /// resolution.
    pub fn find_shortest_path(
        &self,
        source: &str,
        destination: &str,
        algorithm: Algorithm,
    ) -> Result<PathResult, RoutingError> {
        let from = self.registry.id_for(source)?;
        let to = self.registry.id_for(destination)?;
        self.find_path_between(from, to, algorithm)
    }

    /// Find the fastest route between two stop ids.
    pub fn find_path_between(
        &self,
        source: StopId,
        destination: StopId,
        algorithm: Algorithm,
    ) -> Result<PathResult, RoutingError> {
        for id in [source, destination] {
            if !self.registry.contains(id) {
                return Err(RoutingError::UnknownStop(id.to_string()));
            }
        }

        let started = Instant::now();
        let outcome = self.run(source, destination, algorithm, |_| {});
        let elapsed = started.elapsed();

        let Some(SearchOutcome {
            path,
            cost,
            settled,
        }) = outcome
        else {
            debug!(%algorithm, from = %source, to = %destination, ?elapsed, "no route");
            return Err(RoutingError::NoPathFound {
                from: self.label(source),
                to: self.label(destination),
            });
        };

        debug!(
            %algorithm,
            from = %source,
            to = %destination,
            cost,
            settled,
            ?elapsed,
            "route found"
        );

        Ok(PathResult {
            algorithm,
            stops: path,
            total: cost,
            elapsed,
            settled,
        })
    }

    /// Run a search and report each stop as it is settled.
    pub(crate) fn run(
        &self,
        source: StopId,
        destination: StopId,
        algorithm: Algorithm,
        on_settle: impl FnMut(StopId),
    ) -> Option<SearchOutcome> {
        match algorithm {
            Algorithm::Dijkstra => dijkstra(&self.graph, &self.ranks, source, destination, on_settle),
            Algorithm::AStar => {
                let geographic = self
                    .positions
                    .as_deref()
                    .zip(self.metres_per_second)
                    .and_then(|(p, speed)| GeographicHeuristic::new(p, destination, speed));
                match geographic {
                    Some(h) => astar(&self.graph, &self.ranks, source, destination, &h, on_settle),
                    None => astar(
                        &self.graph,
                        &self.ranks,
                        source,
                        destination,
                        &ZeroHeuristic,
                        on_settle,
                    ),
                }
            }
        }
    }

    /// Display names along a route.
    pub fn stop_names<'a>(&'a self, result: &'a PathResult) -> impl Iterator<Item = &'a str> + 'a {
        result
            .stops
            .iter()
            .filter_map(|&id| self.registry.name_for(id).ok())
    }

    /// Every stop with its outgoing edges, in id order.
    pub fn routes(&self) -> impl Iterator<Item = (&Stop, Vec<(&Stop, Seconds)>)> + '_ {
        self.registry.iter().map(|stop| {
            let out = self
                .graph
                .outgoing(stop.id)
                .iter()
                .filter_map(|(&to, &seconds)| self.registry.get(to).map(|s| (s, seconds)))
                .collect();
            (stop, out)
        })
    }

    fn label(&self, id: StopId) -> String {
        self.registry
            .name_for(id)
            .map(str::to_string)
            .unwrap_or_else(|_| id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkBuilder;

    /// A->B 60, B->C 120, A->C 300, plus an isolated D.
    fn triangle() -> TransitRouter {
        let mut b = NetworkBuilder::new();
        b.add_stop("A", "Alpha", None).unwrap();
        b.add_stop("B", "Bravo", None).unwrap();
        b.add_stop("C", "Charlie", None).unwrap();
        b.add_stop("D", "Delta", None).unwrap();
        b.add_travel_time("A", "B", 60).unwrap();
        b.add_travel_time("B", "C", 120).unwrap();
        b.add_travel_time("A", "C", 300).unwrap();
        b.build(PlannerConfig::default()).unwrap()
    }

    #[test]
    fn both_algorithms_take_two_hop_route() {
        let router = triangle();
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
            let result = router
                .find_shortest_path("Alpha", "Charlie", algorithm)
                .unwrap();
            let names: Vec<_> = router.stop_names(&result).collect();
            assert_eq!(names, vec!["Alpha", "Bravo", "Charlie"]);
            assert_eq!(result.total, 180);
            assert_eq!(result.algorithm, algorithm);
            assert_eq!(result.hop_count(), 2);
        }
    }

    #[test]
    fn unknown_stop_is_reported() {
        let router = triangle();
        let err = router
            .find_shortest_path("Nonexistent", "AlsoFake", Algorithm::Dijkstra)
            .unwrap_err();
        assert_eq!(err, RoutingError::UnknownStop("Nonexistent".into()));

        let err = router
            .find_shortest_path("Alpha", "AlsoFake", Algorithm::AStar)
            .unwrap_err();
        assert_eq!(err, RoutingError::UnknownStop("AlsoFake".into()));
    }

    #[test]
    fn unreachable_stop_is_no_path() {
        let router = triangle();
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
            let err = router
                .find_shortest_path("Alpha", "Delta", algorithm)
                .unwrap_err();
            assert_eq!(
                err,
                RoutingError::NoPathFound {
                    from: "Alpha".into(),
                    to: "Delta".into()
                }
            );
        }
    }

    #[test]
    fn edges_are_one_way() {
        let router = triangle();
        assert!(matches!(
            router.find_shortest_path("Charlie", "Alpha", Algorithm::Dijkstra),
            Err(RoutingError::NoPathFound { .. })
        ));
    }

    #[test]
    fn same_origin_and_destination() {
        let router = triangle();
        let result = router
            .find_shortest_path("Bravo", "Bravo", Algorithm::Dijkstra)
            .unwrap();
        assert_eq!(result.stops.len(), 1);
        assert_eq!(result.total, 0);
        assert_eq!(result.origin(), result.destination());
    }

    #[test]
    fn find_path_between_rejects_foreign_ids() {
        let router = triangle();
        assert!(matches!(
            router.find_path_between(StopId::new(0), StopId::new(99), Algorithm::Dijkstra),
            Err(RoutingError::UnknownStop(_))
        ));
    }

    #[test]
    fn stop_exists_checks_names() {
        let router = triangle();
        assert!(router.stop_exists("Alpha"));
        assert!(!router.stop_exists("A"));
        assert!(!router.stop_exists("Omega"));
    }

    #[test]
    fn routes_lists_every_stop() {
        let router = triangle();
        let routes: Vec<_> = router.routes().collect();
        assert_eq!(routes.len(), 4);

        let (alpha, out) = &routes[0];
        assert_eq!(alpha.name, "Alpha");
        let dests: Vec<_> = out.iter().map(|(s, w)| (s.name.as_str(), *w)).collect();
        assert_eq!(dests, vec![("Bravo", 60), ("Charlie", 300)]);

        assert!(routes[3].1.is_empty());
    }

    #[test]
    fn new_rejects_edges_past_registry() {
        let mut registry = StopRegistry::new();
        registry.register("A", "Alpha").unwrap();
        let mut graph = RouteGraph::with_stops(2);
        graph.add_edge(StopId::new(0), StopId::new(1), 10).unwrap();

        assert!(matches!(
            TransitRouter::new(registry, graph, PlannerConfig::default()),
            Err(RoutingError::DanglingEdge { .. })
        ));
    }

    #[test]
    fn new_pads_short_graph() {
        let mut registry = StopRegistry::new();
        registry.register("A", "Alpha").unwrap();
        registry.register("B", "Bravo").unwrap();

        let router =
            TransitRouter::new(registry, RouteGraph::new(), PlannerConfig::default()).unwrap();
        assert_eq!(router.graph().stop_count(), 2);
        assert!(matches!(
            router.find_shortest_path("Alpha", "Bravo", Algorithm::AStar),
            Err(RoutingError::NoPathFound { .. })
        ));
    }

    #[test]
    fn geographic_falls_back_without_coordinates() {
        let mut b = NetworkBuilder::new();
        b.add_stop("A", "Alpha", None).unwrap();
        let router = b
            .build(PlannerConfig::new(HeuristicKind::Geographic))
            .unwrap();
        assert_eq!(router.heuristic(), HeuristicKind::Zero);
    }

    #[test]
    fn geographic_used_when_coordinates_present() {
        let mut b = NetworkBuilder::new();
        b.add_stop("A", "Alpha", Some(Coordinates::new(40.0, -74.0)))
            .unwrap();
        b.add_stop("B", "Bravo", Some(Coordinates::new(40.01, -74.0)))
            .unwrap();
        b.add_travel_time("A", "B", 120).unwrap();
        let router = b
            .build(PlannerConfig::new(HeuristicKind::Geographic))
            .unwrap();

        assert_eq!(router.heuristic(), HeuristicKind::Geographic);
        let result = router
            .find_shortest_path("Alpha", "Bravo", Algorithm::AStar)
            .unwrap();
        assert_eq!(result.total, 120);
    }

    #[test]
    fn algorithm_parse_and_display() {
        assert_eq!("dijkstra".parse(), Ok(Algorithm::Dijkstra));
        assert_eq!("AStar".parse(), Ok(Algorithm::AStar));
        assert_eq!("a*".parse(), Ok(Algorithm::AStar));
        assert!("bfs".parse::<Algorithm>().is_err());

        assert_eq!(Algorithm::Dijkstra.to_string(), "Dijkstra");
        assert_eq!(Algorithm::AStar.to_string(), "A*");
    }
}
