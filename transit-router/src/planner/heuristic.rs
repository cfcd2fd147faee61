//! Remaining-time estimates for A*.

use crate::domain::{Coordinates, Seconds, StopId};
use crate::network::RouteGraph;

/// Estimate of the travel time still needed to reach the search target.
///
/// Implementations must be admissible (never above the true remaining time)
/// and consistent (`estimate(u) <= w(u, v) + estimate(v)` for every edge),
/// otherwise A* with a closed set can return a slower route than Dijkstra.
pub trait Heuristic {
    fn estimate(&self, stop: StopId) -> Seconds;
}

/// The degenerate estimate. Turns A* into Dijkstra.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _stop: StopId) -> Seconds {
        0
    }
}

/// Straight-line distance to the target divided by the network's top speed.
///
/// No edge covers more ground per second than the top speed, and no route is
/// shorter than the great-circle distance, so the estimate is a lower bound.
/// It is also consistent by the triangle inequality.
#[derive(Debug, Clone)]
pub struct GeographicHeuristic<'a> {
    positions: &'a [Coordinates],
    target: Coordinates,
    metres_per_second: f64,
}

impl<'a> GeographicHeuristic<'a> {
    /// Build an estimate towards `target`.
    ///
    /// `positions` is indexed by stop id; `metres_per_second` must be at least
    /// the fastest speed on any edge (see [`fastest_speed`](Self::fastest_speed)).
    pub fn new(positions: &'a [Coordinates], target: StopId, metres_per_second: f64) -> Option<Self> {
        let target = *positions.get(target.index())?;
        if !(metres_per_second.is_finite() && metres_per_second > 0.0) {
            return None;
        }
        Some(Self {
            positions,
            target,
            metres_per_second,
        })
    }

    /// Fastest straight-line speed over any edge of `graph`, in metres per second.
    ///
    /// Returns `None` if no edge covers any distance, or if one covers distance
    /// in zero seconds (no finite bound exists).
    pub fn fastest_speed(graph: &RouteGraph, positions: &[Coordinates]) -> Option<f64> {
        let mut fastest: Option<f64> = None;
        for edge in graph.edges() {
            let from = positions.get(edge.from.index())?;
            let to = positions.get(edge.to.index())?;
            let distance = from.distance_m(to);
            if distance <= 0.0 {
                continue;
            }
            if edge.seconds == 0 {
                return None;
            }
            let speed = distance / edge.seconds as f64;
            fastest = Some(fastest.map_or(speed, |f| f.max(speed)));
        }
        // headroom so float rounding cannot push an estimate above the true cost
        fastest.map(|f| f * (1.0 + 1e-6))
    }
}

impl Heuristic for GeographicHeuristic<'_> {
    fn estimate(&self, stop: StopId) -> Seconds {
        let Some(position) = self.positions.get(stop.index()) else {
            return 0;
        };
        let seconds = position.distance_m(&self.target) / self.metres_per_second;
        seconds.floor() as Seconds
    }
}
