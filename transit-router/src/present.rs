//! Human- and machine-readable route reports.

use std::fmt;

use serde::Serialize;

use crate::domain::Seconds;
use crate::planner::{Algorithm, PathResult, TransitRouter};

/// Separator between stop names in a rendered path.
pub const PATH_SEPARATOR: &str = " -> ";

/// Format a duration as `"HH H : MM M : SS S"`.
///
/// Hours are not wrapped at 24 and widen past two digits when needed.
///
/// # Examples
///
/// ```
/// use transit_router::present::format_hms;
///
/// assert_eq!(format_hms(180), "00 H : 03 M : 00 S");
/// assert_eq!(format_hms(3725), "01 H : 02 M : 05 S");
/// ```
pub fn format_hms(seconds: Seconds) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02} H : {minutes:02} M : {secs:02} S")
}

/// Display names along a route, joined by [`PATH_SEPARATOR`].
pub fn render_path(router: &TransitRouter, result: &PathResult) -> String {
    router
        .stop_names(result)
        .collect::<Vec<_>>()
        .join(PATH_SEPARATOR)
}

/// A computed route, resolved to names, ready for printing or serialising.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteView {
    #[serde(serialize_with = "serialize_algorithm")]
    pub algorithm: Algorithm,
    pub stops: Vec<String>,
    pub travel_time_secs: Seconds,
    pub travel_time: String,
    pub runtime_micros: u64,
    pub settled: usize,
}

fn serialize_algorithm<S: serde::Serializer>(
    algorithm: &Algorithm,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(algorithm)
}

impl RouteView {
    /// Create from a search result.
    pub fn from_result(router: &TransitRouter, result: &PathResult) -> Self {
        Self {
            algorithm: result.algorithm,
            stops: router.stop_names(result).map(str::to_string).collect(),
            travel_time_secs: result.total,
            travel_time: format_hms(result.total),
            runtime_micros: u64::try_from(result.elapsed.as_micros()).unwrap_or(u64::MAX),
            settled: result.settled,
        }
    }

    /// The path as a single line.
    pub fn path(&self) -> String {
        self.stops.join(PATH_SEPARATOR)
    }
}

/// Three-line report block, one per algorithm:
///
/// ```text
/// A* Fastest pathing: Alpha -> Bravo -> Charlie
/// A* Estimated Route Time: 00 H : 03 M : 00 S
/// A* Search Algorithm runtime: 14 microseconds
/// ```
impl fmt::Display for RouteView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (owner, runtime_label) = match self.algorithm {
            Algorithm::AStar => ("A*", "A* Search Algorithm"),
            Algorithm::Dijkstra => ("Dijkstra's", "Dijkstra's Algorithm"),
        };
        writeln!(f, "{owner} Fastest pathing: {}", self.path())?;
        writeln!(f, "{owner} Estimated Route Time: {}", self.travel_time)?;
        write!(f, "{runtime_label} runtime: {} microseconds", self.runtime_micros)
    }
}

/// One line per stop listing its outgoing edges: `Name [code] -> Next [code] (60s), ...`.
pub fn render_routes(router: &TransitRouter) -> Vec<String> {
    router
        .routes()
        .map(|(stop, out)| {
            let targets: Vec<String> = out
                .iter()
                .map(|(to, seconds)| format!("{to} ({}s)", seconds))
                .collect();
            if targets.is_empty() {
                format!("{stop}: no outgoing routes")
            } else {
                format!("{stop}{PATH_SEPARATOR}{}", targets.join(", "))
            }
        })
        .collect()
}
