//! Fastest-route planner for a static transit network.
//!
//! Load a network of stops and stop-to-stop travel times (from a GTFS feed or
//! a JSON document), then ask for the quickest route between two stops by
//! name using Dijkstra or A*.
//!
//! ```
//! use transit_router::loader::{self, DuplicateNamePolicy, NetworkDocument};
//! use transit_router::planner::{Algorithm, PlannerConfig};
//! use transit_router::present::render_path;
//!
//! let doc = NetworkDocument::from_json(r#"{
//!     "stops": [
//!         { "id": "A", "name": "Alpha" },
//!         { "id": "B", "name": "Bravo" },
//!         { "id": "C", "name": "Charlie" }
//!     ],
//!     "travel_times": [
//!         { "from": "A", "to": "B", "seconds": 60 },
//!         { "from": "B", "to": "C", "seconds": 120 },
//!         { "from": "A", "to": "C", "seconds": 300 }
//!     ]
//! }"#).unwrap();
//!
//! let router =
//!     loader::load_network(&doc, DuplicateNamePolicy::Merge, PlannerConfig::default()).unwrap();
//! let route = router
//!     .find_shortest_path("Alpha", "Charlie", Algorithm::AStar)
//!     .unwrap();
//!
//! assert_eq!(route.total, 180);
//! assert_eq!(render_path(&router, &route), "Alpha -> Bravo -> Charlie");
//! ```

pub mod domain;
pub mod loader;
pub mod network;
pub mod planner;
pub mod present;
