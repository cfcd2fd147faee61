//! Network loading.
//!
//! A [`NetworkSource`] yields raw stop and travel-time records;
//! [`load_network`] turns them into a ready [`TransitRouter`]. Two sources
//! ship with the crate: [`GtfsSource`] for GTFS feeds on disk and
//! [`NetworkDocument`] for small hand-written networks.

mod config;
mod error;
mod gtfs;
mod json;
mod source;

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use tracing::{info, warn};

use crate::domain::{Coordinates, RoutingError, StopId};
use crate::network::NetworkBuilder;
use crate::planner::{PlannerConfig, TransitRouter};

pub use config::{DuplicateNamePolicy, LoaderConfig};
pub use error::LoadError;
pub use gtfs::{GtfsSource, parse_gtfs_time};
pub use json::NetworkDocument;
pub use source::{NetworkSource, StopRecord, TravelTimeRecord};

/// Build a router from any record source.
///
/// Stops are registered in source order. When several records describe the
/// same directed stop pair, the fastest one wins.
pub fn load_network<S>(
    source: &S,
    duplicate_names: DuplicateNamePolicy,
    planner: PlannerConfig,
) -> Result<TransitRouter, LoadError>
where
    S: NetworkSource,
    LoadError: From<S::Error>,
{
    let mut builder = NetworkBuilder::new();
    let mut merged = 0usize;

    for record in source.stops()? {
        let coordinates = match (record.lat, record.lon) {
            (Some(lat), Some(lon)) => Some(Coordinates::new(lat, lon)),
            _ => None,
        };

        match builder.add_stop(record.id.clone(), record.name.clone(), coordinates) {
            Ok(_) => {}
            Err(err @ RoutingError::DuplicateStop { .. }) => match duplicate_names {
                DuplicateNamePolicy::Reject => return Err(err.into()),
                DuplicateNamePolicy::Merge => {
                    let target = builder.registry().id_for(&record.name);
                    match target.and_then(|id| builder.alias(record.id.clone(), id)) {
                        Ok(()) => {
                            merged += 1;
                            warn!(
                                code = %record.id,
                                name = %record.name,
                                "merged stop into existing stop with the same name"
                            );
                        }
                        Err(_) => {
                            warn!(
                                code = %record.id,
                                name = %record.name,
                                "stop code already bound to a different stop, ignoring record"
                            );
                        }
                    }
                }
            },
            Err(err) => return Err(err.into()),
        }
    }

    // Keyed on resolved ids so aliases of one stop compete for the same edge.
    let mut fastest: BTreeMap<(StopId, StopId), TravelTimeRecord> = BTreeMap::new();
    let mut records = 0usize;
    for record in source.travel_times()? {
        records += 1;
        let registry = builder.registry();
        let key = registry
            .resolve(&record.from)
            .and_then(|from| Ok((from, registry.resolve(&record.to)?)))
            .map_err(|_| RoutingError::DanglingEdge {
                from: record.from.clone(),
                to: record.to.clone(),
            })?;
        match fastest.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => {
                if record.seconds < slot.get().seconds {
                    slot.insert(record);
                }
            }
        }
    }

    for record in fastest.values() {
        builder.add_travel_time(&record.from, &record.to, record.seconds)?;
    }

    info!(
        stops = builder.registry().len(),
        merged,
        records,
        edges = builder.graph().edge_count(),
        "loaded network"
    );

    Ok(builder.build(planner)?)
}

/// Read a GTFS feed from disk and build a router.
pub fn load_gtfs(config: &LoaderConfig, planner: PlannerConfig) -> Result<TransitRouter, LoadError> {
    let source = GtfsSource::open(config)?;
    load_network(&source, config.duplicate_names, planner)
}
