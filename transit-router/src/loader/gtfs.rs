//! GTFS `stops.txt` / `stop_times.txt` reader.
//!
//! Only the columns needed to build a static travel-time graph are read.
//! Every pair of consecutive calls on a trip becomes one travel-time record:
//! departure from the earlier stop to arrival at the later one.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::config::LoaderConfig;
use super::error::LoadError;
use super::source::{NetworkSource, StopRecord, TravelTimeRecord};

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct FeedStop {
    stop_id: String,
    stop_name: String,
    stop_lat: String,
    stop_lon: String,
    parent_station: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct FeedStopTime {
    trip_id: String,
    arrival_time: String,
    departure_time: String,
    stop_id: String,
    stop_sequence: String,
}

/// A GTFS feed held in memory.
#[derive(Debug, Clone)]
pub struct GtfsSource {
    stops: Vec<FeedStop>,
    stop_times: Vec<FeedStopTime>,
    fold_platforms: bool,
}

impl GtfsSource {
    /// Read the files named in `config`.
    pub fn open(config: &LoaderConfig) -> Result<Self, LoadError> {
        let stops = read_csv(open(&config.stops_path)?, &config.stops_path)?;
        let stop_times = read_csv(open(&config.stop_times_path)?, &config.stop_times_path)?;

        debug!(
            stops = stops.len(),
            stop_times = stop_times.len(),
            "read GTFS feed"
        );

        Ok(Self {
            stops,
            stop_times,
            fold_platforms: config.fold_platforms,
        })
    }

    /// Parse a feed from any pair of readers (files, in-memory buffers, zip entries).
    pub fn from_readers<S: Read, T: Read>(
        stops: S,
        stop_times: T,
        fold_platforms: bool,
    ) -> Result<Self, LoadError> {
        Ok(Self {
            stops: read_csv(stops, Path::new("stops.txt"))?,
            stop_times: read_csv(stop_times, Path::new("stop_times.txt"))?,
            fold_platforms,
        })
    }

    /// Map from platform code to parent station code, for parents present in the feed.
    fn parents(&self) -> HashMap<&str, &str> {
        if !self.fold_platforms {
            return HashMap::new();
        }
        let known: HashSet<&str> = self.stops.iter().map(|s| s.stop_id.as_str()).collect();
        self.stops
            .iter()
            .filter(|s| !s.parent_station.is_empty() && known.contains(s.parent_station.as_str()))
            .map(|s| (s.stop_id.as_str(), s.parent_station.as_str()))
            .collect()
    }
}

impl NetworkSource for GtfsSource {
    type Error = LoadError;

    fn stops(&self) -> Result<Vec<StopRecord>, Self::Error> {
        let parents = self.parents();
        let mut records = Vec::with_capacity(self.stops.len());

        for stop in &self.stops {
            if parents.contains_key(stop.stop_id.as_str()) {
                continue;
            }
            let mut record = StopRecord::new(stop.stop_id.clone(), stop.stop_name.clone());
            let lat = parse_degrees("stop_lat", &stop.stop_lat)?;
            let lon = parse_degrees("stop_lon", &stop.stop_lon)?;
            if let (Some(lat), Some(lon)) = (lat, lon) {
                record = record.at(lat, lon);
            }
            records.push(record);
        }

        Ok(records)
    }

    fn travel_times(&self) -> Result<Vec<TravelTimeRecord>, Self::Error> {
        let parents = self.parents();
        let fold = |code: &str| -> String {
            parents.get(code).copied().unwrap_or(code).to_string()
        };

        let mut trips: BTreeMap<&str, Vec<(u32, &FeedStopTime)>> = BTreeMap::new();
        for st in &self.stop_times {
            let sequence: u32 = st
                .stop_sequence
                .parse()
                .map_err(|_| LoadError::invalid("stop_sequence", &st.stop_sequence, "not an integer"))?;
            trips.entry(st.trip_id.as_str()).or_default().push((sequence, st));
        }

        let mut records = Vec::new();
        let mut skipped = 0usize;

        for calls in trips.values_mut() {
            calls.sort_by_key(|(sequence, _)| *sequence);

            for pair in calls.windows(2) {
                let (prev, next) = (pair[0].1, pair[1].1);
                let from = fold(&prev.stop_id);
                let to = fold(&next.stop_id);
                if from == to {
                    continue;
                }

                let departs = first_non_empty(&prev.departure_time, &prev.arrival_time);
                let arrives = first_non_empty(&next.arrival_time, &next.departure_time);
                let (Some(departs), Some(arrives)) = (departs, arrives) else {
                    skipped += 1;
                    continue;
                };

                let seconds = parse_gtfs_time(arrives)?
                    .checked_sub(parse_gtfs_time(departs)?)
                    .ok_or_else(|| LoadError::invalid("time", arrives, "out of range"))?;
                records.push(TravelTimeRecord::new(from, to, seconds));
            }
        }

        if skipped > 0 {
            warn!(skipped, "skipped hops with no arrival or departure time");
        }
        debug!(
            trips = trips.len(),
            records = records.len(),
            skipped,
            "derived travel times from stop_times"
        );

        Ok(records)
    }
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_csv<T: DeserializeOwned, R: Read>(reader: R, path: &Path) -> Result<Vec<T>, LoadError> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| LoadError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

fn first_non_empty<'a>(a: &'a str, b: &'a str) -> Option<&'a str> {
    [a, b].into_iter().find(|s| !s.is_empty())
}

fn parse_degrees(field: &'static str, value: &str) -> Result<Option<f64>, LoadError> {
    if value.is_empty() {
        return Ok(None);
    }
    let degrees: f64 = value
        .parse()
        .map_err(|_| LoadError::invalid(field, value, "not a number"))?;
    if !degrees.is_finite() || degrees.abs() > 180.0 {
        return Err(LoadError::invalid(field, value, "out of range"));
    }
    Ok(Some(degrees))
}

/// Parse a GTFS `H:MM:SS` time into seconds after midnight.
///
/// Hours may exceed 23 for trips that run past midnight.
pub fn parse_gtfs_time(s: &str) -> Result<i64, LoadError> {
    let mut parts = s.split(':');
    let (Some(h), Some(m), Some(sec), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(LoadError::invalid("time", s, "expected H:MM:SS"));
    };

    let number = |part: &str, max: Option<i64>, what: &str| -> Result<i64, LoadError> {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LoadError::invalid("time", s, format!("invalid {what} digits")));
        }
        let value: i64 = part
            .parse()
            .map_err(|_| LoadError::invalid("time", s, format!("invalid {what} digits")))?;
        if max.is_some_and(|max| value > max) {
            return Err(LoadError::invalid("time", s, format!("{what} must be 0-59")));
        }
        Ok(value)
    };

    if m.len() != 2 || sec.len() != 2 {
        return Err(LoadError::invalid("time", s, "expected H:MM:SS"));
    }

    let hours = number(h, None, "hour")?;
    let minutes = number(m, Some(59), "minute")?;
    let seconds = number(sec, Some(59), "second")?;

    hours
        .checked_mul(3600)
        .and_then(|h| h.checked_add(minutes * 60 + seconds))
        .ok_or_else(|| LoadError::invalid("time", s, "out of range"))
}
