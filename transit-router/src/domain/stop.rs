//! Stop identifiers and records.

use std::fmt;

const R_EARTH_M: f64 = 6_371_008.8;

/// Dense index of a stop inside a [`StopRegistry`](crate::network::StopRegistry).
///
/// Ids are handed out by the registry in registration order and are only
/// meaningful for the registry that issued them. Searches key every table on
/// this index, so the inner loop never compares strings.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(u32);

impl StopId {
    pub(crate) fn new(index: usize) -> Self {
        debug_assert!(
            u32::try_from(index).is_ok(),
            "stop index {index} does not fit in a StopId"
        );
        Self(index as u32)
    }

    /// Returns the position of this stop in registry order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A position on the earth's surface in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to `other` in metres.
    pub fn distance_m(&self, other: &Coordinates) -> f64 {
        let a = self.to_unit();
        let b = other.to_unit();
        let chord2 = (a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2) + (a[2] - b[2]).powi(2);
        chord2_to_meters(chord2)
    }

    fn to_unit(self) -> [f64; 3] {
        let (lat, lon) = (self.lat.to_radians(), self.lon.to_radians());
        let (clat, clon, slat, slon) = (lat.cos(), lon.cos(), lat.sin(), lon.sin());
        [clat * clon, clat * slon, slat]
    }
}

#[inline]
fn chord2_to_meters(chord2: f64) -> f64 {
    let c = chord2.sqrt();
    // chord can exceed 2.0 by a rounding error for antipodal points
    let theta = 2.0 * (c / 2.0).min(1.0).asin();
    R_EARTH_M * theta
}

/// A registered stop.
///
/// `code` is the identifier used by timetable data (e.g. a GTFS `stop_id`),
/// `name` is what people type when asking for a route.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    pub id: StopId,
    pub code: String,
    pub name: String,
    pub coordinates: Option<Coordinates>,
}

impl Stop {
    pub fn new(id: StopId, code: String, name: String, coordinates: Option<Coordinates>) -> Self {
        Self {
            id,
            code,
            name,
            coordinates,
        }
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.code)
    }
}
