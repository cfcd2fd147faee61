//! Record sources that feed the network loader.

use serde::{Deserialize, Serialize};

/// A stop definition as read from the outside world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

impl StopRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            lat: None,
            lon: None,
        }
    }

    pub fn at(mut self, lat: f64, lon: f64) -> Self {
        self.lat = Some(lat);
        self.lon = Some(lon);
        self
    }
}

/// A directed stop-to-stop travel time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelTimeRecord {
    pub from: String,
    pub to: String,
    pub seconds: i64,
}

impl TravelTimeRecord {
    pub fn new(from: impl Into<String>, to: impl Into<String>, seconds: i64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            seconds,
        }
    }
}

/// Anything that can produce stop and travel-time records.
pub trait NetworkSource {
    type Error;

    /// Returns stop definitions in load order.
    fn stops(&self) -> Result<Vec<StopRecord>, Self::Error>;

    /// Returns travel times (any order; duplicates allowed).
    fn travel_times(&self) -> Result<Vec<TravelTimeRecord>, Self::Error>;
}
