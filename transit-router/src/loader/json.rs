//! Hand-written networks in JSON.
//!
//! ```json
//! {
//!   "stops": [{ "id": "A", "name": "Alpha", "lat": 40.0, "lon": -74.0 }],
//!   "travel_times": [{ "from": "A", "to": "B", "seconds": 60 }]
//! }
//! ```

use std::convert::Infallible;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::LoadError;
use super::source::{NetworkSource, StopRecord, TravelTimeRecord};

/// A complete network as a single document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkDocument {
    pub stops: Vec<StopRecord>,
    #[serde(default)]
    pub travel_times: Vec<TravelTimeRecord>,
}

impl NetworkDocument {
    /// Parse a document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }
}

impl NetworkSource for NetworkDocument {
    type Error = Infallible;

    fn stops(&self) -> Result<Vec<StopRecord>, Self::Error> {
        Ok(self.stops.clone())
    }

    fn travel_times(&self) -> Result<Vec<TravelTimeRecord>, Self::Error> {
        Ok(self.travel_times.clone())
    }
}
