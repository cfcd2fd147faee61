//! Loader configuration.

use std::path::PathBuf;

/// What to do when two stops in the feed share a display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateNamePolicy {
    /// Treat the later stop's code as an alias of the first stop.
    #[default]
    Merge,
    /// Fail the load with [`RoutingError::DuplicateStop`](crate::domain::RoutingError::DuplicateStop).
    Reject,
}

/// Configuration for reading a network from disk.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Path to GTFS `stops.txt`.
    pub stops_path: PathBuf,

    /// Path to GTFS `stop_times.txt`.
    pub stop_times_path: PathBuf,

    /// Fold platforms (stops with a `parent_station`) into their parent.
    pub fold_platforms: bool,

    /// How to handle stops that share a display name.
    pub duplicate_names: DuplicateNamePolicy,
}

impl LoaderConfig {
    /// Create a config for the given GTFS files with default options.
    pub fn new(stops_path: impl Into<PathBuf>, stop_times_path: impl Into<PathBuf>) -> Self {
        Self {
            stops_path: stops_path.into(),
            stop_times_path: stop_times_path.into(),
            fold_platforms: true,
            duplicate_names: DuplicateNamePolicy::default(),
        }
    }

    /// Enable or disable platform folding.
    pub fn with_fold_platforms(mut self, fold: bool) -> Self {
        self.fold_platforms = fold;
        self
    }

    /// Set the duplicate-name policy.
    pub fn with_duplicate_names(mut self, policy: DuplicateNamePolicy) -> Self {
        self.duplicate_names = policy;
        self
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::new("transit_data/stops.txt", "transit_data/stop_times.txt")
    }
}
