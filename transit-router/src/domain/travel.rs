//! Travel-time edges.

use super::StopId;

/// Travel time in whole seconds.
pub type Seconds = u64;

/// A directed connection between two stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: StopId,
    pub to: StopId,
    pub seconds: Seconds,
}

impl Edge {
    pub fn new(from: StopId, to: StopId, seconds: Seconds) -> Self {
        Self { from, to, seconds }
    }

    /// Returns true if the edge starts and ends at the same stop.
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
}
