//! Planner configuration.

use std::fmt;
use std::str::FromStr;

/// Which remaining-time estimate A* should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeuristicKind {
    /// Always estimate zero. A* behaves exactly like Dijkstra.
    #[default]
    Zero,
    /// Straight-line distance over the fastest speed seen in the network.
    ///
    /// Needs coordinates for every stop; otherwise the router falls back to
    /// [`HeuristicKind::Zero`].
    Geographic,
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeuristicKind::Zero => f.write_str("zero"),
            HeuristicKind::Geographic => f.write_str("geographic"),
        }
    }
}

impl FromStr for HeuristicKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zero" => Ok(HeuristicKind::Zero),
            "geographic" | "geo" => Ok(HeuristicKind::Geographic),
            other => Err(format!("unknown heuristic: {other}")),
        }
    }
}

/// Configuration parameters for route search.
#[derive(Debug, Clone, Default)]
pub struct PlannerConfig {
    /// Remaining-time estimate used by A*.
    pub heuristic: HeuristicKind,
}

impl PlannerConfig {
    /// Create a new configuration with the given heuristic.
    pub fn new(heuristic: HeuristicKind) -> Self {
        Self { heuristic }
    }

    /// Set the heuristic.
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();
        assert_eq!(config.heuristic, HeuristicKind::Zero);
    }

    #[test]
    fn custom_config() {
        let config = PlannerConfig::new(HeuristicKind::Geographic);
        assert_eq!(config.heuristic, HeuristicKind::Geographic);

        let config = PlannerConfig::default().with_heuristic(HeuristicKind::Geographic);
        assert_eq!(config.heuristic, HeuristicKind::Geographic);
    }

    #[test]
    fn heuristic_parse_and_display() {
        assert_eq!("zero".parse(), Ok(HeuristicKind::Zero));
        assert_eq!("Geographic".parse(), Ok(HeuristicKind::Geographic));
        assert_eq!("geo".parse(), Ok(HeuristicKind::Geographic));
        assert!("manhattan".parse::<HeuristicKind>().is_err());

        assert_eq!(HeuristicKind::Zero.to_string(), "zero");
        assert_eq!(HeuristicKind::Geographic.to_string(), "geographic");
    }
}
