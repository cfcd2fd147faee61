//! Stop lookup by code, name and id.

use std::collections::HashMap;

use crate::domain::{Coordinates, RoutingError, Stop, StopId};

/// Bidirectional mapping between stops, their timetable codes and their names.
///
/// Every registered stop has exactly one code and one name, and no two stops
/// share either. Extra codes can be attached to an existing stop with
/// [`alias`](Self::alias), which is how platform-level feeds are merged into
/// one passenger-facing stop.
///
/// # Examples
///
/// ```
/// use transit_router::network::StopRegistry;
///
/// let mut registry = StopRegistry::new();
/// let id = registry.register("127", "Times Sq-42 St").unwrap();
///
/// assert_eq!(registry.id_for("Times Sq-42 St").unwrap(), id);
/// assert_eq!(registry.name_for(id).unwrap(), "Times Sq-42 St");
/// assert!(registry.exists("Times Sq-42 St"));
/// assert!(!registry.exists("Atlantis"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StopRegistry {
    stops: Vec<Stop>,
    /// Primary codes and aliases.
    by_code: HashMap<String, StopId>,
    by_name: HashMap<String, StopId>,
}

impl StopRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stop without coordinates.
    ///
    /// See [`register_with`](Self::register_with).
    pub fn register(
        &mut self,
        code: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<StopId, RoutingError> {
        self.register_with(code, name, None)
    }

    /// Register a stop.
    ///
    /// Re-registering the exact same (code, name) pair returns the existing
    /// id. If either the code or the name is already bound to something else
    /// the call fails with [`RoutingError::DuplicateStop`] and the registry is
    /// left unchanged.
    pub fn register_with(
        &mut self,
        code: impl Into<String>,
        name: impl Into<String>,
        coordinates: Option<Coordinates>,
    ) -> Result<StopId, RoutingError> {
        let code = code.into();
        let name = name.into();

        match (self.by_code.get(&code), self.by_name.get(&name)) {
            (Some(a), Some(b)) if a == b => Ok(*a),
            (None, None) => {
                let id = StopId::new(self.stops.len());
                self.by_code.insert(code.clone(), id);
                self.by_name.insert(name.clone(), id);
                self.stops.push(Stop::new(id, code, name, coordinates));
                Ok(id)
            }
            _ => Err(RoutingError::DuplicateStop { code, name }),
        }
    }

    /// Bind an additional code to an existing stop.
    ///
    /// Aliasing a code to the stop it already resolves to is a no-op.
    pub fn alias(&mut self, code: impl Into<String>, id: StopId) -> Result<(), RoutingError> {
        let code = code.into();
        let stop = self
            .get(id)
            .ok_or_else(|| RoutingError::UnknownStop(id.to_string()))?;

        match self.by_code.get(&code) {
            Some(&existing) if existing == id => Ok(()),
            Some(_) => Err(RoutingError::DuplicateStop {
                code,
                name: stop.name.clone(),
            }),
            None => {
                self.by_code.insert(code, id);
                Ok(())
            }
        }
    }

    /// Look up a stop id by display name.
    pub fn id_for(&self, name: &str) -> Result<StopId, RoutingError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| RoutingError::UnknownStop(name.to_string()))
    }

    /// Look up a stop id by timetable code or alias.
    pub fn resolve(&self, code: &str) -> Result<StopId, RoutingError> {
        self.by_code
            .get(code)
            .copied()
            .ok_or_else(|| RoutingError::UnknownStop(code.to_string()))
    }

    /// Look up a stop's display name.
    pub fn name_for(&self, id: StopId) -> Result<&str, RoutingError> {
        self.get(id)
            .map(|s| s.name.as_str())
            .ok_or_else(|| RoutingError::UnknownStop(id.to_string()))
    }

    /// Look up a stop's primary timetable code.
    pub fn code_for(&self, id: StopId) -> Result<&str, RoutingError> {
        self.get(id)
            .map(|s| s.code.as_str())
            .ok_or_else(|| RoutingError::UnknownStop(id.to_string()))
    }

    /// Check whether a stop with this display name exists.
    pub fn exists(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Check whether `id` was issued by this registry.
    pub fn contains(&self, id: StopId) -> bool {
        id.index() < self.stops.len()
    }

    pub fn get(&self, id: StopId) -> Option<&Stop> {
        self.stops.get(id.index())
    }

    /// Returns the number of stops (aliases are not counted).
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Iterate over stops in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter()
    }

    /// Rank of each stop's code in lexicographic order, indexed by id.
    ///
    /// Used as the frontier tie-break so equal-cost entries are expanded in
    /// code order without comparing strings during the search.
    pub fn lexical_ranks(&self) -> Vec<u32> {
        let mut order: Vec<&Stop> = self.stops.iter().collect();
        order.sort_by(|a, b| a.code.cmp(&b.code));

        let mut ranks = vec![0; self.stops.len()];
        for (rank, stop) in order.into_iter().enumerate() {
            ranks[stop.id.index()] = rank as u32;
        }
        ranks
    }

    /// Coordinates for every stop in id order, or `None` if any stop lacks them.
    pub fn positions(&self) -> Option<Vec<Coordinates>> {
        self.stops.iter().map(|s| s.coordinates).collect()
    }
}
