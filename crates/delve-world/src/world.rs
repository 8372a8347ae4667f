//! The world aggregate: every place, indexed by id and by location.
//!
//! [`World`] owns all places. Places that have been visited are also indexed
//! by their [`Location`], and the world remembers which location the party
//! currently stands in. The location index and the current location are only
//! changed together, through [`World::enter`].

use std::collections::BTreeMap;

use delve_types::PlaceId;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::door::Door;
use crate::error::WorldError;
use crate::location::Location;
use crate::place::Place;

/// Process-wide world state for one simulation session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct World {
    /// All places, discovered or not.
    places: BTreeMap<PlaceId, Place>,
    /// Discovered places by grid location.
    locations: BTreeMap<Location, PlaceId>,
    /// Location of the place the party is in.
    current: Option<Location>,
}

impl World {
    /// Create an empty world.
    pub const fn new() -> Self {
        Self {
            places: BTreeMap::new(),
            locations: BTreeMap::new(),
            current: None,
        }
    }

    // -------------------------------------------------------------------
    // Places
    // -------------------------------------------------------------------

    /// Add a place. A place that already has a location is indexed under it.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicatePlace`] if the id is already present, or
    /// [`WorldError::LocationTaken`] if another place occupies its location.
    pub fn add_place(&mut self, place: Place) -> Result<PlaceId, WorldError> {
        let id = place.id;
        if self.places.contains_key(&id) {
            return Err(WorldError::DuplicatePlace(id));
        }
        if let Some(location) = place.location {
            if let Some(&occupant) = self.locations.get(&location) {
                return Err(WorldError::LocationTaken { location, occupant });
            }
            self.locations.insert(location, id);
        }
        self.places.insert(id, place);
        Ok(id)
    }

    /// Get a place by id.
    pub fn place(&self, id: PlaceId) -> Option<&Place> {
        self.places.get(&id)
    }

    /// Get a mutable place by id.
    pub fn place_mut(&mut self, id: PlaceId) -> Option<&mut Place> {
        self.places.get_mut(&id)
    }

    // -------------------------------------------------------------------
    // Locations
    // -------------------------------------------------------------------

    /// Id of the place registered at `location`.
    pub fn place_id_at(&self, location: Location) -> Option<PlaceId> {
        self.locations.get(&location).copied()
    }

    /// The place registered at `location`.
    pub fn place_at(&self, location: Location) -> Option<&Place> {
        self.place_id_at(location).and_then(|id| self.places.get(&id))
    }

    /// Whether any place is registered at `location`.
    pub fn is_occupied(&self, location: Location) -> bool {
        self.locations.contains_key(&location)
    }

    /// Number of discovered (indexed) places.
    pub fn discovered_count(&self) -> usize {
        self.locations.len()
    }

    /// Location the party is currently in.
    pub const fn current_location(&self) -> Option<Location> {
        self.current
    }

    /// The place the party is currently in.
    pub fn current_place(&self) -> Option<&Place> {
        self.current.and_then(|location| self.place_at(location))
    }

    /// Make `place` the current place, registering it at `location`.
    ///
    /// The place's own location is set to `location` as well. Entering a
    /// place at the location it already holds is a no-op for the index.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::PlaceNotFound`] for an unknown place, or
    /// [`WorldError::LocationTaken`] if a different place is registered at
    /// `location`.
    pub fn enter(&mut self, place: PlaceId, location: Location) -> Result<(), WorldError> {
        if let Some(&occupant) = self.locations.get(&location) {
            if occupant != place {
                return Err(WorldError::LocationTaken { location, occupant });
            }
        }
        let entry = self
            .places
            .get_mut(&place)
            .ok_or(WorldError::PlaceNotFound(place))?;
        if let Some(previous) = entry.location.replace(location) {
            if previous != location {
                self.locations.remove(&previous);
            }
        }
        self.locations.insert(location, place);
        self.current = Some(location);
        Ok(())
    }

    // -------------------------------------------------------------------
    // Doors
    // -------------------------------------------------------------------

    /// Connect two places through `door`.
    ///
    /// Completes (or creates) the door's path and records the door as an
    /// exit of both places.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::PlaceNotFound`] if either place is unknown, or
    /// the door's own linking errors.
    pub fn link(&mut self, door: &mut Door, from: PlaceId, to: PlaceId) -> Result<(), WorldError> {
        for id in [from, to] {
            if !self.places.contains_key(&id) {
                return Err(WorldError::PlaceNotFound(id));
            }
        }
        door.link(from, to)?;
        for id in [from, to] {
            if let Some(place) = self.places.get_mut(&id) {
                place.add_exit(door.id);
            }
        }
        debug!(door = %door.id, from = %from, to = %to, "Door linked");
        Ok(())
    }
}
