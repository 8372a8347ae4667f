//! Doors: gated exits that carry a lazily created [`Path`].

use delve_types::{Capabilities, DoorId, Gate, PlaceId};
use serde::{Deserialize, Serialize};

use crate::error::WorldError;
use crate::path::Path;

/// A door between two places.
///
/// Both places list the door's id among their exits, so they share the one
/// path the door carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    /// Unique identifier.
    pub id: DoorId,
    /// Display name.
    pub name: String,
    /// Open/closed state.
    pub gate: Gate,
    /// Link to the places on either side, created on first opening.
    pub path: Option<Path>,
}

impl Door {
    /// Create a closed door with no path yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: DoorId::new(),
            name: name.into(),
            gate: Gate::closed(),
            path: None,
        }
    }

    /// Make sure the door has a path, starting it at `place` if it has none.
    ///
    /// Returns `true` if a new path was created.
    pub fn ensure_path(&mut self, place: PlaceId) -> bool {
        if self.path.is_some() {
            return false;
        }
        self.path = Some(Path::starting_at(place));
        true
    }

    /// Link `from` and `to` through this door.
    ///
    /// Creates the path at `from` if needed, then attaches `to`. On error the
    /// door is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::SelfLink`] if `from == to`, or
    /// [`WorldError::PathComplete`] if the path already has an end that is
    /// neither `from` nor `to`.
    pub fn link(&mut self, from: PlaceId, to: PlaceId) -> Result<(), WorldError> {
        if from == to {
            return Err(WorldError::SelfLink {
                door: self.id,
                place: from,
            });
        }
        if let Some(path) = &self.path {
            if path.places().iter().any(|&end| end != from && end != to) {
                return Err(WorldError::PathComplete { door: self.id });
            }
        }

        let door = self.id;
        let path = self.path.get_or_insert_with(|| Path::starting_at(from));
        if !path.connect(from) || !path.connect(to) {
            return Err(WorldError::PathComplete { door });
        }
        Ok(())
    }
}

impl Capabilities for Door {
    fn gate(&self) -> Option<Gate> {
        Some(self.gate)
    }
}
