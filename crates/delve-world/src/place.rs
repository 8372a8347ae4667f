//! Places: rooms and clearings that groups travel between.
//!
//! A place starts out undiscovered: no location, no boxes, no creatures. Its
//! contents are generated once, the first time a group arrives.

use delve_types::{Character, Container, DoorId, Group, GroupId, PlaceId};
use serde::{Deserialize, Serialize};

use crate::location::Location;

/// A node in the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Unique identifier.
    pub id: PlaceId,
    /// Display name.
    pub name: String,
    /// Position on the grid, assigned on first visit.
    pub location: Option<Location>,
    /// Groups currently here.
    pub groups: Vec<Group>,
    /// Containers found here.
    pub boxes: Vec<Container>,
    /// Creatures living here.
    pub creatures: Vec<Character>,
    /// Doors leading out of here.
    pub exits: Vec<DoorId>,
}

impl Place {
    /// Create an empty, unlocated place.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlaceId::new(),
            name: name.into(),
            location: None,
            groups: Vec::new(),
            boxes: Vec::new(),
            creatures: Vec::new(),
            exits: Vec::new(),
        }
    }

    /// Place this at a known location.
    #[must_use]
    pub const fn at(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Look up a group present here.
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Whether a group is present.
    pub fn has_group(&self, id: GroupId) -> bool {
        self.group(id).is_some()
    }

    /// Remove a group by id, returning it.
    pub fn remove_group(&mut self, id: GroupId) -> Option<Group> {
        let index = self.groups.iter().position(|g| g.id == id)?;
        Some(self.groups.remove(index))
    }

    /// Record a door as an exit, once.
    pub fn add_exit(&mut self, door: DoorId) {
        if !self.exits.contains(&door) {
            self.exits.push(door);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_place_is_undiscovered() {
        let place = Place::new("cellar");
        assert!(place.location.is_none());
        assert!(place.boxes.is_empty());
        assert!(place.creatures.is_empty());
        assert!(place.groups.is_empty());
    }

    #[test]
    fn groups_come_and_go_by_id() {
        let mut place = Place::new("cellar");
        let group = Group::new(Vec::new());
        let id = group.id;
        place.groups.push(group);
        assert!(place.has_group(id));
        assert_eq!(place.remove_group(id).map(|g| g.id), Some(id));
        assert!(!place.has_group(id));
        assert!(place.remove_group(id).is_none());
    }

    #[test]
    fn exits_are_not_duplicated() {
        let mut place = Place::new("hall");
        let door = DoorId::new();
        place.add_exit(door);
        place.add_exit(door);
        assert_eq!(place.exits, vec![door]);
    }
}
