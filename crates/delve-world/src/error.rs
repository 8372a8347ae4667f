//! Error types for the `delve-world` crate.
//!
//! These cover misuse while building or wiring the world (unknown places,
//! clashing locations, over-full paths). Rule failures during actions are not
//! errors; they are reported through action results.

use delve_types::{DoorId, PlaceId};

use crate::location::Location;

/// Errors that can occur while building or wiring the world.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WorldError {
    /// A place was not found in the world.
    #[error("place not found: {0}")]
    PlaceNotFound(PlaceId),

    /// A place with this id was already added.
    #[error("duplicate place id: {0}")]
    DuplicatePlace(PlaceId),

    /// Another place is already registered at this location.
    #[error("location {location} is already occupied by place {occupant}")]
    LocationTaken {
        /// The contested location.
        location: Location,
        /// The place already registered there.
        occupant: PlaceId,
    },

    /// The door's path already links two other places.
    #[error("door {door} already links two places")]
    PathComplete {
        /// The door whose path is full.
        door: DoorId,
    },

    /// A path cannot connect a place to itself.
    #[error("door {door} cannot link place {place} to itself")]
    SelfLink {
        /// The door being linked.
        door: DoorId,
        /// The place on both ends.
        place: PlaceId,
    },
}
