//! Opening containers and doors.
//!
//! A container opens for an actor whose dexterity reaches a fraction of the
//! average dexterity of the items inside. A door currently opens for anyone;
//! the permission check is kept as its own predicate, [`door_permits`]. Both
//! kinds of gate stay open once opened: re-opening always succeeds.
//!
//! Opening a door also gives it a path if it has none. The path starts at the
//! place the door was opened from and is completed with the far side through
//! [`delve_world::World::link`].

use delve_types::{Capabilities, Container, PlaceId};
use delve_world::Door;
use tracing::debug;

use crate::config::ActionConfig;
use crate::result::{ActionResult, Rejection};

/// Dexterity an actor needs to open `container`.
///
/// The average item dexterity times the configured unlock factor. Items
/// without dexterity count as 0, and an empty container needs 0.
pub fn unlock_threshold(container: &Container, config: &ActionConfig) -> f64 {
    container
        .items
        .average_dexterity()
        .map_or(0.0, |average| average * config.unlock_factor)
}

/// Try to open a container.
///
/// The gate is set to the outcome, so a failed attempt leaves a closed
/// container closed and an open container is never closed. An actor without
/// a dexterity capability counts as dexterity 0.
pub fn open_box<A>(container: &mut Container, actor: &A, config: &ActionConfig) -> ActionResult
where
    A: Capabilities + ?Sized,
{
    let threshold = unlock_threshold(container, config);
    let dexterity = actor.dexterity().unwrap_or(0.0);
    let can_open = dexterity >= threshold || container.gate.is_open();

    container.gate.set_open(can_open);
    debug!(
        container = %container.id,
        threshold,
        dexterity,
        can_open,
        "Open box attempted"
    );

    if can_open {
        ActionResult::succeeded()
    } else {
        ActionResult::rejected(Rejection::Dexterity)
    }
}

/// Whether `actor` may open `door`.
///
/// No door refuses anyone yet.
pub const fn door_permits<A>(_door: &Door, _actor: &A) -> bool
where
    A: Capabilities + ?Sized,
{
    true
}

/// Open a door from `place`.
///
/// Whatever the outcome, a door without a path gets one starting at `place`.
pub fn open_door<A>(door: &mut Door, actor: &A, place: PlaceId) -> ActionResult
where
    A: Capabilities + ?Sized,
{
    let can_open = door_permits(door, actor) || door.gate.is_open();
    door.gate.set_open(can_open);

    if door.ensure_path(place) {
        debug!(door = %door.id, place = %place, "Path created");
    }

    if can_open {
        ActionResult::succeeded()
    } else {
        ActionResult::rejected(Rejection::Unknown)
    }
}
