//! Relocation: a group leaves a place through a door.
//!
//! The group walks the door's path to the place on the other side. If that
//! place has never been visited it gets a location next to the one the group
//! came from, and its empty box and creature collections are filled with
//! content scaled to the group's average attributes. The destination becomes
//! the world's current place.
//!
//! Every precondition is checked before anything changes, so a refused
//! relocation leaves the world exactly as it was.

use delve_types::{GroupId, PlaceId};
use delve_world::{Door, Location, LocationAllocator, World};
use tracing::{info, warn};

use crate::config::ActionConfig;
use crate::factory::ContentFactory;
use crate::random::RandomSource;
use crate::result::{ActionResult, Rejection};

/// Collaborators a relocation draws on.
pub struct Services<'a> {
    /// Builds boxes and creatures for newly discovered places.
    pub content: &'a dyn ContentFactory,
    /// Picks locations for newly discovered places.
    pub locations: &'a mut dyn LocationAllocator,
    /// Draws batch sizes.
    pub rng: &'a mut dyn RandomSource,
    /// Batch ranges.
    pub config: &'a ActionConfig,
}

impl core::fmt::Debug for Services<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Services")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Move `group` from `origin` through `door` to the place on the other side.
///
/// Batch sizes for boxes and creatures are drawn on every call, whether or
/// not the destination needs new content, so a seeded generator advances the
/// same way regardless of visit history.
///
/// Refusals:
/// - `place-not-found` -- `origin` is not in the world
/// - `no-linked-place` -- the door has no complete path from `origin` to a
///   place in the world
/// - `group-not-present` -- `group` is not at `origin`
pub fn leave(
    door: &Door,
    group: GroupId,
    origin: PlaceId,
    world: &mut World,
    services: &mut Services<'_>,
) -> ActionResult {
    match plan(door, group, origin, world) {
        Ok(plan) => execute(&plan, world, services),
        Err(reason) => {
            info!(
                door = %door.id,
                group = %group,
                origin = %origin,
                reason = reason.code(),
                "Leave refused"
            );
            ActionResult::rejected(reason)
        }
    }
}

/// A validated relocation.
struct Plan {
    group: GroupId,
    origin: PlaceId,
    origin_location: Location,
    destination: PlaceId,
}

fn plan(door: &Door, group: GroupId, origin: PlaceId, world: &World) -> Result<Plan, Rejection> {
    let origin_place = world.place(origin).ok_or(Rejection::PlaceNotFound)?;

    let destination = door
        .path
        .as_ref()
        .and_then(|path| path.other_end(origin))
        .filter(|&id| world.place(id).is_some())
        .ok_or(Rejection::NoLinkedPlace)?;

    if !origin_place.has_group(group) {
        return Err(Rejection::GroupNotPresent);
    }

    Ok(Plan {
        group,
        origin,
        origin_location: origin_place.location.unwrap_or(Location::ORIGIN),
        destination,
    })
}

fn execute(plan: &Plan, world: &mut World, services: &mut Services<'_>) -> ActionResult {
    let config = services.config;
    let box_count = services
        .rng
        .random_int(config.box_batch.min, config.box_batch.max);
    let creature_count = services
        .rng
        .random_int(config.creature_batch.min, config.creature_batch.max);

    let known_location = world.place(plan.destination).and_then(|p| p.location);
    let location = match known_location {
        Some(location) => location,
        None => services.locations.allocate(world, plan.origin_location),
    };

    let seed = world
        .place(plan.origin)
        .and_then(|p| p.group(plan.group))
        .map(delve_types::Group::average)
        .unwrap_or_default();

    // Registering first: it is the only step that can fail, and it fails
    // without touching anything.
    if let Err(error) = world.enter(plan.destination, location) {
        warn!(%error, destination = %plan.destination, "Destination could not be registered");
        return ActionResult::rejected(Rejection::Unknown);
    }

    let Some(moving) = world
        .place_mut(plan.origin)
        .and_then(|p| p.remove_group(plan.group))
    else {
        warn!(group = %plan.group, "Group vanished from origin during relocation");
        return ActionResult::rejected(Rejection::Unknown);
    };

    let Some(destination) = world.place_mut(plan.destination) else {
        warn!(destination = %plan.destination, "Destination vanished during relocation");
        return ActionResult::rejected(Rejection::Unknown);
    };

    let mut boxes_created = 0;
    if destination.boxes.is_empty() {
        destination.boxes = services.content.create_boxes(&seed, box_count);
        boxes_created = destination.boxes.len();
    }

    let mut creatures_created = 0;
    if destination.creatures.is_empty() {
        destination.creatures = services.content.create_creatures(&seed, creature_count);
        creatures_created = destination.creatures.len();
    }

    destination.groups.push(moving);

    info!(
        group = %plan.group,
        from = %plan.origin,
        to = %plan.destination,
        location = %location,
        boxes_created,
        creatures_created,
        "Group relocated"
    );

    ActionResult::succeeded()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::VecDeque;

    use delve_types::{Attributes, Character, CharacterKind, Group};
    use delve_world::{AdjacentAllocator, Place};

    use super::*;
    use crate::factory::SeededFactory;

    /// Rolls handed out in order; falls back to the low bound when exhausted.
    struct Scripted(VecDeque<u32>);

    impl RandomSource for Scripted {
        fn random_int(&mut self, low: u32, high: u32) -> u32 {
            self.0.pop_front().unwrap_or(low).clamp(low.min(high), low.max(high))
        }
    }

    struct Fixture {
        world: World,
        camp: PlaceId,
        cave: PlaceId,
        door: Door,
        party: GroupId,
    }

    fn adventurer() -> Character {
        Character::new(
            "scout",
            CharacterKind::Adventurer,
            Attributes {
                dexterity: 12.0,
                attack: 8,
                defense: 4,
                health: 30,
            },
        )
    }

    fn fixture() -> Fixture {
        let mut world = World::new();
        let mut camp_place = Place::new("camp").at(Location::ORIGIN);
        let party = Group::new(vec![adventurer(), adventurer()]);
        let party_id = party.id;
        camp_place.groups.push(party);
        let camp = world.add_place(camp_place).unwrap();
        let cave = world.add_place(Place::new("cave")).unwrap();
        let mut door = Door::new("hatch");
        world.link(&mut door, camp, cave).unwrap();
        Fixture {
            world,
            camp,
            cave,
            door,
            party: party_id,
        }
    }

    fn run(fx: &mut Fixture, group: GroupId, from: PlaceId, rolls: &[u32]) -> ActionResult {
        let config = ActionConfig::default();
        let factory = SeededFactory::default();
        let mut allocator = AdjacentAllocator;
        let mut rng = Scripted(rolls.iter().copied().collect());
        let mut services = Services {
            content: &factory,
            locations: &mut allocator,
            rng: &mut rng,
            config: &config,
        };
        leave(&fx.door, group, from, &mut fx.world, &mut services)
    }

    #[test]
    fn relocates_and_updates_world() {
        let mut fx = fixture();
        let (party, camp, cave) = (fx.party, fx.camp, fx.cave);
        let result = run(&mut fx, party, camp, &[4, 2]);
        assert!(result.is_success());

        let expected = Location::new(0, 1);
        assert_eq!(fx.world.current_location(), Some(expected));
        assert_eq!(fx.world.place_id_at(expected), Some(cave));
        assert!(fx.world.place(camp).is_some_and(|p| !p.has_group(party)));

        let cave_place = fx.world.place(cave);
        assert!(cave_place.is_some_and(|p| p.has_group(party)));
        assert_eq!(cave_place.map(|p| p.boxes.len()), Some(4));
        assert_eq!(cave_place.map(|p| p.creatures.len()), Some(2));
        assert_eq!(cave_place.and_then(|p| p.location), Some(expected));
    }

    #[test]
    fn second_arrival_does_not_repopulate() {
        let mut fx = fixture();
        let (party, camp, cave) = (fx.party, fx.camp, fx.cave);

        let latecomers = Group::new(vec![adventurer()]);
        let late_id = latecomers.id;
        if let Some(p) = fx.world.place_mut(camp) {
            p.groups.push(latecomers);
        }

        assert!(run(&mut fx, party, camp, &[3, 1]).is_success());
        assert!(run(&mut fx, late_id, camp, &[7, 6]).is_success());

        let cave_place = fx.world.place(cave);
        assert_eq!(cave_place.map(|p| p.boxes.len()), Some(3));
        assert_eq!(cave_place.map(|p| p.creatures.len()), Some(1));
        assert_eq!(cave_place.map(|p| p.groups.len()), Some(2));
        assert_eq!(fx.world.discovered_count(), 2);
    }

    #[test]
    fn can_walk_back() {
        let mut fx = fixture();
        let (party, camp, cave) = (fx.party, fx.camp, fx.cave);
        assert!(run(&mut fx, party, camp, &[1, 1]).is_success());
        assert!(run(&mut fx, party, cave, &[1, 1]).is_success());

        assert_eq!(fx.world.current_location(), Some(Location::ORIGIN));
        assert!(fx.world.place(camp).is_some_and(|p| p.has_group(party)));
        // The camp was empty and gets content on the party's return.
        assert_eq!(fx.world.place(camp).map(|p| p.boxes.len()), Some(1));
    }

    #[test]
    fn unknown_origin() {
        let mut fx = fixture();
        let party = fx.party;
        let result = run(&mut fx, party, PlaceId::new(), &[]);
        assert_eq!(result.rejection(), Some(Rejection::PlaceNotFound));
    }

    #[test]
    fn door_without_path() {
        let mut fx = fixture();
        let (party, camp) = (fx.party, fx.camp);
        fx.door = Door::new("painted on the wall");
        let result = run(&mut fx, party, camp, &[]);
        assert_eq!(result.rejection(), Some(Rejection::NoLinkedPlace));
        assert_eq!(fx.world.current_location(), None);
    }

    #[test]
    fn half_built_path() {
        let mut fx = fixture();
        let (party, camp) = (fx.party, fx.camp);
        let mut door = Door::new("new door");
        door.ensure_path(camp);
        fx.door = door;
        let result = run(&mut fx, party, camp, &[]);
        assert_eq!(result.rejection(), Some(Rejection::NoLinkedPlace));
    }

    #[test]
    fn path_to_place_outside_world() {
        let mut fx = fixture();
        let (party, camp) = (fx.party, fx.camp);
        let mut door = Door::new("trapdoor");
        assert!(door.link(camp, PlaceId::new()).is_ok());
        fx.door = door;
        let result = run(&mut fx, party, camp, &[]);
        assert_eq!(result.rejection(), Some(Rejection::NoLinkedPlace));
    }

    #[test]
    fn group_not_at_origin() {
        let mut fx = fixture();
        let camp = fx.camp;
        let result = run(&mut fx, GroupId::new(), camp, &[]);
        assert_eq!(result.rejection(), Some(Rejection::GroupNotPresent));
        assert!(fx.world.place(fx.cave).is_some_and(|p| p.boxes.is_empty()));
    }

    #[test]
    fn refused_leave_changes_nothing() {
        let mut fx = fixture();
        let camp = fx.camp;
        let before = fx.world.place(camp).cloned();
        let _ = run(&mut fx, GroupId::new(), camp, &[5, 5]);
        assert_eq!(fx.world.place(camp).cloned(), before);
        assert_eq!(fx.world.discovered_count(), 1);
    }

    #[test]
    fn empty_group_still_moves() {
        let mut fx = fixture();
        let camp = fx.camp;
        let ghosts = Group::new(Vec::new());
        let id = ghosts.id;
        if let Some(p) = fx.world.place_mut(camp) {
            p.groups.push(ghosts);
        }
        assert!(run(&mut fx, id, camp, &[1, 1]).is_success());
    }
}
