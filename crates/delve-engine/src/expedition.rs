//! A scripted expedition through the action engine.
//!
//! The party starts at camp. For each level of depth:
//!
//! 1. The leader opens a new door out of the current place
//! 2. The door is linked to a fresh, undiscovered place
//! 3. The party leaves through it; the place gets a location and content
//! 4. The leader tries every box and loots whatever opens
//! 5. The leader fights the first creature still standing, and it strikes back
//!
//! Everything random comes from one `SmallRng` seeded from the session
//! config, so a seed replays the same expedition.

use delve_actions::{
    ActionResult, DelveConfig, Engagement, SeededFactory, Services, attack, leave, open_box,
    open_door, transfer,
};
use delve_types::{
    Attributes, Character, CharacterKind, Group, GroupId, Inventory, Item, ItemId, PlaceId,
};
use delve_world::{AdjacentAllocator, Door, Location, Place, World};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::error::EngineError;

// -----------------------------------------------------------------------
// Name pools
// -----------------------------------------------------------------------

const ADVENTURER_NAMES: &[&str] = &[
    "Ash", "Brook", "Cedar", "Dusk", "Ember", "Fern", "Grove", "Haze",
];

const ROOM_NAMES: &[&str] = &[
    "antechamber", "cellar", "crypt", "gallery", "grotto", "vault",
];

/// Slot capacity every adventurer starts with.
const PACK_SLOTS: u32 = 12;

fn pick(pool: &[&'static str], index: u32) -> &'static str {
    let len = u32::try_from(pool.len()).unwrap_or(u32::MAX);
    index
        .checked_rem(len)
        .and_then(|i| usize::try_from(i).ok())
        .and_then(|i| pool.get(i).copied())
        .unwrap_or("nameless")
}

// -----------------------------------------------------------------------
// Summary
// -----------------------------------------------------------------------

/// Tallies from one expedition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Places with a location, camp included.
    pub places_discovered: usize,
    /// Doors the party opened.
    pub doors_opened: usize,
    /// Successful relocations.
    pub rooms_entered: u32,
    /// Boxes the leader opened.
    pub boxes_opened: u32,
    /// Boxes that stayed shut.
    pub boxes_resisted: u32,
    /// Items moved into the leader's pack.
    pub items_looted: u32,
    /// Transfers that were refused.
    pub items_refused: u32,
    /// Attacks, from either side, that dealt damage.
    pub hits: u32,
    /// Attacks, from either side, that were defended.
    pub blocks: u32,
}

impl Summary {
    fn tally_attack(&mut self, result: &ActionResult) {
        if result.is_success() {
            self.hits = self.hits.saturating_add(1);
        } else {
            self.blocks = self.blocks.saturating_add(1);
        }
    }
}

// -----------------------------------------------------------------------
// Expedition
// -----------------------------------------------------------------------

/// The world, the doors between its places, and the party walking it.
#[derive(Debug)]
pub struct Expedition {
    config: DelveConfig,
    world: World,
    doors: Vec<Door>,
    party: GroupId,
    here: PlaceId,
    rng: SmallRng,
    factory: SeededFactory,
    allocator: AdjacentAllocator,
    summary: Summary,
}

impl Expedition {
    /// Set up camp at the origin with a freshly recruited party.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::World`] if camp cannot be registered.
    pub fn new(config: DelveConfig) -> Result<Self, EngineError> {
        let mut rng = SmallRng::seed_from_u64(config.session.seed);
        let members = (0..config.session.party_size)
            .map(|index| recruit(&mut rng, index))
            .collect();
        let party = Group::new(members);
        let party_id = party.id;

        let mut camp = Place::new("camp").at(Location::ORIGIN);
        camp.groups.push(party);

        let mut world = World::new();
        let here = world.add_place(camp)?;
        world.enter(here, Location::ORIGIN)?;

        info!(
            party = %party_id,
            party_size = config.session.party_size,
            seed = config.session.seed,
            "Camp established"
        );

        Ok(Self {
            factory: SeededFactory::new(config.actions.items_per_box),
            config,
            world,
            doors: Vec::new(),
            party: party_id,
            here,
            rng,
            allocator: AdjacentAllocator,
            summary: Summary::default(),
        })
    }

    /// Walk `session.depth` rooms deep, exploring each one.
    ///
    /// Stops early if the party is refused passage.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::World`] if a new place cannot be added or
    /// linked, or [`EngineError::PartyLost`] if the party is not where the
    /// last relocation put it.
    pub fn run(&mut self) -> Result<Summary, EngineError> {
        for level in 0..self.config.session.depth {
            let Some(next) = self.descend(level)? else {
                break;
            };
            self.here = next;
            self.explore()?;
        }
        self.summary.places_discovered = self.world.discovered_count();
        self.summary.doors_opened = self.doors.len();
        Ok(self.summary)
    }

    /// Open a door to a new place and lead the party through it.
    fn descend(&mut self, level: u32) -> Result<Option<PlaceId>, EngineError> {
        let number = level.saturating_add(1);
        let next = self
            .world
            .add_place(Place::new(format!("{} {number}", pick(ROOM_NAMES, level))))?;
        let mut door = Door::new(format!("door {number}"));

        let opened = open_door(&mut door, self.leader()?, self.here);
        if let Some(reason) = opened.rejection() {
            info!(door = %door.id, reason = reason.code(), "Door stayed shut");
            return Ok(None);
        }
        self.world.link(&mut door, self.here, next)?;

        let mut services = Services {
            content: &self.factory,
            locations: &mut self.allocator,
            rng: &mut self.rng,
            config: &self.config.actions,
        };
        let result = leave(&door, self.party, self.here, &mut self.world, &mut services);
        self.doors.push(door);

        if let Some(reason) = result.rejection() {
            info!(level = number, reason = reason.code(), "Party stayed behind");
            return Ok(None);
        }
        self.summary.rooms_entered = self.summary.rooms_entered.saturating_add(1);
        Ok(Some(next))
    }

    /// Loot the boxes of the current place, then fight one creature.
    fn explore(&mut self) -> Result<(), EngineError> {
        let party = self.party;
        let actions = &self.config.actions;
        let summary = &mut self.summary;
        let place = self
            .world
            .place_mut(self.here)
            .ok_or_else(|| EngineError::PartyLost {
                message: format!("place {} is not in the world", self.here),
            })?;
        let Place {
            name,
            groups,
            boxes,
            creatures,
            ..
        } = place;
        let leader = groups
            .iter_mut()
            .find(|group| group.id == party)
            .and_then(|group| group.members.first_mut())
            .ok_or_else(|| EngineError::PartyLost {
                message: format!("party {party} has no leader in {name}"),
            })?;

        for chest in boxes.iter_mut() {
            if !open_box(chest, &*leader, actions).is_success() {
                debug!(container = %chest.id, "Box resisted");
                summary.boxes_resisted = summary.boxes_resisted.saturating_add(1);
                continue;
            }
            summary.boxes_opened = summary.boxes_opened.saturating_add(1);

            let contents: Vec<ItemId> = chest.items.iter().map(|item| item.id).collect();
            for item in contents {
                let moved = transfer(chest, leader, item);
                if moved.is_success() {
                    summary.items_looted = summary.items_looted.saturating_add(1);
                } else {
                    summary.items_refused = summary.items_refused.saturating_add(1);
                }
            }
        }

        let Some(creature) = creatures
            .iter_mut()
            .find(|creature| !creature.health.is_depleted())
        else {
            debug!(place = %name, "Nothing left to fight");
            return Ok(());
        };

        let weapon = strongest(&leader.items, |item| item.attack);
        let armor = strongest(&leader.items, |item| item.defense);

        let strike = attack(Engagement {
            attacker: &mut *leader,
            defender: &mut *creature,
            weapon: weapon.as_ref(),
            armor: None,
        });
        summary.tally_attack(&strike);

        let counter = attack(Engagement {
            attacker: &mut *creature,
            defender: &mut *leader,
            weapon: None,
            armor: armor.as_ref(),
        });
        summary.tally_attack(&counter);

        info!(
            place = %name,
            leader = %leader.name,
            leader_health = leader.health.value(),
            creature = %creature.name,
            creature_health = creature.health.value(),
            "Skirmish over"
        );
        Ok(())
    }

    /// The first member of the party, wherever it currently is.
    fn leader(&self) -> Result<&Character, EngineError> {
        self.world
            .place(self.here)
            .and_then(|place| place.group(self.party))
            .and_then(|group| group.members.first())
            .ok_or_else(|| EngineError::PartyLost {
                message: format!("party {} has no leader at {}", self.party, self.here),
            })
    }

    #[cfg(test)]
    const fn world(&self) -> &World {
        &self.world
    }
}

/// Roll a new adventurer.
fn recruit(rng: &mut SmallRng, index: u32) -> Character {
    let attributes = Attributes {
        dexterity: rng.random_range(14.0..=20.0),
        attack: rng.random_range(8..=14),
        defense: rng.random_range(4..=8),
        health: rng.random_range(30..=45),
    };
    Character::new(
        pick(ADVENTURER_NAMES, index),
        CharacterKind::Adventurer,
        attributes,
    )
    .with_slots(PACK_SLOTS)
}

/// The item scoring highest on `stat`, cloned out of the inventory.
fn strongest(items: &Inventory, stat: impl Fn(&Item) -> Option<i64>) -> Option<Item> {
    items
        .iter()
        .filter(|item| stat(*item).is_some())
        .max_by_key(|item| stat(*item).unwrap_or(i64::MIN))
        .cloned()
}
