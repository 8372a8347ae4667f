//! Content generation for newly discovered places.
//!
//! When a group first walks into a place, the place gets a batch of boxes and
//! a batch of creatures scaled to the group's average attributes. The
//! [`ContentFactory`] trait is the seam; [`SeededFactory`] is a deterministic
//! default that derives everything from the seed attributes and the index of
//! the generated entity.

use delve_types::{Attributes, Character, CharacterKind, Container, Inventory, Item};

/// Builds the contents of a newly discovered place.
///
/// Implementations must not keep state between calls that depends on the
/// seed; the same inputs should give equivalent content.
pub trait ContentFactory {
    /// Create `count` containers seeded from `seed`.
    fn create_boxes(&self, seed: &Attributes, count: u32) -> Vec<Container>;

    /// Create `count` creatures seeded from `seed`.
    fn create_creatures(&self, seed: &Attributes, count: u32) -> Vec<Character>;
}

const ITEM_NAMES: &[&str] = &[
    "lockpick", "dagger", "buckler", "lantern", "amulet", "rope", "gem", "ring",
];

const CREATURE_NAMES: &[&str] = &["rat", "goblin", "bat", "slime", "kobold", "spider"];

/// Pick a name from a pool by index, wrapping around.
fn pick(pool: &[&'static str], index: u32, fallback: &'static str) -> &'static str {
    let len = u32::try_from(pool.len()).unwrap_or(u32::MAX);
    index
        .checked_rem(len)
        .and_then(|i| usize::try_from(i).ok())
        .and_then(|i| pool.get(i).copied())
        .unwrap_or(fallback)
}

/// Deterministic content derived from the seed attributes.
///
/// - Box items carry dexterity around the seed's dexterity (80%, 90%, 100%,
///   ... of it), so a group of average skill can open most boxes.
/// - Item rank is a fifth of the seed's attack; slot cost cycles 1, 2, 3.
/// - Creatures mirror the seed with a small per-index swing of -1, 0, +1 on
///   attack and defense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededFactory {
    items_per_box: u32,
}

impl SeededFactory {
    /// Create a factory that fills each box with `items_per_box` items.
    pub const fn new(items_per_box: u32) -> Self {
        Self { items_per_box }
    }

    fn item(seed: &Attributes, box_index: u32, slot: u32) -> Item {
        let name_index = box_index.saturating_mul(7).saturating_add(slot);
        let dexterity = seed.dexterity * (0.8 + 0.1 * f64::from(slot));
        let rank = u32::try_from(seed.attack.max(0) / 5).unwrap_or(u32::MAX);
        let slots = slot.checked_rem(3).unwrap_or(0).saturating_add(1);
        let bonus = i64::from(slot);

        Item::new(pick(ITEM_NAMES, name_index, "trinket"))
            .with_dexterity(dexterity)
            .with_rank(rank)
            .with_slots(slots)
            .with_attack((seed.attack / 2).saturating_add(bonus))
            .with_defense((seed.defense / 2).saturating_add(bonus))
    }
}

impl Default for SeededFactory {
    fn default() -> Self {
        Self::new(3)
    }
}

impl ContentFactory for SeededFactory {
    fn create_boxes(&self, seed: &Attributes, count: u32) -> Vec<Container> {
        (0..count)
            .map(|index| {
                let items: Inventory = (0..self.items_per_box)
                    .map(|slot| Self::item(seed, index, slot))
                    .collect();
                Container::new(format!("box {}", index.saturating_add(1)), items)
            })
            .collect()
    }

    fn create_creatures(&self, seed: &Attributes, count: u32) -> Vec<Character> {
        (0..count)
            .map(|index| {
                let swing = i64::from(index.checked_rem(3).unwrap_or(0)).saturating_sub(1);
                let attributes = Attributes {
                    dexterity: seed.dexterity,
                    attack: seed.attack.saturating_add(swing),
                    defense: seed.defense.saturating_sub(swing),
                    health: seed.health,
                };
                Character::new(
                    pick(CREATURE_NAMES, index, "creature"),
                    CharacterKind::Creature,
                    attributes,
                )
            })
            .collect()
    }
}
