//! Items: the only things that move between owners.

use serde::{Deserialize, Serialize};

use crate::capability::Capabilities;
use crate::ids::ItemId;

/// A single item.
///
/// Every stat is optional. An item without a rank can go into any holder
/// regardless of the holder's rank; an item without a slot cost never counts
/// against capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identity, kept across transfers.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Minimum holder rank required to carry this item.
    pub rank: Option<u32>,
    /// Slots this item occupies in a holder with limited capacity.
    pub slots: Option<u32>,
    /// Dexterity contribution (used to rate how hard a container is to open).
    pub dexterity: Option<f64>,
    /// Attack bonus when wielded as a weapon, counter damage when worn as armor.
    pub attack: Option<i64>,
    /// Defense bonus when worn as armor.
    pub defense: Option<i64>,
}

impl Item {
    /// Create an item with a fresh id and no stats.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            rank: None,
            slots: None,
            dexterity: None,
            attack: None,
            defense: None,
        }
    }

    /// Set the required rank.
    #[must_use]
    pub const fn with_rank(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }

    /// Set the slot cost.
    #[must_use]
    pub const fn with_slots(mut self, slots: u32) -> Self {
        self.slots = Some(slots);
        self
    }

    /// Set the dexterity contribution.
    #[must_use]
    pub const fn with_dexterity(mut self, dexterity: f64) -> Self {
        self.dexterity = Some(dexterity);
        self
    }

    /// Set the attack bonus.
    #[must_use]
    pub const fn with_attack(mut self, attack: i64) -> Self {
        self.attack = Some(attack);
        self
    }

    /// Set the defense bonus.
    #[must_use]
    pub const fn with_defense(mut self, defense: i64) -> Self {
        self.defense = Some(defense);
        self
    }

    /// Slots required to hold this item, if it has a slot cost.
    pub const fn slot_cost(&self) -> Option<u32> {
        self.slots
    }
}

impl Capabilities for Item {
    fn rank(&self) -> Option<u32> {
        self.rank
    }

    fn dexterity(&self) -> Option<f64> {
        self.dexterity
    }

    fn attack(&self) -> Option<i64> {
        self.attack
    }

    fn defense(&self) -> Option<i64> {
        self.defense
    }
}
