//! Characters, the groups they travel in, and aggregate attributes.

use serde::{Deserialize, Serialize};

use crate::capability::{Capabilities, Health, ItemHolder};
use crate::ids::{CharacterId, GroupId};
use crate::inventory::Inventory;

/// Whether a character is part of a player group or native to a place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharacterKind {
    /// A member of a travelling group.
    Adventurer,
    /// A creature generated when a place is first visited.
    Creature,
}

/// Base attributes shared by characters, also used as a seed for generated
/// content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Attributes {
    /// Dexterity: decides whether locked containers open.
    pub dexterity: f64,
    /// Attack rating.
    pub attack: i64,
    /// Defense rating.
    pub defense: i64,
    /// Starting health.
    pub health: i64,
}

/// A character: an adventurer or a creature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Unique identifier.
    pub id: CharacterId,
    /// Display name.
    pub name: String,
    /// Adventurer or creature.
    pub kind: CharacterKind,
    /// Dexterity attribute.
    pub dexterity: f64,
    /// Attack rating.
    pub attack: i64,
    /// Defense rating.
    pub defense: i64,
    /// Current health. May be negative after heavy damage.
    pub health: Health,
    /// Rank, if this character is restricted in what it may carry.
    pub rank: Option<u32>,
    /// Slot capacity, if this character's carrying is limited.
    pub slots: Option<u32>,
    /// Carried items.
    pub items: Inventory,
}

impl Character {
    /// Create a character from base attributes with an empty inventory.
    pub fn new(name: impl Into<String>, kind: CharacterKind, attributes: Attributes) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            kind,
            dexterity: attributes.dexterity,
            attack: attributes.attack,
            defense: attributes.defense,
            health: Health::new(attributes.health),
            rank: None,
            slots: None,
            items: Inventory::new(),
        }
    }

    /// Restrict carried items by rank.
    #[must_use]
    pub const fn with_rank(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }

    /// Limit carrying capacity.
    #[must_use]
    pub const fn with_slots(mut self, slots: u32) -> Self {
        self.slots = Some(slots);
        self
    }

    /// Current attributes, with health at its present value.
    pub const fn attributes(&self) -> Attributes {
        Attributes {
            dexterity: self.dexterity,
            attack: self.attack,
            defense: self.defense,
            health: self.health.value(),
        }
    }
}

impl Capabilities for Character {
    fn rank(&self) -> Option<u32> {
        self.rank
    }

    fn slot_capacity(&self) -> Option<u32> {
        self.slots
    }

    fn dexterity(&self) -> Option<f64> {
        Some(self.dexterity)
    }

    fn attack(&self) -> Option<i64> {
        Some(self.attack)
    }

    fn defense(&self) -> Option<i64> {
        Some(self.defense)
    }

    fn health_mut(&mut self) -> Option<&mut Health> {
        Some(&mut self.health)
    }
}

impl ItemHolder for Character {
    fn items(&self) -> &Inventory {
        &self.items
    }

    fn items_mut(&mut self) -> &mut Inventory {
        &mut self.items
    }
}

/// A group of characters travelling together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Unique identifier.
    pub id: GroupId,
    /// Members in joining order.
    pub members: Vec<Character>,
}

impl Group {
    /// Create a group from its members.
    pub fn new(members: Vec<Character>) -> Self {
        Self {
            id: GroupId::new(),
            members,
        }
    }

    /// Mean attributes over all members. An empty group averages to zero.
    ///
    /// Integer attributes are truncated toward zero.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
    pub fn average(&self) -> Attributes {
        let count = self.members.len();
        if count == 0 {
            return Attributes::default();
        }

        let mut dexterity = 0.0;
        let mut attack: i64 = 0;
        let mut defense: i64 = 0;
        let mut health: i64 = 0;
        for member in self.members.iter().map(Character::attributes) {
            dexterity += member.dexterity;
            attack = attack.saturating_add(member.attack);
            defense = defense.saturating_add(member.defense);
            health = health.saturating_add(member.health);
        }

        let divisor = i64::try_from(count).unwrap_or(i64::MAX);
        Attributes {
            dexterity: dexterity / count as f64,
            attack: attack.checked_div(divisor).unwrap_or(0),
            defense: defense.checked_div(divisor).unwrap_or(0),
            health: health.checked_div(divisor).unwrap_or(0),
        }
    }
}
