//! Containers: boxes and chests found at places.

use serde::{Deserialize, Serialize};

use crate::capability::{Capabilities, Gate, ItemHolder};
use crate::ids::ContainerId;
use crate::inventory::Inventory;

/// A lockable container holding items.
///
/// Items can only be taken out or put in while the gate is open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    /// Unique identifier.
    pub id: ContainerId,
    /// Display name.
    pub name: String,
    /// Open/closed state.
    pub gate: Gate,
    /// Rank limit on stored items, if any.
    pub rank: Option<u32>,
    /// Slot capacity, if any.
    pub slots: Option<u32>,
    /// Stored items.
    pub items: Inventory,
}

impl Container {
    /// Create a closed, unlimited container holding `items`.
    pub fn new(name: impl Into<String>, items: Inventory) -> Self {
        Self {
            id: ContainerId::new(),
            name: name.into(),
            gate: Gate::closed(),
            rank: None,
            slots: None,
            items,
        }
    }

    /// Start the container open.
    #[must_use]
    pub const fn opened(mut self) -> Self {
        self.gate = Gate::opened();
        self
    }

    /// Restrict stored items by rank.
    #[must_use]
    pub const fn with_rank(mut self, rank: u32) -> Self {
        self.rank = Some(rank);
        self
    }

    /// Limit capacity.
    #[must_use]
    pub const fn with_slots(mut self, slots: u32) -> Self {
        self.slots = Some(slots);
        self
    }
}

impl Capabilities for Container {
    fn gate(&self) -> Option<Gate> {
        Some(self.gate)
    }

    fn rank(&self) -> Option<u32> {
        self.rank
    }

    fn slot_capacity(&self) -> Option<u32> {
        self.slots
    }
}

impl ItemHolder for Container {
    fn items(&self) -> &Inventory {
        &self.items
    }

    fn items_mut(&mut self) -> &mut Inventory {
        &mut self.items
    }
}
