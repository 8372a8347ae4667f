//! Ordered item collections.
//!
//! An [`Inventory`] keeps items in insertion order and looks them up by their
//! [`ItemId`]. Slot load is computed with checked arithmetic -- no silent
//! overflows, no panics.

use serde::{Deserialize, Serialize};

use crate::ids::ItemId;
use crate::item::Item;

/// An ordered collection of items owned by one holder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Create an empty inventory.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Find an item by id.
    pub fn find(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Whether an item with this id is held.
    pub fn contains(&self, id: ItemId) -> bool {
        self.find(id).is_some()
    }

    /// Append an item.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove the first item with this id, returning it.
    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Number of items held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the inventory holds nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Total slot cost of all held items. Items without a slot cost count as 0.
    ///
    /// Returns `None` if the sum overflows `u32`.
    pub fn slot_load(&self) -> Option<u32> {
        let mut total: u32 = 0;
        for item in &self.items {
            total = total.checked_add(item.slots.unwrap_or(0))?;
        }
        Some(total)
    }

    /// Mean dexterity over held items, counting items without dexterity as 0.
    ///
    /// Returns `None` for an empty inventory.
    #[allow(clippy::cast_precision_loss)]
    pub fn average_dexterity(&self) -> Option<f64> {
        if self.items.is_empty() {
            return None;
        }
        let sum: f64 = self.items.iter().map(|item| item.dexterity.unwrap_or(0.0)).sum();
        Some(sum / self.items.len() as f64)
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<I: IntoIterator<Item = Item>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = core::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
