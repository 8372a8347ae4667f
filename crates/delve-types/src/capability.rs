//! Optional capabilities an entity may expose.
//!
//! Entities are not arranged in a class hierarchy. Each one carries whatever
//! subset of capabilities makes sense for it (a container has a gate and item
//! storage, a character has combat stats and item storage, an item may carry a
//! rank). Rules that read a capability first test for its presence; an absent
//! capability means the rule does not apply to that entity.
//!
//! - [`Capabilities`] -- presence-checked accessors, all defaulting to `None`.
//! - [`ItemHolder`] -- entities that own an [`Inventory`].
//! - [`Gate`] -- the open/closed state shared by containers and doors.
//! - [`Health`] -- a health pool that can be reduced below zero.

use serde::{Deserialize, Serialize};

use crate::inventory::Inventory;
use crate::item::Item;

/// Open/closed access gate shared by containers and doors.
///
/// Once opened, nothing in the action engine closes a gate again, but the
/// type does not forbid it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gate {
    open: bool,
}

impl Gate {
    /// A gate that starts closed.
    pub const fn closed() -> Self {
        Self { open: false }
    }

    /// A gate that starts open.
    pub const fn opened() -> Self {
        Self { open: true }
    }

    /// Whether the gate is currently open.
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Set the gate's state.
    pub const fn set_open(&mut self, open: bool) {
        self.open = open;
    }
}

/// Health pool for anything that can be hurt.
///
/// There is no floor: damage past zero leaves a negative value. Deciding what
/// a depleted pool means is up to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Health(i64);

impl Health {
    /// Create a health pool with the given starting value.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Current value.
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Reduce health by `amount`.
    pub const fn reduce(&mut self, amount: i64) {
        self.0 = self.0.saturating_sub(amount);
    }

    /// Whether health is at or below zero.
    pub const fn is_depleted(self) -> bool {
        self.0 <= 0
    }
}

/// Presence-checked capability accessors.
///
/// Every method defaults to `None`; an entity overrides only the ones it
/// actually carries.
pub trait Capabilities {
    /// Access gate, for entities that can be opened.
    fn gate(&self) -> Option<Gate> {
        None
    }

    /// Rank, compared against an item's rank before accepting it.
    fn rank(&self) -> Option<u32> {
        None
    }

    /// Total slot capacity for entities that limit what they carry.
    fn slot_capacity(&self) -> Option<u32> {
        None
    }

    /// Dexterity attribute.
    fn dexterity(&self) -> Option<f64> {
        None
    }

    /// Attack rating.
    fn attack(&self) -> Option<i64> {
        None
    }

    /// Defense rating.
    fn defense(&self) -> Option<i64> {
        None
    }

    /// Mutable health pool, for entities that can take damage.
    fn health_mut(&mut self) -> Option<&mut Health> {
        None
    }
}

/// An entity that owns an ordered item collection.
pub trait ItemHolder: Capabilities {
    /// The held items.
    fn items(&self) -> &Inventory;

    /// Mutable access to the held items.
    fn items_mut(&mut self) -> &mut Inventory;

    /// Accept an item into the collection.
    ///
    /// Transfers call this and then check that the item actually arrived, so
    /// an override that rejects or rewrites items is detected rather than
    /// losing the item.
    fn store(&mut self, item: Item) {
        self.items_mut().add(item);
    }

    /// Free slot capacity: total capacity minus the slot cost of held items.
    ///
    /// `None` when the holder has no slot capacity at all.
    fn free_slots(&self) -> Option<u32> {
        let capacity = self.slot_capacity()?;
        let load = self.items().slot_load().unwrap_or(u32::MAX);
        Some(capacity.saturating_sub(load))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_starts_in_requested_state() {
        assert!(!Gate::closed().is_open());
        assert!(Gate::opened().is_open());
        assert!(!Gate::default().is_open());
    }

    #[test]
    fn gate_can_be_set_both_ways() {
        let mut gate = Gate::closed();
        gate.set_open(true);
        assert!(gate.is_open());
        gate.set_open(false);
        assert!(!gate.is_open());
    }

    #[test]
    fn health_goes_negative() {
        let mut health = Health::new(3);
        health.reduce(5);
        assert_eq!(health.value(), -2);
        assert!(health.is_depleted());
    }

    #[test]
    fn health_reduce_saturates() {
        let mut health = Health::new(i64::MIN + 1);
        health.reduce(10);
        assert_eq!(health.value(), i64::MIN);
    }

    struct Bare;

    impl Capabilities for Bare {}

    #[test]
    fn capabilities_default_to_absent() {
        let mut bare = Bare;
        assert!(bare.gate().is_none());
        assert!(bare.rank().is_none());
        assert!(bare.slot_capacity().is_none());
        assert!(bare.dexterity().is_none());
        assert!(bare.attack().is_none());
        assert!(bare.defense().is_none());
        assert!(bare.health_mut().is_none());
    }
}
