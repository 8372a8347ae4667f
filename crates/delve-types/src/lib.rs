//! Shared type definitions for the Delve action engine.
//!
//! This crate defines the entities that actions operate on and the
//! capability traits actions use to inspect them.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for all entity identifiers
//! - [`capability`] -- Optional capabilities ([`Capabilities`], [`ItemHolder`]),
//!   the shared [`Gate`], and [`Health`]
//! - [`item`] -- [`Item`] with optional rank, slot cost, and combat stats
//! - [`inventory`] -- Ordered item collections
//! - [`character`] -- [`Character`], [`Group`], and seed [`Attributes`]
//! - [`container`] -- Lockable [`Container`]s

pub mod capability;
pub mod character;
pub mod container;
pub mod ids;
pub mod inventory;
pub mod item;

// Re-export all public types at crate root for convenience.
pub use capability::{Capabilities, Gate, Health, ItemHolder};
pub use character::{Attributes, Character, CharacterKind, Group};
pub use container::Container;
pub use ids::{CharacterId, ContainerId, DoorId, GroupId, ItemId, PlaceId};
pub use inventory::Inventory;
pub use item::Item;
