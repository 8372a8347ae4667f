//! Rule-gated actions for the Delve world simulation.
//!
//! Every action takes the entities it touches, checks its rules in a fixed
//! order, mutates only once every rule has passed, and returns an
//! [`ActionResult`]. Rule failures are values, not errors.
//!
//! # Modules
//!
//! - [`combat`] -- [`attack`]: power against defense, damage and counter damage
//! - [`config`] -- Tunables and the YAML loader ([`DelveConfig`], [`ActionConfig`])
//! - [`factory`] -- Content for newly discovered places ([`ContentFactory`])
//! - [`leave`] -- [`leave()`]: moving a group through a door, growing the world
//! - [`random`] -- Injectable randomness ([`RandomSource`])
//! - [`result`] -- [`ActionResult`] and [`Rejection`] codes
//! - [`transfer`] -- [`transfer()`]: moving an item between holders
//! - [`unlock`] -- [`open_box`] and [`open_door`]

pub mod combat;
pub mod config;
pub mod factory;
pub mod leave;
pub mod random;
pub mod result;
pub mod transfer;
pub mod unlock;

// Re-export primary types at crate root for convenience.
pub use combat::{Engagement, attack};
pub use config::{ActionConfig, BatchRange, ConfigError, DelveConfig, SessionConfig};
pub use factory::{ContentFactory, SeededFactory};
pub use leave::{Services, leave};
pub use random::RandomSource;
pub use result::{ActionData, ActionResult, CombatReport, Rejection};
pub use transfer::transfer;
pub use unlock::{door_permits, open_box, open_door, unlock_threshold};
