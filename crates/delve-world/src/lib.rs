//! Places, doors, paths, and the world aggregate for the Delve action engine.
//!
//! This crate models where things are: places as nodes, doors whose paths
//! link exactly two places, grid locations assigned as places are
//! discovered, and the [`World`] that owns them all.
//!
//! # Modules
//!
//! - [`door`] -- Gated [`Door`]s carrying a lazily created [`Path`]
//! - [`error`] -- Error types for world wiring ([`WorldError`])
//! - [`location`] -- Grid [`Location`]s and the [`LocationAllocator`] seam
//! - [`path`] -- The two-ended link a door creates
//! - [`place`] -- [`Place`] nodes with groups, boxes, and creatures
//! - [`world`] -- The [`World`] aggregate and its location index

pub mod door;
pub mod error;
pub mod location;
pub mod path;
pub mod place;
pub mod world;

// Re-export primary types at crate root.
pub use door::Door;
pub use error::WorldError;
pub use location::{AdjacentAllocator, Location, LocationAllocator};
pub use path::Path;
pub use place::Place;
pub use world::World;
