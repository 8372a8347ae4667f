//! Grid locations and the allocator that hands out new ones.
//!
//! Places get a [`Location`] lazily, the first time a group walks into them.
//! The [`LocationAllocator`] decides where a newly discovered place sits
//! relative to the place the group came from. [`AdjacentAllocator`] is the
//! default: it takes the nearest free grid cell by breadth-first search.

use std::collections::{BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::world::World;

/// A cell on the world grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Location {
    /// East-west coordinate (east is positive).
    pub x: i32,
    /// North-south coordinate (north is positive).
    pub y: i32,
}

impl Location {
    /// The grid origin, used when a place has no location to grow from.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// Create a location from coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four orthogonal neighbors in north, east, south, west order.
    ///
    /// Coordinates saturate at the edge of the grid, so a neighbor at the
    /// edge may equal `self`.
    pub const fn neighbors(self) -> [Self; 4] {
        [
            Self::new(self.x, self.y.saturating_add(1)),
            Self::new(self.x.saturating_add(1), self.y),
            Self::new(self.x, self.y.saturating_sub(1)),
            Self::new(self.x.saturating_sub(1), self.y),
        ]
    }
}

impl core::fmt::Display for Location {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Hands out fresh locations for newly discovered places.
pub trait LocationAllocator {
    /// Return a location near `from` that no place in `world` occupies yet.
    fn allocate(&mut self, world: &World, from: Location) -> Location;
}

/// Allocates the closest free grid cell to the origin location.
///
/// Neighbors are tried in north, east, south, west order; if all four are
/// taken the search continues outward breadth-first.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdjacentAllocator;

impl LocationAllocator for AdjacentAllocator {
    fn allocate(&mut self, world: &World, from: Location) -> Location {
        let mut visited: BTreeSet<Location> = BTreeSet::new();
        let mut queue: VecDeque<Location> = VecDeque::new();
        visited.insert(from);
        queue.push_back(from);

        while let Some(current) = queue.pop_front() {
            for next in current.neighbors() {
                if !visited.insert(next) {
                    continue;
                }
                if !world.is_occupied(next) {
                    return next;
                }
                queue.push_back(next);
            }
        }

        // Only reachable if every cell on the grid is taken.
        from
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::place::Place;

    fn world_with_places_at(locations: &[Location]) -> World {
        let mut world = World::new();
        for (i, location) in locations.iter().enumerate() {
            let place = Place::new(format!("room {i}")).at(*location);
            world.add_place(place).unwrap();
        }
        world
    }

    #[test]
    fn neighbors_order() {
        let n = Location::ORIGIN.neighbors();
        assert_eq!(
            n,
            [
                Location::new(0, 1),
                Location::new(1, 0),
                Location::new(0, -1),
                Location::new(-1, 0),
            ]
        );
    }

    #[test]
    fn neighbors_saturate_at_edge() {
        let corner = Location::new(i32::MAX, i32::MAX);
        let n = corner.neighbors();
        assert_eq!(n[0], corner);
        assert_eq!(n[1], corner);
    }

    #[test]
    fn allocates_north_first_in_empty_world() {
        let world = World::new();
        let loc = AdjacentAllocator.allocate(&world, Location::ORIGIN);
        assert_eq!(loc, Location::new(0, 1));
    }

    #[test]
    fn skips_taken_neighbors() {
        let world = world_with_places_at(&[
            Location::ORIGIN,
            Location::new(0, 1),
            Location::new(1, 0),
        ]);
        let loc = AdjacentAllocator.allocate(&world, Location::ORIGIN);
        assert_eq!(loc, Location::new(0, -1));
    }

    #[test]
    fn searches_outward_when_surrounded() {
        let world = world_with_places_at(&[
            Location::ORIGIN,
            Location::new(0, 1),
            Location::new(1, 0),
            Location::new(0, -1),
            Location::new(-1, 0),
        ]);
        let loc = AdjacentAllocator.allocate(&world, Location::ORIGIN);
        // First free cell reached from the northern neighbor.
        assert_eq!(loc, Location::new(0, 2));
    }

    #[test]
    fn display_format() {
        assert_eq!(Location::new(3, -2).to_string(), "(3, -2)");
    }
}
