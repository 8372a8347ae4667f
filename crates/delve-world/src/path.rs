//! Paths: the link a door creates between two places.
//!
//! A path is created lazily, the first time its door is opened, and at that
//! point only knows the place it was opened from. It is completed with the
//! far side before anyone can walk through it.

use delve_types::PlaceId;
use serde::{Deserialize, Serialize};

/// A bidirectional link between at most two places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    ends: Vec<PlaceId>,
}

impl Path {
    /// Start a path at the place its door was opened from.
    pub fn starting_at(place: PlaceId) -> Self {
        Self { ends: vec![place] }
    }

    /// Places on the path, in the order they were attached.
    pub fn places(&self) -> &[PlaceId] {
        &self.ends
    }

    /// Whether `place` is one of the path's ends.
    pub fn contains(&self, place: PlaceId) -> bool {
        self.ends.contains(&place)
    }

    /// Whether both ends are known.
    pub fn is_complete(&self) -> bool {
        self.ends.len() == 2
    }

    /// Attach the far end.
    ///
    /// Returns `true` when `place` is an end of the path afterwards (already
    /// attached counts). Returns `false` without changing anything when the
    /// path is already complete with two other places.
    pub fn connect(&mut self, place: PlaceId) -> bool {
        if self.contains(place) {
            return true;
        }
        if self.is_complete() {
            return false;
        }
        self.ends.push(place);
        true
    }

    /// The end that is not `from`.
    ///
    /// `None` when `from` is not on the path or the path is incomplete.
    pub fn other_end(&self, from: PlaceId) -> Option<PlaceId> {
        if !self.is_complete() || !self.contains(from) {
            return None;
        }
        self.ends.iter().copied().find(|&end| end != from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_path_has_one_end() {
        let a = PlaceId::new();
        let path = Path::starting_at(a);
        assert_eq!(path.places(), &[a]);
        assert!(!path.is_complete());
        assert_eq!(path.other_end(a), None);
    }

    #[test]
    fn connect_completes_path() {
        let a = PlaceId::new();
        let b = PlaceId::new();
        let mut path = Path::starting_at(a);
        assert!(path.connect(b));
        assert!(path.is_complete());
        assert_eq!(path.other_end(a), Some(b));
        assert_eq!(path.other_end(b), Some(a));
    }

    #[test]
    fn connect_is_idempotent() {
        let a = PlaceId::new();
        let b = PlaceId::new();
        let mut path = Path::starting_at(a);
        assert!(path.connect(b));
        assert!(path.connect(b));
        assert!(path.connect(a));
        assert_eq!(path.places().len(), 2);
    }

    #[test]
    fn full_path_refuses_third_place() {
        let mut path = Path::starting_at(PlaceId::new());
        assert!(path.connect(PlaceId::new()));
        let stranger = PlaceId::new();
        assert!(!path.connect(stranger));
        assert!(!path.contains(stranger));
    }

    #[test]
    fn other_end_of_unknown_place() {
        let mut path = Path::starting_at(PlaceId::new());
        assert!(path.connect(PlaceId::new()));
        assert_eq!(path.other_end(PlaceId::new()), None);
    }
}
