//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Every entity in the world has a strongly-typed ID so that an item id can
//! never be passed where a group id is expected. All IDs use UUID v7
//! (time-ordered), which keeps freshly generated content sorted by creation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for an item. Stable across transfers between owners.
    ItemId
}

define_id! {
    /// Unique identifier for a character (player character or creature).
    CharacterId
}

define_id! {
    /// Unique identifier for a container (box, chest, crate).
    ContainerId
}

define_id! {
    /// Unique identifier for a door connecting two places.
    DoorId
}

define_id! {
    /// Unique identifier for a travelling group of characters.
    GroupId
}

define_id! {
    /// Unique identifier for a place (node in the world).
    PlaceId
}
