//! Tile identification.
//!
//! Every tile created for a round has a unique `TileId`. Identities are
//! allocated in creation order starting at 0 and are never reused within a
//! round, so an id survives the removal of other tiles unchanged.
//!
//! ```
//! use forbidden_face::core::TileId;
//!
//! let first = TileId::new(0);
//! assert_eq!(first.raw(), 0);
//! assert_eq!(first.next(), TileId::new(1));
//! ```

use serde::{Deserialize, Serialize};

/// Stable identity of a tile, independent of its position in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a tile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The identity allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}
