//! Grid of face tiles for one round.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{
    AvatarRef, AvatarSet, GameError, Result, TileId, MAX_GRID_SIZE, MIN_GRID_SIZE,
};

/// Row/column of a tile, row-major from the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TilePosition {
    pub row: usize,
    pub col: usize,
}

impl TilePosition {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for TilePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A face tile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Stable identity.
    pub id: TileId,

    /// Where the presentation layer draws it.
    pub position: TilePosition,

    /// Face image, or `None` for the collaborator's fallback face.
    pub avatar: Option<AvatarRef>,

    /// Set once the tile has been eliminated.
    pub removed: bool,
}

/// N×N grid of tiles.
///
/// Tiles are stored in creation order and never re-indexed: removal only
/// flags the tile, and lookups go through an identity index. The live
/// count shrinks by exactly one per removal and never grows back.
///
/// ```
/// use forbidden_face::grid::Grid;
///
/// let mut grid = Grid::create(3).unwrap();
/// assert_eq!(grid.remaining_count(), 9);
///
/// let first = grid.ids().next().unwrap();
/// grid.remove(first).unwrap();
/// assert_eq!(grid.remaining_count(), 8);
/// assert!(!grid.contains(first));
/// ```
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    tiles: Vec<Tile>,
    index: FxHashMap<TileId, usize>,
    remaining: usize,
}

impl Grid {
    /// Create an N×N grid without avatars.
    pub fn create(size: usize) -> Result<Self> {
        Self::with_avatars(size, &AvatarSet::new())
    }

    /// Create an N×N grid, assigning avatars to tiles by slot.
    ///
    /// Fails with `InvalidSize` unless `MIN_GRID_SIZE <= size <= MAX_GRID_SIZE`.
    pub fn with_avatars(size: usize, avatars: &AvatarSet) -> Result<Self> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            return Err(GameError::InvalidSize { size });
        }
        let count = size * size;

        let mut tiles = Vec::with_capacity(count);
        let mut index = FxHashMap::default();
        index.reserve(count);

        for slot in 0..count {
            // count <= MAX_GRID_SIZE², well inside u32
            let id = TileId::new(slot as u32);
            index.insert(id, slot);
            tiles.push(Tile {
                id,
                position: TilePosition::new(slot / size, slot % size),
                avatar: avatars.for_tile(slot).cloned(),
                removed: false,
            });
        }

        Ok(Self {
            size,
            tiles,
            index,
            remaining: count,
        })
    }

    /// Grid dimension N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of tiles the grid was created with (N²).
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.tiles.len()
    }

    /// Number of tiles not yet removed.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.remaining
    }

    /// Check if there are no live tiles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Check if `id` is a live tile.
    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.tile(id).is_some()
    }

    /// Get a live tile by identity.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        let &slot = self.index.get(&id)?;
        self.tiles.get(slot).filter(|tile| !tile.removed)
    }

    /// Live tile at a grid position, if any.
    #[must_use]
    pub fn tile_at(&self, position: TilePosition) -> Option<TileId> {
        if position.row >= self.size || position.col >= self.size {
            return None;
        }
        let tile = self.tiles.get(position.row * self.size + position.col)?;
        (!tile.removed).then_some(tile.id)
    }

    /// Remove a live tile.
    ///
    /// Fails with `TileNotFound` if `id` was never in the grid or is
    /// already removed.
    pub fn remove(&mut self, id: TileId) -> Result<()> {
        let slot = *self.index.get(&id).ok_or(GameError::TileNotFound(id))?;
        let tile = &mut self.tiles[slot];
        if tile.removed {
            return Err(GameError::TileNotFound(id));
        }
        tile.removed = true;
        self.remaining -= 1;
        Ok(())
    }

    /// Iterate over live tiles in creation order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|tile| !tile.removed)
    }

    /// Iterate over live tile identities in creation order.
    pub fn ids(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles().map(|tile| tile.id)
    }

    /// The `n`th live tile in creation order.
    #[must_use]
    pub fn nth_remaining(&self, n: usize) -> Option<TileId> {
        self.ids().nth(n)
    }

    /// Every tile, removed ones included, in creation order.
    pub fn all_tiles(&self) -> &[Tile] {
        &self.tiles
    }
}
