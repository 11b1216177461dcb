//! Forbidden-tile selection.

use crate::core::{GameError, RandomSource, Result, TileId};
use crate::grid::Grid;

/// Policy choosing which live tile is forbidden.
///
/// Called once when a round starts and again after every elimination, so
/// the forbidden identity always refers to a live tile.
pub trait SelectionPolicy: Send + Sync {
    /// Pick the forbidden tile among the live tiles of `grid`.
    ///
    /// Fails with `EmptyGrid` if no tile is left.
    fn pick_forbidden(&self, grid: &Grid, rng: &mut dyn RandomSource) -> Result<TileId>;
}

/// Uniform choice over the remaining tiles.
///
/// The same index within the remaining set may come up twice in a row;
/// since tiles are removed rather than moved, that is a different tile.
#[derive(Clone, Debug, Default)]
pub struct UniformSelection;

impl SelectionPolicy for UniformSelection {
    fn pick_forbidden(&self, grid: &Grid, rng: &mut dyn RandomSource) -> Result<TileId> {
        let remaining = grid.remaining_count();
        if remaining == 0 {
            return Err(GameError::EmptyGrid);
        }
        grid.nth_remaining(rng.pick(remaining)).ok_or(GameError::EmptyGrid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, ScriptedSource};

    #[test]
    fn test_pick_is_live() {
        let mut grid = Grid::create(4).unwrap();
        let mut rng = GameRng::new(42);

        for _ in 0..15 {
            let forbidden = UniformSelection.pick_forbidden(&grid, &mut rng).unwrap();
            assert!(grid.contains(forbidden));
            grid.remove(forbidden).unwrap();
        }
    }

    #[test]
    fn test_pick_follows_source() {
        let mut grid = Grid::create(2).unwrap();
        let mut source = ScriptedSource::new([2, 2]);

        assert_eq!(UniformSelection.pick_forbidden(&grid, &mut source), Ok(TileId(2)));

        grid.remove(TileId(0)).unwrap();
        // Same index within the remaining set, different tile
        assert_eq!(UniformSelection.pick_forbidden(&grid, &mut source), Ok(TileId(3)));
    }

    #[test]
    fn test_pick_empty_grid() {
        let mut grid = Grid::create(2).unwrap();
        for id in 0..4 {
            grid.remove(TileId(id)).unwrap();
        }

        let mut rng = GameRng::new(1);
        assert_eq!(
            UniformSelection.pick_forbidden(&grid, &mut rng),
            Err(GameError::EmptyGrid)
        );
    }

    #[test]
    fn test_pick_reproducible() {
        let grid = Grid::create(6).unwrap();
        let mut rng1 = GameRng::new(99);
        let mut rng2 = GameRng::new(99);

        for _ in 0..20 {
            assert_eq!(
                UniformSelection.pick_forbidden(&grid, &mut rng1),
                UniformSelection.pick_forbidden(&grid, &mut rng2)
            );
        }
    }

    #[test]
    fn test_pick_covers_all_tiles() {
        let grid = Grid::create(2).unwrap();
        let mut rng = GameRng::new(5);
        let mut seen = [false; 4];

        for _ in 0..200 {
            let id = UniformSelection.pick_forbidden(&grid, &mut rng).unwrap();
            seen[id.raw() as usize] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }
}
