//! Error type shared by the grid, the policies and the round controller.

use thiserror::Error;

use super::entity::TileId;

/// Errors raised by the game core.
///
/// Only `InvalidSize` is meant to reach a player. The remaining variants
/// are invariant violations that a correct round never triggers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error(
        "Invalid grid size {size}, must be between {min} and {max}",
        min = crate::core::MIN_GRID_SIZE,
        max = crate::core::MAX_GRID_SIZE
    )]
    InvalidSize { size: usize },
    #[error("{0} is not in the grid")]
    TileNotFound(TileId),
    #[error("Cannot pick a forbidden tile from an empty grid")]
    EmptyGrid,
    #[error("Punishment catalog is empty")]
    EmptyCatalog,
}

pub type Result<T> = std::result::Result<T, GameError>;
