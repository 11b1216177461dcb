//! Core types: tile identities, random sources, configuration, errors.
//!
//! These are shared by the grid, the policies and the round controller.

pub mod entity;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::TileId;
pub use rng::{GameRng, RandomSource, ScriptedSource};
pub use config::{
    AvatarRef, AvatarSet, GameMode, ParseModeError, RoundConfig, DEFAULT_GRID_SIZE, MAX_GRID_SIZE,
    MIN_GRID_SIZE,
};
pub use error::{GameError, Result};
