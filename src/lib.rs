//! # forbidden-face
//!
//! Core of a single-screen elimination party game. A grid of face tiles
//! hides one forbidden face; every safe tap removes a face and scores a
//! point, tapping the forbidden face ends the round. The forbidden face is
//! re-drawn after every elimination, and the round is won when only the
//! forbidden face is left.
//!
//! In drinking mode every safe tap first shows a random punishment prompt
//! and only takes effect once the prompt is acknowledged.
//!
//! ## Design Principles
//!
//! 1. **No UI in the core**: The controller emits `RoundEvent`s; rendering,
//!    animation and overlays live in an adapter outside this crate.
//!
//! 2. **Injectable randomness**: Every random choice goes through a
//!    `RandomSource`, so rounds replay exactly from a seed or a script.
//!
//! 3. **Explicit configuration**: Avatars, size and mode arrive in a
//!    `RoundConfig` at round start; there is no shared registry.
//!
//! ## Modules
//!
//! - `core`: Tile IDs, random sources, configuration, errors
//! - `grid`: Tiles and their positions
//! - `policy`: Forbidden-tile and punishment selection
//! - `round`: The round state machine
//!
//! ## Example
//!
//! ```
//! use forbidden_face::{Phase, RoundConfig, RoundController};
//!
//! let mut controller = RoundController::new(7);
//! controller.start(RoundConfig::drinking(2)).unwrap();
//!
//! let forbidden = controller.forbidden().unwrap();
//! let safe = controller.grid().unwrap().ids().find(|&id| id != forbidden).unwrap();
//!
//! let prompt = controller.on_tap(safe).unwrap().unwrap();
//! assert_eq!(prompt.phase, Phase::AwaitingPunishmentAck);
//! assert!(prompt.punishment.is_some());
//!
//! let removed = controller.acknowledge_punishment().unwrap().unwrap();
//! assert_eq!(removed.score, 1);
//! ```

pub mod core;
pub mod grid;
pub mod policy;
pub mod round;

// Re-export commonly used types
pub use crate::core::{
    AvatarRef, AvatarSet, GameError, GameMode, GameRng, RandomSource, Result, RoundConfig,
    ScriptedSource, TileId,
};

pub use crate::grid::{Grid, Tile, TilePosition};

pub use crate::policy::{
    Punishment, PunishmentCatalog, PunishmentKind, PunishmentPolicy, SelectionPolicy,
    UniformPunishment, UniformSelection,
};

pub use crate::round::{
    PendingTap, Phase, RoundController, RoundEvent, RoundEventKind, RoundState, RoundSummary,
};
