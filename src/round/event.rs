//! Events emitted to the presentation layer.
//!
//! Every controller transition produces exactly one `RoundEvent`. The
//! presentation adapter turns these into screen updates; the core never
//! touches UI elements itself.

use serde::{Deserialize, Serialize};

use crate::core::TileId;
use crate::policy::Punishment;

use super::state::Phase;

/// What happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundEventKind {
    /// A fresh grid is ready.
    Started,
    /// A safe tile was removed and the game goes on.
    Eliminated,
    /// A safe tap is on hold until the punishment is acknowledged.
    PunishmentPrompted,
    /// Only the forbidden tile is left.
    Won,
    /// The forbidden tile was tapped.
    Lost,
}

/// State-transition notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundEvent {
    pub kind: RoundEventKind,

    /// Tile affected by the transition, if any.
    pub tile: Option<TileId>,

    /// Score after the transition.
    pub score: u32,

    /// Phase after the transition.
    pub phase: Phase,

    /// Live tiles after the transition.
    pub remaining: usize,

    /// Prompt to show, only for `PunishmentPrompted`.
    pub punishment: Option<Punishment>,

    /// Forbidden tile after the transition, only when the marker is shown.
    pub forbidden: Option<TileId>,
}

impl RoundEvent {
    /// Create an event with no tile, punishment or marker.
    pub fn new(kind: RoundEventKind, score: u32, phase: Phase, remaining: usize) -> Self {
        Self {
            kind,
            tile: None,
            score,
            phase,
            remaining,
            punishment: None,
            forbidden: None,
        }
    }

    /// Set the affected tile (builder pattern).
    #[must_use]
    pub fn with_tile(mut self, tile: TileId) -> Self {
        self.tile = Some(tile);
        self
    }

    /// Attach the prompt to show (builder pattern).
    #[must_use]
    pub fn with_punishment(mut self, punishment: Punishment) -> Self {
        self.punishment = Some(punishment);
        self
    }

    /// Reveal the forbidden tile (builder pattern).
    #[must_use]
    pub fn with_forbidden(mut self, forbidden: TileId) -> Self {
        self.forbidden = Some(forbidden);
        self
    }

    /// Check if this event ends the round.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.phase.is_finished()
    }

    /// Check if the presentation layer must call back with an acknowledgement.
    #[must_use]
    pub fn needs_ack(&self) -> bool {
        self.phase == Phase::AwaitingPunishmentAck
    }
}
