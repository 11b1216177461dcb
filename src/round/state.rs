//! Round phase and per-round state.

use serde::{Deserialize, Serialize};

use crate::core::{GameMode, TileId};
use crate::policy::Punishment;

/// Phase of the round state machine.
///
/// ```text
/// Active ── forbidden tap ──────────► Lost
/// Active ── safe tap (classic) ─────► Active | Won
/// Active ── safe tap (drinking) ────► AwaitingPunishmentAck
/// AwaitingPunishmentAck ── ack ─────► Active | Won
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Active,
    AwaitingPunishmentAck,
    Won,
    Lost,
}

impl Phase {
    /// Check if taps are honored.
    #[must_use]
    pub const fn accepts_taps(self) -> bool {
        matches!(self, Self::Active)
    }

    /// Check if the round is over.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A safe tap held back until its punishment is acknowledged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTap {
    /// Tile that will be removed on acknowledgement.
    pub tile: TileId,

    /// Prompt shown to the player.
    pub punishment: Punishment,
}

/// Mutable state of one round. Owned by the round controller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub(crate) forbidden: TileId,
    pub(crate) score: u32,
    pub(crate) mode: GameMode,
    pub(crate) phase: Phase,
    pub(crate) pending: Option<PendingTap>,
}

impl RoundState {
    pub(crate) fn new(mode: GameMode, forbidden: TileId) -> Self {
        Self {
            forbidden,
            score: 0,
            mode,
            phase: Phase::Active,
            pending: None,
        }
    }

    /// Currently forbidden tile.
    #[must_use]
    pub fn forbidden(&self) -> TileId {
        self.forbidden
    }

    /// Successful eliminations so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Tap waiting for acknowledgement, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingTap> {
        self.pending.as_ref()
    }
}

/// Snapshot for the top bar and the game-over overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub size: usize,
    pub mode: GameMode,
    pub score: u32,
    pub remaining: usize,
    pub phase: Phase,
}

impl RoundSummary {
    /// Final score line: "Score: N", or "You won! Score: N" after a win.
    #[must_use]
    pub fn scoreline(&self) -> String {
        match self.phase {
            Phase::Won => format!("You won! Score: {}", self.score),
            _ => format!("Score: {}", self.score),
        }
    }
}

impl std::fmt::Display for RoundSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}x{} Score: {}",
            self.mode.label(),
            self.size,
            self.size,
            self.score
        )
    }
}
