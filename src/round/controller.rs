//! Round controller: the state machine behind a round.
//!
//! Processes one event (start, tap, acknowledgement) at a time to
//! completion. Every honored event returns the `RoundEvent` describing the
//! transition; ignored inputs return `Ok(None)`.

use std::sync::Arc;

use im::Vector;

use crate::core::{GameError, GameRng, RandomSource, Result, RoundConfig, TileId};
use crate::grid::{Grid, TilePosition};
use crate::policy::{
    Punishment, PunishmentCatalog, PunishmentPolicy, SelectionPolicy, UniformPunishment,
    UniformSelection,
};

use super::event::{RoundEvent, RoundEventKind};
use super::state::{PendingTap, Phase, RoundState, RoundSummary};

/// One round: its configuration, grid and state.
#[derive(Clone, Debug)]
struct Round {
    config: RoundConfig,
    grid: Grid,
    state: RoundState,
}

impl Round {
    fn event(&self, kind: RoundEventKind) -> RoundEvent {
        let event = RoundEvent::new(
            kind,
            self.state.score,
            self.state.phase,
            self.grid.remaining_count(),
        );
        if self.config.show_marker {
            event.with_forbidden(self.state.forbidden)
        } else {
            event
        }
    }

    /// Remove a safe tile, score it, and either finish or re-pick.
    ///
    /// The removal and re-pick run on a copy of the grid; the round is
    /// only updated once both succeed.
    fn eliminate(
        &mut self,
        tile: TileId,
        selection: &dyn SelectionPolicy,
        rng: &mut dyn RandomSource,
    ) -> Result<RoundEventKind> {
        let mut grid = self.grid.clone();
        grid.remove(tile)?;

        let forbidden = if grid.remaining_count() == 1 {
            None
        } else {
            let picked = pick_live(selection, &grid, rng).inspect_err(|err| {
                log::error!("Forbidden re-pick failed: {err}");
            })?;
            Some(picked)
        };

        self.grid = grid;
        self.state.score += 1;
        self.state.pending = None;
        log::debug!(
            "Eliminated {tile}, score {}, {} left",
            self.state.score,
            self.grid.remaining_count()
        );

        match forbidden {
            None => {
                self.state.phase = Phase::Won;
                log::info!("Round won with score {}", self.state.score);
                Ok(RoundEventKind::Won)
            }
            Some(forbidden) => {
                self.state.forbidden = forbidden;
                self.state.phase = Phase::Active;
                log::debug!("Forbidden tile is now {forbidden}");
                Ok(RoundEventKind::Eliminated)
            }
        }
    }
}

/// Ask `selection` for a forbidden tile and check that it is live.
fn pick_live(
    selection: &dyn SelectionPolicy,
    grid: &Grid,
    rng: &mut dyn RandomSource,
) -> Result<TileId> {
    let picked = selection.pick_forbidden(grid, rng)?;
    if grid.contains(picked) {
        Ok(picked)
    } else {
        Err(GameError::TileNotFound(picked))
    }
}

/// Owns the current round and the resources shared across rounds.
///
/// ## Example
///
/// ```
/// use forbidden_face::core::{RoundConfig, ScriptedSource};
/// use forbidden_face::round::{Phase, RoundController};
///
/// // Forbidden tile is always the first live tile
/// let mut controller = RoundController::with_source(ScriptedSource::new([0]));
/// controller.start(RoundConfig::classic(2)).unwrap();
///
/// let safe = controller.grid().unwrap().nth_remaining(1).unwrap();
/// let event = controller.on_tap(safe).unwrap().unwrap();
/// assert_eq!(event.score, 1);
/// assert_eq!(event.phase, Phase::Active);
/// ```
pub struct RoundController {
    /// Random source for all selections.
    rng: Box<dyn RandomSource>,

    /// Forbidden-tile selection policy.
    selection: Box<dyn SelectionPolicy>,

    /// Punishment selection policy.
    punishment: Box<dyn PunishmentPolicy>,

    /// Prompts for drinking mode.
    catalog: Arc<PunishmentCatalog>,

    /// Current round, if one was ever started.
    round: Option<Round>,

    /// Events of the current round.
    history: Vector<RoundEvent>,
}

impl RoundController {
    /// Create a controller with a seeded `GameRng` and the built-in catalog.
    pub fn new(seed: u64) -> Self {
        Self::with_source(GameRng::new(seed))
    }

    /// Create a controller drawing from a custom random source.
    pub fn with_source<R: RandomSource + 'static>(rng: R) -> Self {
        Self {
            rng: Box::new(rng),
            selection: Box::new(UniformSelection),
            punishment: Box::new(UniformPunishment),
            catalog: PunishmentCatalog::builtin(),
            round: None,
            history: Vector::new(),
        }
    }

    /// Set a custom selection policy.
    pub fn with_selection<S: SelectionPolicy + 'static>(mut self, selection: S) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Set a custom punishment policy.
    pub fn with_punishment<P: PunishmentPolicy + 'static>(mut self, punishment: P) -> Self {
        self.punishment = Box::new(punishment);
        self
    }

    /// Use a different punishment catalog.
    pub fn with_catalog(mut self, catalog: Arc<PunishmentCatalog>) -> Self {
        self.catalog = catalog;
        self
    }

    // === Operations ===

    /// Start a new round, discarding any round in progress.
    ///
    /// Fails with `InvalidSize` before anything changes, so the previous
    /// round stays playable.
    pub fn start(&mut self, config: RoundConfig) -> Result<RoundEvent> {
        let grid = Grid::with_avatars(config.size, &config.avatars).inspect_err(|err| {
            log::warn!("Rejected round configuration: {err}");
        })?;
        let forbidden = pick_live(self.selection.as_ref(), &grid, self.rng.as_mut())
            .inspect_err(|err| log::error!("Initial forbidden pick failed: {err}"))?;

        if let Some(previous) = &self.round {
            if !previous.state.phase.is_finished() {
                log::debug!(
                    "Discarding in-flight round ({:?}, score {})",
                    previous.state.phase,
                    previous.state.score
                );
            }
        }

        log::info!(
            "Starting {} round on {}x{} grid ({} tiles)",
            config.mode,
            config.size,
            config.size,
            grid.remaining_count()
        );

        let round = Round {
            state: RoundState::new(config.mode, forbidden),
            config,
            grid,
        };
        let event = round.event(RoundEventKind::Started);

        self.round = Some(round);
        self.history = Vector::new();
        self.history.push_back(event.clone());
        Ok(event)
    }

    /// Start again with the configuration of the last round.
    ///
    /// Ignored if no round was ever started.
    pub fn restart(&mut self) -> Result<Option<RoundEvent>> {
        let Some(config) = self.round.as_ref().map(|round| round.config.clone()) else {
            log::debug!("Ignoring restart: no previous round");
            return Ok(None);
        };
        self.start(config).map(Some)
    }

    /// Handle a tap on a tile.
    ///
    /// Taps are ignored outside `Active` and for tiles no longer in the
    /// grid (stale or repeated events).
    pub fn on_tap(&mut self, tile: TileId) -> Result<Option<RoundEvent>> {
        let Some(round) = self.round.as_mut() else {
            log::debug!("Ignoring tap on {tile}: no round started");
            return Ok(None);
        };

        if !round.state.phase.accepts_taps() {
            log::debug!("Ignoring tap on {tile} in phase {:?}", round.state.phase);
            return Ok(None);
        }

        if !round.grid.contains(tile) {
            log::debug!("Ignoring stale tap on {tile}");
            return Ok(None);
        }

        let event = if tile == round.state.forbidden {
            round.state.phase = Phase::Lost;
            log::info!("Forbidden {tile} tapped, round lost with score {}", round.state.score);
            round.event(RoundEventKind::Lost).with_tile(tile)
        } else if round.state.mode.is_drinking() {
            let punishment: Punishment = self
                .punishment
                .pick_punishment(&self.catalog, self.rng.as_mut())
                .inspect_err(|err| log::error!("Punishment pick failed: {err}"))?
                .clone();
            log::debug!("Holding tap on {tile} for punishment: {punishment}");

            round.state.phase = Phase::AwaitingPunishmentAck;
            round.state.pending = Some(PendingTap {
                tile,
                punishment: punishment.clone(),
            });
            round
                .event(RoundEventKind::PunishmentPrompted)
                .with_tile(tile)
                .with_punishment(punishment)
        } else {
            let kind = round.eliminate(tile, self.selection.as_ref(), self.rng.as_mut())?;
            round.event(kind).with_tile(tile)
        };

        self.history.push_back(event.clone());
        Ok(Some(event))
    }

    /// Handle a tap at a grid position, as reported by the input layer.
    ///
    /// Positions outside the grid or on removed tiles are ignored.
    pub fn on_tap_at(&mut self, position: TilePosition) -> Result<Option<RoundEvent>> {
        match self.grid().and_then(|grid| grid.tile_at(position)) {
            Some(tile) => self.on_tap(tile),
            None => {
                log::debug!("Ignoring tap at {position}: no live tile");
                Ok(None)
            }
        }
    }

    /// Acknowledge the shown punishment and apply the held tap.
    ///
    /// Ignored unless the round is awaiting an acknowledgement.
    pub fn acknowledge_punishment(&mut self) -> Result<Option<RoundEvent>> {
        let Some(round) = self.round.as_mut() else {
            log::debug!("Ignoring acknowledgement: no round started");
            return Ok(None);
        };

        let tile = match (round.state.phase, round.state.pending.as_ref()) {
            (Phase::AwaitingPunishmentAck, Some(pending)) => pending.tile,
            (phase, _) => {
                log::debug!("Ignoring acknowledgement in phase {phase:?}");
                return Ok(None);
            }
        };
        let kind = round.eliminate(tile, self.selection.as_ref(), self.rng.as_mut())?;
        let event = round.event(kind).with_tile(tile);

        self.history.push_back(event.clone());
        Ok(Some(event))
    }

    // === Queries ===

    /// Phase of the current round.
    #[must_use]
    pub fn phase(&self) -> Option<Phase> {
        self.round.as_ref().map(|round| round.state.phase)
    }

    /// Score of the current round.
    #[must_use]
    pub fn score(&self) -> Option<u32> {
        self.round.as_ref().map(|round| round.state.score)
    }

    /// Grid of the current round.
    #[must_use]
    pub fn grid(&self) -> Option<&Grid> {
        self.round.as_ref().map(|round| &round.grid)
    }

    /// State of the current round.
    #[must_use]
    pub fn state(&self) -> Option<&RoundState> {
        self.round.as_ref().map(|round| &round.state)
    }

    /// Configuration of the current round.
    #[must_use]
    pub fn config(&self) -> Option<&RoundConfig> {
        self.round.as_ref().map(|round| &round.config)
    }

    /// Currently forbidden tile.
    #[must_use]
    pub fn forbidden(&self) -> Option<TileId> {
        self.round.as_ref().map(|round| round.state.forbidden)
    }

    /// Prompt awaiting acknowledgement, if any.
    #[must_use]
    pub fn pending_punishment(&self) -> Option<&Punishment> {
        self.state()?.pending().map(|pending| &pending.punishment)
    }

    /// Punishment catalog in use.
    #[must_use]
    pub fn catalog(&self) -> &PunishmentCatalog {
        &self.catalog
    }

    /// Events emitted since the current round started.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundEvent> {
        &self.history
    }

    /// Summary of the current round.
    #[must_use]
    pub fn summary(&self) -> Option<RoundSummary> {
        self.round.as_ref().map(|round| RoundSummary {
            size: round.config.size,
            mode: round.config.mode,
            score: round.state.score,
            remaining: round.grid.remaining_count(),
            phase: round.state.phase,
        })
    }
}

impl std::fmt::Debug for RoundController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundController")
            .field("summary", &self.summary())
            .field("history_len", &self.history.len())
            .finish_non_exhaustive()
    }
}
