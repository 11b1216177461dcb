//! Round configuration.
//!
//! Everything a round needs from the menu is passed explicitly at start:
//! - `GameMode`: classic or drinking
//! - grid size (N for an N×N grid)
//! - `AvatarSet`: opaque face images, by slot
//! - whether the forbidden marker is revealed to the presentation layer
//!
//! Nothing is read from shared registries; restarting a round reuses the
//! same `RoundConfig` value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Smallest playable grid size. A 1×1 grid has no safe tile.
pub const MIN_GRID_SIZE: usize = 2;

/// Largest accepted grid size.
pub const MAX_GRID_SIZE: usize = 64;

/// Grid size used when the caller does not pick one.
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Game variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Safe taps take effect immediately.
    #[default]
    Classic,
    /// Every safe tap is gated behind an acknowledged punishment prompt.
    Drinking,
}

impl GameMode {
    /// Check if safe taps require a punishment acknowledgement.
    #[must_use]
    pub const fn is_drinking(self) -> bool {
        matches!(self, Self::Drinking)
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Drinking => "Drinking",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classic => f.write_str("classic"),
            Self::Drinking => f.write_str("drinking"),
        }
    }
}

/// Error returned when parsing an unknown mode name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown game mode {0:?}, expected \"classic\" or \"drinking\"")]
pub struct ParseModeError(pub String);

impl FromStr for GameMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "drinking" => Ok(Self::Drinking),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Opaque handle to a face image owned by the asset collaborator.
///
/// The core never looks inside; it only hands the reference back with
/// each tile.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AvatarRef(pub String);

impl AvatarRef {
    /// Create an avatar reference.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AvatarRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Avatar images by slot index.
///
/// Tiles are assigned slots cyclically in creation order: tile `k` shows
/// slot `k % len`. An empty set leaves every tile without an avatar and
/// the asset collaborator draws its fallback face.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarSet {
    slots: Vec<AvatarRef>,
}

impl AvatarSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an avatar in the next slot.
    pub fn push(&mut self, avatar: AvatarRef) {
        self.slots.push(avatar);
    }

    /// Avatar in `slot`, if any.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&AvatarRef> {
        self.slots.get(slot)
    }

    /// Avatar for the tile created at `index`.
    #[must_use]
    pub fn for_tile(&self, index: usize) -> Option<&AvatarRef> {
        if self.slots.is_empty() {
            None
        } else {
            self.slots.get(index % self.slots.len())
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no avatars were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over avatars in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &AvatarRef> {
        self.slots.iter()
    }
}

impl<A: Into<AvatarRef>> FromIterator<A> for AvatarSet {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<&str> for AvatarRef {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for AvatarRef {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Configuration for one round.
///
/// Size is validated when the round starts, not here, so an invalid
/// configuration can be built and rejected by `RoundController::start`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Grid dimension N (the grid is N×N).
    pub size: usize,

    /// Game variant.
    pub mode: GameMode,

    /// Face images by slot.
    pub avatars: AvatarSet,

    /// Reveal the forbidden tile in emitted events (debug marker).
    pub show_marker: bool,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

impl RoundConfig {
    /// Create a classic-mode configuration for an N×N grid.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            mode: GameMode::Classic,
            avatars: AvatarSet::new(),
            show_marker: false,
        }
    }

    /// Classic mode shortcut.
    pub fn classic(size: usize) -> Self {
        Self::new(size)
    }

    /// Drinking mode shortcut.
    pub fn drinking(size: usize) -> Self {
        Self::new(size).with_mode(GameMode::Drinking)
    }

    /// Set the game mode.
    #[must_use]
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the avatar images.
    #[must_use]
    pub fn with_avatars(mut self, avatars: AvatarSet) -> Self {
        self.avatars = avatars;
        self
    }

    /// Reveal or hide the forbidden marker.
    #[must_use]
    pub fn with_marker(mut self, show: bool) -> Self {
        self.show_marker = show;
        self
    }

    /// Total tiles in the grid (N²).
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.size.saturating_mul(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_config_defaults() {
        let config = RoundConfig::default();

        assert_eq!(config.size, DEFAULT_GRID_SIZE);
        assert_eq!(config.mode, GameMode::Classic);
        assert!(config.avatars.is_empty());
        assert!(!config.show_marker);
        assert_eq!(config.tile_count(), 16);
    }

    #[test]
    fn test_round_config_builder() {
        let config = RoundConfig::new(3)
            .with_mode(GameMode::Drinking)
            .with_avatars(["alice", "bob"].into_iter().collect())
            .with_marker(true);

        assert_eq!(config.size, 3);
        assert!(config.mode.is_drinking());
        assert_eq!(config.avatars.len(), 2);
        assert!(config.show_marker);
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(RoundConfig::classic(5).mode, GameMode::Classic);
        assert_eq!(RoundConfig::drinking(5).mode, GameMode::Drinking);
    }

    #[test]
    fn test_mode_parse_and_display() {
        assert_eq!("classic".parse::<GameMode>(), Ok(GameMode::Classic));
        assert_eq!(" Drinking ".parse::<GameMode>(), Ok(GameMode::Drinking));
        assert!("party".parse::<GameMode>().is_err());

        assert_eq!(GameMode::Drinking.to_string(), "drinking");
        assert_eq!(GameMode::Classic.label(), "Classic");
    }

    #[test]
    fn test_avatar_slots_cycle() {
        let avatars: AvatarSet = ["a", "b", "c"].into_iter().collect();

        assert_eq!(avatars.for_tile(0), Some(&AvatarRef::new("a")));
        assert_eq!(avatars.for_tile(4), Some(&AvatarRef::new("b")));
        assert_eq!(avatars.get(2).map(AvatarRef::key), Some("c"));
        assert_eq!(avatars.get(3), None);
    }

    #[test]
    fn test_empty_avatars() {
        let avatars = AvatarSet::new();
        assert_eq!(avatars.for_tile(0), None);
    }

    #[test]
    fn test_config_serialization() {
        let config = RoundConfig::drinking(3).with_avatars(["face"].into_iter().collect());
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"drinking\""));

        let deserialized: RoundConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
