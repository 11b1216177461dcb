//! Drinking-mode punishment prompts.
//!
//! The catalog is fixed and read-only. The built-in catalog is built
//! once per process and shared by every round through an `Arc`.

use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use crate::core::{GameError, RandomSource, Result};

/// Broad category of a prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PunishmentKind {
    Sips,
    Timed,
    Shared,
    Challenge,
    TruthOrDrink,
    Rule,
    Social,
    GameRelated,
    Luck,
    Misc,
}

/// A single prompt shown before a safe tap takes effect.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Punishment {
    pub kind: PunishmentKind,
    pub text: String,
}

impl Punishment {
    pub fn new(kind: PunishmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl std::fmt::Display for Punishment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

const BUILTIN_PROMPTS: &[(PunishmentKind, &str)] = {
    use PunishmentKind::*;
    &[
        (Sips, "Drink 2 sips 🍺🍺"),
        (Sips, "Drink 3 sips 🍺🍺🍺"),
        (Sips, "Drink 4 sips 🍺🍺🍺🍺"),
        (Sips, "Drink 5 sips! 🍺🍺🍺🍺🍺"),
        (Sips, "Drink 6 sips!! 🍺🍺🍺🍺🍺🍺"),
        (Sips, "Finish your drink! 🍺⬇️"),
        (Timed, "Drink for 3 seconds ⏱️"),
        (Timed, "Drink for 5 seconds ⏱️🍺"),
        (Timed, "Drink until the person on your left says stop 🛑"),
        (Timed, "Drink until the person on your right says stop 🛑"),
        (Shared, "You + the person on your left: 2 sips each 👫"),
        (Shared, "You + the person on your right: 2 sips each 👫"),
        (Shared, "Everyone drinks 3 sips! 🎉"),
        (Shared, "Everyone except you drinks 2 sips! 😈"),
        (Shared, "Pick someone to drink 3 sips 👆"),
        (Shared, "The oldest player drinks 2 sips 👴"),
        (Shared, "The youngest player drinks 2 sips 👶"),
        (Challenge, "Say a player's full name within 3 seconds or drink 3 sips 🗣️"),
        (Challenge, "Name 3 countries in 5 seconds or drink! 🌍"),
        (Challenge, "Name 5 animals in 10 seconds or drink! 🦁"),
        (Challenge, "Say the alphabet backwards or drink 4 sips! 🔤"),
        (Challenge, "Rhyme on a word the group picks or drink 3 sips! 🎤"),
        (TruthOrDrink, "Tell a secret or drink 3 sips 🤫"),
        (TruthOrDrink, "Share one of your most embarrassing moments or drink 3 sips! 😳"),
        (TruthOrDrink, "Tell a joke or drink 2 sips 😂"),
        (TruthOrDrink, "Confess something or drink 4 sips! 🙊"),
        (Rule, "You may only use your left hand for the rest of the game 🖐️"),
        (Rule, "You may not say 'yes' for the rest of the round! ❌"),
        (Rule, "You may not say 'no' for the rest of the round! ❌"),
        (Rule, "Speak only English for the next 2 minutes"),
        (Rule, "You are blind for the rest of the round 👀"),
        (Rule, "You are mute for the rest of the round 🤐"),
        (Rule, "You are paralysed from the neck down for the rest of the round 🦵"),
        (Rule, "No smiling for the next minute, or drink! 😐"),
        (Social, "Call a random contact or drink 3 sips 📱"),
        (Social, "Text the 5th contact in your phone 📲"),
        (Social, "Post something to your story or drink 3 sips! 📸"),
        (Social, "Take a selfie with the person on your left 🤳"),
        (GameRelated, "Skip your next turn ⏭️"),
        (GameRelated, "Play the next round with your eyes closed 👀"),
        (GameRelated, "The next player decides your punishment! Otherwise drink 3 sips 😱"),
        (Luck, "Lucky! You get away with it this time 🍀"),
        (Luck, "SUPER LUCKY! No punishment, and you pick someone to drink! 🌟"),
        (Luck, "Unlucky! Double punishment next time! 💀"),
        (Luck, "JACKPOT! Everyone else drinks 2 sips! 🎰"),
        (Misc, "Waterfall! Everyone starts drinking 🌊"),
        (Misc, "Take a shot! 🥃"),
        (Misc, "Drink with both hands! 🙌"),
        (Misc, "Drink without using your hands! 🐕"),
        (Misc, "Give a toast before you drink! 🎤"),
        (Misc, "Say 'cheers' in 3 languages before you drink 🌐"),
        (Misc, "Make animal noises for the rest of the game before you drink! 🐮"),
    ]
};

/// Fixed, ordered list of punishment prompts.
///
/// ```
/// use forbidden_face::policy::PunishmentCatalog;
///
/// let catalog = PunishmentCatalog::builtin();
/// assert!(!catalog.is_empty());
/// assert_eq!(catalog.get(0).map(|p| p.text.as_str()), Some("Drink 2 sips 🍺🍺"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunishmentCatalog {
    entries: Vec<Punishment>,
}

impl PunishmentCatalog {
    /// Create a catalog from the given prompts.
    pub fn new(entries: impl IntoIterator<Item = Punishment>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The built-in catalog, shared for the lifetime of the process.
    #[must_use]
    pub fn builtin() -> Arc<Self> {
        static BUILTIN: OnceLock<Arc<PunishmentCatalog>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| {
                Arc::new(Self::new(
                    BUILTIN_PROMPTS
                        .iter()
                        .map(|&(kind, text)| Punishment::new(kind, text)),
                ))
            })
            .clone()
    }

    /// Prompt at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Punishment> {
        self.entries.get(index)
    }

    /// Number of prompts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over prompts in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Punishment> {
        self.entries.iter()
    }

    /// Prompts of a given kind.
    pub fn of_kind(&self, kind: PunishmentKind) -> impl Iterator<Item = &Punishment> {
        self.entries.iter().filter(move |p| p.kind == kind)
    }
}

/// Policy choosing a prompt from a catalog.
///
/// Pure selection. Whether a prompt is needed at all is decided by the
/// round controller from the game mode.
pub trait PunishmentPolicy: Send + Sync {
    /// Pick a prompt from `catalog`.
    ///
    /// Fails with `EmptyCatalog` if the catalog has no prompts.
    fn pick_punishment<'c>(
        &self,
        catalog: &'c PunishmentCatalog,
        rng: &mut dyn RandomSource,
    ) -> Result<&'c Punishment>;
}

/// Uniform choice over the catalog.
#[derive(Clone, Debug, Default)]
pub struct UniformPunishment;

impl PunishmentPolicy for UniformPunishment {
    fn pick_punishment<'c>(
        &self,
        catalog: &'c PunishmentCatalog,
        rng: &mut dyn RandomSource,
    ) -> Result<&'c Punishment> {
        if catalog.is_empty() {
            return Err(GameError::EmptyCatalog);
        }
        catalog.get(rng.pick(catalog.len())).ok_or(GameError::EmptyCatalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, ScriptedSource};

    #[test]
    fn test_builtin_contents() {
        let catalog = PunishmentCatalog::builtin();

        assert_eq!(catalog.len(), 52);
        assert_eq!(catalog.of_kind(PunishmentKind::Sips).count(), 6);
        assert_eq!(catalog.of_kind(PunishmentKind::Luck).count(), 4);
        assert!(catalog.iter().all(|p| !p.text.is_empty()));
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = PunishmentCatalog::builtin();
        let b = PunishmentCatalog::builtin();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_pick_follows_source() {
        let catalog = PunishmentCatalog::builtin();
        let mut source = ScriptedSource::new([12]);

        let picked = UniformPunishment.pick_punishment(&catalog, &mut source).unwrap();
        assert_eq!(picked, catalog.get(12).unwrap());
        assert_eq!(picked.kind, PunishmentKind::Shared);
    }

    #[test]
    fn test_pick_reproducible() {
        let catalog = PunishmentCatalog::builtin();
        let mut rng1 = GameRng::new(3);
        let mut rng2 = GameRng::new(3);

        for _ in 0..20 {
            assert_eq!(
                UniformPunishment.pick_punishment(&catalog, &mut rng1),
                UniformPunishment.pick_punishment(&catalog, &mut rng2)
            );
        }
    }

    #[test]
    fn test_pick_empty_catalog() {
        let catalog = PunishmentCatalog::default();
        let mut rng = GameRng::new(3);

        assert_eq!(
            UniformPunishment.pick_punishment(&catalog, &mut rng),
            Err(GameError::EmptyCatalog)
        );
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = PunishmentCatalog::new([Punishment::new(PunishmentKind::Misc, "Sing")]);
        let mut rng = GameRng::new(8);

        for _ in 0..5 {
            let picked = UniformPunishment.pick_punishment(&catalog, &mut rng).unwrap();
            assert_eq!(picked.to_string(), "Sing");
        }
    }
}
