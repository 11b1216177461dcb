//! Randomized policies used by the round controller.
//!
//! Policies are trait-based so they can be swapped:
//! - `SelectionPolicy`: which live tile is forbidden
//! - `PunishmentPolicy`: which drinking-mode prompt to show
//!
//! Both draw from an injected `RandomSource` and keep no state of their own.

mod punishment;
mod selection;

pub use punishment::{
    Punishment, PunishmentCatalog, PunishmentKind, PunishmentPolicy, UniformPunishment,
};
pub use selection::{SelectionPolicy, UniformSelection};
