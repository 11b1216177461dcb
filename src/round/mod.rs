//! Round controller and the types it reports.
//!
//! The controller ties the grid and the policies together:
//! - receives starts, taps and punishment acknowledgements
//! - decides elimination vs. loss
//! - gates safe taps behind punishments in drinking mode
//! - detects the win (only the forbidden tile left)
//!
//! Each honored input yields one `RoundEvent` for the presentation layer.

mod controller;
mod event;
mod state;

pub use controller::RoundController;
pub use event::{RoundEvent, RoundEventKind};
pub use state::{PendingTap, Phase, RoundState, RoundSummary};
