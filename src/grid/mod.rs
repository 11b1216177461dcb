//! Grid model: the tiles of a round and their positions.
//!
//! Pure bookkeeping. The grid knows nothing about which tile is
//! forbidden; that is decided by the selection policy and tracked by the
//! round controller.

mod model;

pub use model::{Grid, Tile, TilePosition};
