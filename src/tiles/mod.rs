//! Tiles, the round's pool, and player racks.
//!
//! ## Key Types
//!
//! - `Tile`: immutable tile value with id, face value, joker flag and column
//! - `TileValue`: number + color, the unit of "same value" comparisons
//! - `Hand`: a rack of tiles keyed by column
//! - `Deal`: the four hands and the stock produced at round start

pub mod hand;
pub mod pool;
pub mod tile;

pub use hand::Hand;
pub use pool::{
    build_pool, deal, derive_wildcard_value, distribute, inject_synthetic_wildcards,
    select_indicator, Deal, JOKER_IDS, NUMBERED_TILES, ROUND_TILES,
};
pub use tile::{next_number, Color, Tile, TileId, TileValue, MAX_NUMBER};
