//! Hand arrangement.
//!
//! `arrange` lays a hand out the way the auto-sort button does, and the
//! layout it produces is what scoring reads:
//!
//! ```text
//! columns:  1 2 3 4 5 _ 7 8 9 10 11 _ _ 14 15 16 ... 24 25 26
//!           [ meld  ]   [  meld    ]     [meld ]      [leftover]
//! ```
//!
//! Melds go left to right, longest first, each followed by one empty column.
//! No meld starts on the row boundary (column 13): one that would is pushed
//! to the next column, leaving a two-column gap. Melds are never adjacent, so
//! each one scores as its own group. Unmelded tiles fill leftwards from the
//! anchor column (26).

use super::score::score;
use crate::core::config::RoundConfig;
use crate::melds::{allocate_wildcards, detect_melds, split_substitutes, Detection};
use crate::tiles::{Tile, TileValue};

/// Arrange with the standard table layout.
#[must_use]
pub fn arrange(tiles: &[Tile], wildcard: TileValue) -> Vec<Tile> {
    arrange_with(tiles, wildcard, &RoundConfig::default())
}

/// Arrange a hand: same tiles, new columns.
///
/// 1. Set aside unflagged wildcard-value tiles.
/// 2. Detect melds in the rest (runs, full sets, partial sets).
/// 3. Shortest melds first, hand out wildcards, then longest first.
/// 4. Lay melds out from column 1 with the gap rule above.
/// 5. Unmelded tiles from the anchor column downwards, then any wildcards
///    nobody took.
#[must_use]
pub fn arrange_with(tiles: &[Tile], wildcard: TileValue, config: &RoundConfig) -> Vec<Tile> {
    let (substitutes, rest) = split_substitutes(tiles, wildcard);
    let Detection {
        mut melds,
        leftover,
    } = detect_melds(&rest);

    melds.sort_by_key(|m| m.len());
    let unused = allocate_wildcards(&mut melds, substitutes);
    melds.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut arranged = Vec::with_capacity(tiles.len());
    let mut start: u8 = 1;
    for meld in &melds {
        for (offset, tile) in meld.tiles.iter().enumerate() {
            arranged.push(tile.at_column(start + offset as u8));
        }
        let next = start + meld.len() as u8 + 1;
        start = if next == config.column_boundary { next + 1 } else { next };
    }

    for (offset, tile) in leftover.iter().chain(unused.iter()).enumerate() {
        let column = config
            .leftover_anchor_column
            .saturating_sub(offset as u8)
            .max(1);
        arranged.push(tile.at_column(column));
    }

    arranged
}

/// Score of the arranged hand.
#[must_use]
pub fn hand_score(tiles: &[Tile], wildcard: TileValue, config: &RoundConfig) -> u32 {
    score(&arrange_with(tiles, wildcard, config))
}
