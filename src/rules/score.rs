//! Consecutive-column scoring.
//!
//! Scoring never looks at tile values. It splits an arranged hand into
//! groups of strictly consecutive columns and counts every group of 3+
//! tiles, except the last group in column order: that tail is where the
//! unplayable tiles and the discard candidate sit.

use crate::tiles::Tile;

/// Groups of placed tiles with strictly consecutive columns.
///
/// Any gap starts a new group. Unplaced tiles are ignored.
#[must_use]
pub fn group_consecutive_columns(tiles: &[Tile]) -> Vec<Vec<Tile>> {
    let mut placed: Vec<(u8, Tile)> = tiles
        .iter()
        .filter_map(|t| t.column.map(|c| (c, *t)))
        .collect();
    placed.sort_by_key(|(column, _)| *column);

    let mut groups: Vec<Vec<Tile>> = Vec::new();
    let mut previous: Option<u8> = None;
    for (column, tile) in placed {
        match (previous, groups.last_mut()) {
            (Some(prev), Some(group)) if column == prev.saturating_add(1) => group.push(tile),
            _ => groups.push(vec![tile]),
        }
        previous = Some(column);
    }
    groups
}

/// Sum of group sizes over groups longer than 2, skipping the last group.
///
/// ```
/// use okey_engine::rules::score;
/// use okey_engine::tiles::{Color, Tile, TileId};
///
/// let at = |id: u16, column: u8| Tile::new(TileId(id), 1, Color::Red).at_column(column);
/// // Columns 1-3 count; the tail at 25-26 never does.
/// let hand = vec![at(0, 1), at(1, 2), at(2, 3), at(3, 25), at(4, 26)];
/// assert_eq!(score(&hand), 3);
/// ```
#[must_use]
pub fn score(tiles: &[Tile]) -> u32 {
    let groups = group_consecutive_columns(tiles);
    let counted = groups.len().saturating_sub(1);
    groups[..counted]
        .iter()
        .filter(|g| g.len() > 2)
        .map(|g| g.len() as u32)
        .sum()
}
