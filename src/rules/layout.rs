//! Layout validation for hands a player arranged by hand.
//!
//! The arranger's score trusts its own layout. A player declaring a win has
//! placed tiles themselves, so every group of 3+ consecutive columns is
//! checked against the actual meld rules before it counts.

use super::score::group_consecutive_columns;
use crate::core::config::RoundConfig;
use crate::melds::MeldKind;
use crate::tiles::{Tile, TileValue, MAX_NUMBER};

/// Largest set: one tile per color.
pub const MAX_SET_LEN: usize = 4;

/// Classify a group of tiles in column order.
///
/// Unflagged wildcard-value tiles fill any slot. A run is one color with
/// numbers stepping by one, up or down, wrapping 13 to 1. A set is one
/// number in distinct colors, at most four tiles.
#[must_use]
pub fn is_valid_group(group: &[Tile], wildcard: TileValue) -> Option<MeldKind> {
    if group.len() < 3 {
        return None;
    }

    let naturals: Vec<(usize, Tile)> = group
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, t)| !t.is_substitute(wildcard))
        .collect();

    if is_run(group.len(), &naturals) {
        Some(MeldKind::Run)
    } else if is_set(group.len(), &naturals) {
        Some(MeldKind::Set)
    } else {
        None
    }
}

fn is_run(len: usize, naturals: &[(usize, Tile)]) -> bool {
    if len > MAX_NUMBER as usize {
        return false;
    }
    let Some((_, first)) = naturals.first() else {
        return true;
    };
    if naturals.iter().any(|(_, t)| t.color != first.color) {
        return false;
    }

    let modulus = i32::from(MAX_NUMBER);
    let offset = |slot: usize, tile: &Tile, step: i32| {
        (i32::from(tile.number) - 1 - step * slot as i32).rem_euclid(modulus)
    };
    [1, -1].into_iter().any(|step| {
        let anchor = offset(naturals[0].0, &naturals[0].1, step);
        naturals
            .iter()
            .all(|(slot, tile)| offset(*slot, tile, step) == anchor)
    })
}

fn is_set(len: usize, naturals: &[(usize, Tile)]) -> bool {
    if len > MAX_SET_LEN {
        return false;
    }
    let Some((_, first)) = naturals.first() else {
        return true;
    };
    naturals.iter().all(|(_, t)| t.number == first.number)
        && naturals
            .iter()
            .enumerate()
            .all(|(i, (_, a))| naturals[..i].iter().all(|(_, b)| b.color != a.color))
}

/// Points in a hand-made layout: the total size of every valid group.
///
/// Unlike [`score`](super::score::score) no group is skipped; the player's
/// spare tile has to sit in a group too short to count.
#[must_use]
pub fn validate_layout(tiles: &[Tile], wildcard: TileValue) -> u32 {
    group_consecutive_columns(tiles)
        .iter()
        .filter(|g| is_valid_group(g, wildcard).is_some())
        .map(|g| g.len() as u32)
        .sum()
}

/// A declared win: full hand and exactly the winning score in valid groups.
#[must_use]
pub fn is_winning_layout(tiles: &[Tile], wildcard: TileValue, config: &RoundConfig) -> bool {
    tiles.len() == config.full_hand_size() && validate_layout(tiles, wildcard) == config.winning_score
}
