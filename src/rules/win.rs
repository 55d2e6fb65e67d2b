//! Win detection.

use super::arrange::hand_score;
use crate::core::config::RoundConfig;
use crate::core::error::{EngineError, EngineResult};
use crate::tiles::{Tile, TileValue};

/// Check a hand holds exactly `expected` tiles.
pub fn check_hand_size(tiles: &[Tile], expected: usize) -> EngineResult<()> {
    if tiles.len() == expected {
        Ok(())
    } else {
        Err(EngineError::InvalidHandSize {
            expected,
            actual: tiles.len(),
        })
    }
}

/// Winning check with the standard table.
#[must_use]
pub fn is_winning(tiles: &[Tile], wildcard: TileValue) -> bool {
    is_winning_with(tiles, wildcard, &RoundConfig::default())
}

/// A full hand (15 tiles) whose arrangement scores exactly the winning score.
///
/// Hands of any other size are simply not winning; display code probes
/// hands mid-drag, so the size error never leaves this function.
#[must_use]
pub fn is_winning_with(tiles: &[Tile], wildcard: TileValue, config: &RoundConfig) -> bool {
    if check_hand_size(tiles, config.full_hand_size()).is_err() {
        return false;
    }
    hand_score(tiles, wildcard, config) == config.winning_score
}
