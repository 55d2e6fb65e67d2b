//! Engine error taxonomy.
//!
//! - `InsufficientTiles`: the deal cannot be made; fatal to the round.
//! - `EmptyStock`: a draw found no stock; the round ends with no winner.
//! - `InvalidHandSize`: a hand of the wrong size was probed; win checks turn
//!   this into `false` locally.
//! - `IllegalMove`: a command the current state does not allow; nothing was
//!   changed.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::tiles::TileId;

/// Reason a command was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum IllegalMove {
    #[error("it is {active}'s turn")]
    NotYourTurn { active: PlayerId },
    #[error("the round is over")]
    RoundOver,
    #[error("hand is already full")]
    HandFull,
    #[error("hand is not full")]
    HandNotFull,
    #[error("tile {0} is not in the hand")]
    UnknownTile(TileId),
    #[error("no tile at column {0}")]
    EmptyColumn(u8),
    #[error("column {0} is off the rack")]
    InvalidColumn(u8),
    #[error("no free column on the rack")]
    RackFull,
    #[error("no discard to claim from {0}")]
    NoDiscardToClaim(PlayerId),
    #[error("layout does not score a win")]
    NotAWinningLayout,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("not enough tiles to deal: need {needed}, have {available}")]
    InsufficientTiles { needed: usize, available: usize },

    #[error("the stock is empty")]
    EmptyStock,

    #[error("hand has {actual} tiles, expected {expected}")]
    InvalidHandSize { expected: usize, actual: usize },

    #[error("illegal move: {0}")]
    IllegalMove(#[from] IllegalMove),
}

pub type EngineResult<T> = Result<T, EngineError>;
