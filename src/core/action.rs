//! Player commands and the action history.
//!
//! Every mutation of a `RoundState` is expressed as an `Action` submitted by a
//! seat. Applied actions are appended to the round history as `ActionRecord`s,
//! which is what the presentation layer replays or logs.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::tiles::TileId;

/// A command from one seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Take the head of the stock. `column` is the preferred rack slot.
    DrawFromStock { column: Option<u8> },

    /// Take the newest tile from the previous seat's discard stack.
    ClaimDiscard { column: Option<u8> },

    /// Discard a tile onto this seat's outgoing stack, ending the turn.
    Discard(TileId),

    /// Move the tile at `from` to `to`, swapping with any tile already there.
    MoveTile { from: u8, to: u8 },

    /// Replace the hand with its arranged layout.
    AutoSort,

    /// Claim the round with the hand's current layout.
    DeclareWin,
}

impl Action {
    /// True for the two ways of taking the fifteenth tile.
    #[must_use]
    pub fn is_pull(&self) -> bool {
        matches!(self, Action::DrawFromStock { .. } | Action::ClaimDiscard { .. })
    }
}

/// An applied action with its position in the round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player: PlayerId,
    pub action: Action,
    /// Turn number when the action was applied (starts at 1).
    pub turn: u32,
    /// Sequence number within the round.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
