//! Four-player Okey.
//!
//! - 106 tiles: 4 colors x 13 numbers x 2 copies, plus two synthetic jokers
//! - One indicator tile sets the round's wildcard (same color, number + 1)
//! - The dealer starts with 15 tiles, everyone else with 14
//! - On your turn: claim the previous seat's discard or draw, then discard
//! - First arranged 15-tile hand scoring exactly 14 wins; an empty stock
//!   ends the round with no winner

mod game;

pub use game::{BotTurn, OkeyGame, OkeyGameBuilder};
