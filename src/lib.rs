//! # okey-engine
//!
//! Rule engine for four-player Okey, the tile-based rummy game.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: Every operation takes the `RoundState` it works on.
//!    Nothing in the crate holds round data on the side.
//!
//! 2. **Deterministic**: All randomness goes through a seeded `GameRng`, and
//!    only at setup. Replaying the same seed and actions reproduces a round.
//!
//! 3. **Configuration Over Convention**: Hand sizes, the winning score and
//!    the rack layout live in `RoundConfig`.
//!
//! ## Architecture
//!
//! - **Greedy Detection**: melds are found run-first, then sets. This is not
//!   an optimal partition; scores and wins are defined against it.
//!
//! - **Column Scoring**: an arranged hand scores by its column layout, not
//!   by re-inspecting tile values.
//!
//! - **Persistent Data Structures**: stock, discard stacks and history use
//!   `im` vectors, so cloning a round is cheap.
//!
//! ## Modules
//!
//! - `core`: players, state, actions, RNG, configuration, errors
//! - `tiles`: tiles, the pool and the deal, hands
//! - `melds`: run and set detection, wildcard allocation
//! - `rules`: arranging, scoring, win checks, the `RulesEngine` trait
//! - `bot`: turn policies for computer seats
//! - `games`: the Okey round

pub mod bot;
pub mod core;
pub mod games;
pub mod melds;
pub mod rules;
pub mod tiles;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, EngineError, EngineResult, GameRng, IllegalMove, PlayerId,
    PlayerMap, RoundConfig, RoundState,
};

pub use crate::tiles::{Color, Hand, Tile, TileId, TileValue};

pub use crate::melds::{Meld, MeldKind};

pub use crate::rules::{arrange, is_winning, score, RoundResult, RulesEngine};

pub use crate::bot::{DrawSource, GreedyScorePolicy, TurnPolicy};

pub use crate::games::okey::{BotTurn, OkeyGame, OkeyGameBuilder};
