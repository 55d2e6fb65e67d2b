//! Core engine types: players, state, actions, RNG, configuration, errors.
//!
//! This module holds the building blocks every rule operation shares.
//! Table constants live in `RoundConfig` rather than in the rules.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::RoundConfig;
pub use error::{EngineError, EngineResult, IllegalMove};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
pub use state::RoundState;
