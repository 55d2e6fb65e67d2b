//! Rules engine trait for round implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What actions are legal
//! - How actions modify state
//! - When the round is over

use serde::{Deserialize, Serialize};

use crate::core::action::Action;
use crate::core::config::RoundConfig;
use crate::core::error::EngineResult;
use crate::core::player::PlayerId;
use crate::core::state::RoundState;

/// Result of a completed round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    /// Single winner.
    Winner(PlayerId),
    /// A draw found the stock empty. Nobody won.
    StockExhausted,
}

impl RoundResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, RoundResult::Winner(p) if *p == player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            RoundResult::Winner(p) => Some(*p),
            RoundResult::StockExhausted => None,
        }
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty vec if the player can't act
/// - `apply_action`: Must be deterministic; on `Err(IllegalMove)` the state
///   is unchanged
/// - `is_terminal`: Return None if the round continues
pub trait RulesEngine {
    /// Get the round configuration.
    fn config(&self) -> &RoundConfig;

    /// Enumerate the actions a player could submit right now.
    fn legal_actions(&self, state: &RoundState, player: PlayerId) -> Vec<Action>;

    /// Apply an action to the round state.
    fn apply_action(&self, state: &mut RoundState, player: PlayerId, action: &Action) -> EngineResult<()>;

    /// Check if the round is over.
    ///
    /// Returns `Some(result)` if the round has ended, `None` if it continues.
    fn is_terminal(&self, state: &RoundState) -> Option<RoundResult>;

    // === Convenience Methods ===

    /// Apply an action, swallowing any rejection.
    ///
    /// Interactive front ends submit commands freely (drags onto occupied
    /// slots, discards mid-draw) and expect rejected ones to do nothing.
    /// Returns whether the action was applied.
    fn apply_or_ignore(&self, state: &mut RoundState, player: PlayerId, action: &Action) -> bool {
        self.apply_action(state, player, action).is_ok()
    }
}
