//! Round rules: arranging, scoring, win detection and the engine trait.
//!
//! - `arrange`: lays a hand out into columns (melds left, leftovers right)
//! - `score`: counts consecutive-column groups of an arranged hand
//! - `win`: arranged-hand win check used by bots
//! - `layout`: validates a player's own layout for a declared win
//! - `engine`: the `RulesEngine` trait games implement
//!
//! Scoring never inspects tile values; it only trusts the columns `arrange`
//! produced. Declared wins go through `layout` instead, which does.

pub mod arrange;
pub mod engine;
pub mod layout;
pub mod score;
pub mod win;

pub use arrange::{arrange, arrange_with, hand_score};
pub use engine::{RoundResult, RulesEngine};
pub use layout::{is_valid_group, is_winning_layout, validate_layout, MAX_SET_LEN};
pub use score::{group_consecutive_columns, score};
pub use win::{check_hand_size, is_winning, is_winning_with};
