//! Round configuration.
//!
//! `RoundConfig` carries the table constants the engine needs: hand sizes,
//! the winning point value, and the column layout used by the arranger.
//! Defaults are the standard four-player Okey table.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PLAYER_COUNT};

/// Table constants for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Tiles dealt to the dealer, who opens by discarding.
    pub dealer_hand_size: usize,

    /// Tiles dealt to every other seat; also the between-turns hand size.
    pub hand_size: usize,

    /// Exact score that wins a round.
    pub winning_score: u32,

    /// Width of one rack row. The arranger never starts a meld on this
    /// column; a meld that would is moved one column right.
    pub column_boundary: u8,

    /// Last column of the rack. The first unmelded tile lands here after
    /// arranging and further unmelded tiles descend from it.
    pub leftover_anchor_column: u8,

    /// Seat that receives the extra tile and acts first.
    pub dealer: PlayerId,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            dealer_hand_size: 15,
            hand_size: 14,
            winning_score: 14,
            column_boundary: 13,
            leftover_anchor_column: 26,
            dealer: PlayerId::ONE,
        }
    }
}

impl RoundConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the between-turns hand size; the dealer gets one more.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        assert!(size > 0, "Hand size must be positive");
        self.hand_size = size;
        self.dealer_hand_size = size + 1;
        self
    }

    #[must_use]
    pub fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score;
        self
    }

    #[must_use]
    pub fn with_dealer(mut self, dealer: PlayerId) -> Self {
        self.dealer = dealer;
        self
    }

    #[must_use]
    pub fn with_column_boundary(mut self, boundary: u8) -> Self {
        self.column_boundary = boundary;
        self
    }

    #[must_use]
    pub fn with_leftover_anchor_column(mut self, column: u8) -> Self {
        assert!(column > 0, "Anchor column must be positive");
        self.leftover_anchor_column = column;
        self
    }

    /// Hand size while a player holds the extra tile (after a pull, before a discard).
    #[must_use]
    pub fn full_hand_size(&self) -> usize {
        self.hand_size + 1
    }

    /// Tiles dealt for `player`.
    #[must_use]
    pub fn deal_size(&self, player: PlayerId) -> usize {
        if player == self.dealer {
            self.dealer_hand_size
        } else {
            self.hand_size
        }
    }

    /// Total tiles the deal needs.
    ///
    /// ```
    /// use okey_engine::core::RoundConfig;
    ///
    /// assert_eq!(RoundConfig::default().required_tiles(), 57);
    /// ```
    #[must_use]
    pub fn required_tiles(&self) -> usize {
        self.dealer_hand_size + (PLAYER_COUNT - 1) * self.hand_size
    }
}
