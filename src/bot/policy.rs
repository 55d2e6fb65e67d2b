//! Turn policies for computer-controlled seats.
//!
//! A policy makes the two decisions of a bot turn:
//! - `choose_source`: claim the previous seat's discard or draw from the stock
//! - `choose_discard`: which tile leaves the (arranged) fifteen-tile hand
//!
//! The engine does everything else: pulling, arranging, the win check and
//! advancing the turn. Policies are pure and synchronous; any pacing delay
//! belongs to the caller.

use serde::{Deserialize, Serialize};

use crate::core::RoundConfig;
use crate::rules::hand_score;
use crate::tiles::{Hand, Tile, TileId, TileValue};

/// Where a bot takes its fifteenth tile from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawSource {
    Stock,
    Discard,
}

// =============================================================================
// Turn Policy
// =============================================================================

/// Decision logic for a bot seat.
pub trait TurnPolicy: Send + Sync {
    /// Pick the pull source for a fourteen-tile hand.
    ///
    /// `discard` is the tile the previous seat discarded last, if any.
    fn choose_source(
        &self,
        hand: &Hand,
        discard: Option<&Tile>,
        wildcard: TileValue,
        config: &RoundConfig,
    ) -> DrawSource;

    /// Pick the tile to discard from an arranged fifteen-tile hand.
    ///
    /// Returns `None` only for an empty hand.
    fn choose_discard(&self, hand: &Hand) -> Option<TileId>;
}

/// Greedy score policy.
///
/// Claims the discard only if adding it raises the arranged score, and
/// always discards the tile in the highest column. After arranging, that is
/// the first unmelded tile.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyScorePolicy;

impl TurnPolicy for GreedyScorePolicy {
    fn choose_source(
        &self,
        hand: &Hand,
        discard: Option<&Tile>,
        wildcard: TileValue,
        config: &RoundConfig,
    ) -> DrawSource {
        let Some(candidate) = discard else {
            return DrawSource::Stock;
        };

        let baseline = hand_score(hand.tiles(), wildcard, config);
        let mut with_candidate = hand.tiles().to_vec();
        with_candidate.push(candidate.unplaced());

        if hand_score(&with_candidate, wildcard, config) > baseline {
            DrawSource::Discard
        } else {
            DrawSource::Stock
        }
    }

    fn choose_discard(&self, hand: &Hand) -> Option<TileId> {
        hand.highest_column_tile().map(|t| t.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::Color;

    const WILD: TileValue = TileValue::new(13, Color::Yellow);

    fn t(id: u16, number: u8, color: Color) -> Tile {
        Tile::new(TileId(id), number, color)
    }

    fn placed(tiles: Vec<Tile>) -> Hand {
        Hand::new(
            tiles
                .into_iter()
                .enumerate()
                .map(|(i, t)| t.at_column(i as u8 + 1))
                .collect(),
        )
    }

    #[test]
    fn test_claims_when_score_improves() {
        // red 1-2 plus junk; the red 3 completes a run.
        let hand = placed(vec![
            t(0, 1, Color::Red),
            t(1, 2, Color::Red),
            t(2, 9, Color::Blue),
            t(3, 5, Color::Green),
        ]);
        let discard = t(10, 3, Color::Red);

        let source = GreedyScorePolicy.choose_source(&hand, Some(&discard), WILD, &RoundConfig::default());
        assert_eq!(source, DrawSource::Discard);
    }

    #[test]
    fn test_draws_when_score_does_not_improve() {
        let hand = placed(vec![
            t(0, 1, Color::Red),
            t(1, 2, Color::Red),
            t(2, 9, Color::Blue),
        ]);
        let discard = t(10, 7, Color::Green);

        let source = GreedyScorePolicy.choose_source(&hand, Some(&discard), WILD, &RoundConfig::default());
        assert_eq!(source, DrawSource::Stock);
    }

    #[test]
    fn test_draws_without_a_discard() {
        let hand = placed(vec![t(0, 1, Color::Red)]);
        let source = GreedyScorePolicy.choose_source(&hand, None, WILD, &RoundConfig::default());
        assert_eq!(source, DrawSource::Stock);
    }

    #[test]
    fn test_discards_highest_column() {
        let hand = Hand::new(vec![
            t(0, 1, Color::Red).at_column(3),
            t(1, 2, Color::Red).at_column(26),
            t(2, 3, Color::Red).at_column(12),
        ]);

        assert_eq!(GreedyScorePolicy.choose_discard(&hand), Some(TileId(1)));
        assert_eq!(GreedyScorePolicy.choose_discard(&Hand::default()), None);
    }
}
