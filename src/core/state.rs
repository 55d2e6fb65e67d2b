//! Round state.
//!
//! `RoundState` is the whole of a round: the indicator and wildcard, the four
//! racks, the stock, the four outgoing discard stacks, the turn counter and
//! the action history. Engine operations take it explicitly and never touch
//! anything else.
//!
//! Uses `im` persistent vectors for the stock, discard stacks and history so
//! cloning a state (for bot look-ahead or replay) is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::player::{PlayerId, PlayerMap};
use crate::rules::RoundResult;
use crate::tiles::{Deal, Hand, Tile, TileValue};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundState {
    /// Tile revealed at setup; kept out of play.
    pub indicator: Tile,

    /// Value every tile substitutes for this round.
    pub wildcard: TileValue,

    /// Racks.
    pub hands: PlayerMap<Hand>,

    /// Undealt tiles. The head (front) is drawn next.
    pub stock: Vector<Tile>,

    /// Outgoing discard stacks, keyed by the seat that discarded. Newest at
    /// the back.
    pub discards: PlayerMap<Vector<Tile>>,

    /// Seat whose turn it is.
    pub active_player: PlayerId,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Actions applied this round.
    pub action_sequence: u32,

    /// Every applied action, in order.
    pub history: Vector<ActionRecord>,

    /// Set once the round has ended.
    pub outcome: Option<RoundResult>,
}

impl RoundState {
    /// A freshly dealt round with `dealer` to act.
    #[must_use]
    pub fn new(indicator: Tile, wildcard: TileValue, deal: Deal, dealer: PlayerId) -> Self {
        Self {
            indicator,
            wildcard,
            hands: deal.hands,
            stock: deal.stock,
            discards: PlayerMap::with_default(),
            active_player: dealer,
            turn_number: 1,
            action_sequence: 0,
            history: Vector::new(),
            outcome: None,
        }
    }

    #[must_use]
    pub fn hand(&self, player: PlayerId) -> &Hand {
        &self.hands[player]
    }

    pub fn hand_mut(&mut self, player: PlayerId) -> &mut Hand {
        &mut self.hands[player]
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    // === Stock and discards ===

    /// Take the head of the stock.
    pub fn draw_from_stock(&mut self) -> Option<Tile> {
        self.stock.pop_front()
    }

    /// The tile `player` could claim: the newest discard of the seat before
    /// them.
    #[must_use]
    pub fn claimable_discard(&self, player: PlayerId) -> Option<&Tile> {
        self.discards[player.previous()].back()
    }

    /// Remove and return the tile `player` could claim.
    pub fn take_discard(&mut self, player: PlayerId) -> Option<Tile> {
        self.discards[player.previous()].pop_back()
    }

    /// Push a tile onto `player`'s outgoing stack.
    pub fn push_discard(&mut self, player: PlayerId, tile: Tile) {
        self.discards[player].push_back(tile.unplaced());
    }

    // === Turn Advancement ===

    /// Pass the turn to the next seat.
    pub fn advance_turn(&mut self) {
        self.active_player = self.active_player.next();
        self.turn_number += 1;
    }

    // === Action History ===

    /// Record an applied action.
    pub fn record_action(&mut self, player: PlayerId, action: Action) {
        let record = ActionRecord::new(player, action, self.turn_number, self.action_sequence);
        self.action_sequence += 1;
        self.history.push_back(record);
    }

    /// Tiles accounted for: racks, stock, discard stacks and the indicator.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.hands.values().map(Hand::len).sum::<usize>()
            + self.stock.len()
            + self.discards.values().map(Vector::len).sum::<usize>()
            + 1
    }

    /// Every tile in the round, indicator first.
    pub fn all_tiles(&self) -> impl Iterator<Item = &Tile> {
        std::iter::once(&self.indicator)
            .chain(self.hands.values().flat_map(Hand::iter))
            .chain(self.stock.iter())
            .chain(self.discards.values().flat_map(|stack| stack.iter()))
    }
}
