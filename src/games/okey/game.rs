//! Okey round implementation.

use serde::{Deserialize, Serialize};

use crate::bot::{DrawSource, TurnPolicy};
use crate::core::{
    Action, EngineError, EngineResult, GameRng, IllegalMove, PlayerId, RoundConfig, RoundState,
};
use crate::rules::{arrange_with, is_winning_layout, is_winning_with, RoundResult, RulesEngine};
use crate::tiles::{
    build_pool, deal, derive_wildcard_value, distribute, inject_synthetic_wildcards,
    select_indicator, Tile, TileId,
};

/// Four-player Okey rules.
#[derive(Clone, Debug, Default)]
pub struct OkeyGame {
    config: RoundConfig,
}

/// What a bot did on its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotTurn {
    pub player: PlayerId,
    /// `None` when the turn opened with a full hand (the dealer's first turn).
    pub source: Option<DrawSource>,
    pub discarded: Option<TileId>,
    /// Set when this turn ended the round.
    pub result: Option<RoundResult>,
}

/// Builder for creating an Okey round.
#[derive(Clone, Debug, Default)]
pub struct OkeyGameBuilder {
    config: RoundConfig,
}

impl OkeyGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: RoundConfig) -> Self {
        self.config = config;
        self
    }

    pub fn dealer(mut self, dealer: PlayerId) -> Self {
        self.config.dealer = dealer;
        self
    }

    /// Build the game and a freshly dealt round.
    ///
    /// The indicator and the deal draw from separate RNG contexts, so the
    /// same seed always produces the same round.
    pub fn build(self, seed: u64) -> EngineResult<(OkeyGame, RoundState)> {
        let rng = GameRng::new(seed);

        let (indicator, pool) = select_indicator(build_pool(), &mut rng.for_context("indicator"))?;
        let wildcard = derive_wildcard_value(&indicator);
        let pool = inject_synthetic_wildcards(pool, wildcard);
        let dealt = distribute(pool, &self.config, &mut rng.for_context("deal"))?;

        let state = RoundState::new(indicator, wildcard, dealt, self.config.dealer);
        Ok((OkeyGame::new(self.config), state))
    }

    /// Build a round from a fixed indicator and pool, dealt in pool order.
    ///
    /// The synthetic jokers are appended to the end of `pool`, so they land
    /// in the stock unless the pool is short.
    pub fn build_with_pool(self, indicator: Tile, pool: Vec<Tile>) -> EngineResult<(OkeyGame, RoundState)> {
        let wildcard = derive_wildcard_value(&indicator);
        let pool = inject_synthetic_wildcards(pool, wildcard);
        let dealt = deal(pool, &self.config)?;

        let state = RoundState::new(indicator, wildcard, dealt, self.config.dealer);
        Ok((OkeyGame::new(self.config), state))
    }
}

impl OkeyGame {
    #[must_use]
    pub fn new(config: RoundConfig) -> Self {
        Self { config }
    }

    fn require_turn(state: &RoundState, player: PlayerId) -> Result<(), IllegalMove> {
        if state.active_player == player {
            Ok(())
        } else {
            Err(IllegalMove::NotYourTurn {
                active: state.active_player,
            })
        }
    }

    fn require_room(&self, state: &RoundState, player: PlayerId) -> Result<(), IllegalMove> {
        if state.hand(player).len() < self.config.full_hand_size() {
            Ok(())
        } else {
            Err(IllegalMove::HandFull)
        }
    }

    fn require_full(&self, state: &RoundState, player: PlayerId) -> Result<(), IllegalMove> {
        if state.hand(player).len() == self.config.full_hand_size() {
            Ok(())
        } else {
            Err(IllegalMove::HandNotFull)
        }
    }

    /// Where a pulled tile would land on `player`'s rack.
    fn landing_column(&self, state: &RoundState, player: PlayerId, column: Option<u8>) -> Result<u8, IllegalMove> {
        state
            .hand(player)
            .landing_column(column, self.config.leftover_anchor_column)
    }

    /// Play one turn for the active seat with `policy`.
    ///
    /// 1. Pull a tile (skipped when the hand is already full).
    /// 2. Arrange the hand.
    /// 3. If the arranged hand wins, end the round.
    /// 4. Otherwise discard the policy's pick and pass the turn.
    ///
    /// An empty stock ends the round; that is reported through
    /// `BotTurn::result`, not as an error.
    pub fn play_bot_turn(&self, state: &mut RoundState, policy: &impl TurnPolicy) -> EngineResult<BotTurn> {
        if state.is_over() {
            return Err(IllegalMove::RoundOver.into());
        }
        let player = state.active_player;

        let source = if state.hand(player).len() < self.config.full_hand_size() {
            let choice = policy.choose_source(
                state.hand(player),
                state.claimable_discard(player),
                state.wildcard,
                &self.config,
            );
            let pull = match choice {
                DrawSource::Stock => Action::DrawFromStock { column: None },
                DrawSource::Discard => Action::ClaimDiscard { column: None },
            };
            match self.apply_action(state, player, &pull) {
                Ok(()) => {}
                Err(EngineError::EmptyStock) => {
                    return Ok(BotTurn {
                        player,
                        source: Some(choice),
                        discarded: None,
                        result: Some(RoundResult::StockExhausted),
                    });
                }
                Err(err) => return Err(err),
            }
            Some(choice)
        } else {
            None
        };

        self.apply_action(state, player, &Action::AutoSort)?;

        if is_winning_with(state.hand(player).tiles(), state.wildcard, &self.config) {
            let result = RoundResult::Winner(player);
            state.outcome = Some(result);
            state.record_action(player, Action::DeclareWin);
            return Ok(BotTurn {
                player,
                source,
                discarded: None,
                result: Some(result),
            });
        }

        let discard = policy
            .choose_discard(state.hand(player))
            .ok_or(IllegalMove::HandNotFull)?;
        self.apply_action(state, player, &Action::Discard(discard))?;

        Ok(BotTurn {
            player,
            source,
            discarded: Some(discard),
            result: None,
        })
    }
}

impl RulesEngine for OkeyGame {
    fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Draw/claim on a short hand, one discard per tile on a full hand,
    /// declare-win when the current layout wins, and auto-sort.
    ///
    /// `MoveTile` is always allowed for a placed tile and is not enumerated.
    fn legal_actions(&self, state: &RoundState, player: PlayerId) -> Vec<Action> {
        if state.is_over() {
            return vec![];
        }

        let hand = state.hand(player);
        let mut actions = Vec::new();

        if state.active_player == player {
            if hand.len() < self.config.full_hand_size() {
                actions.push(Action::DrawFromStock { column: None });
                if state.claimable_discard(player).is_some() {
                    actions.push(Action::ClaimDiscard { column: None });
                }
            } else if hand.len() == self.config.full_hand_size() {
                actions.extend(hand.sorted_by_column().iter().map(|t| Action::Discard(t.id)));
                if is_winning_layout(hand.tiles(), state.wildcard, &self.config) {
                    actions.push(Action::DeclareWin);
                }
            }
        }

        actions.push(Action::AutoSort);
        actions
    }

    fn apply_action(&self, state: &mut RoundState, player: PlayerId, action: &Action) -> EngineResult<()> {
        if state.is_over() {
            return Err(IllegalMove::RoundOver.into());
        }

        match *action {
            Action::DrawFromStock { column } => {
                Self::require_turn(state, player)?;
                self.require_room(state, player)?;
                let landed = self.landing_column(state, player, column)?;
                let Some(tile) = state.draw_from_stock() else {
                    state.outcome = Some(RoundResult::StockExhausted);
                    return Err(EngineError::EmptyStock);
                };
                state.hand_mut(player).place_at(tile, landed);
            }
            Action::ClaimDiscard { column } => {
                Self::require_turn(state, player)?;
                self.require_room(state, player)?;
                let landed = self.landing_column(state, player, column)?;
                let tile = state
                    .take_discard(player)
                    .ok_or(IllegalMove::NoDiscardToClaim(player.previous()))?;
                state.hand_mut(player).place_at(tile, landed);
            }
            Action::Discard(id) => {
                Self::require_turn(state, player)?;
                self.require_full(state, player)?;
                let tile = state
                    .hand_mut(player)
                    .remove(id)
                    .ok_or(IllegalMove::UnknownTile(id))?;
                state.push_discard(player, tile);
                state.record_action(player, *action);
                state.advance_turn();
                return Ok(());
            }
            Action::MoveTile { from, to } => {
                state
                    .hand_mut(player)
                    .move_tile(from, to, self.config.leftover_anchor_column)?;
            }
            Action::AutoSort => {
                let arranged = arrange_with(state.hand(player).tiles(), state.wildcard, &self.config);
                state.hand_mut(player).set_tiles(arranged);
            }
            Action::DeclareWin => {
                Self::require_turn(state, player)?;
                self.require_full(state, player)?;
                if !is_winning_layout(state.hand(player).tiles(), state.wildcard, &self.config) {
                    return Err(IllegalMove::NotAWinningLayout.into());
                }
                state.outcome = Some(RoundResult::Winner(player));
            }
        }

        state.record_action(player, *action);
        Ok(())
    }

    fn is_terminal(&self, state: &RoundState) -> Option<RoundResult> {
        state.outcome
    }
}
