//! The round's tile pool: building, indicator selection, wildcard derivation
//! and the deal.
//!
//! ## Round setup
//!
//! 1. `build_pool`: 104 numbered tiles (4 colors x 13 numbers x 2 copies).
//! 2. `select_indicator`: shuffle and take one tile as the indicator.
//! 3. `derive_wildcard_value`: indicator color, number + 1 (13 wraps to 1).
//! 4. `inject_synthetic_wildcards`: two jokers carrying the wildcard value.
//! 5. `distribute`: shuffle, deal 15 to the dealer and 14 to everyone else,
//!    the rest becomes the stock.
//!
//! Setup accounts for 106 tiles: four hands, the stock and the indicator.

use im::Vector;

use super::hand::Hand;
use super::tile::{Color, Tile, TileId, TileValue, MAX_NUMBER};
use crate::core::config::RoundConfig;
use crate::core::error::{EngineError, EngineResult};
use crate::core::player::{PlayerId, PlayerMap};
use crate::core::rng::GameRng;

/// Copies of each numbered value in the pool.
pub const COPIES: usize = 2;

/// Numbered tiles in a fresh pool.
pub const NUMBERED_TILES: usize = Color::ALL.len() * MAX_NUMBER as usize * COPIES;

/// Ids of the two synthetic jokers.
pub const JOKER_IDS: [TileId; 2] = [TileId(104), TileId(105)];

/// Tiles in play each round, indicator included.
pub const ROUND_TILES: usize = NUMBERED_TILES + JOKER_IDS.len();

/// Hands and stock produced by the deal.
#[derive(Clone, Debug)]
pub struct Deal {
    pub hands: PlayerMap<Hand>,
    /// Undealt tiles; drawn from the front.
    pub stock: Vector<Tile>,
}

/// Build the 104 numbered tiles, unplaced and unflagged.
///
/// Ids follow `copy * 52 + color * 13 + (number - 1)`.
#[must_use]
pub fn build_pool() -> Vec<Tile> {
    let per_copy = Color::ALL.len() * MAX_NUMBER as usize;
    let mut pool = Vec::with_capacity(NUMBERED_TILES);
    for copy in 0..COPIES {
        for color in Color::ALL {
            for number in 1..=MAX_NUMBER {
                let id = copy * per_copy + color.index() * MAX_NUMBER as usize + (number as usize - 1);
                pool.push(Tile::new(TileId(id as u16), number, color));
            }
        }
    }
    pool
}

/// Shuffle the pool and take its head as the indicator.
///
/// Returns the indicator and the remaining pool (in shuffled order).
pub fn select_indicator(mut pool: Vec<Tile>, rng: &mut GameRng) -> EngineResult<(Tile, Vec<Tile>)> {
    if pool.is_empty() {
        return Err(EngineError::InsufficientTiles {
            needed: 1,
            available: 0,
        });
    }
    rng.shuffle(&mut pool);
    let indicator = pool.remove(0);
    Ok((indicator, pool))
}

/// The round's wildcard value: one step above the indicator in its color.
#[must_use]
pub fn derive_wildcard_value(indicator: &Tile) -> TileValue {
    indicator.value().successor()
}

/// Append the two synthetic jokers carrying `wildcard`.
#[must_use]
pub fn inject_synthetic_wildcards(mut pool: Vec<Tile>, wildcard: TileValue) -> Vec<Tile> {
    pool.extend(JOKER_IDS.iter().map(|&id| Tile::joker(id, wildcard)));
    pool
}

/// Shuffle the pool, then deal it with [`deal`].
pub fn distribute(mut pool: Vec<Tile>, config: &RoundConfig, rng: &mut GameRng) -> EngineResult<Deal> {
    let needed = config.required_tiles();
    if pool.len() < needed {
        return Err(EngineError::InsufficientTiles {
            needed,
            available: pool.len(),
        });
    }
    rng.shuffle(&mut pool);
    deal(pool, config)
}

/// Deal an already-ordered pool.
///
/// Seats are dealt in turn order starting from the dealer, each taking a
/// contiguous slice of the pool with columns `1..=N`. What is left becomes
/// the stock, head first.
pub fn deal(pool: Vec<Tile>, config: &RoundConfig) -> EngineResult<Deal> {
    let needed = config.required_tiles();
    if pool.len() < needed {
        return Err(EngineError::InsufficientTiles {
            needed,
            available: pool.len(),
        });
    }

    let mut hands: PlayerMap<Hand> = PlayerMap::with_default();
    let mut remaining = pool.into_iter();
    let mut seat = config.dealer;
    for _ in PlayerId::all() {
        let tiles: Vec<Tile> = remaining
            .by_ref()
            .take(config.deal_size(seat))
            .enumerate()
            .map(|(i, tile)| tile.at_column(i as u8 + 1))
            .collect();
        hands[seat] = Hand::new(tiles);
        seat = seat.next();
    }

    Ok(Deal {
        hands,
        stock: remaining.map(Tile::unplaced).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_build_pool() {
        let pool = build_pool();

        assert_eq!(pool.len(), 104);
        assert!(pool.iter().all(|t| t.column.is_none() && !t.is_wildcard));

        let ids: FxHashSet<_> = pool.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 104);

        for color in Color::ALL {
            for number in 1..=MAX_NUMBER {
                let copies = pool
                    .iter()
                    .filter(|t| t.value() == TileValue::new(number, color))
                    .count();
                assert_eq!(copies, 2);
            }
        }
    }

    #[test]
    fn test_select_indicator_removes_it() {
        let mut rng = GameRng::new(42);
        let (indicator, rest) = select_indicator(build_pool(), &mut rng).unwrap();

        assert_eq!(rest.len(), 103);
        assert!(rest.iter().all(|t| t.id != indicator.id));
    }

    #[test]
    fn test_select_indicator_empty_pool() {
        let mut rng = GameRng::new(42);
        assert_eq!(
            select_indicator(Vec::new(), &mut rng),
            Err(EngineError::InsufficientTiles {
                needed: 1,
                available: 0
            })
        );
    }

    #[test]
    fn test_derive_wildcard_value() {
        let indicator = Tile::new(TileId(0), 6, Color::Green);
        assert_eq!(derive_wildcard_value(&indicator), TileValue::new(7, Color::Green));

        let indicator = Tile::new(TileId(12), 13, Color::Red);
        assert_eq!(derive_wildcard_value(&indicator), TileValue::new(1, Color::Red));
    }

    #[test]
    fn test_inject_synthetic_wildcards() {
        let wildcard = TileValue::new(3, Color::Blue);
        let pool = inject_synthetic_wildcards(build_pool(), wildcard);

        assert_eq!(pool.len(), ROUND_TILES);
        let jokers: Vec<_> = pool.iter().filter(|t| t.is_wildcard).collect();
        assert_eq!(jokers.len(), 2);
        assert!(jokers.iter().all(|t| t.value() == wildcard));
    }

    #[test]
    fn test_deal_ordered_pool() {
        let config = RoundConfig::default();
        let pool = build_pool();
        let first_id = pool[0].id;
        let sixteenth_id = pool[15].id;

        let deal = deal(pool, &config).unwrap();

        assert_eq!(deal.hands[PlayerId::ONE].len(), 15);
        assert_eq!(deal.hands[PlayerId::TWO].len(), 14);
        assert_eq!(deal.hands[PlayerId::THREE].len(), 14);
        assert_eq!(deal.hands[PlayerId::FOUR].len(), 14);
        assert_eq!(deal.stock.len(), 104 - 57);

        assert_eq!(deal.hands[PlayerId::ONE].tile_at(1).map(|t| t.id), Some(first_id));
        assert_eq!(deal.hands[PlayerId::TWO].tile_at(1).map(|t| t.id), Some(sixteenth_id));

        let columns: Vec<_> = deal.hands[PlayerId::TWO].iter().filter_map(|t| t.column).collect();
        assert_eq!(columns, (1..=14).collect::<Vec<u8>>());
        assert!(deal.stock.iter().all(|t| t.column.is_none()));
    }

    #[test]
    fn test_deal_starts_at_dealer() {
        let config = RoundConfig::default().with_dealer(PlayerId::THREE);
        let deal = deal(build_pool(), &config).unwrap();

        assert_eq!(deal.hands[PlayerId::THREE].len(), 15);
        assert_eq!(deal.hands[PlayerId::ONE].len(), 14);
    }

    #[test]
    fn test_distribute_insufficient_tiles() {
        let config = RoundConfig::default();
        let mut rng = GameRng::new(1);
        let pool: Vec<Tile> = build_pool().into_iter().take(56).collect();

        assert_eq!(
            distribute(pool, &config, &mut rng).unwrap_err(),
            EngineError::InsufficientTiles {
                needed: 57,
                available: 56
            }
        );
    }

    #[test]
    fn test_distribute_is_seeded() {
        let config = RoundConfig::default();
        let a = distribute(build_pool(), &config, &mut GameRng::new(9)).unwrap();
        let b = distribute(build_pool(), &config, &mut GameRng::new(9)).unwrap();

        assert_eq!(a.hands, b.hands);
        assert_eq!(a.stock, b.stock);
    }
}
