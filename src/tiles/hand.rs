//! A player's rack.
//!
//! `Hand` keeps tiles together with their columns. Column values need not be
//! contiguous: gaps separate melds both on screen and for scoring, so every
//! mutation here preserves the columns it was not asked to change.

use serde::{Deserialize, Serialize};

use super::tile::{Tile, TileId};
use crate::core::error::IllegalMove;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    tiles: Vec<Tile>,
}

impl Hand {
    #[must_use]
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    #[must_use]
    pub fn into_tiles(self) -> Vec<Tile> {
        self.tiles
    }

    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.tiles.iter().any(|t| t.id == id)
    }

    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn tile_at(&self, column: u8) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.column == Some(column))
    }

    /// Tiles in column order. Unplaced tiles sort last, in hand order.
    #[must_use]
    pub fn sorted_by_column(&self) -> Vec<Tile> {
        let mut sorted = self.tiles.clone();
        sorted.sort_by_key(|t| t.column.unwrap_or(u8::MAX));
        sorted
    }

    #[must_use]
    pub fn max_column(&self) -> Option<u8> {
        self.tiles.iter().filter_map(|t| t.column).max()
    }

    /// Tile occupying the highest column: the default discard candidate.
    #[must_use]
    pub fn highest_column_tile(&self) -> Option<&Tile> {
        self.tiles
            .iter()
            .filter(|t| t.column.is_some())
            .max_by_key(|t| t.column)
    }

    /// First free column in `target..=last_column`.
    #[must_use]
    pub fn free_column_from(&self, target: u8, last_column: u8) -> Option<u8> {
        (target.max(1)..=last_column).find(|&column| self.tile_at(column).is_none())
    }

    /// Column a new tile would land on.
    ///
    /// A requested column slides right past occupied columns; with no column
    /// the tile goes just past the current highest column. When nothing is
    /// free to the right, the lowest free column is used instead.
    pub fn landing_column(&self, column: Option<u8>, last_column: u8) -> Result<u8, IllegalMove> {
        let target = match column {
            Some(c) if c == 0 || c > last_column => return Err(IllegalMove::InvalidColumn(c)),
            Some(c) => c,
            None => self.max_column().map_or(1, |c| c.saturating_add(1)),
        };
        self.free_column_from(target, last_column)
            .or_else(|| self.free_column_from(1, last_column))
            .ok_or(IllegalMove::RackFull)
    }

    /// Add a tile at a column found with [`landing_column`](Self::landing_column).
    pub fn place_at(&mut self, tile: Tile, column: u8) {
        self.tiles.push(tile.at_column(column));
    }

    /// Remove a tile by id, returning it without a column.
    pub fn remove(&mut self, id: TileId) -> Option<Tile> {
        let pos = self.tiles.iter().position(|t| t.id == id)?;
        Some(self.tiles.remove(pos).unplaced())
    }

    /// Move the tile at `from` to `to`; a tile already at `to` takes `from`.
    ///
    /// `to` must lie in `1..=last_column`.
    pub fn move_tile(&mut self, from: u8, to: u8, last_column: u8) -> Result<(), IllegalMove> {
        let dragged = self
            .tiles
            .iter()
            .position(|t| t.column == Some(from))
            .ok_or(IllegalMove::EmptyColumn(from))?;
        if to == 0 || to > last_column {
            return Err(IllegalMove::InvalidColumn(to));
        }
        if from == to {
            return Ok(());
        }
        if let Some(target) = self.tiles.iter().position(|t| t.column == Some(to)) {
            self.tiles[target].column = Some(from);
        }
        self.tiles[dragged].column = Some(to);
        Ok(())
    }

    /// Replace every tile, e.g. with an arranged layout.
    pub fn set_tiles(&mut self, tiles: Vec<Tile>) {
        self.tiles = tiles;
    }
}

impl From<Vec<Tile>> for Hand {
    fn from(tiles: Vec<Tile>) -> Self {
        Self::new(tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::Color;

    fn tile(id: u16, number: u8, column: u8) -> Tile {
        Tile::new(TileId(id), number, Color::Red).at_column(column)
    }

    const LAST: u8 = 26;

    #[test]
    fn test_landing_slides_to_free_column() {
        let mut hand = Hand::new(vec![tile(0, 1, 3), tile(1, 2, 4)]);

        let landed = hand.landing_column(Some(3), LAST).unwrap();
        hand.place_at(Tile::new(TileId(2), 5, Color::Blue), landed);

        assert_eq!(landed, 5);
        assert_eq!(hand.tile_at(5).map(|t| t.id), Some(TileId(2)));
    }

    #[test]
    fn test_landing_without_column_goes_past_highest() {
        let hand = Hand::new(vec![tile(0, 1, 1), tile(1, 2, 9)]);
        assert_eq!(hand.landing_column(None, LAST), Ok(10));

        assert_eq!(Hand::default().landing_column(None, LAST), Ok(1));
    }

    #[test]
    fn test_landing_falls_back_to_lowest_free_column() {
        let hand = Hand::new(vec![tile(0, 1, 1), tile(1, 2, 2), tile(2, 3, 26)]);

        assert_eq!(hand.landing_column(None, LAST), Ok(3));
        assert_eq!(hand.landing_column(Some(26), LAST), Ok(3));
    }

    #[test]
    fn test_landing_rejects_off_rack_columns() {
        let hand = Hand::new(vec![tile(0, 1, 1)]);

        assert_eq!(hand.landing_column(Some(0), LAST), Err(IllegalMove::InvalidColumn(0)));
        assert_eq!(hand.landing_column(Some(27), LAST), Err(IllegalMove::InvalidColumn(27)));
    }

    #[test]
    fn test_full_rack_has_no_landing_column() {
        let hand = Hand::new((1..=4).map(|c| tile(c as u16, c, c)).collect());

        assert_eq!(hand.free_column_from(2, 4), None);
        assert_eq!(hand.landing_column(None, 4), Err(IllegalMove::RackFull));
    }

    #[test]
    fn test_move_swaps() {
        let mut hand = Hand::new(vec![tile(0, 1, 1), tile(1, 2, 2)]);

        hand.move_tile(1, 2, LAST).unwrap();

        assert_eq!(hand.tile_at(2).map(|t| t.id), Some(TileId(0)));
        assert_eq!(hand.tile_at(1).map(|t| t.id), Some(TileId(1)));
    }

    #[test]
    fn test_move_to_empty_column() {
        let mut hand = Hand::new(vec![tile(0, 1, 1), tile(1, 2, 2)]);

        hand.move_tile(2, 20, LAST).unwrap();

        assert!(hand.tile_at(2).is_none());
        assert_eq!(hand.tile_at(20).map(|t| t.id), Some(TileId(1)));
    }

    #[test]
    fn test_move_from_empty_column_rejected() {
        let mut hand = Hand::new(vec![tile(0, 1, 1)]);
        let before = hand.clone();

        assert_eq!(hand.move_tile(7, 1, LAST), Err(IllegalMove::EmptyColumn(7)));
        assert_eq!(hand, before);
    }

    #[test]
    fn test_move_off_rack_rejected() {
        let mut hand = Hand::new(vec![tile(0, 1, 1)]);
        let before = hand.clone();

        for to in [0, 27, u8::MAX] {
            assert_eq!(hand.move_tile(1, to, LAST), Err(IllegalMove::InvalidColumn(to)));
        }
        assert_eq!(hand, before);
    }

    #[test]
    fn test_remove_and_highest() {
        let mut hand = Hand::new(vec![tile(0, 1, 1), tile(1, 2, 26), tile(2, 3, 4)]);

        assert_eq!(hand.highest_column_tile().map(|t| t.id), Some(TileId(1)));

        let removed = hand.remove(TileId(1)).unwrap();
        assert_eq!(removed.column, None);
        assert_eq!(hand.len(), 2);
        assert!(hand.remove(TileId(1)).is_none());
        assert_eq!(hand.highest_column_tile().map(|t| t.id), Some(TileId(2)));
    }

    #[test]
    fn test_sorted_by_column() {
        let hand = Hand::new(vec![tile(0, 1, 9), tile(1, 2, 2), tile(2, 3, 5)]);
        let columns: Vec<_> = hand.sorted_by_column().iter().filter_map(|t| t.column).collect();
        assert_eq!(columns, vec![2, 5, 9]);
    }
}
