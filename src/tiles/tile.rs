//! Tile value type.
//!
//! A `Tile` is a small `Copy` value: an id that is unique within a round, a
//! face value (number + color), the synthetic-joker flag, and the hand column
//! it currently occupies.
//!
//! Two tiles are "the same value" when number and color match. The full pool
//! holds every value twice, so `id` is the only thing telling copies apart.

use serde::{Deserialize, Serialize};

/// Highest tile number. Numbers run `1..=MAX_NUMBER` and wrap back to 1.
pub const MAX_NUMBER: u8 = 13;

/// Tile color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// All colors in scan order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    const fn letter(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Blue => 'b',
            Color::Green => 'g',
            Color::Yellow => 'y',
        }
    }
}

/// Number following `number`, wrapping 13 to 1.
#[must_use]
pub const fn next_number(number: u8) -> u8 {
    if number >= MAX_NUMBER {
        1
    } else {
        number + 1
    }
}

/// Face value of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileValue {
    pub number: u8,
    pub color: Color,
}

impl TileValue {
    #[must_use]
    pub const fn new(number: u8, color: Color) -> Self {
        assert!(number >= 1 && number <= MAX_NUMBER, "Tile number must be 1-13");
        Self { number, color }
    }

    /// The value one step above this one in the same color (13 wraps to 1).
    ///
    /// This is the round's wildcard rule: the wildcard is the value just
    /// above the indicator.
    ///
    /// ```
    /// use okey_engine::tiles::{Color, TileValue};
    ///
    /// let indicator = TileValue::new(13, Color::Blue);
    /// assert_eq!(indicator.successor(), TileValue::new(1, Color::Blue));
    /// ```
    #[must_use]
    pub const fn successor(self) -> Self {
        Self {
            number: next_number(self.number),
            color: self.color,
        }
    }
}

impl std::fmt::Display for TileValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.color.letter(), self.number)
    }
}

/// Tile identifier, unique within a round.
///
/// Numbered tiles use `0..104`; the two synthetic jokers use 104 and 105.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u16);

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub number: u8,
    pub color: Color,
    /// Synthetic joker injected at round start.
    pub is_wildcard: bool,
    /// Hand position; `None` while the tile is in the pool, stock or a discard stack.
    pub column: Option<u8>,
}

impl Tile {
    /// Create a plain numbered tile with no column.
    #[must_use]
    pub const fn new(id: TileId, number: u8, color: Color) -> Self {
        assert!(number >= 1 && number <= MAX_NUMBER, "Tile number must be 1-13");
        Self {
            id,
            number,
            color,
            is_wildcard: false,
            column: None,
        }
    }

    /// Create a synthetic joker carrying `value`.
    #[must_use]
    pub const fn joker(id: TileId, value: TileValue) -> Self {
        Self {
            id,
            number: value.number,
            color: value.color,
            is_wildcard: true,
            column: None,
        }
    }

    #[must_use]
    pub const fn value(&self) -> TileValue {
        TileValue {
            number: self.number,
            color: self.color,
        }
    }

    /// Same number and color, ignoring id, flag and column.
    #[must_use]
    pub fn same_value(&self, other: &Tile) -> bool {
        self.value() == other.value()
    }

    /// Unflagged tile showing the round's wildcard value.
    ///
    /// These are the substitutes the wildcard allocator hands out; synthetic
    /// jokers are not counted here because they play at face value.
    #[must_use]
    pub fn is_substitute(&self, wildcard: TileValue) -> bool {
        !self.is_wildcard && self.value() == wildcard
    }

    /// Copy of this tile placed at `column`.
    #[must_use]
    pub const fn at_column(self, column: u8) -> Self {
        Self {
            column: Some(column),
            ..self
        }
    }

    /// Copy of this tile with no column.
    #[must_use]
    pub const fn unplaced(self) -> Self {
        Self {
            column: None,
            ..self
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())?;
        if self.is_wildcard {
            write!(f, "*")?;
        }
        Ok(())
    }
}
