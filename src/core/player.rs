//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier for the four Okey seats. Turn order is fixed:
//! `1 -> 2 -> 3 -> 4 -> 1`.
//!
//! ## PlayerMap
//!
//! Fixed-size per-player storage backed by an array, indexable by `PlayerId`.
//! Replaces stringly-typed `p1`..`p4` lookups.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at an Okey table.
pub const PLAYER_COUNT: usize = 4;

/// Seat identifier.
///
/// Stored 0-based; displayed and numbered 1-based (`Player 1` .. `Player 4`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    pub const ONE: PlayerId = PlayerId(0);
    pub const TWO: PlayerId = PlayerId(1);
    pub const THREE: PlayerId = PlayerId(2);
    pub const FOUR: PlayerId = PlayerId(3);

    /// All seats in turn order.
    pub const ALL: [PlayerId; PLAYER_COUNT] =
        [PlayerId::ONE, PlayerId::TWO, PlayerId::THREE, PlayerId::FOUR];

    /// Create a player ID from a 0-based seat index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < PLAYER_COUNT, "Seat index must be 0-3");
        Self(index)
    }

    /// Create a player ID from the 1-based seat number used on the table.
    ///
    /// Returns `None` outside `1..=4`.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        if number >= 1 && number as usize <= PLAYER_COUNT {
            Some(Self(number - 1))
        } else {
            None
        }
    }

    /// 0-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based seat number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// The seat that plays after this one.
    ///
    /// ```
    /// use okey_engine::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::ONE.next(), PlayerId::TWO);
    /// assert_eq!(PlayerId::FOUR.next(), PlayerId::ONE);
    /// ```
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % PLAYER_COUNT as u8)
    }

    /// The seat that played before this one; its discards are ours to claim.
    #[must_use]
    pub const fn previous(self) -> Self {
        Self((self.0 + PLAYER_COUNT as u8 - 1) % PLAYER_COUNT as u8)
    }

    /// Iterate over all seats in turn order.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        Self::ALL.into_iter()
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::ONE
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use okey_engine::core::{PlayerId, PlayerMap};
///
/// let mut points: PlayerMap<u32> = PlayerMap::with_default();
/// points[PlayerId::TWO] = 7;
///
/// assert_eq!(points[PlayerId::ONE], 0);
/// assert_eq!(points[PlayerId::TWO], 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: PlayerId::ALL.map(factory),
        }
    }

    /// Create a map with every entry set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs in turn order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Iterate over the values in turn order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
