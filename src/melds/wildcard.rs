//! Wildcard allocation.
//!
//! Tiles showing the round's wildcard value (and not flagged as synthetic
//! jokers) are set aside before detection. Afterwards each meld shorter than
//! [`SHORT_MELD_LIMIT`] may take one of them, in meld order, until they run
//! out.

use super::detect::Meld;
use crate::tiles::{Tile, TileValue};

/// Melds of this length or longer never take a wildcard.
pub const SHORT_MELD_LIMIT: usize = 4;

/// Split `tiles` into (substitute wildcards, everything else), keeping order.
#[must_use]
pub fn split_substitutes(tiles: &[Tile], wildcard: TileValue) -> (Vec<Tile>, Vec<Tile>) {
    tiles.iter().partition(|t| t.is_substitute(wildcard))
}

/// Give each short meld at most one wildcard, first meld first.
///
/// Each wildcard is used at most once. Returns the wildcards nobody took.
pub fn allocate_wildcards(melds: &mut [Meld], wildcards: Vec<Tile>) -> Vec<Tile> {
    let mut pool = wildcards.into_iter();

    for meld in melds.iter_mut().filter(|m| m.len() < SHORT_MELD_LIMIT) {
        match pool.next() {
            Some(wildcard) => meld.tiles.push(wildcard),
            None => break,
        }
    }

    pool.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::melds::detect::MeldKind;
    use crate::tiles::{Color, TileId};

    fn t(id: u16, number: u8, color: Color) -> Tile {
        Tile::new(TileId(id), number, color)
    }

    fn meld(len: u8) -> Meld {
        Meld::new(MeldKind::Run, (1..=len).map(|n| t(n as u16, n, Color::Red)))
    }

    #[test]
    fn test_split_substitutes() {
        let wildcard = TileValue::new(6, Color::Blue);
        let tiles = [
            t(0, 6, Color::Blue),
            t(1, 6, Color::Red),
            Tile::joker(TileId(104), wildcard),
            t(2, 6, Color::Blue),
        ];

        let (subs, rest) = split_substitutes(&tiles, wildcard);

        assert_eq!(subs.iter().map(|t| t.id).collect::<Vec<_>>(), vec![TileId(0), TileId(2)]);
        assert_eq!(rest.len(), 2);
        assert!(rest.iter().any(|t| t.is_wildcard));
    }

    #[test]
    fn test_one_wildcard_per_short_meld() {
        let mut melds = vec![meld(2), meld(3), meld(5)];
        let wildcards = vec![t(50, 9, Color::Green), t(51, 9, Color::Green)];

        let unused = allocate_wildcards(&mut melds, wildcards);

        assert!(unused.is_empty());
        assert_eq!(melds[0].len(), 3);
        assert_eq!(melds[1].len(), 4);
        assert_eq!(melds[2].len(), 5);
        assert_eq!(melds[0].tiles[2].id, TileId(50));
        assert_eq!(melds[1].tiles[3].id, TileId(51));
    }

    #[test]
    fn test_long_melds_are_skipped() {
        let mut melds = vec![meld(4), meld(6)];
        let unused = allocate_wildcards(&mut melds, vec![t(50, 9, Color::Green)]);

        assert_eq!(unused.len(), 1);
        assert_eq!(melds[0].len(), 4);
    }

    #[test]
    fn test_runs_out_of_wildcards() {
        let mut melds = vec![meld(3), meld(3), meld(3)];
        let unused = allocate_wildcards(&mut melds, vec![t(50, 9, Color::Green)]);

        assert!(unused.is_empty());
        let lengths: Vec<_> = melds.iter().map(Meld::len).collect();
        assert_eq!(lengths, vec![4, 3, 3]);
    }
}
