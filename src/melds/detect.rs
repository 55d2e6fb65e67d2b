//! Meld detection: runs and sets.
//!
//! Detection is greedy and run-first:
//!
//! 1. `find_runs` over the whole collection,
//! 2. `find_sets(.., 2)` over what runs left (full sets, 3+ colors),
//! 3. `find_sets(.., 1)` over what is still left (two-color partial sets).
//!
//! This does not search for a maximum partition. Scoring and bot play are
//! defined against this exact greedy output, so the order of passes and the
//! scan order inside each pass are part of the rules.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::tiles::{Color, Tile, TileId, MAX_NUMBER};

/// Distinct colors a full set must exceed.
pub const FULL_SET_COLORS: usize = 2;

/// Distinct colors a partial set must exceed.
pub const PARTIAL_SET_COLORS: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeldKind {
    /// Same color, consecutive numbers (13 wraps to 1).
    Run,
    /// Same number, distinct colors.
    Set,
}

/// A derived group of tiles. Never stored; recomputed from a hand on demand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    pub kind: MeldKind,
    pub tiles: SmallVec<[Tile; 5]>,
}

impl Meld {
    #[must_use]
    pub fn new(kind: MeldKind, tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self {
            kind,
            tiles: tiles.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = TileId> + '_ {
        self.tiles.iter().map(|t| t.id)
    }
}

#[derive(Clone, Debug, Default)]
pub struct RunScan {
    pub runs: Vec<Meld>,
    /// Unused tiles, sorted by color then number.
    pub remaining: Vec<Tile>,
}

#[derive(Clone, Debug, Default)]
pub struct SetScan {
    pub sets: Vec<Meld>,
    /// Unused tiles, in input order.
    pub remaining: Vec<Tile>,
}

/// Output of the full greedy pass.
#[derive(Clone, Debug, Default)]
pub struct Detection {
    /// Full sets, then partial sets, then runs.
    pub melds: Vec<Meld>,
    pub leftover: Vec<Tile>,
}

/// Extract maximal runs.
///
/// Tiles are grouped by color and sorted by number. Within a color every
/// maximal span of 3+ consecutive numbers becomes a run, with 13 followed
/// by 1 counting as consecutive. Duplicate numbers collapse to the first
/// copy in scan order; the other copy stays available, and the color is
/// rescanned until no new run appears, so a tile never joins two runs.
#[must_use]
pub fn find_runs(tiles: &[Tile]) -> RunScan {
    let mut working = tiles.to_vec();
    working.sort_by_key(|t| (t.color, t.number));

    let mut consumed: FxHashSet<TileId> = FxHashSet::default();
    let mut runs = Vec::new();

    for color in Color::ALL {
        loop {
            let available: Vec<Tile> = working
                .iter()
                .filter(|t| t.color == color && !consumed.contains(&t.id))
                .copied()
                .collect();
            let found = runs_in_color(&available);
            if found.is_empty() {
                break;
            }
            for run in found {
                consumed.extend(run.ids());
                runs.push(run);
            }
        }
    }

    working.retain(|t| !consumed.contains(&t.id));
    RunScan {
        runs,
        remaining: working,
    }
}

/// Runs among one color's tiles, which must already be sorted by number.
fn runs_in_color(tiles: &[Tile]) -> Vec<Meld> {
    let mut by_number: [Option<Tile>; MAX_NUMBER as usize] = [None; MAX_NUMBER as usize];
    for tile in tiles {
        let slot = &mut by_number[tile.number as usize - 1];
        if slot.is_none() {
            *slot = Some(*tile);
        }
    }

    let mut spans: Vec<Vec<Tile>> = Vec::new();
    let mut current: Vec<Tile> = Vec::new();
    for slot in by_number {
        match slot {
            Some(tile) => current.push(tile),
            None if !current.is_empty() => spans.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        spans.push(current);
    }

    // A span ending on 13 continues into a span starting at 1.
    if spans.len() >= 2 {
        let opens_at_one = spans[0].first().is_some_and(|t| t.number == 1);
        let closes_at_top = spans[spans.len() - 1]
            .last()
            .is_some_and(|t| t.number == MAX_NUMBER);
        if opens_at_one && closes_at_top {
            let head = spans.remove(0);
            if let Some(tail) = spans.last_mut() {
                tail.extend(head);
            }
        }
    }

    spans
        .into_iter()
        .filter(|span| span.len() >= 3)
        .map(|span| Meld::new(MeldKind::Run, span))
        .collect()
}

/// Extract sets with more than `min_distinct_colors` distinct colors.
///
/// For each number `1..=13` the first tile of each color (in input order)
/// forms the set; extra same-color copies stay in `remaining`.
#[must_use]
pub fn find_sets(tiles: &[Tile], min_distinct_colors: usize) -> SetScan {
    let mut remaining = tiles.to_vec();
    let mut sets = Vec::new();

    for number in 1..=MAX_NUMBER {
        let mut picked: SmallVec<[Tile; 5]> = SmallVec::new();
        for tile in remaining.iter().filter(|t| t.number == number) {
            if !picked.iter().any(|p| p.color == tile.color) {
                picked.push(*tile);
            }
        }
        if picked.len() > min_distinct_colors {
            remaining.retain(|t| !picked.iter().any(|p| p.id == t.id));
            sets.push(Meld {
                kind: MeldKind::Set,
                tiles: picked,
            });
        }
    }

    SetScan { sets, remaining }
}

/// Run the greedy pass: runs, full sets, partial sets.
#[must_use]
pub fn detect_melds(tiles: &[Tile]) -> Detection {
    let RunScan { runs, remaining } = find_runs(tiles);
    let SetScan {
        sets: full,
        remaining,
    } = find_sets(&remaining, FULL_SET_COLORS);
    let SetScan {
        sets: partial,
        remaining,
    } = find_sets(&remaining, PARTIAL_SET_COLORS);

    let mut melds = full;
    melds.extend(partial);
    melds.extend(runs);

    Detection {
        melds,
        leftover: remaining,
    }
}
