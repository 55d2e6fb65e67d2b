//! Meld detection and arrangement on realistic hands.

use okey_engine::melds::{
    detect_melds, find_runs, find_sets, split_substitutes, MeldKind, FULL_SET_COLORS,
    SHORT_MELD_LIMIT,
};
use okey_engine::rules::{arrange, group_consecutive_columns};
use okey_engine::tiles::{build_pool, Color, Tile, TileId, TileValue};
use okey_engine::{OkeyGameBuilder, PlayerId};
use proptest::prelude::*;

fn t(id: u16, number: u8, color: Color) -> Tile {
    Tile::new(TileId(id), number, color)
}

/// A wildcard value none of the hands below hold.
const WILD: TileValue = TileValue::new(13, Color::Green);

#[test]
fn test_find_runs_basic() {
    let scan = find_runs(&[t(0, 1, Color::Red), t(1, 2, Color::Red), t(2, 3, Color::Red)]);
    assert_eq!(scan.runs.len(), 1);
    assert_eq!(scan.runs[0].len(), 3);
    assert!(scan.remaining.is_empty());

    let scan = find_runs(&[t(0, 1, Color::Red), t(1, 2, Color::Red), t(2, 4, Color::Red)]);
    assert!(scan.runs.is_empty());
    assert_eq!(scan.remaining.len(), 3);
}

#[test]
fn test_wraparound_is_a_run() {
    let scan = find_runs(&[t(0, 12, Color::Red), t(1, 13, Color::Red), t(2, 1, Color::Red)]);
    assert_eq!(scan.runs.len(), 1);
}

#[test]
fn test_find_sets_basic() {
    let scan = find_sets(
        &[t(0, 5, Color::Red), t(1, 5, Color::Blue), t(2, 5, Color::Green)],
        FULL_SET_COLORS,
    );
    assert_eq!(scan.sets.len(), 1);
    assert_eq!(scan.sets[0].len(), 3);

    let scan = find_sets(&[t(0, 5, Color::Red), t(1, 5, Color::Red)], FULL_SET_COLORS);
    assert!(scan.sets.is_empty());
}

#[test]
fn test_detection_never_reuses_a_tile() {
    // The whole numbered pool: every tile lands in exactly one place.
    let pool = build_pool();
    let detection = detect_melds(&pool);

    let mut ids: Vec<TileId> = detection
        .melds
        .iter()
        .flat_map(|m| m.ids())
        .chain(detection.leftover.iter().map(|t| t.id))
        .collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), pool.len());

    // Two full copies of each color: two 13-long runs per color, nothing left.
    assert!(detection.melds.iter().all(|m| m.kind == MeldKind::Run && m.len() == 13));
    assert_eq!(detection.melds.len(), 8);
    assert!(detection.leftover.is_empty());
}

#[test]
fn test_arrange_mixed_hand() {
    let tiles = vec![
        // red 4-7
        t(0, 4, Color::Red),
        t(1, 5, Color::Red),
        t(2, 6, Color::Red),
        t(3, 7, Color::Red),
        // set of 10s
        t(4, 10, Color::Red),
        t(5, 10, Color::Blue),
        t(6, 10, Color::Yellow),
        // pair of 2s
        t(7, 2, Color::Blue),
        t(8, 2, Color::Green),
        // junk
        t(9, 12, Color::Yellow),
        t(10, 8, Color::Blue),
    ];

    let arranged = arrange(&tiles, WILD);
    let groups = group_consecutive_columns(&arranged);
    let sizes: Vec<usize> = groups.iter().map(Vec::len).collect();

    // Longest first: the run, the set, the pair; then the two leftovers.
    assert_eq!(sizes, vec![4, 3, 2, 2]);
    assert!(groups[0].iter().all(|t| t.color == Color::Red));
    assert!(groups[1].iter().all(|t| t.number == 10));
    assert_eq!(arranged.len(), tiles.len());
}

/// Melds `arrange` lays out, and whether a trailing block follows them
/// (any unmelded tile or unused wildcard).
fn expected_layout(tiles: &[Tile], wildcard: TileValue) -> (usize, bool) {
    let (substitutes, rest) = split_substitutes(tiles, wildcard);
    let detection = detect_melds(&rest);
    let short = detection
        .melds
        .iter()
        .filter(|m| m.len() < SHORT_MELD_LIMIT)
        .count();
    let unused = substitutes.len().saturating_sub(short);

    (
        detection.melds.len(),
        !detection.leftover.is_empty() || unused > 0,
    )
}

proptest! {
    #[test]
    fn prop_every_meld_is_its_own_group(seed in any::<u64>()) {
        let (_, state) = OkeyGameBuilder::new().build(seed).unwrap();

        for player in PlayerId::all() {
            let tiles = state.hand(player).tiles();
            let arranged = arrange(tiles, state.wildcard);
            let groups = group_consecutive_columns(&arranged);
            let (melds, trailing) = expected_layout(tiles, state.wildcard);

            prop_assert_eq!(groups.len(), melds + usize::from(trailing));
            for group in &groups[..melds] {
                prop_assert_ne!(group[0].column, Some(13));
            }
        }
    }
}
