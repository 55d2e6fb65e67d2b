//! Meld detection and wildcard allocation.
//!
//! - `detect`: greedy run-first extraction of runs and sets
//! - `wildcard`: hands spare wildcard tiles to short melds

pub mod detect;
pub mod wildcard;

pub use detect::{
    detect_melds, find_runs, find_sets, Detection, Meld, MeldKind, RunScan, SetScan,
    FULL_SET_COLORS, PARTIAL_SET_COLORS,
};
pub use wildcard::{allocate_wildcards, split_substitutes, SHORT_MELD_LIMIT};
