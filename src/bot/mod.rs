//! Computer-controlled seats.

pub mod policy;

pub use policy::{DrawSource, GreedyScorePolicy, TurnPolicy};
