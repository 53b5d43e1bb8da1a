//! Matches between policies.
//!
//! `play_match` alternates two policies from a starting position until the
//! game ends, a position repeats too often, or the move limit is hit.
//! `run_series` plays several seeded games and aggregates `MatchStats`.

pub mod game;
pub mod stats;

pub use game::{play_match, run_series, EndReason, MatchConfig, MatchOutcome, MatchResult};
pub use stats::MatchStats;
