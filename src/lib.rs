//! # rust-alphabeta
//!
//! Depth-limited alpha-beta search for two-player, zero-sum,
//! perfect-information games, with path-local repetition handling.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: The engine only sees positions through the
//!    `AdversarialState` trait and scores them through `Heuristic`.
//!
//! 2. **Maximizer's Point of View**: Every value (heuristic, terminal,
//!    repetition) is expressed for `Side::Max`.
//!
//! 3. **Deterministic**: Same position, depth and heuristic give the same
//!    action. Ties go to the first action in enumeration order.
//!
//! ## Architecture
//!
//! - **Immutable Positions**: The search derives successors and never
//!   mutates a position, so backtracking is free.
//!
//! - **Path-Local Repetition**: Only the current root-to-node path counts
//!   toward repetition penalties; sibling branches never see each other.
//!
//! ## Modules
//!
//! - `core`: Sides, payoffs, the state protocol, errors, RNG
//! - `heuristic`: The heuristic trait and closure adapter
//! - `search`: Alpha-beta, minimax, path history, policies
//! - `arena`: Match driver and match statistics
//! - `games`: Reference games (explicit graphs, tic-tac-toe)

pub mod arena;
pub mod core;
pub mod games;
pub mod heuristic;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    AdversarialState, GameRng, GameRngState, Payoff, Result, SearchError, Side,
};

pub use crate::heuristic::{FnHeuristic, Heuristic};

pub use crate::search::{
    build_policy, AlphaBetaPolicy, AlphaBetaSearch, GreedyPolicy, MinimaxPolicy, MinimaxSearch,
    PathCounter, PathGuard, PathHistory, PersistentPath, Policy, RandomPolicy, SearchConfig,
    SearchOutcome, SearchStats, Window,
};

pub use crate::arena::{
    play_match, run_series, EndReason, MatchConfig, MatchOutcome, MatchResult, MatchStats,
};
