//! Depth-limited adversarial search.
//!
//! ## Overview
//!
//! - **Alpha-beta**: fail-soft pruning over a `Window`, first-found tie-break
//! - **Minimax**: the same search without pruning, used as a reference
//! - **Repetition-aware**: keys seen on the current path are counted in a
//!   `PathHistory` and score a penalty once they repeat
//! - **Policies**: `Policy` wraps a search (or a baseline) behind `choose`
//!
//! ## Usage
//!
//! ```rust
//! use rust_alphabeta::games::tictactoe::{LineHeuristic, TicTacToe};
//! use rust_alphabeta::search::{build_policy, Policy};
//!
//! let mut policy = build_policy(4, LineHeuristic::default()).unwrap();
//! let action = policy.choose(&TicTacToe::new()).unwrap();
//! assert!(action < 9);
//! ```

pub mod alphabeta;
pub mod config;
pub mod history;
mod leaf;
pub mod minimax;
pub mod policy;
pub mod stats;
pub mod window;

// Re-export main types
pub use alphabeta::{AlphaBetaSearch, SearchOutcome};
pub use config::SearchConfig;
pub use history::{PathCounter, PathGuard, PathHistory, PersistentPath};
pub use minimax::MinimaxSearch;
pub use policy::{
    build_policy, AlphaBetaPolicy, GreedyPolicy, MinimaxPolicy, Policy, RandomPolicy,
};
pub use stats::SearchStats;
pub use window::Window;
