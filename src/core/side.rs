//! Sides of a two-player zero-sum game and the outcome of a finished game.
//!
//! ## Side
//!
//! The search only distinguishes the maximizing and minimizing player.
//! All values are expressed from the maximizer's point of view.
//!
//! ## Payoff
//!
//! Result of a terminal position: `+1` when the maximizer won, `-1` when
//! the minimizer won, `0` for any draw by rule.

use serde::{Deserialize, Serialize};

/// The player to move at a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Maximizing player; larger values are better for this side.
    Max,
    /// Minimizing player; smaller values are better for this side.
    Min,
}

impl Side {
    /// Get the opposing side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }

    /// The value this side starts from before seeing any child.
    ///
    /// Any real child value replaces it.
    #[must_use]
    pub const fn worst_value(self) -> f64 {
        match self {
            Side::Max => f64::NEG_INFINITY,
            Side::Min => f64::INFINITY,
        }
    }

    /// Does this side strictly prefer `candidate` over `incumbent`?
    ///
    /// Strict comparison: the first action reaching the best value keeps it.
    #[inline]
    #[must_use]
    pub fn prefers(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Side::Max => candidate > incumbent,
            Side::Min => candidate < incumbent,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Max => write!(f, "Max"),
            Side::Min => write!(f, "Min"),
        }
    }
}

/// Outcome of a terminal position, from the maximizer's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Payoff {
    /// The maximizer won.
    MaxWins,
    /// Drawn by rule (stalemate, repetition, move counters, material, ...).
    Draw,
    /// The minimizer won.
    MinWins,
}

impl Payoff {
    /// Payoff for a game won by `side`.
    #[must_use]
    pub const fn win_for(side: Side) -> Self {
        match side {
            Side::Max => Payoff::MaxWins,
            Side::Min => Payoff::MinWins,
        }
    }

    /// Numeric payoff: `+1`, `0` or `-1`.
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Payoff::MaxWins => 1,
            Payoff::Draw => 0,
            Payoff::MinWins => -1,
        }
    }

    /// The winning side, if the game was decided.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Payoff::MaxWins => Some(Side::Max),
            Payoff::MinWins => Some(Side::Min),
            Payoff::Draw => None,
        }
    }
}
