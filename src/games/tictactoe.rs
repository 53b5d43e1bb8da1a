//! Tic-tac-toe.
//!
//! X moves first and maximizes. Actions are cell indices `0..9`, row-major,
//! listed in ascending order. Three in a row wins; a full board is a draw.

use serde::{Deserialize, Serialize};

use crate::core::{AdversarialState, Payoff, Side};
use crate::heuristic::Heuristic;

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Contents of a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    fn of(side: Side) -> Self {
        match side {
            Side::Max => Cell::X,
            Side::Min => Cell::O,
        }
    }
}

/// A tic-tac-toe position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicTacToe {
    cells: [Cell; 9],
    to_move: Side,
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToe {
    /// The empty board, X to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
            to_move: Side::Max,
        }
    }

    /// Play `moves` from the empty board.
    ///
    /// Returns `None` if any move is illegal.
    #[must_use]
    pub fn from_moves(moves: &[usize]) -> Option<Self> {
        let mut state = Self::new();
        for &cell in moves {
            if !state.legal_actions().contains(&cell) {
                return None;
            }
            state = state.apply(&cell);
        }
        Some(state)
    }

    /// Contents of square `index`.
    #[must_use]
    pub fn cell(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Side holding a completed line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        LINES.iter().find_map(|line| {
            match line.map(|i| self.cells[i]) {
                [Cell::X, Cell::X, Cell::X] => Some(Side::Max),
                [Cell::O, Cell::O, Cell::O] => Some(Side::Min),
                _ => None,
            }
        })
    }

    fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }
}

impl AdversarialState for TicTacToe {
    type Action = usize;
    type Key = [Cell; 9];

    fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    fn payoff(&self) -> Payoff {
        match self.winner() {
            Some(side) => Payoff::win_for(side),
            None => Payoff::Draw,
        }
    }

    fn actor(&self) -> Side {
        self.to_move
    }

    fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..9).filter(|&i| self.cells[i] == Cell::Empty).collect()
    }

    fn apply(&self, action: &usize) -> Self {
        let mut next = self.clone();
        next.cells[*action] = Cell::of(self.to_move);
        next.to_move = self.to_move.opposite();
        next
    }

    // The side to move follows from the mark counts.
    fn position_key(&self) -> [Cell; 9] {
        self.cells
    }
}

/// Counts open lines: a line holding only X marks adds the square of its
/// mark count, a line holding only O marks subtracts it.
#[derive(Clone, Copy, Debug, Default)]
pub struct LineHeuristic;

impl Heuristic<TicTacToe> for LineHeuristic {
    fn evaluate(&self, state: &TicTacToe) -> f64 {
        LINES
            .iter()
            .map(|line| {
                let xs = line.iter().filter(|&&i| state.cells[i] == Cell::X).count();
                let os = line.iter().filter(|&&i| state.cells[i] == Cell::O).count();
                match (xs, os) {
                    (n, 0) => (n * n) as f64,
                    (0, n) => -((n * n) as f64),
                    _ => 0.0,
                }
            })
            .sum()
    }
}
