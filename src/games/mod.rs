//! Reference games implementing `AdversarialState`.
//!
//! - `graph`: an explicit game graph, node by node (cycles allowed)
//! - `tictactoe`: the classic 3x3 game, X maximizing

pub mod graph;
pub mod tictactoe;

pub use graph::{GraphBuilder, GraphState, NodeId, NodeScore};
pub use tictactoe::{LineHeuristic, TicTacToe};
