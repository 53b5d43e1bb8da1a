use thiserror::Error;

/// Errors surfaced by the search engine and the policies built on it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// A non-terminal position reported no legal actions.
    #[error("non-terminal position has no legal actions")]
    NoLegalActions,

    /// A policy was asked to move in a finished game.
    #[error("position is terminal, no action to choose")]
    TerminalPosition,

    /// The heuristic produced NaN or an infinite score.
    #[error("heuristic returned a non-finite score: {score}")]
    NonFiniteScore { score: f64 },

    /// The heuristic scored a live position as high as a decided game.
    #[error("heuristic score {score} reaches the terminal magnitude {limit}")]
    HeuristicOutOfRange { score: f64, limit: f64 },

    /// The heuristic's declared bound cannot open a full search window.
    #[error("invalid heuristic bound {bound}: {reason}")]
    InvalidBound { bound: f64, reason: &'static str },

    /// Scoring constants violate their ordering constraints.
    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
