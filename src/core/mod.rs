//! Core types: sides, payoffs, the state protocol, errors, RNG.
//!
//! Everything here is game-agnostic. Games plug in by implementing
//! `AdversarialState` on their own position type.

pub mod error;
pub mod rng;
pub mod side;
pub mod state;

pub use error::{Result, SearchError};
pub use rng::{GameRng, GameRngState};
pub use side::{Payoff, Side};
pub use state::AdversarialState;
