//! Adversarial state protocol.
//!
//! Games implement `AdversarialState` on their position type to make it
//! searchable:
//! - Whether the game is over, and who won
//! - Whose turn it is
//! - Which actions are legal, and the position each one leads to
//! - A canonical key used to detect repeated positions
//!
//! The search never looks inside a position. It only derives successors,
//! so positions can be shared freely across branches and backtracking is
//! just dropping a value.

use std::fmt::Debug;
use std::hash::Hash;

use super::side::{Payoff, Side};

/// A position in a two-player, zero-sum, perfect-information game.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Order matters; earlier actions win ties
/// - `legal_actions`: May be empty only when `is_terminal` is true
/// - `apply`: Must not mutate `self` or share mutable state with the result
/// - `payoff`: Only meaningful when `is_terminal` is true
/// - `position_key`: Equal keys must be interchangeable for draw-by-repetition
///   purposes (ignore move counters and other bookkeeping that does not
///   affect repetition)
pub trait AdversarialState: Sized {
    /// One legal transition from a position.
    type Action: Clone + PartialEq + Debug;

    /// Canonical identity of a position for repetition tracking.
    type Key: Clone + Eq + Hash + Debug;

    /// Has the game ended at this position (win, loss or draw by rule)?
    fn is_terminal(&self) -> bool;

    /// Outcome from the maximizer's perspective.
    fn payoff(&self) -> Payoff;

    /// The side to move.
    fn actor(&self) -> Side;

    /// All legal actions, in a deterministic order.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// The position reached by playing `action`.
    fn apply(&self, action: &Self::Action) -> Self;

    /// Key identifying strategically identical positions.
    fn position_key(&self) -> Self::Key;
}
