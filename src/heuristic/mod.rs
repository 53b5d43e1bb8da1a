//! Heuristic boundary.
//!
//! A heuristic scores non-terminal positions from the maximizer's point of
//! view: larger is better for `Side::Max`. Only the relative ordering of
//! scores matters, but every score must stay strictly inside
//! `(-win_score, win_score)` so that no live position outranks a decided
//! one.
//!
//! Each heuristic also declares a `bound`, the sentinel magnitude used to
//! open the root search window `(-bound, +bound)`. It defaults to infinity.
//!
//! ```
//! use rust_alphabeta::heuristic::{FnHeuristic, Heuristic};
//!
//! let h = FnHeuristic::new(|n: &i32| *n as f64);
//! assert_eq!(h.evaluate(&3), 3.0);
//! assert_eq!(Heuristic::<i32>::bound(&h), f64::INFINITY);
//! ```

use crate::core::{Result, SearchError};

/// Static evaluation of a position.
///
/// Implementations must be stateless and configured up front.
pub trait Heuristic<S> {
    /// Score `state` from the maximizer's perspective.
    ///
    /// Must be finite on every non-terminal position.
    fn evaluate(&self, state: &S) -> f64;

    /// Sentinel magnitude for the root search window.
    fn bound(&self) -> f64 {
        f64::INFINITY
    }
}

impl<S, H: Heuristic<S> + ?Sized> Heuristic<S> for &H {
    fn evaluate(&self, state: &S) -> f64 {
        (**self).evaluate(state)
    }

    fn bound(&self) -> f64 {
        (**self).bound()
    }
}

impl<S, H: Heuristic<S> + ?Sized> Heuristic<S> for Box<H> {
    fn evaluate(&self, state: &S) -> f64 {
        (**self).evaluate(state)
    }

    fn bound(&self) -> f64 {
        (**self).bound()
    }
}

/// Heuristic built from a closure.
#[derive(Clone, Debug)]
pub struct FnHeuristic<F> {
    eval: F,
    bound: f64,
}

impl<F> FnHeuristic<F> {
    /// Wrap `eval` with an infinite bound.
    pub fn new(eval: F) -> Self {
        Self {
            eval,
            bound: f64::INFINITY,
        }
    }

    /// Declare a finite window bound.
    pub fn with_bound(mut self, bound: f64) -> Self {
        self.bound = bound;
        self
    }
}

impl<S, F: Fn(&S) -> f64> Heuristic<S> for FnHeuristic<F> {
    fn evaluate(&self, state: &S) -> f64 {
        (self.eval)(state)
    }

    fn bound(&self) -> f64 {
        self.bound
    }
}

/// Check a declared window bound.
///
/// The bound must be positive and at least `min_magnitude` (the largest
/// value a search may return), otherwise the root window would clip real
/// values.
pub fn validate_bound(bound: f64, min_magnitude: f64) -> Result<f64> {
    if bound.is_nan() {
        return Err(SearchError::InvalidBound {
            bound,
            reason: "bound is NaN",
        });
    }
    if bound <= 0.0 {
        return Err(SearchError::InvalidBound {
            bound,
            reason: "bound must be positive",
        });
    }
    if bound < min_magnitude {
        return Err(SearchError::InvalidBound {
            bound,
            reason: "bound is smaller than the terminal score",
        });
    }
    Ok(bound)
}

/// Reject NaN and infinite scores before they reach a comparison.
#[inline]
pub fn checked_score(score: f64) -> Result<f64> {
    if score.is_finite() {
        Ok(score)
    } else {
        Err(SearchError::NonFiniteScore { score })
    }
}

/// Reject a score that is not finite or not strictly inside `(-limit, limit)`.
#[inline]
pub fn bounded_score(score: f64, limit: f64) -> Result<f64> {
    let score = checked_score(score)?;
    if score.abs() < limit {
        Ok(score)
    } else {
        Err(SearchError::HeuristicOutOfRange { score, limit })
    }
}
