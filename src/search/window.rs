//! The (alpha, beta) search window.

use serde::{Deserialize, Serialize};

use crate::core::Side;

/// Pruning bounds threaded through the recursion.
///
/// `alpha` is what the maximizer can already guarantee, `beta` what the
/// minimizer can already guarantee. A node is only worth expanding further
/// while `alpha < beta`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Window {
    pub alpha: f64,
    pub beta: f64,
}

impl Window {
    /// Create a window from explicit bounds.
    #[must_use]
    pub const fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// The unbounded window `(-inf, +inf)`.
    #[must_use]
    pub const fn full() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    /// The window `(-bound, +bound)`.
    #[must_use]
    pub fn symmetric(bound: f64) -> Self {
        Self::new(-bound, bound)
    }

    /// No remaining sibling can change the parent's choice.
    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.alpha >= self.beta
    }

    /// Narrow the bound owned by `side` with its best value so far.
    #[inline]
    pub fn tighten(&mut self, side: Side, best: f64) {
        match side {
            Side::Max => self.alpha = self.alpha.max(best),
            Side::Min => self.beta = self.beta.min(best),
        }
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::full()
    }
}
