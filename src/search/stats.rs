//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one root search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes visited, root included.
    pub nodes: u64,

    /// Heuristic evaluations at the depth limit.
    pub evaluations: u64,

    /// Terminal positions reached.
    pub terminal_hits: u64,

    /// Nodes cut short by a repetition threshold.
    pub repetition_cutoffs: u64,

    /// Move loops abandoned because the window closed.
    pub prunes: u64,

    /// Deepest ply reached below the root.
    pub max_ply: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Leaves of any kind: evaluations, terminals and repetition cutoffs.
    #[must_use]
    pub fn leaves(&self) -> u64 {
        self.evaluations + self.terminal_hits + self.repetition_cutoffs
    }
}
