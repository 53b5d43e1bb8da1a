//! Leaf classification shared by the pruned and unpruned searches.
//!
//! A node is a leaf when it is terminal, when its key has reached a
//! repetition threshold on the current path, or when the depth budget is
//! spent. Checks run in that order.

use crate::core::{AdversarialState, Result};
use crate::heuristic::{bounded_score, Heuristic};

use super::config::SearchConfig;
use super::stats::SearchStats;

/// Value of `state` if it is a leaf, `None` if it must be expanded.
///
/// `path_count` is the number of occurrences of the state's key on the
/// current path, the state itself included. Heuristic scores must lie
/// strictly inside `(-win_score, win_score)`.
pub(crate) fn leaf_value<S, H>(
    state: &S,
    depth: u32,
    path_count: u32,
    heuristic: &H,
    config: &SearchConfig,
    stats: &mut SearchStats,
) -> Result<Option<f64>>
where
    S: AdversarialState,
    H: Heuristic<S>,
{
    if state.is_terminal() {
        stats.terminal_hits += 1;
        return Ok(Some(config.terminal_score(state.payoff())));
    }

    if let Some(score) = config.repetition_score(path_count) {
        stats.repetition_cutoffs += 1;
        return Ok(Some(score));
    }

    if depth == 0 {
        stats.evaluations += 1;
        return bounded_score(heuristic.evaluate(state), config.win_score).map(Some);
    }

    Ok(None)
}
