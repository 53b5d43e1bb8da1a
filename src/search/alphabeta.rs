//! Depth-limited minimax with alpha-beta pruning.
//!
//! Per node, in order:
//! 1. Terminal positions return their scaled payoff
//! 2. Keys repeated on the current path return a repetition penalty
//! 3. Spent depth budget returns the heuristic score
//! 4. Otherwise every legal action is searched in enumeration order until
//!    the window closes
//!
//! Only the first action reaching the best value is kept, so enumeration
//! order is the tie-break. No action is reported for leaves.
//!
//! ## Repetition bookkeeping
//!
//! Each child's key is pushed onto the path history before descending and
//! popped by a `PathGuard` when the child returns, including when the child
//! fails. After `search` returns, the history is exactly what the caller
//! passed in.

use std::time::Instant;

use tracing::debug;

use crate::core::{AdversarialState, Result, SearchError};
use crate::heuristic::Heuristic;

use super::config::SearchConfig;
use super::history::PathHistory;
use super::leaf::leaf_value;
use super::stats::SearchStats;
use super::window::Window;

/// Value of a searched position and the action achieving it.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome<A> {
    /// Minimax value from the maximizer's perspective.
    pub value: f64,

    /// First action reaching `value`; `None` at leaves.
    pub best_action: Option<A>,
}

impl<A> SearchOutcome<A> {
    /// Outcome of a leaf: a value with no action.
    #[must_use]
    pub fn leaf(value: f64) -> Self {
        Self {
            value,
            best_action: None,
        }
    }
}

/// Alpha-beta search context.
///
/// Owns a configured heuristic and scoring constants. Statistics are
/// reset at the start of every `search` call.
#[derive(Clone, Debug)]
pub struct AlphaBetaSearch<H> {
    heuristic: H,
    config: SearchConfig,
    stats: SearchStats,
}

impl<H> AlphaBetaSearch<H> {
    /// Create a search with validated scoring constants.
    pub fn new(heuristic: H, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            heuristic,
            config,
            stats: SearchStats::default(),
        })
    }

    /// Create a search with the default scoring constants.
    pub fn with_defaults(heuristic: H) -> Self {
        Self {
            heuristic,
            config: SearchConfig::default(),
            stats: SearchStats::default(),
        }
    }

    /// Search `state` to `depth` plies inside `window`.
    ///
    /// `history` must already count `state` itself (and any ancestors that
    /// should take part in repetition detection). It is restored before
    /// this returns, on success or failure.
    ///
    /// # Errors
    /// - `NoLegalActions` if an expanded non-terminal node has no actions
    /// - `NonFiniteScore` if the heuristic returns NaN or infinity
    /// - `HeuristicOutOfRange` if a heuristic score reaches `win_score`
    pub fn search<S, P>(
        &mut self,
        state: &S,
        depth: u32,
        window: Window,
        history: &mut P,
    ) -> Result<SearchOutcome<S::Action>>
    where
        S: AdversarialState,
        H: Heuristic<S>,
        P: PathHistory<S::Key>,
    {
        let start = Instant::now();
        self.stats.reset();

        let outcome = self.search_node(state, depth, window, history, 0);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        match &outcome {
            Ok(found) => debug!(
                depth,
                value = found.value,
                nodes = self.stats.nodes,
                prunes = self.stats.prunes,
                time_us = self.stats.time_us,
                "alpha-beta search complete"
            ),
            Err(error) => debug!(depth, %error, "alpha-beta search failed"),
        }

        outcome
    }

    fn search_node<S, P>(
        &mut self,
        state: &S,
        depth: u32,
        mut window: Window,
        history: &mut P,
        ply: u32,
    ) -> Result<SearchOutcome<S::Action>>
    where
        S: AdversarialState,
        H: Heuristic<S>,
        P: PathHistory<S::Key>,
    {
        self.stats.nodes += 1;
        self.stats.max_ply = self.stats.max_ply.max(ply);

        let count = history.count(&state.position_key());
        if let Some(value) = leaf_value(
            state,
            depth,
            count,
            &self.heuristic,
            &self.config,
            &mut self.stats,
        )? {
            return Ok(SearchOutcome::leaf(value));
        }

        let actions = state.legal_actions();
        if actions.is_empty() {
            return Err(SearchError::NoLegalActions);
        }

        let side = state.actor();
        let mut best = side.worst_value();
        let mut best_action = None;

        for action in actions {
            if window.is_closed() {
                self.stats.prunes += 1;
                break;
            }

            let child = state.apply(&action);
            let value = {
                let mut path = history.enter(child.position_key());
                self.search_node(&child, depth - 1, window, &mut *path, ply + 1)?
                    .value
            };

            if side.prefers(value, best) {
                best = value;
                best_action = Some(action);
            }
            window.tighten(side, best);
        }

        Ok(SearchOutcome {
            value: best,
            best_action,
        })
    }

    /// Statistics from the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get the heuristic.
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Payoff, Side};
    use crate::heuristic::FnHeuristic;
    use crate::search::history::PathCounter;

    // Take one or two tokens; whoever takes the last token wins.
    #[derive(Clone, Debug)]
    struct Countdown(u32, Side);

    impl AdversarialState for Countdown {
        type Action = u32;
        type Key = (u32, Side);

        fn is_terminal(&self) -> bool {
            self.0 == 0
        }

        fn payoff(&self) -> Payoff {
            Payoff::win_for(self.1.opposite())
        }

        fn actor(&self) -> Side {
            self.1
        }

        fn legal_actions(&self) -> Vec<u32> {
            (1..=self.0.min(2)).collect()
        }

        fn apply(&self, action: &u32) -> Self {
            Countdown(self.0 - action, self.1.opposite())
        }

        fn position_key(&self) -> (u32, Side) {
            (self.0, self.1)
        }
    }

    fn flat() -> FnHeuristic<impl Fn(&Countdown) -> f64> {
        FnHeuristic::new(|_: &Countdown| 0.0)
    }

    #[test]
    fn test_depth_zero_returns_heuristic() {
        let mut search = AlphaBetaSearch::with_defaults(FnHeuristic::new(|s: &Countdown| {
            f64::from(s.0) / 10.0
        }));
        let mut history = PathCounter::new();

        let outcome = search
            .search(&Countdown(5, Side::Max), 0, Window::full(), &mut history)
            .unwrap();

        assert_eq!(outcome, SearchOutcome::leaf(0.5));
        assert_eq!(search.stats().evaluations, 1);
    }

    #[test]
    fn test_terminal_root_has_no_action() {
        let mut search = AlphaBetaSearch::with_defaults(flat());
        let mut history = PathCounter::new();

        let outcome = search
            .search(&Countdown(0, Side::Max), 3, Window::full(), &mut history)
            .unwrap();

        // Max to move at zero: Min took the last token.
        assert_eq!(outcome.value, -1000.0);
        assert_eq!(outcome.best_action, None);
    }

    #[test]
    fn test_finds_forced_win() {
        // Taking both tokens wins on the spot; taking one is scored 0.
        let mut search = AlphaBetaSearch::with_defaults(flat());
        let mut history = PathCounter::rooted_at((2, Side::Max));

        let outcome = search
            .search(&Countdown(2, Side::Max), 1, Window::full(), &mut history)
            .unwrap();

        assert_eq!(outcome.best_action, Some(2));
        assert_eq!(outcome.value, 1000.0);
        assert_eq!(history, PathCounter::rooted_at((2, Side::Max)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SearchConfig::default().with_win_score(-1.0);
        assert!(AlphaBetaSearch::new(flat(), config).is_err());
    }

    #[test]
    fn test_non_finite_heuristic_propagates() {
        let mut search = AlphaBetaSearch::with_defaults(FnHeuristic::new(|_: &Countdown| f64::NAN));
        let mut history = PathCounter::rooted_at((6, Side::Max));

        let result = search.search(&Countdown(6, Side::Max), 2, Window::full(), &mut history);

        assert!(matches!(result, Err(SearchError::NonFiniteScore { .. })));
        assert_eq!(history, PathCounter::rooted_at((6, Side::Max)));
    }
}
