//! Plain depth-limited minimax without pruning.
//!
//! Visits every node alpha-beta would visit and more, with identical leaf
//! scoring, repetition bookkeeping and tie-breaking. It serves as a slower
//! policy in its own right and as the reference alpha-beta must agree with.

use std::time::Instant;

use tracing::debug;

use crate::core::{AdversarialState, Result, SearchError};
use crate::heuristic::Heuristic;

use super::alphabeta::SearchOutcome;
use super::config::SearchConfig;
use super::history::PathHistory;
use super::leaf::leaf_value;
use super::stats::SearchStats;

/// Unpruned minimax search context.
#[derive(Clone, Debug)]
pub struct MinimaxSearch<H> {
    heuristic: H,
    config: SearchConfig,
    stats: SearchStats,
}

impl<H> MinimaxSearch<H> {
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

    /// Search `state` to `depth` plies.
    ///
    /// Same history contract and errors as `AlphaBetaSearch::search`.
    pub fn search<S, P>(
        &mut self,
        state: &S,
        depth: u32,
        history: &mut P,
    ) -> Result<SearchOutcome<S::Action>>
    where
        S: AdversarialState,
        H: Heuristic<S>,
        P: PathHistory<S::Key>,
    {
        let start = Instant::now();
        self.stats.reset();

        let outcome = self.search_node(state, depth, history, 0);

        self.stats.time_us = start.elapsed().as_micros() as u64;
        if let Ok(found) = &outcome {
            debug!(
                depth,
                value = found.value,
                nodes = self.stats.nodes,
                time_us = self.stats.time_us,
                "minimax search complete"
            );
        }

        outcome
    }

    fn search_node<S, P>(
        &mut self,
        state: &S,
        depth: u32,
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
            let child = state.apply(&action);
            let value = {
                let mut path = history.enter(child.position_key());
                self.search_node(&child, depth - 1, &mut *path, ply + 1)?.value
            };

            if side.prefers(value, best) {
                best = value;
                best_action = Some(action);
            }
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
}
