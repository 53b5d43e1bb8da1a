//! Move-selection policies.
//!
//! `Policy` is the boundary a game driver talks to: given a position, pick
//! one of its legal actions.
//!
//! - `AlphaBetaPolicy`: depth-limited alpha-beta search (see `build_policy`)
//! - `MinimaxPolicy`: the same search without pruning
//! - `GreedyPolicy`: best immediate successor by heuristic
//! - `RandomPolicy`: uniform over legal actions
//!
//! ## Fallback
//!
//! A search can finish without an action: depth 0 at the root, or a
//! terminal or repetition cutoff firing at the root itself. The searching
//! policies then return the first legal action. They only fail when there
//! is nothing to return: `TerminalPosition` if the game is over,
//! `NoLegalActions` if a live position lists no actions.

use std::marker::PhantomData;

use tracing::{trace, warn};

use crate::core::{AdversarialState, GameRng, GameRngState, Result, SearchError};
use crate::heuristic::{bounded_score, validate_bound, Heuristic};

use super::alphabeta::AlphaBetaSearch;
use super::config::SearchConfig;
use super::history::{PathCounter, PathHistory};
use super::minimax::MinimaxSearch;
use super::stats::SearchStats;
use super::window::Window;

/// Chooses an action at a position.
pub trait Policy<S: AdversarialState> {
    /// Choose a legal action at `state`.
    fn choose(&mut self, state: &S) -> Result<S::Action>;

    /// Choose a legal action, knowing which positions the game has already
    /// passed through.
    ///
    /// The game history counts real occurrences of each key so far. Policies
    /// that track repetition seed their search path with it; others ignore it.
    fn choose_in_game(&mut self, state: &S, _game_history: &PathCounter<S::Key>) -> Result<S::Action> {
        self.choose(state)
    }

    /// Human-readable label for reports.
    fn name(&self) -> String;
}

/// Legal actions at `state`, or the reason there are none.
fn legal_actions_or_err<S: AdversarialState>(state: &S) -> Result<Vec<S::Action>> {
    let actions = state.legal_actions();
    if !actions.is_empty() {
        Ok(actions)
    } else if state.is_terminal() {
        Err(SearchError::TerminalPosition)
    } else {
        Err(SearchError::NoLegalActions)
    }
}

/// Use the searched action, or fall back to the first legal one.
fn resolve<S: AdversarialState>(state: &S, found: Option<S::Action>, depth: u32) -> Result<S::Action> {
    if let Some(action) = found {
        trace!(?action, depth, "search chose action");
        return Ok(action);
    }

    let first = legal_actions_or_err(state)?.swap_remove(0);
    if depth > 0 && !state.is_terminal() {
        warn!(?first, depth, "search cut off at root, falling back to first legal action");
    } else {
        trace!(?first, depth, "no searched action, falling back to first legal action");
    }
    Ok(first)
}

/// Root path history: the game history if given, with the root counted at
/// least once.
fn root_history<S: AdversarialState>(state: &S, game_history: Option<&PathCounter<S::Key>>) -> PathCounter<S::Key> {
    let key = state.position_key();
    match game_history {
        Some(seen) => {
            let mut history = seen.clone();
            if history.count(&key) == 0 {
                history.push(key);
            }
            history
        }
        None => PathCounter::rooted_at(key),
    }
}

// =============================================================================
// Alpha-Beta Policy
// =============================================================================

/// Policy backed by depth-limited alpha-beta search.
///
/// Every call searches with the window `(-bound, +bound)` taken from the
/// heuristic and a fresh path history; nothing carries over between calls.
pub struct AlphaBetaPolicy<S, H> {
    search: AlphaBetaSearch<H>,
    depth: u32,
    bound: f64,
    _state: PhantomData<fn(&S)>,
}

/// Build an alpha-beta policy with the default scoring constants.
///
/// # Errors
/// `InvalidBound` if the heuristic's bound is NaN, not positive, or smaller
/// than the terminal score.
pub fn build_policy<S, H>(depth: u32, heuristic: H) -> Result<AlphaBetaPolicy<S, H>>
where
    S: AdversarialState,
    H: Heuristic<S>,
{
    AlphaBetaPolicy::new(depth, heuristic, SearchConfig::default())
}

impl<S, H> AlphaBetaPolicy<S, H>
where
    S: AdversarialState,
    H: Heuristic<S>,
{
    /// Create a policy searching `depth` plies with custom scoring constants.
    pub fn new(depth: u32, heuristic: H, config: SearchConfig) -> Result<Self> {
        let bound = validate_bound(heuristic.bound(), config.win_score)?;
        Ok(Self {
            search: AlphaBetaSearch::new(heuristic, config)?,
            depth,
            bound,
            _state: PhantomData,
        })
    }

    /// Statistics from the last call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        self.search.stats()
    }

    fn choose_from(&mut self, state: &S, mut history: PathCounter<S::Key>) -> Result<S::Action> {
        let window = Window::symmetric(self.bound);
        let outcome = self.search.search(state, self.depth, window, &mut history)?;
        resolve(state, outcome.best_action, self.depth)
    }
}

impl<S, H> Policy<S> for AlphaBetaPolicy<S, H>
where
    S: AdversarialState,
    H: Heuristic<S>,
{
    fn choose(&mut self, state: &S) -> Result<S::Action> {
        let history = root_history(state, None);
        self.choose_from(state, history)
    }

    fn choose_in_game(&mut self, state: &S, game_history: &PathCounter<S::Key>) -> Result<S::Action> {
        let history = root_history(state, Some(game_history));
        self.choose_from(state, history)
    }

    fn name(&self) -> String {
        format!("AlphaBeta(depth={})", self.depth)
    }
}

// =============================================================================
// Minimax Policy
// =============================================================================

/// Policy backed by unpruned minimax. Same choices as `AlphaBetaPolicy`,
/// more nodes.
pub struct MinimaxPolicy<S, H> {
    search: MinimaxSearch<H>,
    depth: u32,
    _state: PhantomData<fn(&S)>,
}

impl<S, H> MinimaxPolicy<S, H>
where
    S: AdversarialState,
    H: Heuristic<S>,
{
    /// Create a policy searching `depth` plies.
    pub fn new(depth: u32, heuristic: H, config: SearchConfig) -> Result<Self> {
        Ok(Self {
            search: MinimaxSearch::new(heuristic, config)?,
            depth,
            _state: PhantomData,
        })
    }

    /// Statistics from the last call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        self.search.stats()
    }

    fn choose_from(&mut self, state: &S, mut history: PathCounter<S::Key>) -> Result<S::Action> {
        let outcome = self.search.search(state, self.depth, &mut history)?;
        resolve(state, outcome.best_action, self.depth)
    }
}

impl<S, H> Policy<S> for MinimaxPolicy<S, H>
where
    S: AdversarialState,
    H: Heuristic<S>,
{
    fn choose(&mut self, state: &S) -> Result<S::Action> {
        let history = root_history(state, None);
        self.choose_from(state, history)
    }

    fn choose_in_game(&mut self, state: &S, game_history: &PathCounter<S::Key>) -> Result<S::Action> {
        let history = root_history(state, Some(game_history));
        self.choose_from(state, history)
    }

    fn name(&self) -> String {
        format!("Minimax(depth={})", self.depth)
    }
}

// =============================================================================
// Baselines
// =============================================================================

/// Picks the successor the heuristic likes best for the side to move.
///
/// Terminal successors are scored with the search's terminal constants.
/// Ties go to the earlier action.
#[derive(Clone, Debug)]
pub struct GreedyPolicy<H> {
    heuristic: H,
    config: SearchConfig,
}

impl<H> GreedyPolicy<H> {
    /// Create a greedy policy with the default scoring constants.
    pub fn new(heuristic: H) -> Self {
        Self {
            heuristic,
            config: SearchConfig::default(),
        }
    }

    /// Use custom scoring constants for terminal successors.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }
}

impl<S, H> Policy<S> for GreedyPolicy<H>
where
    S: AdversarialState,
    H: Heuristic<S>,
{
    fn choose(&mut self, state: &S) -> Result<S::Action> {
        let side = state.actor();
        let mut best = side.worst_value();
        let mut chosen = None;

        for action in legal_actions_or_err(state)? {
            let child = state.apply(&action);
            let score = if child.is_terminal() {
                self.config.terminal_score(child.payoff())
            } else {
                bounded_score(self.heuristic.evaluate(&child), self.config.win_score)?
            };
            if side.prefers(score, best) {
                best = score;
                chosen = Some(action);
            }
        }

        chosen.ok_or(SearchError::NoLegalActions)
    }

    fn name(&self) -> String {
        "Greedy".to_string()
    }
}

/// Uniformly random legal actions from a seeded stream.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    /// Create a random policy with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Resume from a checkpointed RNG state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self {
            rng: GameRng::from_state(state),
        }
    }

    /// Checkpoint the RNG.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl<S: AdversarialState> Policy<S> for RandomPolicy {
    fn choose(&mut self, state: &S) -> Result<S::Action> {
        let actions = legal_actions_or_err(state)?;
        self.rng
            .choose(&actions)
            .cloned()
            .ok_or(SearchError::NoLegalActions)
    }

    fn name(&self) -> String {
        "Random".to_string()
    }
}
