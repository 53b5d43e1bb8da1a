//! Match driver: two policies alternate until the game ends.

use serde::{Deserialize, Serialize};
use tracing::{info, trace};

use crate::core::{AdversarialState, Payoff, Result, Side};
use crate::search::{PathCounter, PathHistory, Policy};

use super::stats::MatchStats;

/// Configuration for a match or a series of matches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Moves played before the match is adjudicated a draw.
    pub max_moves: usize,

    /// Occurrences of one position that end the match in a draw.
    /// `None` leaves repetition to the game's own rules.
    pub repetition_limit: Option<u32>,

    /// Seed of the first game in a series (combined with the game index).
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_moves: 100,
            repetition_limit: Some(3),
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Create a new match config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum moves per game.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    /// Set or disable the repetition adjudication.
    pub fn with_repetition_limit(mut self, limit: Option<u32>) -> Self {
        self.repetition_limit = limit;
        self
    }

    /// Set seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Why a match stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// The game reached a terminal position.
    Terminal,
    /// A position occurred `repetition_limit` times.
    Repetition,
    /// `max_moves` were played.
    MoveLimit,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EndReason::Terminal => write!(f, "terminal"),
            EndReason::Repetition => write!(f, "repetition"),
            EndReason::MoveLimit => write!(f, "move limit"),
        }
    }
}

/// Summary of one finished match.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Outcome from the maximizer's perspective.
    pub payoff: Payoff,

    /// Why the match stopped.
    pub end_reason: EndReason,

    /// Moves played.
    pub moves: usize,
}

/// Full record of one finished match.
#[derive(Clone, Debug)]
pub struct MatchOutcome<S: AdversarialState> {
    /// Outcome from the maximizer's perspective. Adjudicated stops are draws.
    pub payoff: Payoff,

    /// Why the match stopped.
    pub end_reason: EndReason,

    /// Actions in the order they were played.
    pub moves: Vec<S::Action>,

    /// Position the match stopped at.
    pub final_state: S,

    /// Occurrences of every position reached, the initial one included.
    pub history: PathCounter<S::Key>,
}

impl<S: AdversarialState> MatchOutcome<S> {
    /// Summary without the move record.
    #[must_use]
    pub fn result(&self) -> MatchResult {
        MatchResult {
            payoff: self.payoff,
            end_reason: self.end_reason,
            moves: self.moves.len(),
        }
    }
}

/// Play one match from `initial`.
///
/// `max_policy` moves whenever `Side::Max` is to act, `min_policy`
/// otherwise. Each policy sees the positions reached so far through
/// `Policy::choose_in_game`.
///
/// # Errors
/// Any error a policy returns; the match is abandoned.
pub fn play_match<S: AdversarialState>(
    initial: S,
    max_policy: &mut dyn Policy<S>,
    min_policy: &mut dyn Policy<S>,
    config: &MatchConfig,
) -> Result<MatchOutcome<S>> {
    let mut state = initial;
    let mut history = PathCounter::rooted_at(state.position_key());
    let mut moves = Vec::new();

    let end_reason = loop {
        if state.is_terminal() {
            break EndReason::Terminal;
        }
        if let Some(limit) = config.repetition_limit {
            if history.count(&state.position_key()) >= limit {
                break EndReason::Repetition;
            }
        }
        if moves.len() >= config.max_moves {
            break EndReason::MoveLimit;
        }

        let side = state.actor();
        let policy: &mut dyn Policy<S> = match side {
            Side::Max => &mut *max_policy,
            Side::Min => &mut *min_policy,
        };
        let action = policy.choose_in_game(&state, &history)?;
        trace!(ply = moves.len() + 1, %side, ?action, "move played");

        state = state.apply(&action);
        history.push(state.position_key());
        moves.push(action);
    };

    let payoff = match end_reason {
        EndReason::Terminal => state.payoff(),
        EndReason::Repetition | EndReason::MoveLimit => Payoff::Draw,
    };

    Ok(MatchOutcome {
        payoff,
        end_reason,
        moves,
        final_state: state,
        history,
    })
}

/// Play `matches` games between the same two policies.
///
/// Game `i` starts from `new_game(config.seed + i)`.
pub fn run_series<S, F>(
    max_policy: &mut dyn Policy<S>,
    min_policy: &mut dyn Policy<S>,
    new_game: F,
    matches: usize,
    config: &MatchConfig,
) -> Result<MatchStats>
where
    S: AdversarialState,
    F: Fn(u64) -> S,
{
    let mut stats = MatchStats::new();

    for i in 0..matches {
        let seed = config.seed.wrapping_add(i as u64);
        let outcome = play_match(new_game(seed), &mut *max_policy, &mut *min_policy, config)?;
        let result = outcome.result();
        info!(
            game = i + 1,
            seed,
            payoff = ?result.payoff,
            reason = %result.end_reason,
            moves = result.moves,
            "match finished"
        );
        stats.record(&result);
    }

    info!(
        max = %max_policy.name(),
        min = %min_policy.name(),
        matches = stats.matches,
        max_wins = stats.max_wins,
        draws = stats.draws(),
        average_moves = stats.average_moves(),
        "series finished"
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::graph::{GraphBuilder, GraphState, NodeScore};
    use crate::search::{build_policy, RandomPolicy};

    #[test]
    fn test_match_config_builders() {
        let config = MatchConfig::new()
            .with_max_moves(10)
            .with_repetition_limit(None)
            .with_seed(7);

        assert_eq!(config.max_moves, 10);
        assert_eq!(config.repetition_limit, None);
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn test_terminal_start_plays_nothing() {
        let mut graph = GraphBuilder::new();
        let done = graph.add_terminal(Payoff::MaxWins);
        let mut a = RandomPolicy::new(0);
        let mut b = RandomPolicy::new(1);

        let outcome = play_match(graph.build(done), &mut a, &mut b, &MatchConfig::default()).unwrap();

        assert_eq!(outcome.end_reason, EndReason::Terminal);
        assert_eq!(outcome.payoff, Payoff::MaxWins);
        assert!(outcome.moves.is_empty());
    }

    #[test]
    fn test_cycle_stops_on_repetition() {
        // Two nodes pointing at each other: the only play is to shuffle.
        let mut graph = GraphBuilder::new();
        let a = graph.add_node(Side::Max, 0.0);
        let b = graph.add_node(Side::Min, 0.0);
        graph.add_edge(a, b).add_edge(b, a);

        let mut max = build_policy::<GraphState, _>(3, NodeScore).unwrap();
        let mut min = build_policy::<GraphState, _>(3, NodeScore).unwrap();
        let outcome = play_match(graph.build(a), &mut max, &mut min, &MatchConfig::default()).unwrap();

        // a b a b a: the start is seen for the third time after four moves.
        assert_eq!(outcome.end_reason, EndReason::Repetition);
        assert_eq!(outcome.payoff, Payoff::Draw);
        assert_eq!(outcome.moves, vec![b, a, b, a]);
        assert_eq!(outcome.history.count(&a), 3);
    }

    #[test]
    fn test_cycle_stops_on_move_limit() {
        let mut graph = GraphBuilder::new();
        let a = graph.add_node(Side::Max, 0.0);
        let b = graph.add_node(Side::Min, 0.0);
        graph.add_edge(a, b).add_edge(b, a);

        let config = MatchConfig::default()
            .with_max_moves(5)
            .with_repetition_limit(None);
        let mut max = RandomPolicy::new(3);
        let mut min = RandomPolicy::new(4);
        let outcome = play_match(graph.build(a), &mut max, &mut min, &config).unwrap();

        assert_eq!(outcome.end_reason, EndReason::MoveLimit);
        assert_eq!(outcome.result().moves, 5);
        assert_eq!(outcome.final_state.node(), b);
    }
}
