//! Policy integration tests.

use rust_alphabeta::core::{AdversarialState, Payoff, SearchError, Side};
use rust_alphabeta::games::graph::{GraphBuilder, NodeScore};
use rust_alphabeta::games::tictactoe::{LineHeuristic, TicTacToe};
use rust_alphabeta::search::{
    build_policy, AlphaBetaPolicy, GreedyPolicy, MinimaxPolicy, PathCounter, Policy, RandomPolicy,
    SearchConfig,
};

// =============================================================================
// Fallback Tests
// =============================================================================

#[test]
fn test_single_action_at_depth_zero() {
    let mut graph = GraphBuilder::new();
    let root = graph.add_node(Side::Max, 3.0);
    let only = graph.add_node(Side::Min, -3.0);
    graph.add_edge(root, only);

    let mut policy = build_policy(0, NodeScore).unwrap();
    assert_eq!(policy.choose(&graph.build(root)).unwrap(), only);
}

#[test]
fn test_repeated_root_falls_back() {
    // The game has already visited the root twice, so the search stops
    // at the root and the policy plays the first legal action.
    let mut graph = GraphBuilder::new();
    let root = graph.add_node(Side::Max, 0.0);
    let first = graph.add_node(Side::Min, -10.0);
    let better = graph.add_node(Side::Min, 10.0);
    graph.add_edge(root, first).add_edge(root, better);
    let state = graph.build(root);

    let mut policy = build_policy(1, NodeScore).unwrap();
    assert_eq!(policy.choose(&state).unwrap(), better);

    let game: PathCounter<_> = [root, root].into_iter().collect();
    assert_eq!(policy.choose_in_game(&state, &game).unwrap(), first);
    assert_eq!(policy.stats().repetition_cutoffs, 1);
}

#[test]
fn test_finished_game_is_rejected() {
    let state = TicTacToe::from_moves(&[0, 3, 1, 4, 2]).unwrap();
    let mut policies: Vec<Box<dyn Policy<TicTacToe>>> = vec![
        Box::new(build_policy::<TicTacToe, _>(3, LineHeuristic).unwrap()),
        Box::new(
            MinimaxPolicy::<TicTacToe, _>::new(3, LineHeuristic, SearchConfig::default()).unwrap(),
        ),
        Box::new(GreedyPolicy::new(LineHeuristic)),
        Box::new(RandomPolicy::new(1)),
    ];

    for policy in &mut policies {
        assert_eq!(
            policy.choose(&state),
            Err(SearchError::TerminalPosition),
            "{}",
            policy.name()
        );
    }
}

// =============================================================================
// Legality Tests
// =============================================================================

#[test]
fn test_policies_only_return_legal_actions() {
    let mut policies: Vec<Box<dyn Policy<TicTacToe>>> = vec![
        Box::new(build_policy::<TicTacToe, _>(2, LineHeuristic).unwrap()),
        Box::new(
            MinimaxPolicy::<TicTacToe, _>::new(2, LineHeuristic, SearchConfig::default()).unwrap(),
        ),
        Box::new(GreedyPolicy::new(LineHeuristic)),
        Box::new(RandomPolicy::new(5)),
    ];

    let positions = [
        TicTacToe::new(),
        TicTacToe::from_moves(&[4]).unwrap(),
        TicTacToe::from_moves(&[4, 0, 8]).unwrap(),
        TicTacToe::from_moves(&[0, 1, 2, 4, 3, 5, 7, 6]).unwrap(),
    ];

    for policy in &mut policies {
        for state in &positions {
            let action = policy.choose(state).unwrap();
            assert!(state.legal_actions().contains(&action), "{}", policy.name());
        }
    }
}

#[test]
fn test_policy_is_deterministic_across_calls() {
    let state = TicTacToe::from_moves(&[0, 4]).unwrap();
    let mut policy: AlphaBetaPolicy<TicTacToe, _> = build_policy(4, LineHeuristic).unwrap();

    let first = policy.choose(&state).unwrap();
    for _ in 0..3 {
        assert_eq!(policy.choose(&state).unwrap(), first);
    }
}

#[test]
fn test_policy_finds_mate_in_one() {
    let mut graph = GraphBuilder::new();
    let root = graph.add_node(Side::Max, 0.0);
    let quiet = graph.add_node(Side::Min, 500.0);
    let mate = graph.add_terminal(Payoff::MaxWins);
    graph.add_edge(root, quiet).add_edge(root, mate);

    let mut policy = build_policy(1, NodeScore).unwrap();
    assert_eq!(policy.choose(&graph.build(root)).unwrap(), mate);
}

#[test]
fn test_names() {
    let alphabeta: AlphaBetaPolicy<TicTacToe, _> = build_policy(3, LineHeuristic).unwrap();
    let minimax: MinimaxPolicy<TicTacToe, _> =
        MinimaxPolicy::new(2, LineHeuristic, SearchConfig::default()).unwrap();

    assert_eq!(alphabeta.name(), "AlphaBeta(depth=3)");
    assert_eq!(minimax.name(), "Minimax(depth=2)");
    assert_eq!(Policy::<TicTacToe>::name(&RandomPolicy::new(0)), "Random");
    assert_eq!(Policy::<TicTacToe>::name(&GreedyPolicy::new(LineHeuristic)), "Greedy");
}
