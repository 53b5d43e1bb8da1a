//! Alpha-beta versus plain minimax on tic-tac-toe.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_alphabeta::core::AdversarialState;
use rust_alphabeta::games::tictactoe::{LineHeuristic, TicTacToe};
use rust_alphabeta::search::{AlphaBetaSearch, MinimaxSearch, PathCounter, PersistentPath, Window};

fn bench_search(c: &mut Criterion) {
    let state = TicTacToe::from_moves(&[4]).unwrap_or_default();
    let mut group = c.benchmark_group("tictactoe");

    for depth in [2u32, 4, 6] {
        group.bench_with_input(BenchmarkId::new("alphabeta", depth), &depth, |b, &depth| {
            let mut search = AlphaBetaSearch::with_defaults(LineHeuristic);
            b.iter(|| {
                let mut history = PathCounter::rooted_at(state.position_key());
                search
                    .search(black_box(&state), depth, Window::full(), &mut history)
                    .map(|outcome| outcome.value)
            });
        });

        group.bench_with_input(BenchmarkId::new("minimax", depth), &depth, |b, &depth| {
            let mut search = MinimaxSearch::with_defaults(LineHeuristic);
            b.iter(|| {
                let mut history = PathCounter::rooted_at(state.position_key());
                search
                    .search(black_box(&state), depth, &mut history)
                    .map(|outcome| outcome.value)
            });
        });

        group.bench_with_input(BenchmarkId::new("alphabeta_persistent", depth), &depth, |b, &depth| {
            let mut search = AlphaBetaSearch::with_defaults(LineHeuristic);
            b.iter(|| {
                let mut history = PersistentPath::rooted_at(state.position_key());
                search
                    .search(black_box(&state), depth, Window::full(), &mut history)
                    .map(|outcome| outcome.value)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
