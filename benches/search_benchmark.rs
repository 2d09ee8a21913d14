use isolation::board::Board;
use isolation::evaluate::Heuristic;
use isolation::moves::Move;
use isolation::search::{alpha_beta, iterative_deepening, minimax, SearchContext, SearchStrategy};

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let board = midgame_board();

    c.bench_function("minimax depth 4", |b| {
        b.iter(|| search_with(black_box(&board), SearchStrategy::Minimax, 4))
    });
    c.bench_function("alpha beta depth 4", |b| {
        b.iter(|| search_with(black_box(&board), SearchStrategy::AlphaBeta, 4))
    });
    c.bench_function("iterative deepening to depth 5", |b| {
        b.iter(|| deepen_to(black_box(&board), 5))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn midgame_board() -> Board {
    let mut board = Board::default();
    for &(row, col) in [(3, 3), (0, 0), (1, 2), (2, 1), (2, 4), (4, 2)].iter() {
        board.apply_move(Move::new(row, col)).unwrap();
    }
    board
}

fn no_deadline() -> f64 {
    f64::INFINITY
}

fn search_with(board: &Board, strategy: SearchStrategy, depth: u32) -> Move {
    let evaluator = Heuristic::Custom;
    let mut context = SearchContext::new(board.active_player(), &evaluator, &no_deadline);
    let result = match strategy {
        SearchStrategy::Minimax => minimax(&mut context, board, depth),
        SearchStrategy::AlphaBeta => alpha_beta(&mut context, board, depth),
    };
    result.unwrap()
}

fn deepen_to(board: &Board, max_depth: u32) -> Move {
    let evaluator = Heuristic::Improved;
    let mut context = SearchContext::new(board.active_player(), &evaluator, &no_deadline);
    iterative_deepening(&mut context, board, SearchStrategy::AlphaBeta, Some(max_depth)).best_move
}
