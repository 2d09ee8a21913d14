use std::time::Duration;

use isolation::agent::{AgentConfig, AlphaBetaAgent, RandomAgent};
use isolation::board::Board;
use isolation::evaluate::Heuristic;
use isolation::game::{Game, GameResult};

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("games");
    group.sample_size(10);
    group.bench_function("depth limited alpha beta vs random on 5x5", |b| {
        b.iter(play_small_game)
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn play_small_game() -> GameResult {
    let mut searcher = AlphaBetaAgent::new(AgentConfig {
        max_depth: Some(4),
        ..AgentConfig::with_evaluator(Heuristic::Improved)
    });
    let mut random = RandomAgent::seeded(7);
    let game = Game::new(Board::new(5, 5).unwrap(), Duration::from_secs(5));
    game.play(&mut searcher, &mut random)
}
