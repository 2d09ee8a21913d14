use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::Agent;
use crate::moves::Move;
use crate::search::{GameState, TimeLeft};

/// Plays a uniformly random legal move. Used as a baseline opponent.
pub struct RandomAgent {
    rng: StdRng,
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible agent, for tests and benchmarks.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<S: GameState> Agent<S> for RandomAgent {
    fn name(&self) -> String {
        "random".to_string()
    }

    fn select_move(&mut self, state: &S, _time_left: &dyn TimeLeft) -> Move {
        state
            .legal_moves(state.active_player())
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Move::NONE)
    }
}
