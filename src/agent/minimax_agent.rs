use log::debug;

use super::{Agent, AgentConfig};
use crate::moves::Move;
use crate::search::{minimax, Evaluator, GameState, SearchContext, SearchStats, TimeLeft};

/// Runs a single minimax search at the configured depth. If the deadline
/// interrupts it the whole search is lost and the agent answers `Move::NONE`;
/// there is no shallower result to fall back on.
pub struct MinimaxAgent<E> {
    config: AgentConfig<E>,
    last_stats: SearchStats,
}

impl<E> MinimaxAgent<E> {
    pub fn new(config: AgentConfig<E>) -> Self {
        Self {
            config,
            last_stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &AgentConfig<E> {
        &self.config
    }

    /// Counters from the most recent `select_move`.
    pub fn last_stats(&self) -> &SearchStats {
        &self.last_stats
    }
}

impl<S, E> Agent<S> for MinimaxAgent<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn name(&self) -> String {
        format!("minimax (depth {})", self.config.search_depth)
    }

    fn select_move(&mut self, state: &S, time_left: &dyn TimeLeft) -> Move {
        let mut context = SearchContext::with_threshold(
            state.active_player(),
            &self.config.evaluator,
            time_left,
            self.config.timer_threshold,
        );

        let best_move = match minimax(&mut context, state, self.config.search_depth) {
            Ok(best_move) => best_move,
            Err(err) => {
                debug!(
                    "minimax depth {} abandoned: {}",
                    self.config.search_depth, err
                );
                Move::NONE
            }
        };

        self.last_stats = *context.stats();
        #[cfg(feature = "instrumentation")]
        crate::instrumentation::record_search(&self.last_stats);
        best_move
    }
}
