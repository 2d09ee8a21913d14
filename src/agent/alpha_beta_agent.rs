use log::debug;

use super::{Agent, AgentConfig};
use crate::moves::Move;
use crate::search::{
    iterative_deepening, DeepeningResult, Evaluator, GameState, SearchContext, SearchStats,
    TimeLeft, Termination,
};

/// Iterative deepening agent. Searches one ply deeper each iteration until
/// the deadline, answering with the move of the deepest completed iteration.
pub struct AlphaBetaAgent<E> {
    config: AgentConfig<E>,
    last_result: Option<DeepeningResult>,
    last_stats: SearchStats,
}

impl<E> AlphaBetaAgent<E> {
    pub fn new(config: AgentConfig<E>) -> Self {
        Self {
            config,
            last_result: None,
            last_stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &AgentConfig<E> {
        &self.config
    }

    /// Deepest iteration completed by the most recent `select_move`.
    pub fn last_depth_completed(&self) -> u32 {
        self.last_result.map_or(0, |result| result.depth_completed)
    }

    pub fn last_termination(&self) -> Option<Termination> {
        self.last_result.map(|result| result.termination)
    }

    /// Counters summed over every iteration of the most recent `select_move`.
    pub fn last_stats(&self) -> &SearchStats {
        &self.last_stats
    }
}

impl<S, E> Agent<S> for AlphaBetaAgent<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn name(&self) -> String {
        format!("iterative deepening ({})", self.config.strategy)
    }

    fn select_move(&mut self, state: &S, time_left: &dyn TimeLeft) -> Move {
        let mut context = SearchContext::with_threshold(
            state.active_player(),
            &self.config.evaluator,
            time_left,
            self.config.timer_threshold,
        );

        let result = iterative_deepening(
            &mut context,
            state,
            self.config.strategy,
            self.config.max_depth,
        );
        debug!(
            "selected {} after {} complete iteration(s), stopped by {:?}",
            result.best_move, result.depth_completed, result.termination
        );

        self.last_result = Some(result);
        self.last_stats = *context.stats();
        #[cfg(feature = "instrumentation")]
        crate::instrumentation::record_search(&self.last_stats);
        result.best_move
    }
}
