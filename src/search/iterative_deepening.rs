use std::fmt;
use std::str::FromStr;

use log::debug;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::alpha_beta::alpha_beta;
use super::context::{SearchContext, SearchError};
use super::minimax::minimax;
use super::traits::{Evaluator, GameState, TimeLeft};
use crate::moves::Move;

/// Which depth-limited search an agent runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStrategy {
    Minimax,
    AlphaBeta,
}

impl Default for SearchStrategy {
    fn default() -> Self {
        SearchStrategy::AlphaBeta
    }
}

impl SearchStrategy {
    pub fn search<S, E, T>(
        &self,
        context: &mut SearchContext<'_, S, E, T>,
        state: &S,
        depth: u32,
    ) -> Result<Move, SearchError>
    where
        S: GameState,
        E: Evaluator<S> + ?Sized,
        T: TimeLeft + ?Sized,
    {
        match self {
            SearchStrategy::Minimax => minimax(context, state, depth),
            SearchStrategy::AlphaBeta => alpha_beta(context, state, depth),
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strategy_str = match self {
            SearchStrategy::Minimax => "minimax",
            SearchStrategy::AlphaBeta => "alpha-beta",
        };
        write!(f, "{}", strategy_str)
    }
}

impl FromStr for SearchStrategy {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(SearchStrategy::Minimax),
            "alpha-beta" => Ok(SearchStrategy::AlphaBeta),
            _ => Err("invalid strategy; options are: minimax, alpha-beta"),
        }
    }
}

/// Why iterative deepening stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// A search at some depth ran out of time; its partial result was dropped.
    Timeout,
    /// A completed search found no legal move at the root.
    NoMoves,
    /// The configured maximum depth was searched completely.
    DepthLimit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeepeningResult {
    /// Best move of the deepest completed iteration, or `Move::NONE` if none
    /// completed.
    pub best_move: Move,
    /// Deepest depth whose search ran to completion (0 if none did).
    pub depth_completed: u32,
    pub termination: Termination,
}

/// Searches at depth 1, 2, 3, ... until the deadline interrupts a search, a
/// completed search reports no legal moves, or `max_depth` is exhausted.
/// Returns the move found by the deepest search that finished.
///
/// This is the only place a `SearchError::Timeout` is swallowed.
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn iterative_deepening<S, E, T>(
    context: &mut SearchContext<'_, S, E, T>,
    state: &S,
    strategy: SearchStrategy,
    max_depth: Option<u32>,
) -> DeepeningResult
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
    T: TimeLeft + ?Sized,
{
    let mut best_move = Move::NONE;
    let mut depth_completed = 0;
    let mut depth = 1;

    let termination = loop {
        if max_depth.map_or(false, |max| depth > max) {
            break Termination::DepthLimit;
        }

        let nodes_before = context.stats().nodes();
        match strategy.search(context, state, depth) {
            Ok(found) if found.is_none() => break Termination::NoMoves,
            Ok(found) => {
                let nodes = context.stats().nodes();
                debug!(
                    "{} depth {} complete: best move {}, {} nodes ({} in total)",
                    strategy,
                    depth,
                    found,
                    nodes - nodes_before,
                    nodes
                );
                best_move = found;
                depth_completed = depth;
            }
            Err(SearchError::Timeout) => {
                debug!(
                    "{} timed out at depth {}, keeping {} from depth {}",
                    strategy, depth, best_move, depth_completed
                );
                break Termination::Timeout;
            }
        }

        depth = match depth.checked_add(1) {
            Some(next) => next,
            None => break Termination::DepthLimit,
        };
    };

    DeepeningResult {
        best_move,
        depth_completed,
        termination,
    }
}
