//! Depth-limited minimax without pruning.

#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::context::{update_best, SearchContext, SearchError};
use super::traits::{Evaluator, GameState, TimeLeft};
use crate::moves::Move;

/// Searches `depth` plies below `state` and returns the best move for the
/// context's player, who is expected to be the one to move. Returns
/// `Move::NONE` if `state` has no legal moves (or `depth` is 0).
///
/// Every node polls the deadline; a `SearchError::Timeout` unwinds the whole
/// search and is left for the caller to handle.
#[must_use = "search returns the best move found"]
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn minimax<S, E, T>(
    context: &mut SearchContext<'_, S, E, T>,
    state: &S,
    depth: u32,
) -> Result<Move, SearchError>
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
    T: TimeLeft + ?Sized,
{
    let (_, best_move) = minimax_value(context, state, depth, true)?;
    Ok(best_move)
}

fn minimax_value<S, E, T>(
    context: &mut SearchContext<'_, S, E, T>,
    state: &S,
    depth: u32,
    maximizing_player: bool,
) -> Result<(f64, Move), SearchError>
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
    T: TimeLeft + ?Sized,
{
    context.enter_node();

    if context.is_terminal(state)? || depth == 0 {
        return Ok((context.evaluate(state), Move::NONE));
    }

    let mut best_score = if maximizing_player {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    let mut best_move = None;

    for game_move in state.legal_moves(state.active_player()) {
        let child = state.forecast(game_move);
        let (score, _) = minimax_value(context, &child, depth - 1, !maximizing_player)?;
        update_best(
            score,
            game_move,
            maximizing_player,
            &mut best_score,
            &mut best_move,
        );
    }

    Ok((best_score, best_move.unwrap_or(Move::NONE)))
}
