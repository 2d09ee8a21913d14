//! Depth-limited minimax with alpha-beta pruning.
//!
//! The search alternates between a maximizing branch (the searching player)
//! and a minimizing branch (its opponent). Each branch keeps the window
//! `[alpha, beta]` of scores that can still change the decision at an
//! ancestor; as soon as a branch's running best leaves that window, the
//! remaining moves are skipped. Pruning only changes how many nodes are
//! visited: the move chosen at the root is the one plain minimax would pick at
//! the same depth, ties included.

#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::context::{update_best, SearchContext, SearchError};
use super::traits::{Evaluator, GameState, TimeLeft};
use crate::moves::Move;

/// Alpha-beta search with the full `(-inf, +inf)` window.
#[must_use = "search returns the best move found"]
pub fn alpha_beta<S, E, T>(
    context: &mut SearchContext<'_, S, E, T>,
    state: &S,
    depth: u32,
) -> Result<Move, SearchError>
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
    T: TimeLeft + ?Sized,
{
    alpha_beta_window(context, state, depth, f64::NEG_INFINITY, f64::INFINITY)
}

/// Searches `depth` plies below `state` within `[alpha, beta]` and returns the
/// best move for the context's player. The root is always a maximizing node.
/// Returns `Move::NONE` if `state` has no legal moves (or `depth` is 0).
#[must_use = "search returns the best move found"]
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn alpha_beta_window<S, E, T>(
    context: &mut SearchContext<'_, S, E, T>,
    state: &S,
    depth: u32,
    alpha: f64,
    beta: f64,
) -> Result<Move, SearchError>
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
    T: TimeLeft + ?Sized,
{
    let (_, best_move) = max_value(context, state, depth, alpha, beta)?;
    Ok(best_move)
}

fn max_value<S, E, T>(
    context: &mut SearchContext<'_, S, E, T>,
    state: &S,
    depth: u32,
    mut alpha: f64,
    beta: f64,
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

    let mut best_score = f64::NEG_INFINITY;
    let mut best_move = None;

    for game_move in state.legal_moves(state.active_player()) {
        let child = state.forecast(game_move);
        let (score, _) = min_value(context, &child, depth - 1, alpha, beta)?;
        update_best(score, game_move, true, &mut best_score, &mut best_move);

        if best_score >= beta {
            context.record_cutoff();
            break;
        }
        alpha = alpha.max(best_score);
    }

    Ok((best_score, best_move.unwrap_or(Move::NONE)))
}

fn min_value<S, E, T>(
    context: &mut SearchContext<'_, S, E, T>,
    state: &S,
    depth: u32,
    alpha: f64,
    mut beta: f64,
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

    let mut best_score = f64::INFINITY;
    let mut best_move = None;

    for game_move in state.legal_moves(state.active_player()) {
        let child = state.forecast(game_move);
        let (score, _) = max_value(context, &child, depth - 1, alpha, beta)?;
        update_best(score, game_move, false, &mut best_score, &mut best_move);

        if best_score <= alpha {
            context.record_cutoff();
            break;
        }
        beta = beta.min(best_score);
    }

    Ok((best_score, best_move.unwrap_or(Move::NONE)))
}
