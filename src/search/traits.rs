//! Traits the search engine is generic over.

use std::fmt::Debug;

use crate::board::{Board, Player};
use crate::moves::Move;

/// A position in a two-player, zero-sum game. The search never mutates a
/// state; it only enumerates moves and forecasts successor states.
pub trait GameState: Sized {
    type Player: Copy + PartialEq + Debug;

    /// Returns the player whose turn it is.
    fn active_player(&self) -> Self::Player;

    fn opponent(&self, player: Self::Player) -> Self::Player;

    /// Returns the legal moves of `player`. The order is significant: the
    /// search breaks ties in favor of the earliest move, so it must be
    /// deterministic for a given state.
    fn legal_moves(&self, player: Self::Player) -> Vec<Move>;

    /// Returns the state reached when the active player makes `game_move`.
    fn forecast(&self, game_move: Move) -> Self;

    fn is_winner(&self, player: Self::Player) -> bool;

    fn is_loser(&self, player: Self::Player) -> bool;

    /// Score of a decided game from `player`'s point of view: `+inf` for a
    /// win, `-inf` for a loss, `None` while the game is still open.
    /// Evaluators check this before applying their heuristic.
    fn decided_score(&self, player: Self::Player) -> Option<f64> {
        if self.is_loser(player) {
            Some(f64::NEG_INFINITY)
        } else if self.is_winner(player) {
            Some(f64::INFINITY)
        } else {
            None
        }
    }
}

/// Scores a position from the point of view of `player`. Implementations
/// must return `f64::INFINITY` for a won position, `f64::NEG_INFINITY` for a
/// lost one, and a finite value otherwise.
pub trait Evaluator<S: GameState> {
    fn score(&self, state: &S, player: S::Player) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    S: GameState,
    F: Fn(&S, S::Player) -> f64,
{
    #[inline]
    fn score(&self, state: &S, player: S::Player) -> f64 {
        self(state, player)
    }
}

/// Reports how many milliseconds are left for the current move.
pub trait TimeLeft {
    fn time_left(&self) -> f64;
}

impl<F> TimeLeft for F
where
    F: Fn() -> f64,
{
    #[inline]
    fn time_left(&self) -> f64 {
        self()
    }
}

impl GameState for Board {
    type Player = Player;

    #[inline]
    fn active_player(&self) -> Player {
        Board::active_player(self)
    }

    #[inline]
    fn opponent(&self, player: Player) -> Player {
        player.opposite()
    }

    #[inline]
    fn legal_moves(&self, player: Player) -> Vec<Move> {
        Board::legal_moves(self, player)
    }

    #[inline]
    fn forecast(&self, game_move: Move) -> Board {
        self.forecast_move(game_move)
    }

    #[inline]
    fn is_winner(&self, player: Player) -> bool {
        Board::is_winner(self, player)
    }

    #[inline]
    fn is_loser(&self, player: Player) -> bool {
        Board::is_loser(self, player)
    }
}
