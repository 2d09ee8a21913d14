use log::trace;
use thiserror::Error;

use super::traits::{Evaluator, GameState, TimeLeft};
use crate::moves::Move;

/// Milliseconds of remaining time below which the search gives up. It has to
/// absorb the cost of finishing one node after the last poll.
pub const DEFAULT_TIMER_THRESHOLD: f64 = 10.0;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("search timed out")]
    Timeout,
}

/// Counters collected while searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    nodes: usize,
    leaves: usize,
    cutoffs: usize,
    deadline_polls: usize,
}

impl SearchStats {
    /// Number of recursive node entries, the root included.
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Number of positions handed to the evaluator.
    pub fn leaves(&self) -> usize {
        self.leaves
    }

    /// Number of times alpha-beta stopped enumerating a node's moves early.
    pub fn cutoffs(&self) -> usize {
        self.cutoffs
    }

    pub fn deadline_polls(&self) -> usize {
        self.deadline_polls
    }
}

/// Everything a single search call needs besides the position: whose point
/// of view leaves are scored from, how to score them, and when to stop.
pub struct SearchContext<'a, S, E, T>
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
    T: TimeLeft + ?Sized,
{
    player: S::Player,
    evaluator: &'a E,
    time_left: &'a T,
    timer_threshold: f64,
    stats: SearchStats,
}

impl<'a, S, E, T> SearchContext<'a, S, E, T>
where
    S: GameState,
    E: Evaluator<S> + ?Sized,
    T: TimeLeft + ?Sized,
{
    pub fn new(player: S::Player, evaluator: &'a E, time_left: &'a T) -> Self {
        Self::with_threshold(player, evaluator, time_left, DEFAULT_TIMER_THRESHOLD)
    }

    pub fn with_threshold(
        player: S::Player,
        evaluator: &'a E,
        time_left: &'a T,
        timer_threshold: f64,
    ) -> Self {
        Self {
            player,
            evaluator,
            time_left,
            timer_threshold,
            stats: SearchStats::default(),
        }
    }

    /// The player the search maximizes for.
    pub fn player(&self) -> S::Player {
        self.player
    }

    pub fn timer_threshold(&self) -> f64 {
        self.timer_threshold
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Fails with `SearchError::Timeout` once the remaining time drops below
    /// the threshold.
    #[inline]
    pub fn check_deadline(&mut self) -> Result<(), SearchError> {
        self.stats.deadline_polls += 1;
        let remaining = self.time_left.time_left();
        if remaining < self.timer_threshold {
            trace!(
                "deadline reached: {:.3}ms left, threshold {:.3}ms",
                remaining,
                self.timer_threshold
            );
            return Err(SearchError::Timeout);
        }
        Ok(())
    }

    /// Returns true if the active player has no legal moves. Polls the
    /// deadline first, so every node that calls this is a cancellation point.
    #[inline]
    pub fn is_terminal(&mut self, state: &S) -> Result<bool, SearchError> {
        self.check_deadline()?;
        Ok(state.legal_moves(state.active_player()).is_empty())
    }

    #[inline]
    pub(crate) fn enter_node(&mut self) {
        self.stats.nodes += 1;
    }

    #[inline]
    pub(crate) fn record_cutoff(&mut self) {
        self.stats.cutoffs += 1;
    }

    /// Scores a leaf from the searching player's point of view.
    #[inline]
    pub(crate) fn evaluate(&mut self, state: &S) -> f64 {
        self.stats.leaves += 1;
        self.evaluator.score(state, self.player)
    }
}

/// Updates the best score and move if `score` is better for the side to move.
/// The first candidate always becomes the incumbent; after that only a strict
/// improvement replaces it, so ties go to the earliest enumerated move.
/// Returns true if the incumbent was replaced.
#[inline]
pub(crate) fn update_best(
    score: f64,
    candidate_move: Move,
    maximizing_player: bool,
    best_score: &mut f64,
    best_move: &mut Option<Move>,
) -> bool {
    let is_better = match best_move {
        None => true,
        Some(_) if maximizing_player => score > *best_score,
        Some(_) => score < *best_score,
    };

    if is_better {
        *best_score = score;
        *best_move = Some(candidate_move);
    }
    is_better
}
