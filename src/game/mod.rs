//! Plays complete games between two agents under a per-move time limit.

use std::fmt;
use std::time::Duration;

use log::{debug, info, warn};

use crate::agent::Agent;
use crate::board::{Board, Player};
use crate::moves::Move;
use crate::search::MoveTimer;

pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_millis(150);

/// How a game ended. In every case the player to move loses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The player to move had no legal moves.
    NoLegalMoves,
    /// The player to move answered after its time ran out.
    Timeout,
    /// The player to move answered with a move that is not legal, including
    /// `Move::NONE` while legal moves remained.
    IllegalMove,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Outcome::NoLegalMoves => "no legal moves",
            Outcome::Timeout => "timeout",
            Outcome::IllegalMove => "illegal move",
        };
        write!(f, "{}", reason)
    }
}

#[derive(Clone, Debug)]
pub struct GameResult {
    pub winner: Player,
    pub loser: Player,
    pub outcome: Outcome,
    pub history: Vec<Move>,
    pub final_board: Board,
}

/// A game in progress.
pub struct Game {
    board: Board,
    history: Vec<Move>,
    time_limit: Duration,
}

impl Game {
    pub fn new(board: Board, time_limit: Duration) -> Self {
        Self {
            board,
            history: Vec::new(),
            time_limit,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Asks `agent` for the active player's move and applies it. Returns the
    /// outcome if the game is over, in which case the board is unchanged.
    pub fn play_turn(&mut self, agent: &mut dyn Agent<Board>) -> Option<Outcome> {
        let active = self.board.active_player();
        if self.board.active_legal_moves().is_empty() {
            return Some(Outcome::NoLegalMoves);
        }

        let timer = MoveTimer::start(self.time_limit);
        let game_move = agent.select_move(&self.board, &timer);
        if timer.is_expired() {
            warn!(
                "{} ({}) answered {:?} after the {:?} limit",
                active,
                agent.name(),
                timer.elapsed(),
                self.time_limit
            );
            return Some(Outcome::Timeout);
        }

        if let Err(err) = self.board.apply_move(game_move) {
            warn!("{} ({}) forfeits: {}", active, agent.name(), err);
            return Some(Outcome::IllegalMove);
        }

        debug!(
            "{} ({}) played {} in {:?}",
            active,
            agent.name(),
            game_move,
            timer.elapsed()
        );
        self.history.push(game_move);
        None
    }

    /// Alternates turns until the game ends. `player_one` moves first unless
    /// the board says otherwise.
    pub fn play(
        mut self,
        player_one: &mut dyn Agent<Board>,
        player_two: &mut dyn Agent<Board>,
    ) -> GameResult {
        let outcome = loop {
            let agent: &mut dyn Agent<Board> = match self.board.active_player() {
                Player::One => &mut *player_one,
                Player::Two => &mut *player_two,
            };
            if let Some(outcome) = self.play_turn(agent) {
                break outcome;
            }
        };

        self.finish(outcome)
    }

    /// Wraps up a game that ended with `outcome` on the current board.
    pub fn finish(self, outcome: Outcome) -> GameResult {
        let loser = self.board.active_player();
        let winner = loser.opposite();
        info!(
            "{} wins after {} moves ({} for {})",
            winner,
            self.history.len(),
            outcome,
            loser
        );

        GameResult {
            winner,
            loser,
            outcome,
            history: self.history,
            final_board: self.board,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{AgentConfig, AlphaBetaAgent, RandomAgent};
    use crate::evaluate::Heuristic;
    use crate::search::TimeLeft;

    /// Always answers the same move.
    struct FixedAgent(Move);

    impl Agent<Board> for FixedAgent {
        fn name(&self) -> String {
            "fixed".to_string()
        }

        fn select_move(&mut self, _board: &Board, _time_left: &dyn TimeLeft) -> Move {
            self.0
        }
    }

    /// Sleeps past any reasonable limit before answering.
    struct SlowAgent;

    impl Agent<Board> for SlowAgent {
        fn name(&self) -> String {
            "slow".to_string()
        }

        fn select_move(&mut self, board: &Board, _time_left: &dyn TimeLeft) -> Move {
            std::thread::sleep(Duration::from_millis(20));
            board.active_legal_moves()[0]
        }
    }

    #[test]
    fn test_random_game_runs_to_completion() {
        let mut player_one = RandomAgent::seeded(1);
        let mut player_two = RandomAgent::seeded(2);
        let game = Game::new(Board::new(5, 5).unwrap(), DEFAULT_TIME_LIMIT);

        let result = game.play(&mut player_one, &mut player_two);

        assert_eq!(Outcome::NoLegalMoves, result.outcome);
        assert_eq!(result.winner, result.loser.opposite());
        assert!(result.final_board.is_loser(result.loser));
        assert!(result.final_board.is_winner(result.winner));

        let mut replay = Board::new(5, 5).unwrap();
        for &game_move in result.history.iter() {
            replay.apply_move(game_move).unwrap();
        }
        assert_eq!(result.final_board, replay);
    }

    #[test]
    fn test_search_agent_beats_random_on_small_board() {
        let mut searcher = AlphaBetaAgent::new(AgentConfig {
            max_depth: Some(6),
            ..AgentConfig::with_evaluator(Heuristic::Improved)
        });
        let mut random = RandomAgent::seeded(3);
        let game = Game::new(Board::new(4, 4).unwrap(), Duration::from_secs(10));

        let result = game.play(&mut searcher, &mut random);
        assert_eq!(Outcome::NoLegalMoves, result.outcome);
        assert!(result.history.len() >= 2);
    }

    #[test]
    fn test_illegal_move_forfeits() {
        let mut cheater = FixedAgent(Move::new(10, 10));
        let mut random = RandomAgent::seeded(4);
        let game = Game::new(Board::new(3, 3).unwrap(), DEFAULT_TIME_LIMIT);

        let result = game.play(&mut cheater, &mut random);
        assert_eq!(Outcome::IllegalMove, result.outcome);
        assert_eq!(Player::One, result.loser);
        assert!(result.history.is_empty());
    }

    #[test]
    fn test_no_move_while_moves_remain_forfeits() {
        let mut random = RandomAgent::seeded(5);
        let mut passer = FixedAgent(Move::NONE);
        let game = Game::new(Board::new(3, 3).unwrap(), DEFAULT_TIME_LIMIT);

        let result = game.play(&mut random, &mut passer);
        assert_eq!(Outcome::IllegalMove, result.outcome);
        assert_eq!(Player::Two, result.loser);
        assert_eq!(1, result.history.len());
    }

    #[test]
    fn test_slow_agent_loses_on_time() {
        let mut slow = SlowAgent;
        let mut random = RandomAgent::seeded(6);
        let game = Game::new(Board::new(3, 3).unwrap(), Duration::from_millis(1));

        let result = game.play(&mut slow, &mut random);
        assert_eq!(Outcome::Timeout, result.outcome);
        assert_eq!(Player::One, result.loser);
    }
}
