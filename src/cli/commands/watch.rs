//! Watch command - watch two agents play each other.

use std::time::Duration;

use isolation::agent::AgentKind;
use isolation::board::Player;
use isolation::game::{Game, Outcome};
use structopt::StructOpt;

use super::util::{exit_with_error, AgentArgs};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(long = "player-one", default_value = "alpha-beta")]
    pub player_one: AgentKind,
    #[structopt(long = "player-two", default_value = "random")]
    pub player_two: AgentKind,
    #[structopt(flatten)]
    pub agent: AgentArgs,
    #[structopt(
        long = "delay",
        default_value = "0",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let board = match self.agent.empty_board() {
            Ok(board) => board,
            Err(err) => exit_with_error(err),
        };

        let mut player_one = self.player_one.build(self.agent.config());
        let mut player_two = self.player_two.build(self.agent.config());
        println!("player one: {}", player_one.name());
        println!("player two: {}", player_two.name());

        let mut game = Game::new(board, self.agent.time_limit());
        println!("{}", game.board());

        let outcome = loop {
            let mover = game.board().active_player();
            let agent = match mover {
                Player::One => player_one.as_mut(),
                Player::Two => player_two.as_mut(),
            };
            if let Some(outcome) = game.play_turn(agent) {
                break outcome;
            }

            if let Some(last_move) = game.history().last() {
                println!("{} moves to {}", mover, last_move);
            }
            println!("{}", game.board());

            if self.delay_ms > 0 {
                std::thread::sleep(Duration::from_millis(self.delay_ms));
            }
        };

        let result = game.finish(outcome);
        println!(
            "{} wins after {} moves: {} {}",
            result.winner,
            result.history.len(),
            result.loser,
            match result.outcome {
                Outcome::NoLegalMoves => "has no legal moves",
                Outcome::Timeout => "ran out of time",
                Outcome::IllegalMove => "made an illegal move",
            }
        );
    }
}
