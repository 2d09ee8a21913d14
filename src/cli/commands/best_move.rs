//! Best move command - ask an agent for a move in a given position.

use isolation::agent::AgentKind;
use isolation::search::MoveTimer;
use structopt::StructOpt;

use super::util::{exit_with_error, parse_moves, AgentArgs};
use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(long, default_value = "alpha-beta")]
    pub agent: AgentKind,
    #[structopt(flatten)]
    pub agent_args: AgentArgs,
    #[structopt(
        long,
        default_value = "",
        help = "Moves to replay before searching, e.g. \"0,0 2,1\""
    )]
    pub moves: String,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let mut board = match self.agent_args.empty_board() {
            Ok(board) => board,
            Err(err) => exit_with_error(err),
        };
        let moves = match parse_moves(&self.moves) {
            Ok(moves) => moves,
            Err(err) => exit_with_error(format!("failed to parse moves: {}", err)),
        };
        for game_move in moves {
            if let Err(err) = board.apply_move(game_move) {
                exit_with_error(err);
            }
        }

        if board.active_legal_moves().is_empty() {
            eprintln!("There are no legal moves in the given position.");
            return;
        }

        let mut agent = self.agent.build(self.agent_args.config());
        let timer = MoveTimer::start(self.agent_args.time_limit());
        let best_move = agent.select_move(&board, &timer);
        if best_move.is_none() {
            eprintln!(
                "{} found no move within {:?}",
                agent.name(),
                self.agent_args.time_limit()
            );
            return;
        }
        println!("{}", best_move);
    }
}
