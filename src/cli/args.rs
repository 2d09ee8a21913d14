//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{best_move::BestMoveArgs, watch::WatchArgs};

#[derive(StructOpt)]
#[structopt(
    name = "isolation",
    about = "Adversarial search agents for the game of Isolation, where each player moves like a chess knight and every visited cell is blocked"
)]
pub enum Isolation {
    #[structopt(
        name = "watch",
        about = "Watch two agents play each other. Choose them with `--player-one` and `--player-two` (minimax, alpha-beta or random). Each move must be made within `--time-limit` milliseconds (default: 150)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "best-move",
        about = "Print the move an agent selects after replaying `--moves` (for example \"0,0 2,1\") onto an empty board."
    )]
    BestMove(BestMoveArgs),
}

impl crate::cli::commands::Command for Isolation {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Watch(cmd),
            BestMove(cmd),
        }
    }
}
