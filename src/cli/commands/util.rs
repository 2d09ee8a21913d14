//! Shared utilities for CLI commands.

use std::time::Duration;

use isolation::agent::AgentConfig;
use isolation::board::error::BoardError;
use isolation::board::Board;
use isolation::evaluate::Heuristic;
use isolation::moves::Move;
use isolation::search::SearchStrategy;
use structopt::StructOpt;

/// Flags shared by every command that runs a search agent.
#[derive(StructOpt)]
pub struct AgentArgs {
    #[structopt(long, default_value = "custom")]
    pub heuristic: Heuristic,
    #[structopt(
        short,
        long,
        default_value = "3",
        help = "Search depth of the fixed-depth minimax agent"
    )]
    pub depth: u32,
    #[structopt(
        long,
        default_value = "alpha-beta",
        help = "Search run by each iteration of iterative deepening"
    )]
    pub strategy: SearchStrategy,
    #[structopt(long = "max-depth", help = "Deepest iteration of iterative deepening")]
    pub max_depth: Option<u32>,
    #[structopt(
        long = "time-limit",
        default_value = "150",
        help = "Time allowed per move in milliseconds"
    )]
    pub time_limit_ms: u64,
    #[structopt(long, default_value = "7")]
    pub width: i32,
    #[structopt(long, default_value = "7")]
    pub height: i32,
}

impl AgentArgs {
    pub fn config(&self) -> AgentConfig<Heuristic> {
        AgentConfig {
            search_depth: self.depth,
            strategy: self.strategy,
            max_depth: self.max_depth,
            ..AgentConfig::with_evaluator(self.heuristic)
        }
    }

    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }

    pub fn empty_board(&self) -> Result<Board, BoardError> {
        Board::new(self.width, self.height)
    }
}

/// Parses a whitespace-separated move list such as `"0,0 2,1"`.
pub(crate) fn parse_moves(moves: &str) -> Result<Vec<Move>, String> {
    moves
        .split_whitespace()
        .map(|token| {
            token
                .parse::<Move>()
                .map_err(|err| format!("`{}`: {}", token, err))
        })
        .collect()
}

pub(crate) fn exit_with_error(message: impl std::fmt::Display) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use isolation::agent::DEFAULT_SEARCH_DEPTH;
    use isolation::board::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

    #[test]
    fn test_parse_moves() {
        assert_eq!(Ok(vec![]), parse_moves(""));
        assert_eq!(
            Ok(vec![Move::new(0, 0), Move::new(2, 1)]),
            parse_moves(" 0,0  2,1 ")
        );
        assert!(parse_moves("0,0 b2").is_err());
    }

    #[test]
    fn test_default_flags_match_library_defaults() {
        let args = AgentArgs::from_iter(vec!["isolation"]);
        assert_eq!(DEFAULT_SEARCH_DEPTH, args.depth);
        assert_eq!(DEFAULT_WIDTH, args.width);
        assert_eq!(DEFAULT_HEIGHT, args.height);
        assert_eq!(isolation::game::DEFAULT_TIME_LIMIT, args.time_limit());
        assert_eq!(Heuristic::Custom, args.config().evaluator);
        assert_eq!(None, args.config().max_depth);
    }
}
