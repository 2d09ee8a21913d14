//! Heuristic evaluation of Isolation positions.
//!
//! Every heuristic scores a position from the point of view of one player and
//! returns `f64::INFINITY` / `f64::NEG_INFINITY` exactly when that player has
//! won / lost. Otherwise the score is finite, and higher is better.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "instrumentation")]
use tracing::instrument;

use crate::board::{Board, Player};
use crate::moves::Move;
use crate::search::{Evaluator, GameState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// Mobility weighted by how much of the board is still open, penalizing
    /// moves that land on the edge of the board.
    Custom,
    /// Own mobility minus the squared distance to the opponent.
    Chase,
    /// Own mobility plus distance from the center, tuned for the end game.
    Endgame,
    /// Number of moves available to the player.
    OpenMoves,
    /// Own moves minus opponent moves.
    Improved,
}

pub const ALL_HEURISTICS: [Heuristic; 5] = [
    Heuristic::Custom,
    Heuristic::Chase,
    Heuristic::Endgame,
    Heuristic::OpenMoves,
    Heuristic::Improved,
];

impl Default for Heuristic {
    fn default() -> Self {
        Heuristic::Custom
    }
}

impl Evaluator<Board> for Heuristic {
    #[inline]
    #[cfg_attr(feature = "instrumentation", instrument(skip_all))]
    fn score(&self, board: &Board, player: Player) -> f64 {
        if let Some(decided) = board.decided_score(player) {
            return decided;
        }

        match self {
            Heuristic::Custom => custom_score(board, player),
            Heuristic::Chase => chase_score(board, player),
            Heuristic::Endgame => endgame_score(board, player),
            Heuristic::OpenMoves => board.legal_moves(player).len() as f64,
            Heuristic::Improved => {
                let own_moves = board.legal_moves(player).len() as f64;
                let opponent_moves = board.legal_moves(board.opponent(player)).len() as f64;
                own_moves - opponent_moves
            }
        }
    }
}

/// Counts of the moves available to each side, split by whether they land on
/// the border of the board.
struct Mobility {
    own_moves: f64,
    own_on_wall: f64,
    opponent_moves: f64,
    opponent_on_wall: f64,
}

impl Mobility {
    fn new(board: &Board, player: Player) -> Self {
        let own = board.legal_moves(player);
        let opponent = board.legal_moves(board.opponent(player));
        Self {
            own_moves: own.len() as f64,
            own_on_wall: count_on_wall(board, &own),
            opponent_moves: opponent.len() as f64,
            opponent_on_wall: count_on_wall(board, &opponent),
        }
    }
}

fn count_on_wall(board: &Board, moves: &[Move]) -> f64 {
    moves
        .iter()
        .filter(|cell| {
            cell.row == 0
                || cell.row == board.height() - 1
                || cell.col == 0
                || cell.col == board.width() - 1
        })
        .count() as f64
}

fn custom_score(board: &Board, player: Player) -> f64 {
    let mobility = Mobility::new(board, player);
    // a position with no open cells is decided before it gets here
    let open_spaces = board.blank_spaces().len().max(1) as f64;

    mobility.own_moves * (1.0 + 2.0 / open_spaces)
        - mobility.opponent_moves * (2.0 - 1.0 / open_spaces)
        - mobility.own_on_wall * (1.0 + 1.0 / open_spaces)
        + mobility.opponent_on_wall * (1.0 + 1.0 / open_spaces)
}

fn chase_score(board: &Board, player: Player) -> f64 {
    let own_moves = board.legal_moves(player).len() as f64;
    let distance = match (
        board.player_location(player),
        board.player_location(board.opponent(player)),
    ) {
        (Some(own), Some(opponent)) => squared_distance(
            (own.row as f64, own.col as f64),
            (opponent.row as f64, opponent.col as f64),
        ),
        _ => 0.0,
    };

    own_moves - distance
}

fn endgame_score(board: &Board, player: Player) -> f64 {
    let mobility = Mobility::new(board, player);
    let center = (board.height() as f64 / 2.0, board.width() as f64 / 2.0);
    let center_distance = board
        .player_location(player)
        .map_or(0.0, |own| {
            squared_distance((own.row as f64, own.col as f64), center)
        });

    mobility.own_moves + center_distance + mobility.opponent_on_wall
        - 2.0 * mobility.opponent_moves
        - mobility.own_on_wall
}

fn squared_distance((row_a, col_a): (f64, f64), (row_b, col_b): (f64, f64)) -> f64 {
    (row_a - row_b).powi(2) + (col_a - col_b).powi(2)
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heuristic::Custom => "custom",
            Heuristic::Chase => "chase",
            Heuristic::Endgame => "endgame",
            Heuristic::OpenMoves => "open-moves",
            Heuristic::Improved => "improved",
        };
        write!(f, "{}", name)
    }
}

// used for parsing cli args
impl FromStr for Heuristic {
    type Err = &'static str;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "custom" => Ok(Heuristic::Custom),
            "chase" => Ok(Heuristic::Chase),
            "endgame" => Ok(Heuristic::Endgame),
            "open-moves" => Ok(Heuristic::OpenMoves),
            "improved" => Ok(Heuristic::Improved),
            _ => Err(
                "invalid heuristic; options are: custom, chase, endgame, open-moves, improved",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isolation_position;

    fn won_and_lost() -> Board {
        // player one is to move and boxed in
        isolation_position! {
            "1.-"
            "---"
            "-2-"
        }
    }

    #[test]
    fn test_every_heuristic_scores_decided_games_as_infinite() {
        let board = won_and_lost();
        for heuristic in ALL_HEURISTICS.iter() {
            assert_eq!(
                f64::NEG_INFINITY,
                heuristic.score(&board, Player::One),
                "{} should score a loss as -inf",
                heuristic
            );
            assert_eq!(
                f64::INFINITY,
                heuristic.score(&board, Player::Two),
                "{} should score a win as +inf",
                heuristic
            );
        }
    }

    #[test]
    fn test_decided_score() {
        let board = won_and_lost();
        assert_eq!(Some(f64::NEG_INFINITY), board.decided_score(Player::One));
        assert_eq!(Some(f64::INFINITY), board.decided_score(Player::Two));
        assert_eq!(None, Board::default().decided_score(Player::One));
        assert_eq!(Player::Two, board.opponent(Player::One));
    }

    #[test]
    fn test_every_heuristic_is_finite_for_open_games() {
        let mut board = Board::default();
        board.apply_move(Move::new(3, 3)).unwrap();
        board.apply_move(Move::new(0, 0)).unwrap();
        for heuristic in ALL_HEURISTICS.iter() {
            assert!(heuristic.score(&board, Player::One).is_finite());
            assert!(heuristic.score(&board, Player::Two).is_finite());
        }
    }

    #[test]
    fn test_open_moves_and_improved() {
        let mut board = Board::default();
        board.apply_move(Move::new(3, 3)).unwrap();
        board.apply_move(Move::new(0, 0)).unwrap();

        // center has all eight knight moves, the corner only two
        assert_eq!(8.0, Heuristic::OpenMoves.score(&board, Player::One));
        assert_eq!(2.0, Heuristic::OpenMoves.score(&board, Player::Two));
        assert_eq!(6.0, Heuristic::Improved.score(&board, Player::One));
        assert_eq!(-6.0, Heuristic::Improved.score(&board, Player::Two));
    }

    #[test]
    fn test_custom_score_penalizes_wall_moves() {
        let mut board = Board::default();
        board.apply_move(Move::new(2, 2)).unwrap();
        board.apply_move(Move::new(6, 6)).unwrap();

        // 47 open cells; player one has 8 moves, 4 of them on the wall;
        // player two has 2 moves, none on the wall
        let open = 47.0;
        let expected =
            8.0 * (1.0 + 2.0 / open) - 2.0 * (2.0 - 1.0 / open) - 4.0 * (1.0 + 1.0 / open);
        let score = Heuristic::Custom.score(&board, Player::One);
        assert!((score - expected).abs() < 1e-9, "{} != {}", score, expected);
    }

    #[test]
    fn test_chase_score_prefers_staying_close() {
        let mut board = Board::default();
        board.apply_move(Move::new(3, 3)).unwrap();
        board.apply_move(Move::new(0, 0)).unwrap();

        // 8 moves minus 3^2 + 3^2
        assert_eq!(-10.0, Heuristic::Chase.score(&board, Player::One));
    }

    #[test]
    fn test_endgame_score() {
        let mut board = Board::default();
        board.apply_move(Move::new(2, 2)).unwrap();
        board.apply_move(Move::new(6, 6)).unwrap();

        // 8 own moves, 4.5 from the center at (3.5, 3.5), no opponent wall
        // moves, 2 opponent moves, 4 own wall moves
        let expected = 8.0 + 4.5 + 0.0 - 2.0 * 2.0 - 4.0;
        assert_eq!(expected, Heuristic::Endgame.score(&board, Player::One));
    }

    #[test]
    fn test_parse_heuristic() {
        for heuristic in ALL_HEURISTICS.iter() {
            assert_eq!(
                *heuristic,
                Heuristic::from_str(&heuristic.to_string()).unwrap()
            );
        }
        assert!(Heuristic::from_str("material").is_err());
    }
}
