use thiserror::Error;

use crate::moves::Move;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Cannot apply move {game_move}, it is not a legal move for the active player")]
    IllegalMoveError { game_move: Move },
    #[error("Cannot place a player on {game_move}, the cell is outside the board")]
    OutOfBoundsError { game_move: Move },
    #[error("Cannot place a player on {game_move}, the cell is already blocked")]
    CellBlockedError { game_move: Move },
    #[error("Invalid board dimensions {width}x{height}, both must be between 1 and {max}", max = super::MAX_DIMENSION)]
    InvalidDimensionsError { width: i32, height: i32 },
    #[error("Invalid position: {msg}")]
    InvalidPositionError { msg: String },
}
