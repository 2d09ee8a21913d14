pub mod error;
pub mod player;

mod display;


use error::BoardError;
pub use player::Player;

use crate::moves::Move;

pub const DEFAULT_WIDTH: i32 = 7;
pub const DEFAULT_HEIGHT: i32 = 7;
/// Largest accepted width or height.
pub const MAX_DIMENSION: i32 = 1024;

/// Knight offsets in the order legal moves are enumerated. The search breaks
/// ties by enumeration order, so this order is part of the board's contract.
const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Represents the state of an Isolation board. Cells are stored row-major;
/// a cell becomes blocked as soon as a player moves onto it and stays blocked
/// for the rest of the game, including after the player leaves it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    width: i32,
    height: i32,
    blocked: Vec<bool>,
    locations: [Option<Move>; 2],
    active_player: Player,
    move_count: usize,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Board {
    pub fn new(width: i32, height: i32) -> Result<Self, BoardError> {
        let in_range = |side: i32| (1..=MAX_DIMENSION).contains(&side);
        if !in_range(width) || !in_range(height) {
            return Err(BoardError::InvalidDimensionsError { width, height });
        }
        Ok(Self::empty(width, height))
    }

    /// Callers guarantee both sides are within `1..=MAX_DIMENSION`.
    fn empty(width: i32, height: i32) -> Self {
        let cells = (width as usize) * (height as usize);
        Self {
            width,
            height,
            blocked: vec![false; cells],
            locations: [None, None],
            active_player: Player::One,
            move_count: 0,
        }
    }

    /// Builds a board from one string per row: `.` is a blank cell, `-` or
    /// `X` a blocked cell, and `1`/`2` the location of a player. Player one is
    /// set as the active player; use `set_active_player` to change it.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |row| row.chars().count()) as i32;
        let mut board = Board::new(width, height)?;

        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() as i32 != width {
                return Err(BoardError::InvalidPositionError {
                    msg: format!("row {} has a different width than row 0", row),
                });
            }
            for (col, c) in line.chars().enumerate() {
                let cell = Move::new(row as i32, col as i32);
                match c {
                    '.' => {}
                    '-' | 'X' => board.block(cell),
                    '1' | '2' => {
                        let player = if c == '1' { Player::One } else { Player::Two };
                        if board.player_location(player).is_some() {
                            return Err(BoardError::InvalidPositionError {
                                msg: format!("{} appears more than once", player),
                            });
                        }
                        board.block(cell);
                        board.locations[player.index()] = Some(cell);
                    }
                    _ => {
                        return Err(BoardError::InvalidPositionError {
                            msg: format!("unexpected character `{}`", c),
                        })
                    }
                }
            }
        }

        Ok(board)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn inactive_player(&self) -> Player {
        self.active_player.opposite()
    }

    pub fn set_active_player(&mut self, player: Player) {
        self.active_player = player;
    }

    pub fn toggle_turn(&mut self) -> Player {
        self.active_player = self.active_player.opposite();
        self.active_player
    }

    /// Number of cells that have been removed from play.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn player_location(&self, player: Player) -> Option<Move> {
        self.locations[player.index()]
    }

    pub fn in_bounds(&self, cell: Move) -> bool {
        (0..self.height).contains(&cell.row) && (0..self.width).contains(&cell.col)
    }

    pub fn is_blank(&self, cell: Move) -> bool {
        self.in_bounds(cell) && !self.blocked[self.index(cell)]
    }

    /// Returns every blank cell in row-major order.
    pub fn blank_spaces(&self) -> Vec<Move> {
        (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| Move::new(row, col)))
            .filter(|&cell| !self.blocked[self.index(cell)])
            .collect()
    }

    /// Returns the moves available to `player`. An unplaced player may move to
    /// any blank cell; afterwards it jumps like a knight onto blank cells.
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        match self.player_location(player) {
            None => self.blank_spaces(),
            Some(location) => KNIGHT_OFFSETS
                .iter()
                .map(|&offset| location.offset(offset))
                .filter(|&cell| self.is_blank(cell))
                .collect(),
        }
    }

    pub fn active_legal_moves(&self) -> Vec<Move> {
        self.legal_moves(self.active_player)
    }

    pub fn move_is_legal(&self, game_move: Move) -> bool {
        self.active_legal_moves().contains(&game_move)
    }

    /// Moves the active player to `game_move`, blocking the cell, and passes
    /// the turn to the opponent.
    pub fn apply_move(&mut self, game_move: Move) -> Result<(), BoardError> {
        if !self.in_bounds(game_move) {
            return Err(BoardError::OutOfBoundsError { game_move });
        }
        if !self.is_blank(game_move) {
            return Err(BoardError::CellBlockedError { game_move });
        }
        if !self.move_is_legal(game_move) {
            return Err(BoardError::IllegalMoveError { game_move });
        }

        self.place_active(game_move);
        Ok(())
    }

    /// Returns a copy of the board with `game_move` applied for the active
    /// player. The board itself is left untouched. The move is expected to be
    /// one returned by `legal_moves`.
    pub fn forecast_move(&self, game_move: Move) -> Board {
        let mut next = self.clone();
        next.place_active(game_move);
        next
    }

    /// The active player loses when it has no legal moves left.
    pub fn is_loser(&self, player: Player) -> bool {
        player == self.active_player && self.active_legal_moves().is_empty()
    }

    /// The inactive player wins when its opponent has no legal moves left.
    pub fn is_winner(&self, player: Player) -> bool {
        player == self.inactive_player() && self.active_legal_moves().is_empty()
    }

    /// Returns +inf if `player` has won, -inf if it has lost, 0 otherwise.
    pub fn utility(&self, player: Player) -> f64 {
        if self.is_winner(player) {
            f64::INFINITY
        } else if self.is_loser(player) {
            f64::NEG_INFINITY
        } else {
            0.0
        }
    }

    fn place_active(&mut self, cell: Move) {
        self.block(cell);
        self.locations[self.active_player.index()] = Some(cell);
        self.toggle_turn();
    }

    fn block(&mut self, cell: Move) {
        let index = self.index(cell);
        if !self.blocked[index] {
            self.blocked[index] = true;
            self.move_count += 1;
        }
    }

    fn index(&self, cell: Move) -> usize {
        (cell.row * self.width + cell.col) as usize
    }
}
