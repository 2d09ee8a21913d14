use std::fmt;
use std::str::FromStr;

/// A cell on the board, addressed as `(row, col)`. Every move in Isolation is
/// the cell the active player jumps to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    /// Sentinel meaning "no move": the position has no legal continuation, or
    /// the search produced nothing before it ran out of time.
    pub const NONE: Move = Move { row: -1, col: -1 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Returns the cell reached by adding the given offset to this one.
    pub fn offset(&self, (d_row, d_col): (i32, i32)) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }
}

impl Default for Move {
    fn default() -> Self {
        Self::NONE
    }
}

impl From<(i32, i32)> for Move {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Move> for (i32, i32) {
    fn from(game_move: Move) -> Self {
        (game_move.row, game_move.col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Move {
    type Err = ParseError;
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().trim_start_matches('(').trim_end_matches(')');
        let mut parts = trimmed.split(',').map(str::trim);
        let (row, col) = match (parts.next(), parts.next(), parts.next()) {
            (Some(row), Some(col), None) => (row, col),
            _ => return Err("invalid move; expected `row,col`"),
        };
        let row = row.parse().map_err(|_| "invalid move row")?;
        let col = col.parse().map_err(|_| "invalid move column")?;
        Ok(Move::new(row, col))
    }
}
