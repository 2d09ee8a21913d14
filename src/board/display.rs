use super::{Board, Player};
use crate::moves::Move;
use std::fmt;

impl Board {
    /// Renders the board as text: `.` for blank cells, `-` for blocked
    /// cells, and `1`/`2` for the players, with row and column indices.
    pub fn to_ascii(&self) -> String {
        let mut out = String::from("   ");
        for col in 0..self.width {
            out.push_str(&format!("{:>2}", col));
        }
        out.push('\n');

        for row in 0..self.height {
            out.push_str(&format!("{:>2} ", row));
            for col in 0..self.width {
                let cell = Move::new(row, col);
                let symbol = Player::ALL
                    .iter()
                    .find(|&&player| self.player_location(player) == Some(cell))
                    .map(Player::symbol)
                    .unwrap_or(if self.is_blank(cell) { '.' } else { '-' });
                out.push(' ');
                out.push(symbol);
            }
            out.push('\n');
        }

        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_ascii())
    }
}

/// Builds a board from row literals, e.g.
///
/// ```
/// use isolation::isolation_position;
///
/// let board = isolation_position! {
///     "1.."
///     ".-."
///     "..2"
/// };
/// assert_eq!(board.move_count(), 3);
/// ```
#[macro_export]
macro_rules! isolation_position {
    ($($row:literal)+) => {{
        let rows: &[&str] = &[$($row),+];
        $crate::board::Board::from_rows(rows).expect("invalid isolation position literal")
    }};
}
