use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    One = 0,
    Two = 1,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn opposite(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Single character used when rendering the board.
    pub fn symbol(&self) -> char {
        match self {
            Player::One => '1',
            Player::Two => '2',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let player_str = match self {
            Player::One => "player one",
            Player::Two => "player two",
        };
        write!(f, "{}", player_str)
    }
}

type ParseError = &'static str;
impl FromStr for Player {
    type Err = ParseError;
    fn from_str(player: &str) -> Result<Self, Self::Err> {
        match player {
            "1" | "one" => Ok(Player::One),
            "2" | "two" => Ok(Player::Two),
            _ => Err("invalid player; options are: one, two"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Player::Two, Player::One.opposite());
        assert_eq!(Player::One, Player::Two.opposite());
    }

    #[test]
    fn test_parse_player() {
        assert_eq!(Player::One, Player::from_str("one").unwrap());
        assert_eq!(Player::Two, Player::from_str("2").unwrap());
        assert!(Player::from_str("three").is_err());
    }

    #[test]
    fn test_index() {
        assert_eq!(0, Player::One.index());
        assert_eq!(1, Player::Two.index());
    }
}
