use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::RulesError;

/// The four seats at a Quoridor board.
///
/// Each seat has a fixed goal edge: player one races to the top row, player
/// two to the bottom row, player three to the last column and player four to
/// the first column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    Player1,
    Player2,
    Player3,
    Player4,
}

pub const PLAYERS: [Player; 4] = [
    Player::Player1,
    Player::Player2,
    Player::Player3,
    Player::Player4,
];

impl Player {
    /// One-based seat number
    pub fn number(self) -> u8 {
        match self {
            Player::Player1 => 1,
            Player::Player2 => 2,
            Player::Player3 => 3,
            Player::Player4 => 4,
        }
    }

    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Player::Player1),
            2 => Some(Player::Player2),
            3 => Some(Player::Player3),
            4 => Some(Player::Player4),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PLAYER{}", self.number())
    }
}

/// Orientation of a groove or wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn to_char(self) -> char {
        match self {
            Orientation::Vertical => 'v',
            Orientation::Horizontal => 'h',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'v' | 'V' => Some(Orientation::Vertical),
            'h' | 'H' => Some(Orientation::Horizontal),
            _ => None,
        }
    }
}

/// The four ordinal directions, as seen with player two at the top of the
/// board and player one at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in generation order
    pub fn all() -> [Self; 4] {
        [Self::Up, Self::Down, Self::Left, Self::Right]
    }

    /// (column delta, row delta) of a unit step. Rows grow downward.
    pub fn delta(self) -> (i8, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// The two directions perpendicular to this one
    pub fn orthogonals(self) -> [Self; 2] {
        match self {
            Self::Up | Self::Down => [Self::Left, Self::Right],
            Self::Left | Self::Right => [Self::Up, Self::Down],
        }
    }

    pub fn to_str(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }
}

impl FromStr for Direction {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "U" | "UP" => Ok(Self::Up),
            "D" | "DOWN" => Ok(Self::Down),
            "L" | "LEFT" => Ok(Self::Left),
            "R" | "RIGHT" => Ok(Self::Right),
            "" => Err(RulesError::invalid_argument("direction must not be empty")),
            other => Err(RulesError::invalid_argument(format!(
                "unknown direction '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}
