use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{Orientation, Player};
use crate::errors::{ParseError, RulesError, RulesResult};
use crate::geometry::{Locatable, Square, Vertex, Wall};

/// A single move in a game of Quoridor.
///
/// Every move belongs to the player making it. For a pawn move that is also
/// the player whose pawn moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Move {
    Pawn { player: Player, destination: Square },
    Wall { player: Player, wall: Wall },
}

impl Move {
    pub fn pawn_move(player: Player, destination: Square) -> Self {
        Move::Pawn {
            player,
            destination,
        }
    }

    pub fn wall_move(player: Player, wall: Wall) -> Self {
        Move::Wall { player, wall }
    }

    pub fn player(&self) -> Player {
        match self {
            Move::Pawn { player, .. } | Move::Wall { player, .. } => *player,
        }
    }

    pub fn is_pawn_move(&self) -> bool {
        matches!(self, Move::Pawn { .. })
    }

    /// The destination square of a pawn move.
    pub fn destination(&self) -> RulesResult<Square> {
        match self {
            Move::Pawn { destination, .. } => Ok(*destination),
            Move::Wall { .. } => Err(RulesError::invalid_argument(format!(
                "{} is not a pawn move",
                self
            ))),
        }
    }

    /// The wall placed by a wall move.
    pub fn wall(&self) -> RulesResult<Wall> {
        match self {
            Move::Wall { wall, .. } => Ok(*wall),
            Move::Pawn { .. } => Err(RulesError::invalid_argument(format!(
                "{} is not a wall move",
                self
            ))),
        }
    }

    /// Parses a move in Glendenning-style notation.
    ///
    /// `e8` moves `player`'s pawn to e8; `c3h` / `c3v` place a horizontal or
    /// vertical wall of `wall_length` grooves starting at c3.
    pub fn parse(player: Player, text: &str, wall_length: usize) -> Result<Self, ParseError> {
        let text = text.trim();
        let mut chars = text.chars();
        let column = chars.next().ok_or(ParseError::Empty)?;
        if !column.is_ascii_lowercase() {
            return Err(ParseError::BadColumn(column));
        }

        let rest = chars.as_str();
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let (digits, suffix) = rest.split_at(digits_end);
        let row: i32 = digits
            .parse()
            .map_err(|_| ParseError::BadRow(text.to_string()))?;
        let vertex = Vertex::at(column, row);

        let mut suffix = suffix.chars();
        match (suffix.next(), suffix.next()) {
            (None, _) => Ok(Move::pawn_move(player, Square::from(vertex))),
            (Some(c), None) => {
                let orientation = Orientation::from_char(c).ok_or(ParseError::BadOrientation(c))?;
                let wall = Wall::new(vertex, orientation, wall_length)
                    .map_err(|e| ParseError::BadMove(e.to_string()))?;
                Ok(Move::wall_move(player, wall))
            }
            (Some(_), Some(_)) => Err(ParseError::BadMove(text.to_string())),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Pawn { destination, .. } => write!(f, "{}", destination),
            Move::Wall { wall, .. } => write!(f, "{}", wall),
        }
    }
}

impl Locatable for Move {
    fn vertex(&self) -> Vertex {
        match self {
            Move::Pawn { destination, .. } => destination.vertex(),
            Move::Wall { wall, .. } => wall.first_vertex(),
        }
    }
}
