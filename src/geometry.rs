// Board geometry - vertices, squares, grooves and walls
//
// Every type here is a plain value. Coordinates outside the board are
// constructible; bounds are the rules governor's business.
//
// Columns are lower case letters starting at 'a' on the left; rows start at 1
// on player two's side and grow toward player one's side:
//
//                  Player 2
//        a   b   c   d   e   f   g   h   i
//      -------------------------------------
//    1 |   |   |   |   |   |   |   |   |   | 1
//      -------------------------------------
//    2 |   |   |   |   |   |   |   |   |   | 2
//      -------------------------------------
//                     ...
//      -------------------------------------
//    9 |   |   |   |   |   |   |   |   |   | 9
//      -------------------------------------
//        a   b   c   d   e   f   g   h   i
//                  Player 1

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::{Direction, Orientation};
use crate::errors::{RulesError, RulesResult};

/// Anything that sits at a (column, row) coordinate on the board.
pub trait Locatable {
    fn vertex(&self) -> Vertex;

    fn column(&self) -> char {
        self.vertex().column()
    }

    fn row(&self) -> i32 {
        self.vertex().row()
    }
}

/// The intersection of a column and a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vertex {
    column: u8,
    row: i32,
}

impl Vertex {
    /// `column` is expected to be an ASCII letter.
    pub fn at(column: char, row: i32) -> Self {
        Vertex {
            column: column as u8,
            row,
        }
    }

    pub fn column(&self) -> char {
        char::from(self.column)
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    /// Zero-based column index, counting from 'a'
    pub fn column_index(&self) -> i32 {
        i32::from(self.column) - i32::from(b'a')
    }

    fn step(self, direction: Direction) -> Self {
        let (dc, dr) = direction.delta();
        Vertex {
            column: self.column.wrapping_add_signed(dc),
            row: self.row + dr,
        }
    }
}

impl Locatable for Vertex {
    fn vertex(&self) -> Vertex {
        *self
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column(), self.row)
    }
}

impl Direction {
    /// Returns the next vertex in this direction from `locatable`.
    ///
    /// The result may lie outside the board.
    pub fn apply(self, locatable: &impl Locatable) -> Vertex {
        locatable.vertex().step(self)
    }
}

/// A playable cell, identified by its vertex.
///
/// A square is bordered by a groove and another square in each direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square(Vertex);

impl Square {
    pub fn at(column: char, row: i32) -> Self {
        Square(Vertex::at(column, row))
    }

    /// The groove bordering this square in `direction`.
    ///
    /// Grooves above and to the left belong to the neighbouring vertex; grooves
    /// below and to the right belong to this square's own vertex.
    pub fn bordering_groove(&self, direction: Direction) -> Groove {
        let location = match direction {
            Direction::Up | Direction::Left => direction.apply(self),
            Direction::Down | Direction::Right => self.0,
        };
        let orientation = match direction {
            Direction::Up | Direction::Down => Orientation::Horizontal,
            Direction::Left | Direction::Right => Orientation::Vertical,
        };
        Groove::new(location, orientation)
    }

    pub fn adjacent_square(&self, direction: Direction) -> Square {
        Square(direction.apply(self))
    }
}

impl Locatable for Square {
    fn vertex(&self) -> Vertex {
        self.0
    }
}

impl From<Vertex> for Square {
    fn from(vertex: Vertex) -> Self {
        Square(vertex)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The seam between two squares.
///
/// A vertical groove lies immediately to the right of the square sharing its
/// vertex; a horizontal groove lies immediately below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Groove {
    vertex: Vertex,
    orientation: Orientation,
}

impl Groove {
    pub fn new(locatable: impl Locatable, orientation: Orientation) -> Self {
        Groove {
            vertex: locatable.vertex(),
            orientation,
        }
    }

    pub fn vertical(column: char, row: i32) -> Self {
        Self::new(Vertex::at(column, row), Orientation::Vertical)
    }

    pub fn horizontal(column: char, row: i32) -> Self {
        Self::new(Vertex::at(column, row), Orientation::Horizontal)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl Locatable for Groove {
    fn vertex(&self) -> Vertex {
        self.vertex
    }
}

impl fmt::Display for Groove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.vertex, self.orientation.to_char())
    }
}

/// A run of one or more same-orientation grooves.
///
/// Vertical walls run downward from their first vertex, horizontal walls run
/// rightward. Two walls may share a board only if they share no covered groove
/// and no covered vertex.
///
/// ```
/// use quoridor::Wall;
///
/// let wall = Wall::vertical('c', 3).with_length(2).unwrap();
/// assert_eq!(wall.covered_grooves().len(), 2);
/// assert_eq!(wall.covered_vertices().len(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Wall {
    first_vertex: Vertex,
    orientation: Orientation,
    length: usize,
}

/// Fluent builder returned by [`Wall::vertical`] and [`Wall::horizontal`].
#[derive(Debug, Clone, Copy)]
pub struct WallBuilder {
    first_vertex: Vertex,
    orientation: Orientation,
}

impl WallBuilder {
    pub fn with_length(self, length: usize) -> RulesResult<Wall> {
        Wall::new(self.first_vertex, self.orientation, length)
    }
}

impl Wall {
    pub fn vertical(column: char, row: i32) -> WallBuilder {
        WallBuilder {
            first_vertex: Vertex::at(column, row),
            orientation: Orientation::Vertical,
        }
    }

    pub fn horizontal(column: char, row: i32) -> WallBuilder {
        WallBuilder {
            first_vertex: Vertex::at(column, row),
            orientation: Orientation::Horizontal,
        }
    }

    pub fn new(first_vertex: Vertex, orientation: Orientation, length: usize) -> RulesResult<Self> {
        if length == 0 {
            return Err(RulesError::invalid_argument(format!(
                "wall length must be positive, got {}",
                length
            )));
        }
        Ok(Wall {
            first_vertex,
            orientation,
            length,
        })
    }

    pub fn first_vertex(&self) -> Vertex {
        self.first_vertex
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn covered_grooves(&self) -> Vec<Groove> {
        self.vertices()
            .take(self.length)
            .map(|vertex| Groove::new(vertex, self.orientation))
            .collect()
    }

    /// The `length - 1` vertices shared by consecutive covered grooves
    pub fn covered_vertices(&self) -> Vec<Vertex> {
        self.vertices().take(self.length - 1).collect()
    }

    fn vertices(&self) -> impl Iterator<Item = Vertex> {
        let direction = match self.orientation {
            Orientation::Vertical => Direction::Down,
            Orientation::Horizontal => Direction::Right,
        };
        std::iter::successors(Some(self.first_vertex), move |v| Some(direction.apply(v)))
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first_vertex, self.orientation.to_char())
    }
}
