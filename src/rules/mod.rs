// Rules governor - the rules of Quoridor over a board
//
// Move generation lives in move_generation.rs, the enclosure search in
// path_finder.rs. Everything here reads the board through its snapshot; the
// only board it ever mutates is the one handed to set-up, or a private
// what-if copy built during wall validation.

mod move_generation;
mod path_finder;

pub use path_finder::path_to_goal_exists;

use crate::actions::Move;
use crate::board::Board;
use crate::enums::{Orientation, Player};
use crate::errors::{RulesError, RulesResult};
use crate::geometry::{Locatable, Square};
use crate::settings::Settings;

/// Governs a board according to the rules of Quoridor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesGovernor {
    size: usize,
}

impl RulesGovernor {
    /// A governor for boards with `size` rows and columns
    pub fn new(size: usize) -> Self {
        RulesGovernor { size }
    }

    pub fn for_board(board: &Board) -> Self {
        Self::new(board.size())
    }

    /// Creates a governor for `board` and puts every player in `settings` on
    /// their starting square.
    pub fn create_and_set_up_pawns(board: &mut Board, settings: &Settings) -> Self {
        let governor = Self::for_board(board);
        for &player in settings.players() {
            let square = governor.initial_square(player);
            log::debug!("Placing {} on {}", player, square);
            board.move_pawn(player, square);
        }
        governor
    }

    /// Player one starts centred on the last row, player two on the first row,
    /// player three on the first column and player four on the last column.
    pub fn initial_square(&self, player: Player) -> Square {
        match player {
            Player::Player1 => Square::at(self.middle_column(), self.bottom_row()),
            Player::Player2 => Square::at(self.middle_column(), self.top_row()),
            Player::Player3 => Square::at(self.first_column(), self.middle_row()),
            Player::Player4 => Square::at(self.last_column(), self.middle_row()),
        }
    }

    /// Determines whether `wall_move` may be played on `board`.
    ///
    /// A wall move is rejected when
    ///
    /// 1. its player has no walls left,
    /// 2. the wall is on or runs past an edge of the board,
    /// 3. it overlaps a groove of a wall already on the board,
    /// 4. it crosses a vertex of a wall already on the board, or
    /// 5. it leaves some player on the board with no path to their goal.
    ///
    /// Rejections are `Ok(false)`. Passing a pawn move is an
    /// `InvalidArgument` error; a wall move by a player without a wall
    /// counter is an `IllegalState` error.
    pub fn is_valid_wall_move(&self, board: &Board, wall_move: &Move) -> RulesResult<bool> {
        let wall = wall_move.wall()?;
        let player = wall_move.player();
        let snapshot = board.snapshot();

        let walls_available = *snapshot
            .walls_available()
            .get(&player)
            .ok_or_else(|| RulesError::illegal_state(format!("{} not participating", player)))?;
        if walls_available < 1 {
            log::debug!("Rejecting {}: {} has no walls left", wall, player);
            return Ok(false);
        }

        for groove in wall.covered_grooves() {
            let off_grid = match groove.orientation() {
                Orientation::Vertical => groove.column() == self.last_column(),
                Orientation::Horizontal => groove.row() == self.bottom_row(),
            };
            if !self.is_in_bounds(&groove) || off_grid {
                log::debug!("Rejecting {}: groove {} is off the board", wall, groove);
                return Ok(false);
            }
            if snapshot.is_walled_off(&groove) {
                log::debug!("Rejecting {}: groove {} already walled off", wall, groove);
                return Ok(false);
            }
        }

        let crossing = wall
            .covered_vertices()
            .into_iter()
            .find(|vertex| snapshot.walled_off_vertices().contains(vertex));
        if let Some(vertex) = crossing {
            log::debug!("Rejecting {}: crosses a wall at {}", wall, vertex);
            return Ok(false);
        }

        let mut board_with_wall = Board::from_snapshot(snapshot.clone());
        board_with_wall.place_wall(&wall, player);
        let governor = Self::for_board(&board_with_wall);
        for &participant in snapshot.pawns().keys() {
            if !path_to_goal_exists(participant, &mut board_with_wall, &governor)? {
                log::debug!("Rejecting {}: {} would be walled in", wall, participant);
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns true if `player` wins by reaching `square`.
    ///
    /// No check is made that `player` is actually in the game.
    pub fn is_goal(&self, player: Player, square: &Square) -> bool {
        match player {
            Player::Player1 => square.row() == self.top_row(),
            Player::Player2 => square.row() == self.bottom_row(),
            Player::Player3 => square.column() == self.last_column(),
            Player::Player4 => square.column() == self.first_column(),
        }
    }

    pub fn is_in_bounds(&self, location: &impl Locatable) -> bool {
        let vertex = location.vertex();
        let columns = 0..self.size as i32;
        let rows = self.top_row()..=self.bottom_row();
        columns.contains(&vertex.column_index()) && rows.contains(&vertex.row())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn first_column(&self) -> char {
        'a'
    }

    fn middle_column(&self) -> char {
        column_at(self.size / 2)
    }

    fn last_column(&self) -> char {
        column_at(self.size - 1)
    }

    fn top_row(&self) -> i32 {
        1
    }

    fn middle_row(&self) -> i32 {
        self.top_row() + (self.size / 2) as i32
    }

    fn bottom_row(&self) -> i32 {
        self.size as i32
    }
}

// Settings cap boards at 'z', so the column never leaves the alphabet.
fn column_at(index: usize) -> char {
    char::from(b'a'.wrapping_add(index as u8))
}
