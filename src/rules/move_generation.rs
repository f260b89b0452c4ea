use std::collections::HashSet;

use super::RulesGovernor;
use crate::actions::Move;
use crate::board::{Board, Snapshot};
use crate::enums::{Direction, Player};
use crate::errors::{RulesError, RulesResult};

impl RulesGovernor {
    /// Generates every pawn move `player` may currently make on `board`.
    ///
    /// Fails with `IllegalState` if `player` has no pawn on the board.
    pub fn generate_valid_pawn_moves(
        &self,
        board: &Board,
        player: Player,
    ) -> RulesResult<HashSet<Move>> {
        self.valid_pawn_moves(&board.snapshot(), player)
    }

    /// Same as [`RulesGovernor::generate_valid_pawn_moves`], for callers that
    /// only hold a snapshot.
    pub fn valid_pawn_moves(&self, snapshot: &Snapshot, player: Player) -> RulesResult<HashSet<Move>> {
        let current = snapshot
            .pawn(player)
            .ok_or_else(|| RulesError::illegal_state(format!("{} has no pawn on the board", player)))?;

        let mut moves = HashSet::new();
        for direction in Direction::all() {
            if snapshot.is_walled_off(&current.bordering_groove(direction)) {
                continue;
            }
            let adjacent = current.adjacent_square(direction);
            if !self.is_in_bounds(&adjacent) {
                continue;
            }
            if !snapshot.is_occupied(&adjacent) {
                moves.insert(Move::pawn_move(player, adjacent));
                continue;
            }

            // Occupied; try jumping the pawn.
            if !snapshot.is_walled_off(&adjacent.bordering_groove(direction)) {
                let jump = adjacent.adjacent_square(direction);
                if self.is_in_bounds(&jump) && !snapshot.is_occupied(&jump) {
                    moves.insert(Move::pawn_move(player, jump));
                    continue;
                }
            }

            for orthogonal in direction.orthogonals() {
                if snapshot.is_walled_off(&adjacent.bordering_groove(orthogonal)) {
                    continue;
                }
                let diagonal = adjacent.adjacent_square(orthogonal);
                if self.is_in_bounds(&diagonal) && !snapshot.is_occupied(&diagonal) {
                    moves.insert(Move::pawn_move(player, diagonal));
                }
            }
        }
        Ok(moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Square, Wall};
    use crate::settings::Settings;

    // 3x3 two-player board with single-groove walls; pawns placed by each test
    fn small_board() -> (Board, RulesGovernor) {
        let settings = Settings::builder()
            .board_size(3)
            .wall_length(1)
            .build()
            .unwrap();
        let mut board = Board::create_from_settings(&settings);
        let governor = RulesGovernor::create_and_set_up_pawns(&mut board, &settings);
        (board, governor)
    }

    fn destinations(squares: &[(char, i32)]) -> HashSet<Move> {
        squares
            .iter()
            .map(|&(c, r)| Move::pawn_move(Player::Player1, Square::at(c, r)))
            .collect()
    }

    fn place(board: &mut Board, player1: (char, i32), player2: (char, i32)) {
        board.move_pawn(Player::Player2, Square::at(player2.0, player2.1));
        board.move_pawn(Player::Player1, Square::at(player1.0, player1.1));
    }

    #[test]
    fn test_all_four_directions_free() {
        let (mut board, governor) = small_board();
        place(&mut board, ('b', 2), ('a', 1));
        let moves = governor
            .generate_valid_pawn_moves(&board, Player::Player1)
            .unwrap();
        assert_eq!(moves, destinations(&[('b', 1), ('b', 3), ('a', 2), ('c', 2)]));
    }

    #[test]
    fn test_three_directions_free() {
        let (mut board, governor) = small_board();
        place(&mut board, ('c', 2), ('a', 1));
        let moves = governor
            .generate_valid_pawn_moves(&board, Player::Player1)
            .unwrap();
        assert_eq!(moves, destinations(&[('c', 1), ('c', 3), ('b', 2)]));
    }

    #[test]
    fn test_two_directions_free() {
        let (mut board, governor) = small_board();
        place(&mut board, ('c', 3), ('a', 1));
        let moves = governor
            .generate_valid_pawn_moves(&board, Player::Player1)
            .unwrap();
        assert_eq!(moves, destinations(&[('c', 2), ('b', 3)]));
    }

    #[test]
    fn test_edge_of_bottom_row() {
        let (mut board, governor) = small_board();
        place(&mut board, ('b', 3), ('a', 1));
        let moves = governor
            .generate_valid_pawn_moves(&board, Player::Player1)
            .unwrap();
        assert_eq!(moves, destinations(&[('b', 2), ('a', 3), ('c', 3)]));
    }

    #[test]
    fn test_jump_over_opponent() {
        let (mut board, governor) = small_board();
        place(&mut board, ('c', 3), ('c', 2));
        let moves = governor
            .generate_valid_pawn_moves(&board, Player::Player1)
            .unwrap();
        assert_eq!(moves, destinations(&[('c', 1), ('b', 3)]));
        assert!(!moves.contains(&Move::pawn_move(Player::Player1, Square::at('c', 2))));
    }

    #[test]
    fn test_blocked_by_wall_above() {
        let (mut board, governor) = small_board();
        place(&mut board, ('c', 3), ('a', 1));
        board.place_wall(&Wall::horizontal('c', 2).with_length(1).unwrap(), Player::Player2);
        let moves = governor
            .generate_valid_pawn_moves(&board, Player::Player1)
            .unwrap();
        assert_eq!(moves, destinations(&[('b', 3)]));
    }

    #[test]
    fn test_blocked_by_wall_beside() {
        let (mut board, governor) = small_board();
        place(&mut board, ('c', 3), ('a', 1));
        board.place_wall(&Wall::vertical('b', 3).with_length(1).unwrap(), Player::Player2);
        let moves = governor
            .generate_valid_pawn_moves(&board, Player::Player1)
            .unwrap();
        assert_eq!(moves, destinations(&[('c', 2)]));
    }

    #[test]
    fn test_diagonal_move_due_to_wall() {
        let (mut board, governor) = small_board();
        place(&mut board, ('b', 3), ('b', 2));
        board.place_wall(&Wall::horizontal('b', 1).with_length(1).unwrap(), Player::Player2);
        let moves = governor
            .generate_valid_pawn_moves(&board, Player::Player1)
            .unwrap();
        assert_eq!(
            moves,
            destinations(&[('a', 2), ('c', 2), ('a', 3), ('c', 3)])
        );
    }

    #[test]
    fn test_diagonal_move_due_to_boundary() {
        let (mut board, governor) = small_board();
        place(&mut board, ('b', 2), ('a', 2));
        let moves = governor
            .generate_valid_pawn_moves(&board, Player::Player1)
            .unwrap();
        assert_eq!(
            moves,
            destinations(&[('a', 1), ('a', 3), ('b', 1), ('b', 3), ('c', 2)])
        );
    }

    #[test]
    fn test_diagonal_move_blocked_by_wall() {
        let (mut board, governor) = small_board();
        place(&mut board, ('b', 2), ('a', 2));
        board.place_wall(&Wall::horizontal('a', 1).with_length(1).unwrap(), Player::Player2);
        let moves = governor
            .generate_valid_pawn_moves(&board, Player::Player1)
            .unwrap();
        assert_eq!(moves, destinations(&[('a', 3), ('b', 1), ('b', 3), ('c', 2)]));
    }

    #[test]
    fn test_diagonal_when_far_square_occupied() {
        let settings = Settings::default_four_player()
            .to_builder()
            .board_size(3)
            .build()
            .unwrap();
        let mut board = Board::create_from_settings(&settings);
        let governor = RulesGovernor::create_and_set_up_pawns(&mut board, &settings);
        board.move_pawn(Player::Player1, Square::at('a', 1));
        board.move_pawn(Player::Player2, Square::at('b', 1));
        board.move_pawn(Player::Player3, Square::at('c', 1));
        board.move_pawn(Player::Player4, Square::at('c', 3));
        let moves = governor
            .generate_valid_pawn_moves(&board, Player::Player1)
            .unwrap();
        assert_eq!(moves, destinations(&[('a', 2), ('b', 2)]));
    }

    #[test]
    fn test_no_pawn_on_board() {
        let (board, governor) = small_board();
        assert!(matches!(
            governor.generate_valid_pawn_moves(&board, Player::Player3),
            Err(RulesError::IllegalState { .. })
        ));
    }
}
