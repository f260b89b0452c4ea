use std::collections::HashSet;

use super::RulesGovernor;
use crate::board::Board;
use crate::enums::Player;
use crate::errors::{RulesError, RulesResult};
use crate::geometry::Square;

/// Determines whether `player` can reach their goal on `board` through any
/// sequence of valid pawn moves.
///
/// The search walks `player`'s pawn around `board`, but the pawn is always
/// returned to where it started, so the board's snapshot is unchanged
/// afterwards. Fails with `IllegalState` if `player` has no pawn on the board.
pub fn path_to_goal_exists(
    player: Player,
    board: &mut Board,
    governor: &RulesGovernor,
) -> RulesResult<bool> {
    let origin = board
        .snapshot()
        .pawn(player)
        .ok_or_else(|| RulesError::illegal_state(format!("{} has no pawn on board", player)))?;
    let found = DepthFirstSearch {
        player,
        board,
        origin,
    }
    .search(governor)?;
    log::debug!("Path to goal for {} from {}: {}", player, origin, found);
    Ok(found)
}

/// Puts the pawn back on its origin when dropped.
struct DepthFirstSearch<'a> {
    player: Player,
    board: &'a mut Board,
    origin: Square,
}

impl DepthFirstSearch<'_> {
    fn search(self, governor: &RulesGovernor) -> RulesResult<bool> {
        let mut stack = vec![self.origin];
        let mut visited = HashSet::from([self.origin]);

        while let Some(square) = stack.pop() {
            if governor.is_goal(self.player, &square) {
                return Ok(true);
            }
            self.board.move_pawn(self.player, square);
            for mv in governor.generate_valid_pawn_moves(self.board, self.player)? {
                let destination = mv.destination()?;
                if visited.insert(destination) {
                    stack.push(destination);
                }
            }
        }
        Ok(false)
    }
}

impl Drop for DepthFirstSearch<'_> {
    fn drop(&mut self) {
        self.board.move_pawn(self.player, self.origin);
    }
}
