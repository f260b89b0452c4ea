use std::collections::HashSet;

use crate::actions::Move;
use crate::board::Snapshot;
use crate::enums::Player;
use crate::errors::QuoridorResult;
use crate::settings::Settings;

/// A participant in a game of Quoridor capable of deciding on its next move.
///
/// Strategies only ever see snapshots, never the live board.
pub trait PlayerStrategy: Send {
    /// Called once before the first turn with the settings of the game about
    /// to be played
    fn set_up(&mut self, _settings: &Settings) {}

    /// Returns the move this strategy wants to make as `me`.
    ///
    /// The legal pawn moves are precomputed and handed over for convenience.
    /// A strategy that plays a wall is responsible for its validity; the game
    /// master rejects illegal walls.
    fn get_move(
        &mut self,
        board: &Snapshot,
        me: Player,
        valid_pawn_moves: &HashSet<Move>,
    ) -> QuoridorResult<Move>;
}
