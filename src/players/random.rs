use std::collections::HashSet;

use itertools::Itertools;
use rand::prelude::*;
use rand_xorshift::XorShiftRng;

use crate::actions::Move;
use crate::board::Snapshot;
use crate::enums::Player;
use crate::errors::{GameError, QuoridorResult};
use crate::player_system::PlayerStrategy;

/// Moves its pawn to a uniformly random legal square. Never places walls.
pub struct RandomPlayer {
    rng: XorShiftRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        RandomPlayer {
            rng: XorShiftRng::from_entropy(),
        }
    }

    /// Same seed, same choices
    pub fn with_seed(seed: u64) -> Self {
        RandomPlayer {
            rng: XorShiftRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerStrategy for RandomPlayer {
    fn get_move(
        &mut self,
        _board: &Snapshot,
        me: Player,
        valid_pawn_moves: &HashSet<Move>,
    ) -> QuoridorResult<Move> {
        // HashSet order is unstable, so sort before choosing to keep seeds reproducible
        let moves = valid_pawn_moves.iter().sorted().collect::<Vec<_>>();
        moves
            .choose(&mut self.rng)
            .map(|&&mv| mv)
            .ok_or_else(|| {
                GameError::StrategyFailed {
                    player: me,
                    details: "no pawn moves available".to_string(),
                }
                .into()
            })
    }
}
