use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::actions::Move;
use crate::board::{Board, Snapshot};
use crate::enums::Player;
use crate::errors::{GameError, GameResult, QuoridorResult};
use crate::geometry::Square;
use crate::player_system::PlayerStrategy;
use crate::rules::RulesGovernor;
use crate::settings::Settings;

/// How a played game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Won { winner: Player, turns: usize },
    TurnLimitReached { turns: usize },
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Won { winner, .. } => Some(*winner),
            GameOutcome::TurnLimitReached { .. } => None,
        }
    }

    pub fn turns(&self) -> usize {
        match self {
            GameOutcome::Won { turns, .. } | GameOutcome::TurnLimitReached { turns } => *turns,
        }
    }
}

/// Plays a single game of Quoridor.
///
/// A game master is good for one game; build a new one for each game even
/// when the settings and strategies do not change.
pub struct GameMaster {
    settings: Settings,
    board: Board,
    governor: RulesGovernor,
    strategies: BTreeMap<Player, Box<dyn PlayerStrategy>>,
    max_turns: Option<usize>,
    history: Vec<Move>,
    played: bool,
    outcome: Option<GameOutcome>,
}

impl GameMaster {
    /// Sets up the board for `settings` and seats a strategy for every player.
    ///
    /// `strategies` must hold an entry for each player in the settings;
    /// entries for anyone else are ignored.
    pub fn set_up_game(
        settings: &Settings,
        mut strategies: HashMap<Player, Box<dyn PlayerStrategy>>,
    ) -> GameResult<Self> {
        let mut seated = BTreeMap::new();
        for &player in settings.players() {
            let mut strategy = strategies
                .remove(&player)
                .ok_or(GameError::MissingStrategy { player })?;
            strategy.set_up(settings);
            seated.insert(player, strategy);
        }

        let mut board = Board::create_from_settings(settings);
        let governor = RulesGovernor::create_and_set_up_pawns(&mut board, settings);
        log::info!(
            "Set up {}x{} game for {}",
            settings.board_size(),
            settings.board_size(),
            settings.players().iter().join(", ")
        );

        Ok(GameMaster {
            settings: settings.clone(),
            board,
            governor,
            strategies: seated,
            max_turns: None,
            history: Vec::new(),
            played: false,
            outcome: None,
        })
    }

    /// Stops the game after `max_turns` moves if nobody has won by then.
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = Some(max_turns);
        self
    }

    /// Plays the game to the end.
    ///
    /// Players move in settings order. A strategy that fails or requests an
    /// illegal move aborts the game with an error and there is no winner.
    /// Calling this twice is an error.
    pub fn play_game(&mut self) -> QuoridorResult<GameOutcome> {
        if self.played {
            return Err(GameError::AlreadyPlayed.into());
        }
        self.played = true;

        let players = self.settings.players().to_vec();
        let mut turns = 0;
        let outcome = loop {
            if self.max_turns.is_some_and(|limit| turns >= limit) {
                break GameOutcome::TurnLimitReached { turns };
            }
            let player = players[turns % players.len()];
            let pawn_move = self.play_turn(player)?;
            turns += 1;
            if let Some(square) = pawn_move {
                if self.governor.is_goal(player, &square) {
                    break GameOutcome::Won {
                        winner: player,
                        turns,
                    };
                }
            }
        };

        match outcome {
            GameOutcome::Won { winner, turns } => {
                log::info!("{} wins after {} turns", winner, turns)
            }
            GameOutcome::TurnLimitReached { turns } => {
                log::info!("No winner after {} turns", turns)
            }
        }
        self.outcome = Some(outcome);
        Ok(outcome)
    }

    /// Returns the winner. Only available once the game is won.
    pub fn winner(&self) -> GameResult<Player> {
        self.outcome
            .and_then(|outcome| outcome.winner())
            .ok_or(GameError::NotFinished)
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.board.snapshot()
    }

    /// Every move applied so far, in order
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // Returns the destination if the move was a pawn move.
    fn play_turn(&mut self, player: Player) -> QuoridorResult<Option<Square>> {
        let valid_pawn_moves = self.governor.generate_valid_pawn_moves(&self.board, player)?;
        let snapshot = self.board.snapshot();
        let strategy = self
            .strategies
            .get_mut(&player)
            .ok_or(GameError::MissingStrategy { player })?;
        let mv = strategy.get_move(&snapshot, player, &valid_pawn_moves)?;

        if mv.player() != player {
            log::warn!("{} tried to move for {}", player, mv.player());
            return Err(GameError::illegal_move(player, mv).into());
        }

        let destination = match mv {
            Move::Pawn { destination, .. } => {
                if !valid_pawn_moves.contains(&mv) {
                    log::warn!("{} requested illegal pawn move {}", player, mv);
                    return Err(GameError::illegal_move(player, mv).into());
                }
                self.board.move_pawn(player, destination);
                Some(destination)
            }
            Move::Wall { wall, .. } => {
                if !self.governor.is_valid_wall_move(&self.board, &mv)? {
                    log::warn!("{} requested illegal wall {}", player, mv);
                    return Err(GameError::illegal_move(player, mv).into());
                }
                self.board.place_wall(&wall, player);
                None
            }
        };
        log::info!("{} plays {}", player, mv);
        self.history.push(mv);
        Ok(destination)
    }
}
