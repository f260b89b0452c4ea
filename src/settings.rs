use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::enums::Player;
use crate::errors::{SettingsError, SettingsResult};

pub const DEFAULT_BOARD_SIZE: usize = 9;
pub const DEFAULT_WALL_LENGTH: usize = 2;
/// Largest odd size whose columns still fit in `a`..=`z`.
pub const MAX_BOARD_SIZE: usize = 25;

/// Configurable settings for a game of Quoridor.
///
/// Settings are validated when built, so anything holding a `Settings` can
/// rely on a sane board size, player list and wall length. Settings obtained
/// through deserialization should go through [`Settings::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    board_size: usize,
    players: Vec<Player>,
    walls_per_player: u32,
    wall_length: usize,
}

#[derive(Debug, Clone)]
pub struct SettingsBuilder {
    board_size: usize,
    players: Vec<Player>,
    walls_per_player: u32,
    wall_length: usize,
}

impl Settings {
    /// 9x9 board, players one and two, eight walls each
    pub fn default_two_player() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            players: vec![Player::Player1, Player::Player2],
            walls_per_player: 8,
            wall_length: DEFAULT_WALL_LENGTH,
        }
    }

    /// 9x9 board, all four players, four walls each
    pub fn default_four_player() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            players: vec![
                Player::Player1,
                Player::Player2,
                Player::Player3,
                Player::Player4,
            ],
            walls_per_player: 4,
            wall_length: DEFAULT_WALL_LENGTH,
        }
    }

    /// A builder seeded with the two-player defaults
    pub fn builder() -> SettingsBuilder {
        Self::default_two_player().to_builder()
    }

    pub fn to_builder(&self) -> SettingsBuilder {
        SettingsBuilder {
            board_size: self.board_size,
            players: self.players.clone(),
            walls_per_player: self.walls_per_player,
            wall_length: self.wall_length,
        }
    }

    /// Number of rows and columns on the board
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Participating players, in turn order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn walls_per_player(&self) -> u32 {
        self.walls_per_player
    }

    /// Number of grooves each wall covers
    pub fn wall_length(&self) -> usize {
        self.wall_length
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if self.board_size < 3 {
            return Err(SettingsError::BoardTooSmall {
                size: self.board_size,
            });
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(SettingsError::BoardTooLarge {
                size: self.board_size,
            });
        }
        if self.board_size % 2 == 0 {
            return Err(SettingsError::BoardSizeEven {
                size: self.board_size,
            });
        }

        let count = self.players.len();
        if count < 2 {
            return Err(SettingsError::TooFewPlayers { count });
        }
        if count > 4 {
            return Err(SettingsError::TooManyPlayers { count });
        }
        if let Some(&player) = self.players.iter().duplicates().next() {
            return Err(SettingsError::DuplicatePlayer { player });
        }

        if self.wall_length < 1 {
            return Err(SettingsError::WallLengthZero {
                length: self.wall_length,
            });
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::default_two_player()
    }
}

impl SettingsBuilder {
    /// Must be odd and at least 3 so pawns can start in a middle row or column.
    pub fn board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Two to four distinct players, in the order they take turns.
    pub fn players(mut self, players: &[Player]) -> Self {
        self.players = players.to_vec();
        self
    }

    /// May be 0, in which case the game is played without walls.
    pub fn walls_per_player(mut self, walls_per_player: u32) -> Self {
        self.walls_per_player = walls_per_player;
        self
    }

    /// Must be at least 1.
    pub fn wall_length(mut self, wall_length: usize) -> Self {
        self.wall_length = wall_length;
        self
    }

    pub fn build(self) -> SettingsResult<Settings> {
        let settings = Settings {
            board_size: self.board_size,
            players: self.players,
            walls_per_player: self.walls_per_player,
            wall_length: self.wall_length,
        };
        settings.validate()?;
        Ok(settings)
    }
}
