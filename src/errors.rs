use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::enums::Player;

/// Top-level error type for the whole Quoridor engine
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoridorError {
    #[error("Rules error: {0}")]
    Rules(#[from] RulesError),

    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),

    #[error("Game error: {0}")]
    Game(#[from] GameError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Precondition failures raised by the geometry and rules layers.
///
/// These always indicate a bug in the caller. Ordinary rule violations (an
/// illegal wall, for example) are reported as `false`, never as an error.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RulesError {
    #[error("Invalid argument: {details}")]
    InvalidArgument { details: String },

    #[error("Illegal state: {details}")]
    IllegalState { details: String },
}

/// Settings validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SettingsError {
    #[error("Board size must be at least 3, got {size}")]
    BoardTooSmall { size: usize },

    #[error("Board size must be at most 25, got {size}")]
    BoardTooLarge { size: usize },

    #[error("Board size must be odd, got {size}")]
    BoardSizeEven { size: usize },

    #[error("Need at least two players, got {count}")]
    TooFewPlayers { count: usize },

    #[error("Maximum of four players, got {count}")]
    TooManyPlayers { count: usize },

    #[error("Duplicate player: {player}")]
    DuplicatePlayer { player: Player },

    #[error("Wall length must be at least 1, got {length}")]
    WallLengthZero { length: usize },
}

/// Errors raised while orchestrating a game
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameError {
    #[error("{player} requested an illegal move: {mv}")]
    IllegalMove { player: Player, mv: String },

    #[error("No strategy provided for {player}")]
    MissingStrategy { player: Player },

    #[error("Game already played")]
    AlreadyPlayed,

    #[error("Game not played to completion")]
    NotFinished,

    #[error("Strategy for {player} failed: {details}")]
    StrategyFailed { player: Player, details: String },
}

/// Move notation parse errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseError {
    #[error("Empty move")]
    Empty,

    #[error("Invalid column '{0}'")]
    BadColumn(char),

    #[error("Invalid row in '{0}'")]
    BadRow(String),

    #[error("Invalid wall orientation '{0}'")]
    BadOrientation(char),

    #[error("Invalid move: {0}")]
    BadMove(String),
}

/// Result type aliases for convenience
pub type QuoridorResult<T> = Result<T, QuoridorError>;
pub type RulesResult<T> = Result<T, RulesError>;
pub type SettingsResult<T> = Result<T, SettingsError>;
pub type GameResult<T> = Result<T, GameError>;

/// Helper methods for creating common errors
impl RulesError {
    pub fn invalid_argument(details: impl Into<String>) -> Self {
        Self::InvalidArgument {
            details: details.into(),
        }
    }

    pub fn illegal_state(details: impl Into<String>) -> Self {
        Self::IllegalState {
            details: details.into(),
        }
    }
}

impl GameError {
    pub fn illegal_move(player: Player, mv: impl ToString) -> Self {
        Self::IllegalMove {
            player,
            mv: mv.to_string(),
        }
    }
}

impl From<std::io::Error> for QuoridorError {
    fn from(err: std::io::Error) -> Self {
        QuoridorError::Io(err.to_string())
    }
}
