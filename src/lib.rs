// Quoridor Library - Core Module Organization
//
// This file serves as the central organization point for the Quoridor rules
// engine, exporting the board model, rules and game orchestration.

// Core data structures and enums
pub mod enums;
pub mod errors;
pub mod geometry;
pub mod board;
pub mod actions;
pub mod settings;

// Rules of the game
pub mod rules;

// Players and game orchestration
pub mod player_system;
pub mod players;
pub mod game;

// Re-export common types for convenient access
pub use crate::actions::Move;
pub use crate::board::{Board, Snapshot};
pub use crate::enums::{Direction, Orientation, Player};
pub use crate::errors::{
    GameError, ParseError, QuoridorError, QuoridorResult, RulesError, RulesResult, SettingsError,
};
pub use crate::game::{GameMaster, GameOutcome};
pub use crate::geometry::{Groove, Locatable, Square, Vertex, Wall};
pub use crate::player_system::PlayerStrategy;
pub use crate::players::{shared_stdin, ConsolePlayer, RandomPlayer, SharedStdin};
pub use crate::rules::{path_to_goal_exists, RulesGovernor};
pub use crate::settings::Settings;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
