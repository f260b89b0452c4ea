// Players module - Contains the shipped strategy implementations
//
// Both strategies implement crate::player_system::PlayerStrategy.

pub mod console;
pub mod random;

pub use self::console::{shared_stdin, ConsolePlayer, SharedStdin};
pub use self::random::RandomPlayer;
