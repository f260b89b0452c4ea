// src/game/mod.rs
pub mod manager;

pub use manager::*;
