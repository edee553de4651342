//! Core game model: world data in `types`, per-tick rules in `logic`.

pub mod logic;
pub mod types;

pub use logic::{DinoGame, GameInput, GameStatus};
pub use types::{Dino, Stone, World};
