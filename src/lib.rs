//! Run Dino! Run! - a terminal endless runner.
//!
//! A dino jumps over stones that scroll in from the right; touching one
//! ends the game. The game model is UI-agnostic and exposed here so tests
//! can drive whole sessions headlessly; the terminal layer lives in `ui`
//! and the binary entry point.

pub mod config;
pub mod game;
pub mod render;
pub mod ui;
