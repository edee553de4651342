//! Game configuration.
//!
//! Every tunable lives in one immutable `Config` handed to the world at
//! construction, instead of process-wide globals. All lengths are in
//! logical world units; the terminal layer owns the mapping to cells.

use std::time::Duration;

/// Target frame budget (60 ticks per second).
pub const FRAME_INTERVAL: Duration = Duration::from_micros(16_667);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Logical playfield width.
    pub screen_width: i32,
    /// Logical playfield height.
    pub screen_height: i32,
    /// Vertical position of the ground line.
    pub ground_y: i32,
    /// Apex of a jump, measured above the ground line.
    pub max_jump_height: i32,
    /// Fixed horizontal position of the dino (the world scrolls, the dino
    /// does not).
    pub dino_x: i32,
    /// Dino rectangle width.
    pub dino_width: i32,
    /// Dino rectangle height.
    pub dino_height: i32,
    /// A stone spawns with probability 1/`spawn_period` each tick.
    pub spawn_period: u32,
    /// Stone sizes are drawn uniformly from `[stone_size_min, stone_size_max)`.
    pub stone_size_min: i32,
    pub stone_size_max: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            ground_y: 500,
            max_jump_height: 150,
            dino_x: 50,
            dino_width: 10,
            dino_height: 20,
            spawn_period: 500,
            stone_size_min: 10,
            stone_size_max: 20,
        }
    }
}
