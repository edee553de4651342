//! Drawing the world onto an abstract 2D surface.
//!
//! Everything here works in logical world units, the same units the physics
//! uses. A `Surface` implementation owns the mapping onto a real display:
//! the terminal rasterizer lives in `ui::scene`, tests use a recording
//! surface.

use crate::config::Config;
use crate::game::types::{Dino, Stone, World};
use ratatui::style::Color;

pub const COLOR_BACKGROUND: Color = Color::Reset;
pub const COLOR_DINO: Color = Color::Rgb(128, 0, 0);
pub const COLOR_STONE: Color = Color::Rgb(100, 100, 100);
pub const COLOR_GROUND: Color = Color::Rgb(100, 100, 100);

/// Minimal 2D drawing target. Any backend that can fill rectangles and
/// circles and draw a line can display the game. Presenting the finished
/// frame is the backend's business, not part of the contract.
pub trait Surface {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color);
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color);
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color);
}

/// Draw the whole scene: ground line first, then the stones in spawn order,
/// then the dino. The dino is drawn last so it overlaps stones on screen;
/// the order has no effect on the logic.
pub fn draw_world<S: Surface>(world: &World, surface: &mut S) {
    let cfg = &world.config;
    surface.clear(COLOR_BACKGROUND);
    surface.line(0, cfg.ground_y, cfg.screen_width, cfg.ground_y, COLOR_GROUND);
    for stone in &world.stones {
        draw_stone(stone, cfg.ground_y, surface);
    }
    draw_dino(&world.dino, cfg, surface);
}

/// A stone is a filled circle resting on the ground line.
pub fn draw_stone<S: Surface>(stone: &Stone, ground_y: i32, surface: &mut S) {
    surface.fill_circle(stone.x, ground_y - stone.size, stone.size, COLOR_STONE);
}

/// The dino is a filled rectangle whose feet sit `jump_height` above the
/// ground line.
pub fn draw_dino<S: Surface>(dino: &Dino, cfg: &Config, surface: &mut S) {
    surface.fill_rect(
        dino.x,
        cfg.ground_y - dino.jump_height - cfg.dino_height,
        cfg.dino_width,
        cfg.dino_height,
        COLOR_DINO,
    );
}
