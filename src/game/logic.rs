//! Dino Run game logic: input processing, the per-tick world update, and
//! collision detection.

use super::types::World;
use crate::config::Config;
use rand::Rng;

/// Decoded input actions. The terminal layer turns raw key events into
/// these; the logic never sees key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Start a jump. Honored only while running and grounded.
    Jump,
    /// Pause. There is no resume: pausing is one-way and disables further
    /// input while the world keeps scrolling.
    Pause,
    /// End the game.
    Quit,
}

/// Game loop states. `Paused` is never left once entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    Paused,
    Ended,
}

/// A full game: the world plus the loop state driving it.
#[derive(Debug, Clone)]
pub struct DinoGame {
    pub world: World,
    pub status: GameStatus,
}

impl DinoGame {
    pub fn new(config: Config) -> Self {
        Self {
            world: World::new(config),
            status: GameStatus::Running,
        }
    }
}

/// Process one decoded input event.
pub fn process_input(game: &mut DinoGame, input: GameInput) {
    match input {
        GameInput::Quit => game.status = GameStatus::Ended,
        GameInput::Pause => {
            if game.status == GameStatus::Running {
                game.status = GameStatus::Paused;
            }
        }
        GameInput::Jump => {
            // A jump starts with the same kinematic step that advances it.
            // Airborne continuation happens in `tick_game`, not here.
            if game.status == GameStatus::Running && game.world.dino.on_the_ground() {
                let max = game.world.config.max_jump_height;
                game.world.dino.advance_jump(max);
            }
        }
    }
}

/// Advance the game by one tick: jump kinematics, stone movement and expiry,
/// spawning, and collision. Pausing does not stop the world; only `Ended`
/// does.
pub fn tick_game<R: Rng>(game: &mut DinoGame, rng: &mut R) {
    if game.status == GameStatus::Ended {
        return;
    }

    // An airborne dino keeps jumping whether or not the game is paused.
    if !game.world.dino.on_the_ground() {
        let max = game.world.config.max_jump_height;
        game.world.dino.advance_jump(max);
    }

    advance_world(&mut game.world, rng);

    if check_collision(&game.world) {
        game.status = GameStatus::Ended;
    }
}

/// Scroll every stone one step left, drop the ones fully past the left
/// edge, then roll for a new spawn.
pub fn advance_world<R: Rng>(world: &mut World, rng: &mut R) {
    // One ordered in-place pass: moving and filtering together means
    // removal can never skip a neighbor, and spawn order is preserved.
    world.stones.retain_mut(|stone| {
        stone.advance();
        stone.x >= -stone.size
    });

    if rng.gen_range(0..world.config.spawn_period) == 0 {
        world.spawn_stone(rng);
    }
}

/// True if the dino overlaps any live stone. Approximate on purpose: the
/// dino is a point, the stone a square region of half-width `size`.
pub fn check_collision(world: &World) -> bool {
    world.stones.iter().any(|stone| {
        (world.dino.x - stone.x).abs() <= stone.size && world.dino.jump_height <= stone.size
    })
}
