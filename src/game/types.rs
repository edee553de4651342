//! Dino Run data structures: the dino, the stones, and the world they share.

use crate::config::Config;
use rand::Rng;

/// The player-controlled dino. Its horizontal position never changes; only
/// the jump height does.
#[derive(Debug, Clone)]
pub struct Dino {
    /// Horizontal position, fixed for the lifetime of the run.
    pub x: i32,
    /// Height above the ground line. 0 = standing on the ground.
    /// Stays within `[0, max_jump_height]`.
    pub jump_height: i32,
    /// Signed vertical speed: positive rising, negative falling, 0 grounded.
    pub jump_speed: i32,
}

impl Dino {
    pub fn new(x: i32) -> Self {
        Self {
            x,
            jump_height: 0,
            jump_speed: 0,
        }
    }

    /// True when the dino is standing on the ground.
    pub fn on_the_ground(&self) -> bool {
        self.jump_height == 0
    }

    /// Advance the jump by one tick. Called from the ground it starts a new
    /// ascent; called while airborne it continues the current one.
    ///
    /// The step size is proportional to the remaining distance to the apex,
    /// with a minimum of 1: an ease-out ascent and, once the speed inverts,
    /// an ease-in descent. Not projectile motion, and the `floor` truncation
    /// is part of the behavior.
    pub fn advance_jump(&mut self, max_jump_height: i32) {
        // Direction of travel; at rest this call is a jump start, so up.
        let dir = if self.jump_speed == 0 {
            1
        } else {
            self.jump_speed.signum()
        };

        let remaining = max_jump_height - self.jump_height;
        self.jump_speed = dir * ((0.2 * remaining as f64).floor() as i32).max(1);
        self.jump_height += self.jump_speed;

        if self.jump_height >= max_jump_height {
            // Apex reached: clamp and begin the descent.
            self.jump_height = max_jump_height;
            self.jump_speed = -1;
        }
        if self.jump_height <= 0 {
            // Landed: jump complete.
            self.jump_height = 0;
            self.jump_speed = 0;
        }
    }
}

/// A stone obstacle scrolling in from the right edge.
#[derive(Debug, Clone)]
pub struct Stone {
    /// Horizontal position of the stone's center. Decreases every tick.
    pub x: i32,
    /// Radius, fixed at spawn.
    pub size: i32,
}

impl Stone {
    /// Scroll one step to the left.
    pub fn advance(&mut self) {
        self.x -= 1;
    }
}

/// The ground line, the stones on it, and the dino running along it.
#[derive(Debug, Clone)]
pub struct World {
    pub config: Config,
    pub dino: Dino,
    /// Live stones in spawn order. A stone is live until it has scrolled
    /// fully past the left edge (`x < -size`).
    pub stones: Vec<Stone>,
}

impl World {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            dino: Dino::new(config.dino_x),
            stones: Vec::new(),
        }
    }

    /// Spawn one stone just past the right edge, with a random size.
    pub fn spawn_stone<R: Rng>(&mut self, rng: &mut R) {
        let size = rng.gen_range(self.config.stone_size_min..self.config.stone_size_max);
        self.stones.push(Stone {
            x: self.config.screen_width + size,
            size,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_dino_is_grounded() {
        let dino = Dino::new(50);
        assert_eq!(dino.x, 50);
        assert_eq!(dino.jump_height, 0);
        assert_eq!(dino.jump_speed, 0);
        assert!(dino.on_the_ground());
    }

    #[test]
    fn test_first_jump_step() {
        let mut dino = Dino::new(50);

        dino.advance_jump(150);

        // max(1, floor(0.2 * 150)) = 30
        assert_eq!(dino.jump_speed, 30);
        assert_eq!(dino.jump_height, 30);
        assert!(!dino.on_the_ground());
    }

    #[test]
    fn test_ascent_decelerates() {
        let mut dino = Dino::new(50);
        dino.advance_jump(150);
        let first_step = dino.jump_speed;

        dino.advance_jump(150);

        // floor(0.2 * (150 - 30)) = 24
        assert_eq!(dino.jump_speed, 24);
        assert!(dino.jump_speed < first_step);
        assert_eq!(dino.jump_height, 54);
    }

    #[test]
    fn test_apex_clamps_and_inverts() {
        let mut dino = Dino::new(50);
        dino.jump_height = 149;
        dino.jump_speed = 1;

        dino.advance_jump(150);

        assert_eq!(dino.jump_height, 150);
        assert_eq!(dino.jump_speed, -1);
    }

    #[test]
    fn test_landing_clamps_to_ground() {
        let mut dino = Dino::new(50);
        dino.jump_height = 20;
        dino.jump_speed = -26;

        dino.advance_jump(150);

        assert_eq!(dino.jump_height, 0);
        assert_eq!(dino.jump_speed, 0);
        assert!(dino.on_the_ground());
    }

    #[test]
    fn test_full_jump_cycle_reaches_apex_then_lands() {
        let mut dino = Dino::new(50);
        dino.advance_jump(150);

        let mut reached_apex = false;
        let mut prev_height = dino.jump_height;
        let mut ticks = 1;

        while !dino.on_the_ground() {
            dino.advance_jump(150);
            ticks += 1;
            assert!(ticks < 200, "jump cycle must terminate");
            assert!((0..=150).contains(&dino.jump_height));

            if reached_apex {
                assert!(
                    dino.jump_height < prev_height,
                    "heights strictly decrease after the apex"
                );
            } else if dino.jump_height == 150 {
                reached_apex = true;
            } else {
                assert!(
                    dino.jump_height > prev_height,
                    "heights strictly increase before the apex"
                );
            }
            prev_height = dino.jump_height;
        }

        assert!(reached_apex, "the eased jump always touches the apex");
        assert_eq!(dino.jump_speed, 0);
    }

    #[test]
    fn test_minimum_step_near_apex() {
        let mut dino = Dino::new(50);
        dino.jump_height = 147;
        dino.jump_speed = 1;

        // floor(0.2 * 3) = 0, so the minimum step of 1 applies.
        dino.advance_jump(150);
        assert_eq!(dino.jump_speed, 1);
        assert_eq!(dino.jump_height, 148);
    }

    #[test]
    fn test_stone_advances_left() {
        let mut stone = Stone { x: 300, size: 12 };
        stone.advance();
        assert_eq!(stone.x, 299);
        assert_eq!(stone.size, 12);
    }

    #[test]
    fn test_new_world() {
        let world = World::new(Config::default());
        assert!(world.stones.is_empty());
        assert_eq!(world.dino.x, 50);
        assert!(world.dino.on_the_ground());
    }

    #[test]
    fn test_spawn_stone_size_and_position() {
        let cfg = Config::default();
        let mut world = World::new(cfg);
        let mut rng = ChaCha8Rng::seed_from_u64(12345);

        for _ in 0..50 {
            world.spawn_stone(&mut rng);
        }

        assert_eq!(world.stones.len(), 50);
        for stone in &world.stones {
            assert!(stone.size >= cfg.stone_size_min);
            assert!(stone.size < cfg.stone_size_max);
            assert_eq!(stone.x, cfg.screen_width + stone.size);
        }
    }
}
