//! Periodic entity spawning
//!
//! The host calls these on its two spawn timers. Randomness comes from the
//! RNG owned by [`GameState`], so a seeded state replays the exact same
//! spawn sequence.

use glam::Vec2;
use rand::Rng;

use super::state::{Falling, GameState};

/// Spawn one obstacle fully above the visible area at a random x,
/// with an integer fall speed drawn from the configured range.
pub fn spawn_obstacle(state: &mut GameState) {
    let size = Vec2::new(state.config.obstacle_width, state.config.obstacle_height);
    let speed_range = state.config.obstacle_speed.clone();
    let obstacle = spawn_falling(state, size, speed_range);
    state.obstacles.push(obstacle);
}

/// Spawn one gem, same shape as [`spawn_obstacle`] but with gem size and
/// the gem speed range.
pub fn spawn_gem(state: &mut GameState) {
    let size = Vec2::splat(state.config.gem_size);
    let speed_range = state.config.gem_speed.clone();
    let gem = spawn_falling(state, size, speed_range);
    state.gems.push(gem);
}

fn spawn_falling(
    state: &mut GameState,
    size: Vec2,
    speed_range: std::ops::RangeInclusive<u32>,
) -> Falling {
    let x = state.rng.random_range(0.0..state.config.canvas_width - size.x);
    let speed = state.rng.random_range(speed_range) as f32;
    Falling {
        // y = -height: the entity enters from fully off-screen-top
        pos: Vec2::new(x, -size.y),
        size,
        speed,
    }
}
