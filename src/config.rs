//! Game configuration
//!
//! All tunables are fixed at startup and passed into [`GameState::new`]
//! (`crate::sim::GameState::new`) rather than living as process-wide
//! globals, so tests and multiple game instances can each carry their own.

use std::ops::RangeInclusive;

/// Startup-time game configuration (canvas geometry, entity sizes, speeds).
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Canvas width in pixels
    pub canvas_width: f32,
    /// Canvas height in pixels
    pub canvas_height: f32,
    /// Player square side length
    pub player_size: f32,
    /// Player movement speed (pixels per simulation step)
    pub player_speed: f32,
    /// Obstacle width
    pub obstacle_width: f32,
    /// Obstacle height
    pub obstacle_height: f32,
    /// Gem square side length
    pub gem_size: f32,
    /// Obstacle fall speed range, integer pixels per step
    pub obstacle_speed: RangeInclusive<u32>,
    /// Gem fall speed range, integer pixels per step
    pub gem_speed: RangeInclusive<u32>,
    /// Score awarded per collected gem
    pub gem_score: u64,
    /// Obstacle spawn period in milliseconds
    pub obstacle_spawn_ms: u32,
    /// Gem spawn period in milliseconds
    pub gem_spawn_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 400.0,
            canvas_height: 600.0,
            player_size: 40.0,
            player_speed: 5.0,
            obstacle_width: 50.0,
            obstacle_height: 30.0,
            gem_size: 20.0,
            obstacle_speed: 3..=7,
            gem_speed: 2..=5,
            gem_score: 10,
            obstacle_spawn_ms: 1000,
            gem_spawn_ms: 3000,
        }
    }
}

impl GameConfig {
    /// Configuration for a custom canvas size (all other tunables default)
    pub fn with_canvas(width: f32, height: f32) -> Self {
        Self {
            canvas_width: width,
            canvas_height: height,
            ..Default::default()
        }
    }
}
