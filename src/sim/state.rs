//! Game state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::GameConfig;

use super::collision::Rect;

/// The player's avatar
///
/// Single instance, owned by [`GameState`]; mutated only by the update pass.
/// Never destroyed - once the game is over it simply freezes in place.
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    /// Movement speed in pixels per simulation step
    pub speed: f32,
}

impl Player {
    /// Spawn position: horizontally centered, two body-heights above the floor
    pub fn new(config: &GameConfig) -> Self {
        let size = Vec2::splat(config.player_size);
        Self {
            pos: Vec2::new(
                config.canvas_width / 2.0 - size.x / 2.0,
                config.canvas_height - size.y * 2.0,
            ),
            size,
            speed: config.player_speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// A falling entity (obstacle or gem)
///
/// Spawned fully above the visible area so it enters from off-screen-top,
/// giving the player reaction time proportional to its fall speed.
#[derive(Debug, Clone)]
pub struct Falling {
    pub pos: Vec2,
    pub size: Vec2,
    /// Per-instance fall speed, drawn at spawn time
    pub speed: f32,
}

impl Falling {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// Off-screen once the top edge has passed the bottom canvas bound
    pub fn is_off_screen(&self, canvas_height: f32) -> bool {
        self.pos.y > canvas_height
    }
}

/// Notifications the update pass reports back to the host
///
/// The host owns the score display and game-over display; the simulation
/// only says what happened this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A gem was collected; carries the new total score
    ScoreChanged(u64),
    /// The player hit an obstacle; emitted exactly once per game
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub player: Player,
    pub obstacles: Vec<Falling>,
    pub gems: Vec<Falling>,
    /// Monotonically non-decreasing; only gem collection changes it
    pub score: u64,
    /// Transitions false -> true at most once; never back
    pub game_over: bool,
    /// Run seed, kept for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh game with the given configuration and RNG seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let player = Player::new(&config);
        Self {
            config,
            player,
            obstacles: Vec::new(),
            gems: Vec::new(),
            score: 0,
            game_over: false,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_clean() {
        let state = GameState::new(GameConfig::default(), 7);
        assert_eq!(state.score, 0);
        assert!(!state.game_over);
        assert!(state.obstacles.is_empty());
        assert!(state.gems.is_empty());
    }

    #[test]
    fn test_player_spawn_position() {
        let state = GameState::new(GameConfig::default(), 7);
        // Centered horizontally: 400/2 - 40/2 = 180
        assert_eq!(state.player.pos.x, 180.0);
        // Two body-heights above the floor: 600 - 80 = 520
        assert_eq!(state.player.pos.y, 520.0);
    }

    #[test]
    fn test_off_screen() {
        let gem = Falling {
            pos: Vec2::new(10.0, 601.0),
            size: Vec2::splat(20.0),
            speed: 2.0,
        };
        assert!(gem.is_off_screen(600.0));
        assert!(!gem.is_off_screen(700.0));
    }
}
