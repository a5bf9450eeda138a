//! Per-frame simulation step
//!
//! One [`update`] call advances the whole world by one frame: player
//! movement, obstacle pass, gem pass, in that order. The order matters for
//! determinism - collisions are always tested against the player's
//! post-movement position.

use super::collision::rects_overlap;
use super::state::{GameEvent, GameState};

/// The four tracked directional controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Map a DOM key identifier to a tracked direction.
    ///
    /// Returns `None` for every unrecognized key; the caller ignores those.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Which directional controls are currently held
///
/// Mutated by the host's key-event listeners, read-only to the simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl InputState {
    pub fn set_held(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
        }
    }
}

/// Advance the game by one frame.
///
/// Entirely a no-op once the game is over. Returns the notifications the
/// host should act on (score display updates, game-over display).
pub fn update(state: &mut GameState, input: &InputState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.game_over {
        return events;
    }

    // Player movement. Bounds are checked pre-move: a step that would leave
    // the canvas simply does not happen this frame.
    let max_x = state.config.canvas_width - state.player.size.x;
    let max_y = state.config.canvas_height - state.player.size.y;
    let player = &mut state.player;
    if input.left && player.pos.x - player.speed >= 0.0 {
        player.pos.x -= player.speed;
    }
    if input.right && player.pos.x + player.speed <= max_x {
        player.pos.x += player.speed;
    }
    if input.up && player.pos.y - player.speed >= 0.0 {
        player.pos.y -= player.speed;
    }
    if input.down && player.pos.y + player.speed <= max_y {
        player.pos.y += player.speed;
    }

    let player_rect = state.player.rect();

    // Obstacle pass. Reverse index order so in-place removal of element i
    // never skips evaluating element i-1.
    for i in (0..state.obstacles.len()).rev() {
        state.obstacles[i].pos.y += state.obstacles[i].speed;
        if state.obstacles[i].is_off_screen(state.config.canvas_height) {
            state.obstacles.remove(i);
        } else if rects_overlap(&player_rect, &state.obstacles[i].rect()) {
            // The colliding obstacle is left in place for the final frame.
            if !state.game_over {
                state.game_over = true;
                events.push(GameEvent::GameOver);
            }
        }
    }

    // Gem pass. Same reverse-order iteration; collected gems are consumed.
    for i in (0..state.gems.len()).rev() {
        state.gems[i].pos.y += state.gems[i].speed;
        if state.gems[i].is_off_screen(state.config.canvas_height) {
            state.gems.remove(i);
        } else if rects_overlap(&player_rect, &state.gems[i].rect()) {
            state.score += state.config.gem_score;
            events.push(GameEvent::ScoreChanged(state.score));
            state.gems.remove(i);
        }
    }

    events
}
