//! Frame loop state machine
//!
//! [`GameLoop`] decouples the simulation from any particular scheduling
//! primitive: the browser drives it from `requestAnimationFrame`, the native
//! binary from a plain loop, and tests tick it explicitly. The loop runs
//! until the terminal state and never leaves it.

use super::state::{GameEvent, GameState};
use super::tick::{InputState, update};

/// Loop phase: `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    Running,
    Stopped,
}

/// Drives one simulation frame at a time and stops on game over.
#[derive(Debug)]
pub struct GameLoop {
    phase: LoopPhase,
}

impl GameLoop {
    pub fn new() -> Self {
        Self {
            phase: LoopPhase::Running,
        }
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    /// Whether the host should schedule another frame after this one.
    pub fn is_running(&self) -> bool {
        self.phase == LoopPhase::Running
    }

    /// Run one frame of simulation.
    ///
    /// Transitions to `Stopped` when the game ends; the host still renders
    /// the final frame after that, then stops rescheduling. Once stopped,
    /// further calls do nothing and report no events.
    pub fn frame(&mut self, state: &mut GameState, input: &InputState) -> Vec<GameEvent> {
        if self.phase == LoopPhase::Stopped {
            return Vec::new();
        }
        let events = update(state, input);
        if state.game_over {
            self.phase = LoopPhase::Stopped;
        }
        events
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::Falling;
    use glam::Vec2;

    #[test]
    fn test_runs_until_game_over() {
        let mut state = GameState::new(GameConfig::default(), 5);
        let mut game_loop = GameLoop::new();
        assert!(game_loop.is_running());

        let events = game_loop.frame(&mut state, &InputState::default());
        assert!(events.is_empty());
        assert!(game_loop.is_running());
    }

    #[test]
    fn test_stops_on_collision_and_stays_stopped() {
        let mut state = GameState::new(GameConfig::default(), 5);
        let mut game_loop = GameLoop::new();

        state.obstacles.push(Falling {
            pos: Vec2::new(180.0, state.player.pos.y),
            size: Vec2::new(50.0, 30.0),
            speed: 1.0,
        });
        let events = game_loop.frame(&mut state, &InputState::default());
        assert_eq!(events, vec![GameEvent::GameOver]);
        assert_eq!(game_loop.phase(), LoopPhase::Stopped);

        // Terminal: further frames report nothing and change nothing.
        let score = state.score;
        let events = game_loop.frame(&mut state, &InputState::default());
        assert!(events.is_empty());
        assert_eq!(state.score, score);
        assert!(!game_loop.is_running());
    }
}
