//! Read-only draw pass
//!
//! Rendering never mutates simulation state. The drawing surface is behind a
//! trait so the simulation can be drawn to the browser canvas, a test
//! recorder, or nothing at all.

use crate::sim::{GameState, Rect};

/// Player fill color
pub const PLAYER_COLOR: &str = "blue";
/// Obstacle fill color
pub const OBSTACLE_COLOR: &str = "red";
/// Gem fill color
pub const GEM_COLOR: &str = "yellow";

/// A 2D surface that can be cleared and filled with rectangles.
pub trait DrawSurface {
    /// Clear the region from the origin to (width, height)
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, rect: &Rect, color: &str);
}

/// Draw one frame: clear, then player, obstacles, gems in fixed z-order.
pub fn draw(state: &GameState, surface: &mut impl DrawSurface) {
    surface.clear(state.config.canvas_width, state.config.canvas_height);

    surface.fill_rect(&state.player.rect(), PLAYER_COLOR);
    for obstacle in &state.obstacles {
        surface.fill_rect(&obstacle.rect(), OBSTACLE_COLOR);
    }
    for gem in &state.gems {
        surface.fill_rect(&gem.rect(), GEM_COLOR);
    }
}

/// The browser canvas 2D context as a [`DrawSurface`].
#[cfg(target_arch = "wasm32")]
pub struct CanvasSurface {
    ctx: web_sys::CanvasRenderingContext2d,
}

#[cfg(target_arch = "wasm32")]
impl CanvasSurface {
    pub fn new(ctx: web_sys::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

#[cfg(target_arch = "wasm32")]
impl DrawSurface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, rect: &Rect, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(
            rect.pos.x as f64,
            rect.pos.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::Falling;
    use glam::Vec2;

    #[derive(Debug, PartialEq)]
    enum Op {
        Clear(f32, f32),
        Fill(Rect, String),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl DrawSurface for Recorder {
        fn clear(&mut self, width: f32, height: f32) {
            self.ops.push(Op::Clear(width, height));
        }

        fn fill_rect(&mut self, rect: &Rect, color: &str) {
            self.ops.push(Op::Fill(*rect, color.to_string()));
        }
    }

    #[test]
    fn test_draw_order_and_colors() {
        let mut state = GameState::new(GameConfig::default(), 3);
        state.obstacles.push(Falling {
            pos: Vec2::new(10.0, 50.0),
            size: Vec2::new(50.0, 30.0),
            speed: 3.0,
        });
        state.gems.push(Falling {
            pos: Vec2::new(200.0, 80.0),
            size: Vec2::splat(20.0),
            speed: 2.0,
        });

        let mut surface = Recorder::default();
        draw(&state, &mut surface);

        assert_eq!(surface.ops.len(), 4);
        assert_eq!(surface.ops[0], Op::Clear(400.0, 600.0));
        assert_eq!(surface.ops[1], Op::Fill(state.player.rect(), PLAYER_COLOR.to_string()));
        assert_eq!(
            surface.ops[2],
            Op::Fill(state.obstacles[0].rect(), OBSTACLE_COLOR.to_string())
        );
        assert_eq!(surface.ops[3], Op::Fill(state.gems[0].rect(), GEM_COLOR.to_string()));
    }

    #[test]
    fn test_draw_does_not_mutate_state() {
        let state = GameState::new(GameConfig::default(), 3);
        let player_pos = state.player.pos;
        let mut surface = Recorder::default();
        draw(&state, &mut surface);
        assert_eq!(state.player.pos, player_pos);
        assert_eq!(state.score, 0);
    }
}
