//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only (owned by [`GameState`])
//! - Stable iteration order (reverse index order for removal passes)
//! - No rendering or platform dependencies

pub mod collision;
pub mod driver;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, rects_overlap};
pub use driver::{GameLoop, LoopPhase};
pub use spawn::{spawn_gem, spawn_obstacle};
pub use state::{Falling, GameEvent, GameState, Player};
pub use tick::{Direction, InputState, update};
