//! Gem Dash - a falling-obstacle dodge-and-collect arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, scoring)
//! - `render`: Read-only draw pass over an abstract 2D surface
//! - `config`: Startup-time game configuration
//!
//! The simulation is pure: the host (browser or the native headless driver)
//! owns scheduling, input events, and the drawing surface; `sim` consumes an
//! input snapshot per frame and reports notifications back as events.

pub mod config;
pub mod render;
pub mod sim;

pub use config::GameConfig;
