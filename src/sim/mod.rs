//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Integer positions, one unit of motion per tick
//! - Paddles update before the ball every tick
//! - No rendering, timing or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use state::{Ball, GameEvent, GameState, Paddle, PaddleMotion, Playfield, Side, Wall};
pub use tick::{TickInput, autopilot_input, tick};
