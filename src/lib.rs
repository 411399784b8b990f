//! Badge Pong - a two-paddle Pong core for small fixed-size displays
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, frame driver)
//! - `input`: Button snapshot to paddle signal mapping
//! - `renderer`: Render-facing scene snapshot (drawing is up to the host)
//! - `platform`: Frame pacing helpers for the host loop
//! - `settings`: Construction-time configuration

pub mod error;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use input::{Button, ButtonState, Controls, PaddleControls, PaddleInput};
pub use settings::GameConfig;

/// Game configuration constants
pub mod consts {
    /// Display dimensions of the badge
    pub const SCREEN_WIDTH: i32 = 160;
    pub const SCREEN_HEIGHT: i32 = 128;

    /// Simulation ticks per second
    pub const TICK_RATE: u32 = 60;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 5;
    pub const PADDLE_HEIGHT: i32 = 30;
    /// Gap between the left paddle and the left screen edge
    pub const LEFT_PADDLE_X: i32 = 1;
    /// Gap kept between the right paddle and the right/bottom edges
    pub const RIGHT_PADDLE_MARGIN: i32 = 6;

    /// Ball defaults
    pub const BALL_DIAMETER: i32 = 3;
}
