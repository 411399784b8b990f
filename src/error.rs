//! Configuration errors
//!
//! The simulation itself never fails once built; everything that can go wrong
//! is caught when a [`GameConfig`](crate::GameConfig) is turned into a
//! [`GameState`](crate::sim::GameState), or when a saved state is restored.

use crate::sim::Side;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("screen must be at least 1x1, got {width}x{height}")]
    EmptyScreen { width: i32, height: i32 },

    #[error("tick rate must be positive")]
    ZeroTickRate,

    #[error("{side} paddle must have a positive size, got {width}x{height}")]
    EmptyPaddle { side: Side, width: i32, height: i32 },

    #[error("{side} paddle is {height} tall but the screen is only {screen_height}")]
    PaddleTooTall {
        side: Side,
        height: i32,
        screen_height: i32,
    },

    #[error("{side} paddle start ({x}, {y}) is outside the screen")]
    PaddleOutOfBounds { side: Side, x: i32, y: i32 },

    #[error("ball diameter must be positive, got {0}")]
    EmptyBall(i32),

    #[error("ball diameter {diameter} leaves no vertical room on a {screen_height} tall screen")]
    BallTooLarge { diameter: i32, screen_height: i32 },

    #[error("ball start ({x}, {y}) is outside the playfield")]
    BallOutOfBounds { x: i32, y: i32 },

    #[error("paddles overlap: left contact column {left} is not left of right contact column {right}")]
    PaddlesOverlap { left: i32, right: i32 },

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(&'static str),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
