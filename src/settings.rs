//! Game configuration
//!
//! Consumed once when the [`GameState`](crate::sim::GameState) is built and
//! immutable afterwards. Loaded from JSON; any missing field falls back to
//! the badge defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::input::Controls;
use crate::sim::Side;

/// Display dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
        }
    }
}

/// Geometry and start position of one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleConfig {
    pub width: i32,
    pub height: i32,
    pub x: i32,
    pub y: i32,
}

/// Ball size and reset point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallConfig {
    pub diameter: i32,
    pub start_x: i32,
    pub start_y: i32,
}

/// Full game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen: ScreenConfig,
    /// Simulation ticks per second (used by the host loop only)
    pub tick_rate: u32,
    pub left_paddle: PaddleConfig,
    pub right_paddle: PaddleConfig,
    pub ball: BallConfig,
    pub controls: Controls,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::for_screen(SCREEN_WIDTH, SCREEN_HEIGHT)
    }
}

impl GameConfig {
    /// Standard layout for a screen of the given size: left paddle against the
    /// left edge at the top, right paddle near the bottom right corner, ball
    /// starting in the middle.
    pub fn for_screen(width: i32, height: i32) -> Self {
        Self {
            screen: ScreenConfig { width, height },
            tick_rate: TICK_RATE,
            left_paddle: PaddleConfig {
                width: PADDLE_WIDTH,
                height: PADDLE_HEIGHT,
                x: LEFT_PADDLE_X,
                y: 0,
            },
            right_paddle: PaddleConfig {
                width: PADDLE_WIDTH,
                height: PADDLE_HEIGHT,
                x: width - RIGHT_PADDLE_MARGIN,
                y: height - PADDLE_HEIGHT - RIGHT_PADDLE_MARGIN,
            },
            ball: BallConfig {
                diameter: BALL_DIAMETER,
                start_x: width / 2,
                start_y: height / 2,
            },
            controls: Controls::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn paddle(&self, side: Side) -> &PaddleConfig {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }

    /// Time between two ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate.max(1) as f64)
    }

    /// Lowest row the ball may occupy before bouncing off the bottom wall.
    /// `None` when the diameter is too large to compute it.
    pub fn ball_bottom(&self) -> Option<i32> {
        let span = self.ball.diameter.checked_add(1)?.checked_mul(2)?;
        self.screen.height.checked_sub(span)
    }

    /// Reject layouts the simulation cannot run sensibly
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ScreenConfig { width, height } = self.screen;
        if width <= 0 || height <= 0 {
            return Err(ConfigError::EmptyScreen { width, height });
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        for side in [Side::Left, Side::Right] {
            let paddle = self.paddle(side);
            if paddle.width <= 0 || paddle.height <= 0 {
                return Err(ConfigError::EmptyPaddle {
                    side,
                    width: paddle.width,
                    height: paddle.height,
                });
            }
            if paddle.height > height {
                return Err(ConfigError::PaddleTooTall {
                    side,
                    height: paddle.height,
                    screen_height: height,
                });
            }
            // Sizes are positive and bounded by the screen here, so the
            // subtractions below cannot overflow
            let x_ok =
                paddle.x >= 0 && paddle.width <= width && paddle.x <= width - paddle.width;
            let y_ok = paddle.y >= 0 && paddle.y <= height - paddle.height;
            if !x_ok || !y_ok {
                return Err(ConfigError::PaddleOutOfBounds {
                    side,
                    x: paddle.x,
                    y: paddle.y,
                });
            }
        }

        let ball = &self.ball;
        if ball.diameter <= 0 {
            return Err(ConfigError::EmptyBall(ball.diameter));
        }
        let bottom = match self.ball_bottom() {
            Some(bottom) if bottom > 0 && ball.diameter < width => bottom,
            _ => {
                return Err(ConfigError::BallTooLarge {
                    diameter: ball.diameter,
                    screen_height: height,
                });
            }
        };
        // A start column on or past either exit would reset forever
        let x_ok = ball.start_x > 0 && ball.start_x < width - ball.diameter;
        let y_ok = ball.start_y >= 0 && ball.start_y <= bottom;
        if !x_ok || !y_ok {
            return Err(ConfigError::BallOutOfBounds {
                x: ball.start_x,
                y: ball.start_y,
            });
        }

        let left = self.left_paddle.x + self.left_paddle.width;
        let right = self.right_paddle.x - self.right_paddle.width;
        if left >= right {
            return Err(ConfigError::PaddlesOverlap { left, right });
        }

        Ok(())
    }
}
