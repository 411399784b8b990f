//! Game state and core simulation types
//!
//! Two paddles and a ball on an integer grid. Everything moves one unit per
//! tick, which is what lets the collision checks in [`super::collision`] use
//! exact equality.

use std::fmt;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision;
use crate::error::ConfigError;
use crate::renderer::Scene;
use crate::settings::{BallConfig, GameConfig, PaddleConfig, ScreenConfig};

/// Screen dimensions every entity is bounded by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: i32,
    pub height: i32,
}

impl Playfield {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Which half of the screen a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal walls the ball bounces off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Top,
    Bottom,
}

/// How a paddle moved during its most recent update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleMotion {
    Up,
    Down,
    Still,
}

/// Something noteworthy that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball left the playfield through this side and was put back at its start
    BallReset { exited: Side },
    /// Ball sat exactly on a wall and its vertical step was reversed
    WallBounce { wall: Wall },
    /// Ball struck a paddle face
    PaddleHit { side: Side, motion: PaddleMotion },
}

/// A player paddle. Only moves vertically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub width: i32,
    pub height: i32,
    pub x: i32,
    pub y: i32,
    /// `y` before the most recent update
    pub prev_y: i32,
    field: Playfield,
}

impl Paddle {
    pub fn new(width: i32, height: i32, x: i32, y: i32, field: Playfield) -> Self {
        Self {
            width,
            height,
            x,
            y,
            prev_y: y,
            field,
        }
    }

    pub fn from_config(config: &PaddleConfig, field: Playfield) -> Self {
        Self::new(config.width, config.height, config.x, config.y, field)
    }

    /// Lowest `y` the paddle can reach
    #[inline]
    pub fn max_y(&self) -> i32 {
        self.field.height - self.height
    }

    /// Advance one tick.
    ///
    /// Up wins when both signals are held; down is only considered when the
    /// up move did not happen, either because it was not requested or the
    /// paddle already sits against the top edge. Holding both buttons does
    /// not cancel out to a standstill: an up move always covers a full row.
    pub fn update(&mut self, move_up: bool, move_down: bool) {
        self.prev_y = self.y;
        if move_up && self.y > 0 {
            self.y -= 1;
        } else if move_down && self.y < self.max_y() {
            self.y += 1;
        }
    }

    pub fn motion(&self) -> PaddleMotion {
        match self.prev_y.cmp(&self.y) {
            std::cmp::Ordering::Greater => PaddleMotion::Up,
            std::cmp::Ordering::Less => PaddleMotion::Down,
            std::cmp::Ordering::Equal => PaddleMotion::Still,
        }
    }

    pub fn pos(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Row of the vertical center, used by the autopilot
    pub fn center_y(&self) -> i32 {
        self.y + self.height / 2
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub diameter: i32,
    pub x: i32,
    pub y: i32,
    pub start_x: i32,
    pub start_y: i32,
    pub going_right: bool,
    /// Vertical step applied every tick, kept within -1..=1
    pub y_offset: i32,
    field: Playfield,
}

impl Ball {
    pub fn new(diameter: i32, start_x: i32, start_y: i32, field: Playfield) -> Self {
        Self {
            diameter,
            x: start_x,
            y: start_y,
            start_x,
            start_y,
            going_right: true,
            y_offset: 0,
            field,
        }
    }

    pub fn from_config(config: &BallConfig, field: Playfield) -> Self {
        Self::new(config.diameter, config.start_x, config.start_y, field)
    }

    /// Row that triggers the bottom wall bounce
    #[inline]
    pub fn bottom_wall(&self) -> i32 {
        self.field.height - (self.diameter + 1) * 2
    }

    /// Column at or past which the ball has left through the right side
    #[inline]
    pub fn right_exit(&self) -> i32 {
        self.field.width - self.diameter
    }

    pub fn pos(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    pub fn start(&self) -> IVec2 {
        IVec2::new(self.start_x, self.start_y)
    }

    /// Put the ball back at its start point. Direction and offset are kept.
    pub fn reset(&mut self) {
        self.x = self.start_x;
        self.y = self.start_y;
    }

    /// Advance one tick.
    ///
    /// Both paddles must already have been updated this tick: the paddle hit
    /// reads their `prev_y` to decide which way to nudge the offset.
    pub fn update(&mut self, left: &Paddle, right: &Paddle) -> Vec<GameEvent> {
        let mut events = Vec::new();

        self.x += if self.going_right { 1 } else { -1 };
        // Clamp keeps the ball on the wall row even if a paddle hit just
        // pointed the offset back into the wall
        self.y = (self.y + self.y_offset).clamp(0, self.bottom_wall());

        if let Some(exited) = collision::exit_side(self.x, self.right_exit()) {
            self.reset();
            events.push(GameEvent::BallReset { exited });
        }

        if let Some(wall) = collision::wall_contact(self.y, self.bottom_wall()) {
            self.y_offset = -self.y_offset;
            events.push(GameEvent::WallBounce { wall });
        }

        if collision::hits_left_paddle(self.x, self.y, left) {
            let motion = left.motion();
            self.y_offset = collision::apply_english(self.y_offset, motion);
            self.going_right = true;
            events.push(GameEvent::PaddleHit {
                side: Side::Left,
                motion,
            });
        }

        if collision::hits_right_paddle(self.x, self.y, right) {
            let motion = right.motion();
            self.y_offset = collision::apply_english(self.y_offset, motion);
            self.going_right = false;
            events.push(GameEvent::PaddleHit {
                side: Side::Right,
                motion,
            });
        }

        events
    }
}

/// Complete game state, owned by the frame driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub field: Playfield,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Build the entities described by a validated config
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let field = Playfield::new(config.screen.width, config.screen.height);
        let state = Self {
            field,
            left: Paddle::from_config(&config.left_paddle, field),
            right: Paddle::from_config(&config.right_paddle, field),
            ball: Ball::from_config(&config.ball, field),
            time_ticks: 0,
        };
        log::info!(
            "New game on {}x{} screen, ball starting at {}",
            field.width,
            field.height,
            state.ball.start()
        );
        Ok(state)
    }

    /// Serialize the whole state for a later [`GameState::from_snapshot`]
    pub fn to_snapshot(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Restore a saved state, rejecting snapshots that break the bounds a
    /// running game keeps
    pub fn from_snapshot(json: &str) -> Result<Self, ConfigError> {
        let state: Self = serde_json::from_str(json)?;
        state.check_bounds()?;
        log::info!("Restored game at tick {}", state.time_ticks);
        Ok(state)
    }

    fn check_bounds(&self) -> Result<(), ConfigError> {
        let fields = [self.left.field, self.right.field, self.ball.field];
        if fields.iter().any(|field| *field != self.field) {
            return Err(ConfigError::InvalidSnapshot(
                "entities disagree on the screen size",
            ));
        }
        // Geometry first: the row/column checks below rely on it
        self.layout().validate()?;

        for paddle in [&self.left, &self.right] {
            if !(0..=paddle.max_y()).contains(&paddle.prev_y) {
                return Err(ConfigError::InvalidSnapshot(
                    "paddle previous row is off screen",
                ));
            }
        }

        let ball = &self.ball;
        if ball.x <= 0 || ball.x >= ball.right_exit() {
            return Err(ConfigError::InvalidSnapshot(
                "ball column is outside the playfield",
            ));
        }
        if !(0..=ball.bottom_wall()).contains(&ball.y) {
            return Err(ConfigError::InvalidSnapshot("ball row is outside the walls"));
        }
        if !(-1..=1).contains(&ball.y_offset) {
            return Err(ConfigError::InvalidSnapshot(
                "ball vertical step is larger than one",
            ));
        }
        Ok(())
    }

    /// Entity geometry as a config, with the current paddle rows as start rows
    fn layout(&self) -> GameConfig {
        let paddle = |p: &Paddle| PaddleConfig {
            width: p.width,
            height: p.height,
            x: p.x,
            y: p.y,
        };
        GameConfig {
            screen: ScreenConfig {
                width: self.field.width,
                height: self.field.height,
            },
            left_paddle: paddle(&self.left),
            right_paddle: paddle(&self.right),
            ball: BallConfig {
                diameter: self.ball.diameter,
                start_x: self.ball.start_x,
                start_y: self.ball.start_y,
            },
            ..GameConfig::default()
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// What the renderer should draw this frame
    pub fn scene(&self) -> Scene {
        Scene::from_state(self)
    }
}
