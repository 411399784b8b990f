//! Shapes published to the renderer each frame

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Ball, GameState, Paddle};

/// Filled rectangle, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RectShape {
    pub pos: IVec2,
    pub size: IVec2,
}

impl RectShape {
    pub fn from_paddle(paddle: &Paddle) -> Self {
        Self {
            pos: paddle.pos(),
            size: IVec2::new(paddle.width, paddle.height),
        }
    }
}

/// Filled circle at the ball's published position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircleShape {
    pub pos: IVec2,
    pub diameter: i32,
}

impl CircleShape {
    pub fn from_ball(ball: &Ball) -> Self {
        Self {
            pos: ball.pos(),
            diameter: ball.diameter,
        }
    }
}

/// Everything the display needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub screen: IVec2,
    pub left_paddle: RectShape,
    pub right_paddle: RectShape,
    pub ball: CircleShape,
}

impl Scene {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            screen: IVec2::new(state.field.width, state.field.height),
            left_paddle: RectShape::from_paddle(&state.left),
            right_paddle: RectShape::from_paddle(&state.right),
            ball: CircleShape::from_ball(&state.ball),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PaddleInput;
    use crate::settings::GameConfig;
    use crate::sim::{TickInput, tick};

    #[test]
    fn test_scene_follows_state() {
        let mut state = GameState::new(&GameConfig::default()).unwrap();
        let input = TickInput {
            left: PaddleInput::down(),
            right: PaddleInput::IDLE,
        };
        tick(&mut state, &input);

        let scene = state.scene();
        assert_eq!(scene.screen, IVec2::new(160, 128));
        assert_eq!(scene.left_paddle.pos, IVec2::new(1, 1));
        assert_eq!(scene.left_paddle.size, IVec2::new(5, 30));
        assert_eq!(scene.right_paddle.pos, IVec2::new(154, 92));
        assert_eq!(scene.ball.pos, IVec2::new(81, 64));
        assert_eq!(scene.ball.diameter, 3);
    }
}
