//! Fixed-step simulation tick
//!
//! The frame driver: advances both paddles, then the ball.

use serde::{Deserialize, Serialize};

use super::state::{Ball, GameEvent, GameState, Paddle};
use crate::input::PaddleInput;

/// Resolved input signals for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: PaddleInput,
    pub right: PaddleInput,
}

/// How far the ball may drift from a paddle's center before the autopilot reacts
const AUTOPILOT_DEADZONE: i32 = 2;

/// Advance the game state by one tick
///
/// Paddles go first so that the ball sees this tick's paddle motion when it
/// resolves hits.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    state.time_ticks += 1;

    state.left.update(input.left.move_up, input.left.move_down);
    state.right.update(input.right.move_up, input.right.move_down);

    let events = state.ball.update(&state.left, &state.right);
    for event in &events {
        log::debug!("tick {}: {:?}", state.time_ticks, event);
    }
    events
}

/// Input that keeps both paddles centered on the ball (demo mode)
pub fn autopilot_input(state: &GameState) -> TickInput {
    TickInput {
        left: track_ball(&state.left, &state.ball),
        right: track_ball(&state.right, &state.ball),
    }
}

fn track_ball(paddle: &Paddle, ball: &Ball) -> PaddleInput {
    let delta = ball.y - paddle.center_y();
    if delta < -AUTOPILOT_DEADZONE {
        PaddleInput::up()
    } else if delta > AUTOPILOT_DEADZONE {
        PaddleInput::down()
    } else {
        PaddleInput::IDLE
    }
}
