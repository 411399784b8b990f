//! Button mapping
//!
//! The host polls the badge buttons and hands over a [`ButtonState`]; the
//! [`Controls`] mapping turns that into the two boolean signals each paddle
//! understands.

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Physical buttons on the badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    Select,
    Start,
    Up,
    Down,
    Left,
    Right,
    A,
    B,
}

impl Button {
    pub const ALL: [Button; 8] = [
        Button::Select,
        Button::Start,
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::A,
        Button::B,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Button::Select => "select",
            Button::Start => "start",
            Button::Up => "up",
            Button::Down => "down",
            Button::Left => "left",
            Button::Right => "right",
            Button::A => "a",
            Button::B => "b",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.to_lowercase();
        Self::ALL.into_iter().find(|b| b.as_str() == s)
    }

    #[inline]
    fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

/// Snapshot of which buttons are held this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    bits: u8,
}

impl ButtonState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from the buttons currently held
    pub fn from_pressed(pressed: impl IntoIterator<Item = Button>) -> Self {
        let mut state = Self::new();
        for button in pressed {
            state.set(button, true);
        }
        state
    }

    pub fn set(&mut self, button: Button, pressed: bool) {
        if pressed {
            self.bits |= button.mask();
        } else {
            self.bits &= !button.mask();
        }
    }

    pub fn with(mut self, button: Button) -> Self {
        self.set(button, true);
        self
    }

    #[inline]
    pub fn is_pressed(&self, button: Button) -> bool {
        self.bits & button.mask() != 0
    }
}

/// Resolved per-tick signals for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleInput {
    pub move_up: bool,
    pub move_down: bool,
}

impl PaddleInput {
    pub const IDLE: Self = Self {
        move_up: false,
        move_down: false,
    };

    pub fn up() -> Self {
        Self {
            move_up: true,
            move_down: false,
        }
    }

    pub fn down() -> Self {
        Self {
            move_up: false,
            move_down: true,
        }
    }
}

/// Which two buttons drive one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleControls {
    pub up: Button,
    pub down: Button,
}

impl PaddleControls {
    pub fn new(up: Button, down: Button) -> Self {
        Self { up, down }
    }

    pub fn resolve(&self, buttons: &ButtonState) -> PaddleInput {
        PaddleInput {
            move_up: buttons.is_pressed(self.up),
            move_down: buttons.is_pressed(self.down),
        }
    }
}

/// Button bindings for both paddles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub left: PaddleControls,
    pub right: PaddleControls,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            left: PaddleControls::new(Button::Select, Button::Down),
            right: PaddleControls::new(Button::Start, Button::B),
        }
    }
}

impl Controls {
    pub fn resolve(&self, buttons: &ButtonState) -> TickInput {
        TickInput {
            left: self.left.resolve(buttons),
            right: self.right.resolve(buttons),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_names_round_trip() {
        for button in Button::ALL {
            assert_eq!(Button::from_str(button.as_str()), Some(button));
        }
        assert_eq!(Button::from_str("SELECT"), Some(Button::Select));
        assert_eq!(Button::from_str("menu"), None);
    }

    #[test]
    fn test_button_state_set_and_clear() {
        let mut state = ButtonState::new().with(Button::A).with(Button::Down);
        assert!(state.is_pressed(Button::A));
        assert!(state.is_pressed(Button::Down));
        assert!(!state.is_pressed(Button::Up));

        state.set(Button::A, false);
        assert!(!state.is_pressed(Button::A));
        assert!(state.is_pressed(Button::Down));
    }

    #[test]
    fn test_default_bindings() {
        let controls = Controls::default();

        let input = controls.resolve(&ButtonState::from_pressed([Button::Select, Button::B]));
        assert_eq!(input.left, PaddleInput::up());
        assert_eq!(input.right, PaddleInput::down());

        let input = controls.resolve(&ButtonState::from_pressed([Button::Down, Button::Start]));
        assert_eq!(input.left, PaddleInput::down());
        assert_eq!(input.right, PaddleInput::up());

        // Unbound buttons do nothing
        let input = controls.resolve(&ButtonState::from_pressed([Button::Up, Button::A]));
        assert_eq!(input.left, PaddleInput::IDLE);
        assert_eq!(input.right, PaddleInput::IDLE);
    }

    #[test]
    fn test_both_directions_held() {
        let controls = PaddleControls::new(Button::Up, Button::Down);
        let input = controls.resolve(&ButtonState::from_pressed([Button::Up, Button::Down]));
        assert!(input.move_up);
        assert!(input.move_down);
    }

    #[test]
    fn test_controls_deserialize_lowercase_names() {
        let json = r#"{"left":{"up":"up","down":"down"},"right":{"up":"a","down":"b"}}"#;
        let controls: Controls = serde_json::from_str(json).unwrap();
        assert_eq!(controls.left, PaddleControls::new(Button::Up, Button::Down));
        assert_eq!(controls.right, PaddleControls::new(Button::A, Button::B));
    }
}
