//! Render-facing output
//!
//! The simulation only publishes positions and sizes; colors, fills and the
//! actual drawing belong to the host's display code.

pub mod shapes;

pub use shapes::{CircleShape, RectShape, Scene};
