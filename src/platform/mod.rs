//! Platform helpers for the host loop
//!
//! Handles timing concerns that stay outside the simulation:
//! - Deciding when the next tick is due

pub mod time;

pub use time::FramePacer;
