//! Platform abstraction layer
//!
//! Handles the pieces of the browser contract that can be expressed without
//! the browser:
//! - Frame timestamps to deltas
//! - Pointer position to player position

pub mod input;
pub mod time;

pub use input::{clamp_player_x, follow_pointer};
pub use time::FrameClock;
