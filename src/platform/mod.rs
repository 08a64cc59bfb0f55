//! Platform abstraction layer
//!
//! Handles the native window side of things:
//! - Keyboard state (winit events folded into a pollable snapshot)
//! - Wall-clock frame timing

pub mod input;
pub mod time;

pub use input::KeyboardState;
pub use time::FrameClock;
