//! Polled keyboard state
//!
//! winit only delivers key events; the game wants to ask "is Left held right
//! now". `KeyboardState` folds the events into that answer.

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::sim::TickInput;

/// Keys the game cares about, held or not
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyboardState {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    quit: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a window key event into the snapshot
    pub fn handle_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(code) = event.physical_key {
            self.set(code, event.state == ElementState::Pressed);
        }
    }

    /// Record a key transition
    pub fn set(&mut self, code: KeyCode, pressed: bool) {
        match code {
            KeyCode::ArrowLeft => self.left = pressed,
            KeyCode::ArrowRight => self.right = pressed,
            KeyCode::ArrowUp => self.up = pressed,
            KeyCode::ArrowDown => self.down = pressed,
            // Quitting is a one-way latch
            KeyCode::KeyQ if pressed => self.quit = true,
            _ => {}
        }
    }

    /// Quit key seen since startup
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    /// Thruster keys as simulation input
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.left,
            right: self.right,
            up: self.up,
            down: self.down,
        }
    }

    /// Forget held keys, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.left = false;
        self.right = false;
        self.up = false;
        self.down = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut keys = KeyboardState::new();
        keys.set(KeyCode::ArrowLeft, true);
        keys.set(KeyCode::ArrowUp, true);
        assert_eq!(
            keys.tick_input(),
            TickInput {
                left: true,
                up: true,
                ..Default::default()
            }
        );

        keys.set(KeyCode::ArrowLeft, false);
        assert_eq!(
            keys.tick_input(),
            TickInput {
                up: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_quit_latches() {
        let mut keys = KeyboardState::new();
        assert!(!keys.quit_requested());
        keys.set(KeyCode::KeyQ, true);
        keys.set(KeyCode::KeyQ, false);
        assert!(keys.quit_requested());
    }

    #[test]
    fn test_unrelated_keys_ignored() {
        let mut keys = KeyboardState::new();
        keys.set(KeyCode::Space, true);
        keys.set(KeyCode::KeyW, true);
        assert_eq!(keys, KeyboardState::new());
    }

    #[test]
    fn test_release_all_keeps_quit() {
        let mut keys = KeyboardState::new();
        keys.set(KeyCode::ArrowDown, true);
        keys.set(KeyCode::KeyQ, true);
        keys.release_all();
        assert_eq!(keys.tick_input(), TickInput::default());
        assert!(keys.quit_requested());
    }
}
