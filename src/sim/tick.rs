//! Fixed timestep simulation tick
//!
//! Core game step that advances simulation deterministically.

use glam::Vec3;

use super::state::GameState;
use crate::consts::*;

/// Thruster keys held during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl TickInput {
    /// Acceleration chosen for the lander. One thruster at a time, first match
    /// wins (left, right, down, up); with no key held the lander drifts down.
    pub fn acceleration(&self) -> Vec3 {
        if self.left {
            Vec3::new(-THRUST, 0.0, 0.0)
        } else if self.right {
            Vec3::new(THRUST, 0.0, 0.0)
        } else if self.down {
            Vec3::new(0.0, -THRUST, 0.0)
        } else if self.up {
            Vec3::new(0.0, THRUST, 0.0)
        } else {
            Vec3::new(0.0, ACC_OF_GRAVITY * DRIFT_GRAVITY_SCALE, 0.0)
        }
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // A landed or crashed lander ignores its thrusters
    if state.player.is_active() {
        state.player.acceleration = input.acceleration();
    }

    state.time_ticks += 1;

    // Two independent passes; either may stop the lander and latch an outcome
    state.player.update(dt, &state.pillars);
    state.player.update(dt, &state.landings);
}
