//! Lunar Lander - a small 2D landing game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, fixed tick)
//! - `game`: Frame-level context object driving the simulation
//! - `renderer`: WebGPU textured-quad pipeline and bitmap-font text
//! - `platform`: Keyboard state and wall-clock timing
//! - `settings`: Window and asset configuration

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{AssetError, RenderInitError};
pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (~60 Hz)
    pub const FIXED_TIMESTEP: f32 = 0.0166666;

    /// Gravitational acceleration before scaling
    pub const ACC_OF_GRAVITY: f32 = -9.81;
    /// Gravity scale applied to the lander at spawn
    pub const SPAWN_GRAVITY_SCALE: f32 = 0.05;
    /// Gravity scale applied while no thruster key is held
    pub const DRIFT_GRAVITY_SCALE: f32 = 0.01;
    /// Acceleration produced by a thruster
    pub const THRUST: f32 = 0.1;

    pub const NUM_PILLARS: usize = 6;
    pub const NUM_LANDINGS: usize = 5;

    /// Glyph atlas is FONTBANK_SIZE x FONTBANK_SIZE cells
    pub const FONTBANK_SIZE: u32 = 16;

    /// Orthographic view half extents (world units)
    pub const VIEW_HALF_WIDTH: f32 = 5.0;
    pub const VIEW_HALF_HEIGHT: f32 = 3.75;

    pub const WINDOW_WIDTH: u32 = 960;
    pub const WINDOW_HEIGHT: u32 = 720;

    /// End-state banner layout
    pub const BANNER_GLYPH_SIZE: f32 = 0.5;
    pub const BANNER_SPACING: f32 = 0.01;
    pub const BANNER_ORIGIN: [f32; 3] = [-4.0, 0.0, 0.0];
}
