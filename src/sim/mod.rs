//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (lander, pillars, landing pads)
//! - No rendering or platform dependencies

pub mod collision;
pub mod entity;
pub mod state;
pub mod tick;
pub mod timestep;

pub use collision::{Axis, check_collision, overlap_magnitude, resolve_axis};
pub use entity::{CollisionFlags, Entity, EntityKind, TextureId};
pub use state::{GameState, Outcome, SpriteSet};
pub use tick::{TickInput, tick};
pub use timestep::FixedTimestep;
