//! Entity state and per-tick kinematics
//!
//! Every object in the level (the lander, pillars, landing pads) is an `Entity`.
//! Kinematics use semi-implicit Euler; collision resolution is axis separated,
//! Y first and then X.

use glam::{Mat4, Vec3};

use super::collision::{Axis, check_collision, resolve_axis};

/// What an entity is, for outcome classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntityKind {
    #[default]
    Player,
    Pillar,
    LandingPad,
}

/// Opaque handle to a texture owned by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureId(pub u32);

/// Which faces collided during the most recent update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionFlags {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl CollisionFlags {
    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right
    }
}

/// A renderable, collidable game object
#[derive(Debug, Clone)]
pub struct Entity {
    pub kind: EntityKind,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Overridden every frame by the thrust/gravity decision
    pub acceleration: Vec3,
    pub texture: TextureId,
    /// Reset at the start of every update
    pub collisions: CollisionFlags,
    /// Full width and height, always > 0
    width: f32,
    height: f32,
    active: bool,
    landed_success: bool,
    landed_failure: bool,
    transform: Mat4,
}

impl Default for Entity {
    fn default() -> Self {
        Self::new(EntityKind::Player)
    }
}

impl Entity {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            acceleration: Vec3::ZERO,
            texture: TextureId::default(),
            collisions: CollisionFlags::default(),
            width: 1.0,
            height: 1.0,
            active: true,
            landed_success: false,
            landed_failure: false,
            transform: Mat4::IDENTITY,
        }
    }

    /// Builder-style placement
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Builder-style sizing
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.set_size(width, height);
        self
    }

    pub fn with_texture(mut self, texture: TextureId) -> Self {
        self.texture = texture;
        self
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Set full extents. Non-positive extents are a programming error.
    pub fn set_size(&mut self, width: f32, height: f32) {
        debug_assert!(width > 0.0 && height > 0.0, "entity extents must be positive");
        self.width = width;
        self.height = height;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Touched a landing pad at some point (never cleared)
    #[inline]
    pub fn landed_success(&self) -> bool {
        self.landed_success
    }

    /// Touched anything other than a landing pad (never cleared)
    #[inline]
    pub fn landed_failure(&self) -> bool {
        self.landed_failure
    }

    /// Latch the outcome of touching an entity of `kind`
    pub(super) fn record_landing(&mut self, kind: EntityKind) {
        if kind == EntityKind::LandingPad {
            self.landed_success = true;
        } else {
            self.landed_failure = true;
        }
    }

    /// Model matrix as of the last update
    #[inline]
    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// Overlap test against another entity
    pub fn check_collision(&self, other: &Entity) -> bool {
        check_collision(self, other)
    }

    /// Advance one step of `delta_time` seconds, resolving against `obstacles`
    pub fn update(&mut self, delta_time: f32, obstacles: &[Entity]) {
        if !self.active {
            return;
        }

        self.collisions = CollisionFlags::default();

        self.velocity += self.acceleration * delta_time;

        self.position.y += self.velocity.y * delta_time;
        resolve_axis(self, obstacles, Axis::Y);

        self.position.x += self.velocity.x * delta_time;
        resolve_axis(self, obstacles, Axis::X);

        self.refresh_transform();
    }

    /// Rebuild the model matrix from position and extents
    fn refresh_transform(&mut self) {
        self.transform = Mat4::from_translation(self.position)
            * Mat4::from_scale(Vec3::new(self.width, self.height, 1.0));
    }
}
