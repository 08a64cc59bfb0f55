//! Axis-aligned box overlap and axis-separated resolution
//!
//! Extents are full width/height; every test halves them inline. Resolution
//! runs one axis at a time, Y fully before X.

use glam::Vec3;

use super::entity::Entity;

/// Axis being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    fn of(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    #[inline]
    fn of_mut(self, v: &mut Vec3) -> &mut f32 {
        match self {
            Axis::X => &mut v.x,
            Axis::Y => &mut v.y,
        }
    }

    /// Full extent of `entity` along this axis
    #[inline]
    fn extent(self, entity: &Entity) -> f32 {
        match self {
            Axis::X => entity.width(),
            Axis::Y => entity.height(),
        }
    }
}

/// True when both entities are active and their boxes intersect on both axes.
/// Touching edges do not count.
pub fn check_collision(a: &Entity, b: &Entity) -> bool {
    if !a.is_active() || !b.is_active() {
        return false;
    }

    let x_distance = (a.position.x - b.position.x).abs() - (a.width() + b.width()) / 2.0;
    let y_distance = (a.position.y - b.position.y).abs() - (a.height() + b.height()) / 2.0;

    x_distance < 0.0 && y_distance < 0.0
}

/// Distance to push back along an axis: `|distance - own/2 - other/2|`.
///
/// While the boxes overlap on that axis this equals the penetration depth
/// `(own + other)/2 - distance`.
#[inline]
pub fn overlap_magnitude(distance: f32, own_extent: f32, other_extent: f32) -> f32 {
    (distance - own_extent / 2.0 - other_extent / 2.0).abs()
}

/// Push `entity` out of every overlapping obstacle along `axis`.
///
/// The push direction opposes the entity's velocity on that axis; a velocity
/// of exactly zero leaves the entity where it is. Any push stops the entity
/// for good. Every overlap latches a landing outcome, pushed or not.
pub fn resolve_axis(entity: &mut Entity, obstacles: &[Entity], axis: Axis) {
    for other in obstacles {
        if !check_collision(entity, other) {
            continue;
        }

        let distance = (axis.of(entity.position) - axis.of(other.position)).abs();
        let overlap = overlap_magnitude(distance, axis.extent(entity), axis.extent(other));
        let velocity = axis.of(entity.velocity);

        if velocity > 0.0 {
            *axis.of_mut(&mut entity.position) -= overlap;
            *axis.of_mut(&mut entity.velocity) = 0.0;
            match axis {
                Axis::Y => entity.collisions.top = true,
                Axis::X => entity.collisions.right = true,
            }
            entity.deactivate();
        } else if velocity < 0.0 {
            *axis.of_mut(&mut entity.position) += overlap;
            *axis.of_mut(&mut entity.velocity) = 0.0;
            match axis {
                Axis::Y => entity.collisions.bottom = true,
                Axis::X => entity.collisions.left = true,
            }
            entity.deactivate();
        }

        entity.record_landing(other.kind);
    }
}
