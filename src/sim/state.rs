//! Game state aggregate and level layout

use glam::Vec3;

use super::entity::{Entity, EntityKind, TextureId};
use crate::consts::*;

/// Texture handles for each sprite kind
#[derive(Debug, Clone, Copy, Default)]
pub struct SpriteSet {
    pub player: TextureId,
    pub pillar: TextureId,
    pub landing: TextureId,
    pub font: TextureId,
}

/// How the run has ended, if it has
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Flying,
    Success,
    Failure,
}

impl Outcome {
    /// Derive from the lander's sticky flags; success wins when both are set
    pub fn of(player: &Entity) -> Self {
        if player.landed_success() {
            Outcome::Success
        } else if player.landed_failure() {
            Outcome::Failure
        } else {
            Outcome::Flying
        }
    }

    /// End-of-run banner text
    pub fn banner(self) -> Option<&'static str> {
        match self {
            Outcome::Flying => None,
            Outcome::Success => Some("MISSION SUCCESS!"),
            Outcome::Failure => Some("MISSION FAILED."),
        }
    }
}

/// Complete simulation state. Exclusively owns every entity.
#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Entity,
    pub pillars: [Entity; NUM_PILLARS],
    pub landings: [Entity; NUM_LANDINGS],
    /// Font atlas handle for the banner
    pub font: TextureId,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Build the level: lander top-left, a rising staircase of pillars,
    /// a row of landing pads along the floor.
    pub fn new(sprites: &SpriteSet) -> Self {
        let mut player = Entity::new(EntityKind::Player)
            .with_position(Vec3::new(-3.0, 3.0, 0.0))
            .with_texture(sprites.player);
        player.acceleration = Vec3::new(0.0, ACC_OF_GRAVITY * SPAWN_GRAVITY_SCALE, 0.0);

        let pillars = std::array::from_fn(|i| {
            let i = i as f32;
            placed(
                Entity::new(EntityKind::Pillar)
                    .with_size(0.5, 2.0)
                    .with_position(Vec3::new(2.0 * i - 4.0, -3.0 + i, 0.0))
                    .with_texture(sprites.pillar),
            )
        });

        let landings = std::array::from_fn(|i| {
            let i = i as f32;
            placed(
                Entity::new(EntityKind::LandingPad)
                    .with_size(1.0, 0.5)
                    .with_position(Vec3::new(2.0 * i - 1.0, -3.5, 0.0))
                    .with_texture(sprites.landing),
            )
        });

        Self {
            player,
            pillars,
            landings,
            font: sprites.font,
            time_ticks: 0,
        }
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::of(&self.player)
    }

    /// Every entity in draw order: lander, pillars, landing pads
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        std::iter::once(&self.player)
            .chain(self.pillars.iter())
            .chain(self.landings.iter())
    }
}

/// Static obstacles never move; a zero-length update computes their transform.
fn placed(mut entity: Entity) -> Entity {
    entity.update(0.0, &[]);
    entity
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;

    #[test]
    fn test_layout() {
        let state = GameState::new(&SpriteSet::default());

        assert_eq!(state.player.position, Vec3::new(-3.0, 3.0, 0.0));
        assert!(state.player.is_active());
        assert!((state.player.acceleration.y - ACC_OF_GRAVITY * 0.05).abs() < 1e-6);

        assert_eq!(state.pillars[0].position, Vec3::new(-4.0, -3.0, 0.0));
        assert_eq!(state.pillars[5].position, Vec3::new(6.0, 2.0, 0.0));
        assert_eq!(state.landings[0].position, Vec3::new(-1.0, -3.5, 0.0));
        assert_eq!(state.landings[4].position, Vec3::new(7.0, -3.5, 0.0));

        assert!(state.pillars.iter().all(|p| p.kind == EntityKind::Pillar));
        assert!(state.landings.iter().all(|l| l.kind == EntityKind::LandingPad));
        assert_eq!(state.entities().count(), 1 + NUM_PILLARS + NUM_LANDINGS);
    }

    #[test]
    fn test_obstacle_transforms_are_placed() {
        let state = GameState::new(&SpriteSet::default());
        let pillar = &state.pillars[2];
        let expected = Mat4::from_translation(pillar.position)
            * Mat4::from_scale(Vec3::new(0.5, 2.0, 1.0));
        assert_eq!(pillar.transform(), expected);
    }

    #[test]
    fn test_sprites_assigned_per_kind() {
        let sprites = SpriteSet {
            player: TextureId(1),
            pillar: TextureId(2),
            landing: TextureId(3),
            font: TextureId(4),
        };
        let state = GameState::new(&sprites);
        assert_eq!(state.player.texture, TextureId(1));
        assert!(state.pillars.iter().all(|p| p.texture == TextureId(2)));
        assert!(state.landings.iter().all(|l| l.texture == TextureId(3)));
        assert_eq!(state.font, TextureId(4));
    }

    #[test]
    fn test_outcome_success_takes_precedence() {
        let mut player = Entity::new(EntityKind::Player);
        assert_eq!(Outcome::of(&player), Outcome::Flying);

        player.record_landing(EntityKind::Pillar);
        assert_eq!(Outcome::of(&player), Outcome::Failure);

        player.record_landing(EntityKind::LandingPad);
        assert_eq!(Outcome::of(&player), Outcome::Success);
        assert_eq!(Outcome::Success.banner(), Some("MISSION SUCCESS!"));
        assert_eq!(Outcome::Failure.banner(), Some("MISSION FAILED."));
        assert_eq!(Outcome::Flying.banner(), None);
    }
}
