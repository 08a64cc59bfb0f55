//! Turns game state into textured draw batches

use glam::Vec3;

use super::shapes;
use super::vertex::TexturedVertex;
use crate::consts::{BANNER_GLYPH_SIZE, BANNER_ORIGIN, BANNER_SPACING};
use crate::sim::{GameState, TextureId};

/// Vertices sharing one texture, drawn in a single call
#[derive(Debug, Clone, PartialEq)]
pub struct DrawBatch {
    pub texture: TextureId,
    pub vertices: Vec<TexturedVertex>,
}

/// Append vertices, merging with the previous batch when the texture matches
fn push(batches: &mut Vec<DrawBatch>, texture: TextureId, vertices: &[TexturedVertex]) {
    match batches.last_mut() {
        Some(last) if last.texture == texture => last.vertices.extend_from_slice(vertices),
        _ => batches.push(DrawBatch {
            texture,
            vertices: vertices.to_vec(),
        }),
    }
}

/// Every entity (active or not), then the end-of-run banner if there is one
pub fn build(state: &GameState) -> Vec<DrawBatch> {
    let mut batches = Vec::new();

    for entity in state.entities() {
        push(
            &mut batches,
            entity.texture,
            &shapes::textured_quad(entity.transform()),
        );
    }

    if let Some(banner) = state.outcome().banner() {
        let glyphs = shapes::text(
            banner,
            BANNER_GLYPH_SIZE,
            BANNER_SPACING,
            Vec3::from_array(BANNER_ORIGIN),
        );
        push(&mut batches, state.font, &glyphs);
    }

    batches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{NUM_LANDINGS, NUM_PILLARS};
    use crate::sim::{Axis, Entity, EntityKind, SpriteSet, resolve_axis};

    fn sprites() -> SpriteSet {
        SpriteSet {
            player: TextureId(0),
            pillar: TextureId(1),
            landing: TextureId(2),
            font: TextureId(3),
        }
    }

    #[test]
    fn test_batches_per_sprite_kind() {
        let state = GameState::new(&sprites());
        let batches = build(&state);

        assert_eq!(batches.len(), 3);
        assert_eq!(batches[0].texture, TextureId(0));
        assert_eq!(batches[0].vertices.len(), 6);
        assert_eq!(batches[1].vertices.len(), 6 * NUM_PILLARS);
        assert_eq!(batches[2].vertices.len(), 6 * NUM_LANDINGS);
    }

    #[test]
    fn test_banner_after_landing() {
        let mut state = GameState::new(&sprites());
        let pad = Entity::new(EntityKind::LandingPad);
        state.player.position = Vec3::new(0.0, 0.9, 0.0);
        state.player.velocity = Vec3::new(0.0, -1.0, 0.0);
        resolve_axis(&mut state.player, std::slice::from_ref(&pad), Axis::Y);

        let batches = build(&state);

        let banner = batches.last().unwrap();
        assert_eq!(banner.texture, TextureId(3));
        assert_eq!(banner.vertices.len(), 6 * "MISSION SUCCESS!".len());
        // Landed lander is still drawn
        assert_eq!(batches[0].texture, TextureId(0));
    }

    #[test]
    fn test_shared_texture_merges() {
        let state = GameState::new(&SpriteSet::default());
        let batches = build(&state);
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].vertices.len(), 6 * (1 + NUM_PILLARS + NUM_LANDINGS));
    }
}
