//! Quad generation for sprites and bitmap-font text

use glam::{Mat4, Vec3};

use super::vertex::TexturedVertex;
use crate::consts::FONTBANK_SIZE;

/// Unit quad centred on the origin, two triangles
pub const QUAD_POSITIONS: [f32; 12] = [
    -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, //
    -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
];

/// Texture coordinates matching `QUAD_POSITIONS` (v grows downward)
pub const QUAD_UVS: [f32; 12] = [
    0.0, 1.0, 1.0, 1.0, 1.0, 0.0, //
    0.0, 1.0, 1.0, 0.0, 0.0, 0.0,
];

/// Unit quad placed in the world by `model`
pub fn textured_quad(model: Mat4) -> [TexturedVertex; 6] {
    std::array::from_fn(|i| {
        let p = model.transform_point3(Vec3::new(QUAD_POSITIONS[2 * i], QUAD_POSITIONS[2 * i + 1], 0.0));
        TexturedVertex::new(p.x, p.y, QUAD_UVS[2 * i], QUAD_UVS[2 * i + 1])
    })
}

/// Atlas cell of a character. Anything outside ASCII draws as '?'.
pub fn glyph_index(c: char) -> u32 {
    if c.is_ascii() { c as u32 } else { '?' as u32 }
}

/// Top-left UV of a glyph cell
pub fn glyph_uv(index: u32) -> (f32, f32) {
    let bank = FONTBANK_SIZE as f32;
    let u = (index % FONTBANK_SIZE) as f32 / bank;
    let v = (index / FONTBANK_SIZE) as f32 / bank;
    (u, v)
}

/// Lay out `text` as one quad per character, left to right from `origin`.
///
/// `size` is the glyph edge length and `spacing` the extra gap between glyphs,
/// both in world units.
pub fn text(text: &str, size: f32, spacing: f32, origin: Vec3) -> Vec<TexturedVertex> {
    let cell = 1.0 / FONTBANK_SIZE as f32;
    let half = 0.5 * size;
    let mut vertices = Vec::with_capacity(text.len() * 6);

    for (i, c) in text.chars().enumerate() {
        let offset = (size + spacing) * i as f32;
        let (u, v) = glyph_uv(glyph_index(c));

        let left = origin.x + offset - half;
        let right = origin.x + offset + half;
        let top = origin.y + half;
        let bottom = origin.y - half;

        vertices.extend_from_slice(&[
            TexturedVertex::new(left, top, u, v),
            TexturedVertex::new(left, bottom, u, v + cell),
            TexturedVertex::new(right, top, u + cell, v),
            TexturedVertex::new(right, bottom, u + cell, v + cell),
            TexturedVertex::new(right, top, u + cell, v),
            TexturedVertex::new(left, bottom, u, v + cell),
        ]);
    }

    vertices
}
