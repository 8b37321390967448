//! Sorting pending glyphs by texture and expanding them into a vertex stream.

use sprig_core::profiling::profile_function;

use super::types::RenderBatch;
use crate::glyph::Glyph;
use crate::vertex::SpriteVertex;

/// Vertices emitted per glyph (two triangles).
pub const VERTICES_PER_GLYPH: u32 = 6;

/// Sort `glyphs` by texture and build the vertex stream and its ranges.
///
/// Glyphs sharing a texture end up adjacent, in the order they were drawn.
/// Every glyph contributes six vertices (`TL, BL, BR, BR, TR, TL`) and a new
/// range starts whenever the texture changes, so the ranges partition
/// `vertices` exactly. Both output vectors are cleared first and keep their
/// allocations between calls.
pub fn batch_glyphs(
    glyphs: &mut [Glyph],
    vertices: &mut Vec<SpriteVertex>,
    batches: &mut Vec<RenderBatch>,
) {
    profile_function!();
    vertices.clear();
    batches.clear();

    // The sequence tiebreak makes the unstable sort behave like a stable one
    // without the scratch allocation `sort_by_key` needs.
    glyphs.sort_unstable_by_key(|glyph| (glyph.texture, glyph.sequence));

    let mut offset = 0u32;
    for glyph in glyphs.iter() {
        vertices.extend_from_slice(&glyph.triangles());

        match batches.last_mut() {
            Some(current) if current.texture == glyph.texture => {
                current.count += VERTICES_PER_GLYPH;
            }
            _ => batches.push(RenderBatch {
                offset,
                count: VERTICES_PER_GLYPH,
                texture: glyph.texture,
            }),
        }

        offset += VERTICES_PER_GLYPH;
    }
}
