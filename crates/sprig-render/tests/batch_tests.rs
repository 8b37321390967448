//! End-to-end behaviour of the sprite batch through a recording submitter.

use sprig_core::geometry::Rect;
use sprig_render::{
    DrawOutcome, Glyph, PackedColor, RecordingSubmitter, RenderBatch, SpriteBatch,
    SpriteBatchConfig, SpriteVertex, SubmitCall, TextureId,
};

const A: TextureId = TextureId::new(10);
const B: TextureId = TextureId::new(20);

fn batch(capacity: usize) -> SpriteBatch<RecordingSubmitter> {
    SpriteBatch::with_config(
        RecordingSubmitter::new(),
        SpriteBatchConfig::new().capacity(capacity),
    )
}

/// Destination rectangle unique to draw `i`, so quads can be told apart.
fn dest(i: usize) -> Rect<f32> {
    Rect::new(i as f32 * 100.0, 0.0, 10.0, 20.0)
}

fn assert_partition(vertices: &[SpriteVertex], batches: &[RenderBatch]) {
    let mut expected_offset = 0;
    for batch in batches {
        assert_eq!(batch.offset, expected_offset, "ranges must be contiguous");
        assert!(batch.count > 0 && batch.count % 6 == 0);
        expected_offset += batch.count;
    }
    assert_eq!(expected_offset as usize, vertices.len());
}

#[test]
fn test_six_vertices_per_glyph_in_corner_order() {
    let mut batch = batch(8);
    batch.begin();
    for i in 0..5 {
        let _ = batch.draw(A, dest(i), Rect::new(0.0, 0.0, 0.5, 0.5), PackedColor::WHITE);
    }
    batch.end();

    let vertices = batch.last_vertices();
    assert_eq!(vertices.len(), 30);

    for (i, quad) in vertices.chunks(6).enumerate() {
        let glyph = Glyph::new(A, dest(i), Rect::new(0.0, 0.0, 0.5, 0.5), PackedColor::WHITE);
        assert_eq!(quad, &glyph.triangles()[..], "quad {i}");
        assert_eq!(quad[0].position, [i as f32 * 100.0, 0.0]); // TL
        assert_eq!(quad[1].position, [i as f32 * 100.0, 20.0]); // BL
        assert_eq!(quad[2].position, [i as f32 * 100.0 + 10.0, 20.0]); // BR
        assert_eq!(quad[3], quad[2]);
        assert_eq!(quad[4].position, [i as f32 * 100.0 + 10.0, 0.0]); // TR
        assert_eq!(quad[5], quad[0]);
    }
}

#[test]
fn test_same_texture_vertices_are_contiguous() {
    let mut batch = batch(16);
    let textures = [B, A, B, A, A, B, TextureId::new(5), A];

    batch.begin();
    for (i, texture) in textures.iter().enumerate() {
        let _ = batch.draw(*texture, dest(i), Rect::UNIT, PackedColor::WHITE);
    }
    batch.end();

    let vertices = batch.last_vertices();
    let batches = batch.last_batches();
    assert_eq!(batches.len(), 3);
    assert_partition(vertices, batches);

    // Each quad's x position identifies the draw it came from
    let drawn_with = |quad: &[SpriteVertex]| textures[(quad[0].position[0] / 100.0) as usize];

    for range in batches {
        let quads = vertices[range.vertices().start as usize..range.vertices().end as usize]
            .chunks(6)
            .collect::<Vec<_>>();
        assert!(
            quads.iter().all(|quad| drawn_with(quad) == range.texture),
            "range for {} holds a quad from another texture",
            range.texture
        );
        let submitted = textures.iter().filter(|t| **t == range.texture).count();
        assert_eq!(quads.len(), submitted, "every {} quad is in its range", range.texture);
    }

    let mut ranged: Vec<TextureId> = batches.iter().map(|b| b.texture).collect();
    ranged.sort();
    ranged.dedup();
    assert_eq!(ranged.len(), batches.len(), "no texture owns two ranges");
}

#[test]
fn test_ranges_partition_stream() {
    let mut batch = batch(64);
    batch.begin();
    for i in 0..50 {
        let texture = TextureId::new((i * 37 % 7) as u64);
        let _ = batch.draw(texture, dest(i), Rect::UNIT, PackedColor::WHITE);
    }
    batch.end();

    let total: u32 = batch.last_batches().iter().map(|b| b.count).sum();
    assert_eq!(total, 300);
    assert_partition(batch.last_vertices(), batch.last_batches());
}

#[test]
fn test_overflow_by_one() {
    let capacity = 4;
    let mut batch = batch(capacity);

    batch.begin();
    let outcomes: Vec<DrawOutcome> = (0..=capacity)
        .map(|i| batch.draw(A, dest(i), Rect::UNIT, PackedColor::WHITE))
        .collect();
    assert_eq!(
        outcomes.iter().filter(|o| o.flushed()).count(),
        1,
        "exactly one implicit flush"
    );
    assert!(outcomes[capacity].flushed());
    assert_eq!(batch.len(), 1);
    batch.end();

    let uploads = batch.submitter().uploads();
    assert_eq!(uploads.len(), 2);
    assert_eq!(uploads[0].len(), capacity * 6);
    assert_eq!(uploads[1].len(), 6);

    // Every glyph drawn shows up in exactly one flush
    let mut xs: Vec<f32> = uploads
        .iter()
        .flat_map(|stream| stream.chunks(6).map(|quad| quad[0].position[0]))
        .collect();
    xs.sort_by(f32::total_cmp);
    let expected: Vec<f32> = (0..=capacity).map(|i| dest(i).x).collect();
    assert_eq!(xs, expected);
}

#[test]
fn test_empty_flush_makes_no_calls() {
    let mut batch = batch(4);
    batch.set_projection(glam::Mat4::IDENTITY);
    batch.submitter_mut().clear();

    batch.begin();
    batch.end();
    batch.end();

    assert!(batch.submitter().calls().is_empty());
    assert!(batch.last_vertices().is_empty());
    assert!(batch.last_batches().is_empty());
}

#[test]
fn test_capacity_two_mixed_textures() {
    let mut batch = batch(2);
    batch.begin();
    let _ = batch.draw(A, dest(0), Rect::UNIT, PackedColor::WHITE);
    let _ = batch.draw(B, dest(1), Rect::UNIT, PackedColor::WHITE);
    let third = batch.draw(A, dest(2), Rect::UNIT, PackedColor::WHITE);
    batch.end();

    // The third draw overflowed: {A, B} then {A}
    assert_eq!(third, DrawOutcome::FlushedThenAppended);
    let draws = batch.submitter().draws();
    assert_eq!(
        draws,
        vec![
            RenderBatch {
                offset: 0,
                count: 6,
                texture: A,
            },
            RenderBatch {
                offset: 6,
                count: 6,
                texture: B,
            },
            RenderBatch {
                offset: 0,
                count: 6,
                texture: A,
            },
        ]
    );

    let total: u32 = draws.iter().map(|d| d.count).sum();
    assert_eq!(total, 18);
    let a_total: u32 = draws.iter().filter(|d| d.texture == A).map(|d| d.count).sum();
    assert_eq!(a_total, 12);
}

#[test]
fn test_mixed_textures_share_one_range_per_flush() {
    let mut batch = batch(3);
    batch.begin();
    let _ = batch.draw(A, dest(0), Rect::UNIT, PackedColor::WHITE);
    let _ = batch.draw(B, dest(1), Rect::UNIT, PackedColor::WHITE);
    let _ = batch.draw(A, dest(2), Rect::UNIT, PackedColor::WHITE);
    batch.end();

    // Without an overflow the two A glyphs share one range
    assert_eq!(
        batch.last_batches(),
        &[
            RenderBatch {
                offset: 0,
                count: 12,
                texture: A,
            },
            RenderBatch {
                offset: 12,
                count: 6,
                texture: B,
            },
        ]
    );
    let positions: Vec<f32> = batch.last_vertices()[..12]
        .chunks(6)
        .map(|quad| quad[0].position[0])
        .collect();
    assert_eq!(positions, vec![dest(0).x, dest(2).x]);
}

#[test]
fn test_capacity_one_flushes_each_glyph() {
    let mut batch = batch(1);
    batch.begin();
    let first = batch.draw(A, dest(0), Rect::UNIT, PackedColor::WHITE);
    let second = batch.draw(A, dest(1), Rect::UNIT, PackedColor::WHITE);

    assert_eq!(first, DrawOutcome::Appended);
    assert_eq!(second, DrawOutcome::FlushedThenAppended);
    assert_eq!(batch.last_vertices().len(), 6);
    assert_eq!(batch.last_batches().len(), 1);

    batch.end();

    let calls = batch.submitter().calls();
    assert_eq!(calls.len(), 4);
    assert!(matches!(&calls[0], SubmitCall::Upload(v) if v[0].position[0] == dest(0).x));
    assert!(matches!(&calls[2], SubmitCall::Upload(v) if v[0].position[0] == dest(1).x));
    assert_eq!(batch.stats().implicit_flushes, 1);
}

#[test]
fn test_zero_capacity_behaves_like_one() {
    let mut batch = batch(0);
    assert_eq!(batch.capacity(), 1);

    batch.begin();
    let _ = batch.draw(A, dest(0), Rect::UNIT, PackedColor::WHITE);
    assert!(batch.draw(A, dest(1), Rect::UNIT, PackedColor::WHITE).flushed());
    batch.end();

    assert_eq!(batch.submitter().uploads().len(), 2);
}

#[test]
fn test_frames_are_independent() {
    let mut batch = batch(8);

    batch.begin();
    let _ = batch.draw(A, dest(0), Rect::UNIT, PackedColor::WHITE);
    let _ = batch.draw(B, dest(1), Rect::UNIT, PackedColor::WHITE);
    batch.end();

    batch.begin();
    let _ = batch.draw(B, dest(2), Rect::UNIT, PackedColor::RED);
    batch.end();

    assert_eq!(batch.last_vertices().len(), 6);
    assert_eq!(batch.last_vertices()[0].color, PackedColor::RED);
    assert_eq!(batch.stats().glyphs, 1);
    assert_eq!(batch.submitter().uploads().len(), 2);
}

#[test]
fn test_draw_glyph_prebuilt() {
    let mut batch = batch(4);
    let glyph = Glyph::new(B, dest(3), Rect::UNIT, PackedColor::BLUE);

    batch.begin();
    let _ = batch.draw_glyph(glyph);
    let _ = batch.draw(A, dest(0), Rect::UNIT, PackedColor::WHITE);
    batch.end();

    assert_eq!(batch.last_batches()[0].texture, A);
    assert_eq!(&batch.last_vertices()[6..], &glyph.triangles()[..]);
}

#[test]
fn test_into_submitter() {
    let mut batch = batch(4);
    batch.begin();
    let _ = batch.draw(A, dest(0), Rect::UNIT, PackedColor::WHITE);
    batch.end();

    let submitter = batch.into_submitter();
    assert_eq!(submitter.draws().len(), 1);
}
