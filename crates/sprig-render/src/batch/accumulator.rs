//! The `SpriteBatch` accumulator: begin, draw, end.

use glam::Mat4;
use sprig_core::geometry::Rect;
use sprig_core::profiling::{profile_function, profile_scope};

use super::sorter::batch_glyphs;
use super::traits::SpriteSubmitter;
use super::types::{BatchState, DrawOutcome, RenderBatch, SpriteBatchStats};
use crate::config::SpriteBatchConfig;
use crate::glyph::Glyph;
use crate::texture::TextureId;
use crate::vertex::SpriteVertex;

/// Immediate-mode sprite batch.
///
/// Draw requests between [`begin`](Self::begin) and [`end`](Self::end) are
/// stored, and on `end` they are grouped by texture and handed to the
/// submitter as one vertex stream plus one range per texture run. When the
/// batch is full, the next draw flushes what is pending and starts over, so
/// input is never dropped.
///
/// ```
/// use sprig_core::geometry::Rect;
/// use sprig_render::{PackedColor, RecordingSubmitter, SpriteBatch, SpriteBatchConfig, TextureId};
///
/// let config = SpriteBatchConfig::new().capacity(2);
/// let mut batch = SpriteBatch::with_config(RecordingSubmitter::new(), config);
/// let (a, b) = (TextureId::new(1), TextureId::new(2));
/// let dest = Rect::new(0.0, 0.0, 16.0, 16.0);
///
/// batch.begin();
/// let _ = batch.draw(a, dest, Rect::UNIT, PackedColor::WHITE);
/// let _ = batch.draw(b, dest, Rect::UNIT, PackedColor::WHITE);
/// assert!(batch.draw(a, dest, Rect::UNIT, PackedColor::WHITE).flushed());
/// batch.end();
///
/// assert_eq!(batch.stats().flushes, 2);
/// assert_eq!(batch.submitter().uploads().len(), 2);
/// ```
pub struct SpriteBatch<S: SpriteSubmitter> {
    submitter: S,
    capacity: usize,
    state: BatchState,
    glyphs: Vec<Glyph>,
    vertices: Vec<SpriteVertex>,
    batches: Vec<RenderBatch>,
    stats: SpriteBatchStats,
}

impl<S: SpriteSubmitter> SpriteBatch<S> {
    /// Create a batch with the default capacity.
    pub fn new(submitter: S) -> Self {
        Self::with_config(submitter, SpriteBatchConfig::default())
    }

    pub fn with_config(submitter: S, config: SpriteBatchConfig) -> Self {
        let capacity = config.effective_capacity();
        Self {
            submitter,
            capacity,
            state: BatchState::Empty,
            glyphs: Vec::with_capacity(capacity),
            vertices: Vec::with_capacity(capacity * 6),
            batches: Vec::new(),
            stats: SpriteBatchStats::default(),
        }
    }

    /// Start a frame.
    ///
    /// Glyphs left over from a frame that was never ended are discarded.
    pub fn begin(&mut self) {
        if !self.glyphs.is_empty() {
            tracing::warn!(
                "SpriteBatch::begin discarding {} glyphs that were never flushed",
                self.glyphs.len()
            );
        }
        self.glyphs.clear();
        self.stats = SpriteBatchStats::default();
        self.state = BatchState::Accumulating;
    }

    /// Queue a textured rectangle. See [`Glyph::new`] for how the corners are derived.
    pub fn draw(
        &mut self,
        texture: TextureId,
        dest: Rect<f32>,
        src: Rect<f32>,
        color: u32,
    ) -> DrawOutcome {
        self.draw_glyph(Glyph::new(texture, dest, src, color))
    }

    /// Queue a glyph built ahead of time.
    pub fn draw_glyph(&mut self, mut glyph: Glyph) -> DrawOutcome {
        if self.state == BatchState::Empty {
            tracing::debug!("SpriteBatch::draw called outside begin/end, beginning implicitly");
            self.state = BatchState::Accumulating;
        }

        let outcome = if self.glyphs.len() >= self.capacity {
            tracing::debug!(
                "Sprite batch full ({} glyphs), flushing before the next draw",
                self.capacity
            );
            self.flush(true);
            self.state = BatchState::Accumulating;
            DrawOutcome::FlushedThenAppended
        } else {
            DrawOutcome::Appended
        };

        glyph.sequence = self.glyphs.len() as u32;
        self.glyphs.push(glyph);
        self.stats.glyphs = self.stats.glyphs.saturating_add(1);
        outcome
    }

    /// Finish the frame: sort, build and submit whatever is pending.
    ///
    /// Nothing is submitted when no glyphs are pending.
    pub fn end(&mut self) {
        profile_function!();
        self.flush(false);
        self.state = BatchState::Empty;
    }

    /// Forward a new projection to the submitter.
    pub fn set_projection(&mut self, projection: Mat4) {
        self.submitter.set_projection(projection);
    }

    fn flush(&mut self, implicit: bool) {
        if self.glyphs.is_empty() {
            self.vertices.clear();
            self.batches.clear();
            return;
        }

        {
            profile_scope!("sprite_batch_flush");
            batch_glyphs(&mut self.glyphs, &mut self.vertices, &mut self.batches);
            self.submitter.submit(&self.vertices, &self.batches);
        }

        for batch in &self.batches {
            tracing::trace!(
                "Range {}..{} on {}",
                batch.offset,
                batch.offset + batch.count,
                batch.texture
            );
        }
        tracing::debug!(
            "Flushed {} glyphs as {} vertices in {} draw calls",
            self.glyphs.len(),
            self.vertices.len(),
            self.batches.len()
        );

        let stats = &mut self.stats;
        stats.flushes = stats.flushes.saturating_add(1);
        stats.draw_calls = stats.draw_calls.saturating_add(self.batches.len() as u64);
        stats.vertices = stats.vertices.saturating_add(self.vertices.len() as u64);
        stats.max_batch_glyphs = stats.max_batch_glyphs.max(self.glyphs.len() as u64);
        if implicit {
            stats.implicit_flushes = stats.implicit_flushes.saturating_add(1);
        }

        self.glyphs.clear();
    }

    /// Glyphs waiting for the next flush.
    #[inline]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyphs a single flush can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn state(&self) -> BatchState {
        self.state
    }

    /// Counters since the last explicit [`begin`](Self::begin).
    #[inline]
    pub fn stats(&self) -> SpriteBatchStats {
        self.stats
    }

    /// Vertex stream of the most recent flush.
    pub fn last_vertices(&self) -> &[SpriteVertex] {
        &self.vertices
    }

    /// Ranges of the most recent flush.
    pub fn last_batches(&self) -> &[RenderBatch] {
        &self.batches
    }

    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    pub fn submitter_mut(&mut self) -> &mut S {
        &mut self.submitter
    }

    pub fn into_submitter(self) -> S {
        self.submitter
    }
}
