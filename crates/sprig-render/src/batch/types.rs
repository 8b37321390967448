//! Plain data produced and tracked by the sprite batch.

use crate::texture::TextureId;

/// A contiguous run of the vertex stream drawn with one texture.
///
/// `offset` and `count` are in vertices, not bytes or quads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderBatch {
    pub offset: u32,
    pub count: u32,
    pub texture: TextureId,
}

impl RenderBatch {
    /// Vertex range suitable for `RenderPass::draw`.
    #[inline]
    pub fn vertices(&self) -> std::ops::Range<u32> {
        self.offset..self.offset + self.count
    }

    /// Number of quads in the range.
    #[inline]
    pub fn quads(&self) -> u32 {
        self.count / 6
    }
}

/// Lifecycle state of a [`SpriteBatch`](crate::SpriteBatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BatchState {
    /// Nothing pending, no frame open.
    #[default]
    Empty,
    /// Between `begin` and `end`, collecting glyphs.
    Accumulating,
}

impl std::fmt::Display for BatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchState::Empty => write!(f, "Empty"),
            BatchState::Accumulating => write!(f, "Accumulating"),
        }
    }
}

/// What a call to [`SpriteBatch::draw`](crate::SpriteBatch::draw) had to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use = "an overflow flush is reported here; ignore it explicitly with `let _ =`"]
pub enum DrawOutcome {
    /// The glyph was appended to the pending set.
    Appended,
    /// The batch was full: pending glyphs were flushed, a new batch begun,
    /// and then the glyph appended.
    FlushedThenAppended,
}

impl DrawOutcome {
    #[inline]
    pub fn flushed(self) -> bool {
        matches!(self, DrawOutcome::FlushedThenAppended)
    }
}

/// Counters for the current frame, reset by an explicit `begin`.
///
/// Counters saturate rather than overflow, since only `begin` resets them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpriteBatchStats {
    /// Glyphs drawn.
    pub glyphs: u64,
    /// Non-empty flushes, explicit and implicit.
    pub flushes: u64,
    /// Flushes forced by a full batch.
    pub implicit_flushes: u64,
    /// Ranges handed to the submitter, one draw call each.
    pub draw_calls: u64,
    /// Vertices handed to the submitter.
    pub vertices: u64,
    /// Largest number of glyphs in a single flush.
    pub max_batch_glyphs: u64,
}
