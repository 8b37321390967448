/// Number of quads a [`SpriteBatch`](crate::SpriteBatch) holds before it flushes on its own.
pub const DEFAULT_BATCH_CAPACITY: usize = 1000;

/// Configuration for a [`SpriteBatch`](crate::SpriteBatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteBatchConfig {
    /// Maximum pending glyphs per flush. Storage for this many glyphs and
    /// their `6 * capacity` vertices is allocated up front.
    pub capacity: usize,
}

impl Default for SpriteBatchConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_BATCH_CAPACITY,
        }
    }
}

impl SpriteBatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the glyph capacity.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Capacity actually used by the batch. Zero would make every draw an
    /// overflow, so it is raised to one.
    pub(crate) fn effective_capacity(&self) -> usize {
        if self.capacity == 0 {
            tracing::warn!("Sprite batch capacity of 0 requested, using 1");
            1
        } else {
            self.capacity
        }
    }
}
