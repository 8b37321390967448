//! The single shared vertex buffer sprite streams are uploaded into.
//!
//! The buffer is created on first use and reused for every flush. When a
//! stream does not fit, it is replaced by one sized to the next power of two,
//! so growth happens a handful of times at most. Growth never exceeds the
//! byte limit given by [`SharedVertexBuffer::with_max_size`]; a stream that
//! cannot fit under it is rejected.
//!
//! ```
//! use sprig_render::{SharedVertexBuffer, SpriteVertex};
//! use sprig_test_utils::MockRenderContext;
//!
//! let ctx = MockRenderContext::new();
//! let mut shared = SharedVertexBuffer::new(6);
//!
//! shared.upload(&ctx, &[SpriteVertex::default(); 6]);
//! shared.upload(&ctx, &[SpriteVertex::default(); 12]);
//!
//! assert_eq!(shared.capacity(), 16);
//! assert_eq!(ctx.count_buffer_creates(), 2);
//! assert_eq!(ctx.count_buffer_writes(), 2);
//! ```

use sprig_core::profiling::profile_function;
use sprig_test_utils::{GpuBuffer, RenderContext};

use crate::config::DEFAULT_BATCH_CAPACITY;
use crate::vertex::SpriteVertex;

/// Grow-only vertex buffer shared by every flush.
#[derive(Debug)]
pub struct SharedVertexBuffer {
    buffer: Option<GpuBuffer>,
    /// Current capacity in vertices.
    capacity: usize,
    initial_capacity: usize,
    /// Largest buffer allowed, in bytes.
    max_size: u64,
}

impl Default for SharedVertexBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_CAPACITY * 6)
    }
}

impl SharedVertexBuffer {
    /// `initial_capacity` is in vertices; nothing is allocated until the first upload.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            buffer: None,
            capacity: 0,
            initial_capacity: initial_capacity.max(1),
            max_size: u64::MAX,
        }
    }

    /// Cap the buffer at `bytes`, usually the device's `max_buffer_size`.
    pub fn with_max_size(mut self, bytes: u64) -> Self {
        self.max_size = bytes;
        self
    }

    /// Most vertices the byte limit allows.
    pub fn max_vertices(&self) -> usize {
        usize::try_from(self.max_size / SpriteVertex::SIZE).unwrap_or(usize::MAX)
    }

    /// Upload `vertices` to the start of the buffer in a single write.
    ///
    /// Returns the buffer to bind, or `None` when there is nothing to upload
    /// or the stream is larger than the byte limit.
    pub fn upload(
        &mut self,
        context: &dyn RenderContext,
        vertices: &[SpriteVertex],
    ) -> Option<&GpuBuffer> {
        profile_function!();
        if vertices.is_empty() {
            return None;
        }

        if !self.ensure_capacity(context, vertices.len()) {
            return None;
        }
        let buffer = self.buffer.as_ref()?;
        context.write_buffer(buffer, 0, bytemuck::cast_slice(vertices));
        Some(buffer)
    }

    fn ensure_capacity(&mut self, context: &dyn RenderContext, required: usize) -> bool {
        if self.buffer.is_some() && required <= self.capacity {
            return true;
        }

        let max_vertices = self.max_vertices();
        if required > max_vertices {
            tracing::error!(
                "Sprite stream of {} vertices exceeds the {} byte buffer limit, dropping it",
                required,
                self.max_size
            );
            return false;
        }

        let wanted = if self.buffer.is_none() && required <= self.initial_capacity {
            self.initial_capacity
        } else {
            required.checked_next_power_of_two().unwrap_or(max_vertices)
        };
        let new_capacity = wanted.min(max_vertices);

        if self.buffer.is_some() {
            tracing::debug!(
                "Growing sprite vertex buffer from {} to {} vertices",
                self.capacity,
                new_capacity
            );
        }

        self.buffer = Some(context.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sprite_vertex_buffer"),
            size: new_capacity as u64 * SpriteVertex::SIZE,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.capacity = new_capacity;
        true
    }

    /// Capacity in vertices, zero before the first upload.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn buffer(&self) -> Option<&GpuBuffer> {
        self.buffer.as_ref()
    }
}
