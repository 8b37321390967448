//! Trait abstracting GPU operations for testing.

use crate::gpu_types::GpuBuffer;
use wgpu::BufferDescriptor;

/// GPU buffer operations used by the sprite pipeline.
///
/// Methods take `&self` and return owned wrappers, so the trait is object
/// safe and a context can be shared behind an `Arc`. Real contexts forward to
/// `wgpu::Device` / `wgpu::Queue`; the mock records each call.
///
/// # Example
///
/// ```rust,no_run
/// use sprig_test_utils::RenderContext;
/// use wgpu::{BufferDescriptor, BufferUsages};
///
/// fn upload(ctx: &dyn RenderContext, bytes: &[u8]) {
///     let buffer = ctx.create_buffer(&BufferDescriptor {
///         label: None,
///         size: bytes.len() as u64,
///         usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
///         mapped_at_creation: false,
///     });
///     ctx.write_buffer(&buffer, 0, bytes);
/// }
/// ```
pub trait RenderContext: Send + Sync {
    /// Create a GPU buffer.
    fn create_buffer(&self, desc: &BufferDescriptor) -> GpuBuffer;

    /// Write data to a buffer.
    ///
    /// For real buffers, this maps to `queue.write_buffer()`.
    /// For mock buffers, this records the operation for test verification.
    fn write_buffer(&self, buffer: &GpuBuffer, offset: u64, data: &[u8]);
}
