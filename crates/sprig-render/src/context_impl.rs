//! Implementation of the RenderContext trait for GraphicsContext.
//!
//! Lets the shared vertex buffer talk to either a real device or the
//! `MockRenderContext` used in tests.

use crate::context::GraphicsContext;
use sprig_test_utils::{GpuBuffer, RenderContext};
use wgpu::BufferDescriptor;

impl RenderContext for GraphicsContext {
    fn create_buffer(&self, desc: &BufferDescriptor) -> GpuBuffer {
        let buffer = self.device.create_buffer(desc);
        GpuBuffer::from_wgpu(buffer)
    }

    fn write_buffer(&self, buffer: &GpuBuffer, offset: u64, data: &[u8]) {
        self.queue.write_buffer(buffer.as_wgpu(), offset, data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_test_utils::MockRenderContext;

    #[test]
    fn test_render_context_trait_object() {
        fn upload(ctx: &dyn RenderContext) {
            let buffer = ctx.create_buffer(&BufferDescriptor {
                label: Some("sprite_projection"),
                size: 64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            ctx.write_buffer(&buffer, 0, &[0u8; 64]);
        }

        let mock_ctx = MockRenderContext::new();
        upload(&mock_ctx);

        // create_buffer + write_buffer
        assert_eq!(mock_ctx.calls().len(), 2);
    }
}
