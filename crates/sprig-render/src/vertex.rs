use bytemuck::{Pod, Zeroable};

/// One corner of a sprite quad as it is laid out in the vertex stream.
///
/// 20 bytes, copied to the GPU verbatim. `color` is four bytes in memory
/// order `R, G, B, A` (see [`pack_rgba`](crate::pack_rgba)) and is read by the
/// shader as a normalized `vec4<f32>`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct SpriteVertex {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: u32,
}

impl SpriteVertex {
    /// Size of a vertex in bytes.
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;

    #[inline]
    pub const fn new(position: [f32; 2], uv: [f32; 2], color: u32) -> Self {
        Self {
            position,
            uv,
            color,
        }
    }

    /// Returns the wgpu vertex buffer layout for the sprite stream.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRS: &[wgpu::VertexAttribute] = &wgpu::vertex_attr_array![
            0 => Float32x2, // position
            1 => Float32x2, // uv
            2 => Unorm8x4,  // color
        ];
        wgpu::VertexBufferLayout {
            array_stride: Self::SIZE as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_size() {
        assert_eq!(std::mem::size_of::<SpriteVertex>(), 20);
        assert_eq!(SpriteVertex::SIZE, 20);
    }

    #[test]
    fn test_layout_offsets() {
        let layout = SpriteVertex::layout();
        let offsets: Vec<u64> = layout.attributes.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 8, 16]);
        assert_eq!(layout.array_stride, 20);
    }

    #[test]
    fn test_bytes_are_verbatim() {
        let vertex = SpriteVertex::new([1.0, 2.0], [0.5, 0.25], 0x0403_0201);
        let bytes = bytemuck::bytes_of(&vertex);
        assert_eq!(&bytes[0..4], &1.0f32.to_ne_bytes());
        assert_eq!(&bytes[16..20], &0x0403_0201u32.to_ne_bytes());
    }
}
