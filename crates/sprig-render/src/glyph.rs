use sprig_core::geometry::Rect;

use crate::texture::TextureId;
use crate::vertex::SpriteVertex;

/// One pending textured rectangle.
///
/// Corners are derived from a destination rectangle and a source (UV)
/// rectangle with no coordinate conversion: `(x, y)` is the top-left corner
/// and the bottom edge sits at `y + height`. Negative extents are kept and
/// simply mirror the quad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glyph {
    pub texture: TextureId,
    pub top_left: SpriteVertex,
    pub bottom_left: SpriteVertex,
    pub bottom_right: SpriteVertex,
    pub top_right: SpriteVertex,
    /// Position in the frame's submission order, used to keep the sort stable.
    pub(crate) sequence: u32,
}

impl Glyph {
    pub fn new(texture: TextureId, dest: Rect<f32>, src: Rect<f32>, color: u32) -> Self {
        let (left, top, right, bottom) = (dest.x, dest.y, dest.right(), dest.bottom());
        let (u0, v0, u1, v1) = (src.x, src.y, src.right(), src.bottom());

        Self {
            texture,
            top_left: SpriteVertex::new([left, top], [u0, v0], color),
            bottom_left: SpriteVertex::new([left, bottom], [u0, v1], color),
            bottom_right: SpriteVertex::new([right, bottom], [u1, v1], color),
            top_right: SpriteVertex::new([right, top], [u1, v0], color),
            sequence: 0,
        }
    }

    /// The six vertices of the quad's two triangles, in stream order.
    #[inline]
    pub fn triangles(&self) -> [SpriteVertex; 6] {
        [
            self.top_left,
            self.bottom_left,
            self.bottom_right,
            self.bottom_right,
            self.top_right,
            self.top_left,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners() {
        let glyph = Glyph::new(
            TextureId::new(3),
            Rect::new(10.0, 20.0, 30.0, 40.0),
            Rect::new(0.0, 0.0, 0.5, 0.25),
            0xFFFF_FFFF,
        );

        assert_eq!(glyph.top_left.position, [10.0, 20.0]);
        assert_eq!(glyph.bottom_left.position, [10.0, 60.0]);
        assert_eq!(glyph.bottom_right.position, [40.0, 60.0]);
        assert_eq!(glyph.top_right.position, [40.0, 20.0]);

        assert_eq!(glyph.top_left.uv, [0.0, 0.0]);
        assert_eq!(glyph.bottom_left.uv, [0.0, 0.25]);
        assert_eq!(glyph.bottom_right.uv, [0.5, 0.25]);
        assert_eq!(glyph.top_right.uv, [0.5, 0.0]);
    }

    #[test]
    fn test_color_shared_by_all_corners() {
        let glyph = Glyph::new(TextureId::new(1), Rect::new(0.0, 0.0, 1.0, 1.0), Rect::UNIT, 42);
        assert!(glyph.triangles().iter().all(|v| v.color == 42));
    }

    #[test]
    fn test_negative_extent_passes_through() {
        let glyph = Glyph::new(
            TextureId::new(1),
            Rect::new(10.0, 10.0, -4.0, -2.0),
            Rect::UNIT,
            0,
        );
        assert_eq!(glyph.bottom_right.position, [6.0, 8.0]);
    }

    #[test]
    fn test_triangle_order() {
        let glyph = Glyph::new(TextureId::new(1), Rect::new(0.0, 0.0, 2.0, 2.0), Rect::UNIT, 0);
        let tri = glyph.triangles();
        assert_eq!(tri[0], glyph.top_left);
        assert_eq!(tri[1], glyph.bottom_left);
        assert_eq!(tri[2], glyph.bottom_right);
        assert_eq!(tri[3], glyph.bottom_right);
        assert_eq!(tri[4], glyph.top_right);
        assert_eq!(tri[5], glyph.top_left);
    }
}
