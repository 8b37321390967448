/// Pack four 8-bit channels into the `u32` layout carried by a sprite vertex.
///
/// The bytes land in memory as `R, G, B, A`, which is what the vertex layout
/// reads as `Unorm8x4`. On a little-endian target that makes red the lowest
/// byte of the integer.
///
/// ```
/// use sprig_render::pack_rgba;
///
/// let orange = pack_rgba(255, 128, 0, 255);
/// assert_eq!(orange.to_le_bytes(), [255, 128, 0, 255]);
/// ```
#[inline]
pub const fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    u32::from_le_bytes([r, g, b, a])
}

/// Inverse of [`pack_rgba`].
#[inline]
pub const fn unpack_rgba(packed: u32) -> [u8; 4] {
    packed.to_le_bytes()
}

/// Frequently used packed colours.
pub struct PackedColor;

impl PackedColor {
    pub const WHITE: u32 = pack_rgba(255, 255, 255, 255);
    pub const BLACK: u32 = pack_rgba(0, 0, 0, 255);
    pub const RED: u32 = pack_rgba(255, 0, 0, 255);
    pub const GREEN: u32 = pack_rgba(0, 255, 0, 255);
    pub const BLUE: u32 = pack_rgba(0, 0, 255, 255);
    pub const TRANSPARENT: u32 = pack_rgba(0, 0, 0, 0);
}

/// An RGBA color with `f32` components in the `0.0..=1.0` range.
///
/// Sprite vertices carry colours packed into a `u32`; use [`Color::to_packed`]
/// to go from this float form to the vertex form:
///
/// ```
/// use sprig_render::{Color, PackedColor};
///
/// assert_eq!(Color::WHITE.to_packed(), PackedColor::WHITE);
/// let tint = Color::from_hex(0xFF8800).to_packed();
/// assert_eq!(tint.to_le_bytes(), [0xFF, 0x88, 0x00, 0xFF]);
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    /// Create a color from RGB components with full opacity (alpha = 1.0).
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGBA components.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit RGBA values (0–255 mapped to 0.0–1.0).
    pub fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create a color from a 24-bit RGB hex value (e.g. `0xFF8800`).
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as u8;
        let g = ((hex >> 8) & 0xFF) as u8;
        let b = (hex & 0xFF) as u8;
        Self::from_rgba_u8(r, g, b, 255)
    }

    /// Create a color from a packed vertex colour.
    pub fn from_packed(packed: u32) -> Self {
        let [r, g, b, a] = unpack_rgba(packed);
        Self::from_rgba_u8(r, g, b, a)
    }

    /// Convert to the packed `u32` a [`SpriteVertex`](crate::SpriteVertex) carries.
    ///
    /// Components are clamped to `0.0..=1.0` and rounded to the nearest byte.
    pub fn to_packed(self) -> u32 {
        fn channel(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        pack_rgba(channel(self.r), channel(self.g), channel(self.b), channel(self.a))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Color> for u32 {
    fn from(color: Color) -> Self {
        color.to_packed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_byte_order() {
        let packed = pack_rgba(1, 2, 3, 4);
        assert_eq!(bytemuck::bytes_of(&packed), &[1, 2, 3, 4]);
        assert_eq!(unpack_rgba(packed), [1, 2, 3, 4]);
    }

    #[test]
    fn test_to_packed_clamps() {
        let packed = Color::rgba(2.0, -1.0, 0.5, 1.0).to_packed();
        assert_eq!(unpack_rgba(packed), [255, 0, 128, 255]);
    }

    #[test]
    fn test_packed_round_trip_through_color() {
        let packed = pack_rgba(0, 51, 102, 255);
        assert_eq!(Color::from_packed(packed).to_packed(), packed);
    }

    #[test]
    fn test_packed_constants() {
        assert_eq!(PackedColor::WHITE, u32::MAX);
        assert_eq!(PackedColor::TRANSPARENT, 0);
        assert_eq!(u32::from(Color::RED), PackedColor::RED);
    }
}
