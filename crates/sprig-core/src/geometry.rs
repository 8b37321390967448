use std::ops::Add;

/// Axis-aligned rectangle stored as origin plus extent.
///
/// No normalisation is performed: a negative `width` or `height` is kept
/// as-is and simply flips the corners it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn cast<U: From<T>>(self) -> Rect<U> {
        Rect {
            x: U::from(self.x),
            y: U::from(self.y),
            width: U::from(self.width),
            height: U::from(self.height),
        }
    }
}

impl<T: Add<Output = T> + Copy> Rect<T> {
    /// `x + width`
    pub fn right(&self) -> T {
        self.x + self.width
    }

    /// `y + height`
    pub fn bottom(&self) -> T {
        self.y + self.height
    }
}

impl Rect<f32> {
    /// The unit rectangle `(0, 0, 1, 1)`, i.e. a whole texture in UV space.
    pub const UNIT: Rect<f32> = Rect::new(0.0, 0.0, 1.0, 1.0);

    /// Build a UV rectangle from a pixel region of a texture.
    pub fn normalized(pixels: Rect<f32>, texture_width: f32, texture_height: f32) -> Self {
        Rect {
            x: pixels.x / texture_width,
            y: pixels.y / texture_height,
            width: pixels.width / texture_width,
            height: pixels.height / texture_height,
        }
    }
}

impl<T> From<[T; 4]> for Rect<T> {
    fn from([x, y, width, height]: [T; 4]) -> Self {
        Rect::new(x, y, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.bottom(), 60.0);
    }

    #[test]
    fn test_negative_extent_is_kept() {
        let rect = Rect::new(10, 10, -5, -5);
        assert_eq!(rect.right(), 5);
        assert_eq!(rect.bottom(), 5);
    }

    #[test]
    fn test_normalized() {
        let uv = Rect::normalized(Rect::new(32.0, 0.0, 32.0, 16.0), 128.0, 64.0);
        assert_eq!(uv, Rect::new(0.25, 0.0, 0.25, 0.25));
    }

    #[test]
    fn test_cast_and_from_array() {
        let rect: Rect<i16> = [1, 2, 3, 4].into();
        let wide: Rect<i32> = rect.cast();
        assert_eq!(wide, Rect::new(1, 2, 3, 4));
    }
}
