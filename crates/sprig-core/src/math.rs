//! Vector and matrix types for the sprite pipeline.
//!
//! The vector and matrix types are re-exported from [`glam`]. Matrices are
//! column-major, which is the layout WGSL expects for a `mat4x4<f32>` uniform,
//! so [`Mat4::to_cols_array`] can be uploaded as-is.
//!
//! # Examples
//!
//! ```
//! use sprig_core::math::{screen_ortho, Vec4};
//!
//! let projection = screen_ortho(800.0, 600.0);
//! let top_left = projection * Vec4::new(0.0, 0.0, 0.0, 1.0);
//! assert!(top_left.abs_diff_eq(Vec4::new(-1.0, 1.0, 0.5, 1.0), 1e-6));
//! ```
//!
//! [`glam`]: https://docs.rs/glam

pub use glam::{Mat4, Vec2, Vec3, Vec4};

/// The identity matrix.
#[inline]
pub fn identity() -> Mat4 {
    Mat4::IDENTITY
}

/// Right-handed orthographic projection with a `0..1` depth range (wgpu clip space).
#[inline]
pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, z_near: f32, z_far: f32) -> Mat4 {
    Mat4::orthographic_rh(left, right, bottom, top, z_near, z_far)
}

/// Pixel-space projection with the origin in the top-left corner and y pointing down.
///
/// This matches the corner convention of sprite glyphs, where the bottom edge
/// of a rectangle is at `y + height`.
#[inline]
pub fn screen_ortho(width: f32, height: f32) -> Mat4 {
    ortho(0.0, width, height, 0.0, -1.0, 1.0)
}

/// Flatten a matrix into 16 floats, column by column.
#[inline]
pub fn to_column_major(matrix: &Mat4) -> [f32; 16] {
    matrix.to_cols_array()
}
