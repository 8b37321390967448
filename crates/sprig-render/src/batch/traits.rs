//! The `SpriteSubmitter` trait: the seam between batching and the GPU.

use glam::Mat4;

use super::types::RenderBatch;
use crate::vertex::SpriteVertex;

/// Receives flushed sprite geometry and puts it on screen.
///
/// The lifecycle per flush is: one [`submit`](Self::submit) with the whole
/// vertex stream and its ranges. Implementations upload the stream in a single
/// transfer and then issue one draw per range, binding that range's texture
/// first, in the order given. The batch never calls `submit` with an empty
/// stream and never retries.
pub trait SpriteSubmitter {
    /// Replace the projection applied to every following draw.
    ///
    /// `projection` is column-major, as produced by `sprig_core::math`.
    fn set_projection(&mut self, projection: Mat4);

    /// Upload `vertices` and draw each range of `batches`.
    ///
    /// `batches` partitions `vertices` exactly, in ascending offset order.
    fn submit(&mut self, vertices: &[SpriteVertex], batches: &[RenderBatch]);
}

impl<S: SpriteSubmitter + ?Sized> SpriteSubmitter for &mut S {
    fn set_projection(&mut self, projection: Mat4) {
        (**self).set_projection(projection);
    }

    fn submit(&mut self, vertices: &[SpriteVertex], batches: &[RenderBatch]) {
        (**self).submit(vertices, batches);
    }
}

impl<S: SpriteSubmitter + ?Sized> SpriteSubmitter for Box<S> {
    fn set_projection(&mut self, projection: Mat4) {
        (**self).set_projection(projection);
    }

    fn submit(&mut self, vertices: &[SpriteVertex], batches: &[RenderBatch]) {
        (**self).submit(vertices, batches);
    }
}
