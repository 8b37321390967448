//! A submitter that records what it is given instead of drawing.
//!
//! Useful in tests and for headless capture of the geometry a frame produces.

use glam::Mat4;

use super::traits::SpriteSubmitter;
use super::types::RenderBatch;
use crate::vertex::SpriteVertex;

/// One call received by a [`RecordingSubmitter`].
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitCall {
    SetProjection(Mat4),
    /// The whole vertex stream of one flush.
    Upload(Vec<SpriteVertex>),
    /// One draw per range, recorded after the upload it belongs to.
    Draw(RenderBatch),
}

/// Records every projection change, upload and draw in order.
///
/// # Example
///
/// ```rust
/// use sprig_render::{RecordingSubmitter, RenderBatch, SpriteSubmitter, SpriteVertex, TextureId};
///
/// let mut submitter = RecordingSubmitter::new();
/// let range = RenderBatch { offset: 0, count: 6, texture: TextureId::new(1) };
/// submitter.submit(&[SpriteVertex::default(); 6], &[range]);
///
/// assert_eq!(submitter.uploads().len(), 1);
/// assert_eq!(submitter.draws(), vec![range]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingSubmitter {
    calls: Vec<SubmitCall>,
}

impl RecordingSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, oldest first.
    pub fn calls(&self) -> &[SubmitCall] {
        &self.calls
    }

    /// Vertex streams uploaded so far, one per flush.
    pub fn uploads(&self) -> Vec<&[SpriteVertex]> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SubmitCall::Upload(vertices) => Some(vertices.as_slice()),
                _ => None,
            })
            .collect()
    }

    /// Every range drawn so far, across flushes.
    pub fn draws(&self) -> Vec<RenderBatch> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SubmitCall::Draw(batch) => Some(*batch),
                _ => None,
            })
            .collect()
    }

    /// The most recently set projection.
    pub fn projection(&self) -> Option<Mat4> {
        self.calls.iter().rev().find_map(|call| match call {
            SubmitCall::SetProjection(projection) => Some(*projection),
            _ => None,
        })
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl SpriteSubmitter for RecordingSubmitter {
    fn set_projection(&mut self, projection: Mat4) {
        self.calls.push(SubmitCall::SetProjection(projection));
    }

    fn submit(&mut self, vertices: &[SpriteVertex], batches: &[RenderBatch]) {
        self.calls.push(SubmitCall::Upload(vertices.to_vec()));
        self.calls.extend(batches.iter().copied().map(SubmitCall::Draw));
    }
}
