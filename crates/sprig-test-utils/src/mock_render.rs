//! Mock implementation of RenderContext for testing.
//!
//! Records operations without touching a GPU.

use crate::{gpu_types::GpuBuffer, render_context::RenderContext};
use parking_lot::Mutex;
use wgpu::{BufferDescriptor, BufferUsages};

/// Records a GPU operation call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    CreateBuffer {
        buffer_id: usize,
        label: Option<String>,
        size: u64,
        usage: BufferUsages,
    },
    WriteBuffer {
        buffer_id: usize,
        offset: u64,
        data: Vec<u8>,
    },
}

/// Mock implementation of RenderContext for testing.
///
/// `parking_lot::Mutex` gives interior mutability while keeping the type
/// `Send + Sync`, which the `RenderContext` trait requires.
///
/// # Example
///
/// ```rust
/// use sprig_test_utils::{MockRenderContext, RenderContext};
/// use wgpu::*;
///
/// let mock = MockRenderContext::new();
/// let buffer = mock.create_buffer(&BufferDescriptor {
///     label: None,
///     size: 64,
///     usage: BufferUsages::VERTEX,
///     mapped_at_creation: false,
/// });
/// mock.write_buffer(&buffer, 0, &[1, 2, 3]);
///
/// assert_eq!(mock.last_write(), Some(vec![1, 2, 3]));
/// ```
pub struct MockRenderContext {
    /// Recorded calls for verification
    calls: Mutex<Vec<RenderCall>>,
    next_buffer_id: Mutex<usize>,
}

impl MockRenderContext {
    /// Create a new mock render context.
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            next_buffer_id: Mutex::new(0),
        }
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<RenderCall> {
        self.calls.lock().clone()
    }

    /// Count buffer creations.
    pub fn count_buffer_creates(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, RenderCall::CreateBuffer { .. }))
            .count()
    }

    /// Count buffer write operations.
    pub fn count_buffer_writes(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, RenderCall::WriteBuffer { .. }))
            .count()
    }

    /// Bytes passed to the most recent `write_buffer`.
    pub fn last_write(&self) -> Option<Vec<u8>> {
        self.calls.lock().iter().rev().find_map(|call| match call {
            RenderCall::WriteBuffer { data, .. } => Some(data.clone()),
            _ => None,
        })
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Get total number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl Default for MockRenderContext {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderContext for MockRenderContext {
    fn create_buffer(&self, desc: &BufferDescriptor) -> GpuBuffer {
        let mut next = self.next_buffer_id.lock();
        let buffer_id = *next;
        *next += 1;

        self.calls.lock().push(RenderCall::CreateBuffer {
            buffer_id,
            label: desc.label.map(|s| s.to_string()),
            size: desc.size,
            usage: desc.usage,
        });

        GpuBuffer::mock(buffer_id, desc.size)
    }

    fn write_buffer(&self, buffer: &GpuBuffer, offset: u64, data: &[u8]) {
        if let Some(buffer_id) = buffer.mock_id() {
            self.calls.lock().push(RenderCall::WriteBuffer {
                buffer_id,
                offset,
                data: data.to_vec(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex_buffer(mock: &MockRenderContext, size: u64) -> GpuBuffer {
        mock.create_buffer(&BufferDescriptor {
            label: Some("test_buffer"),
            size,
            usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    #[test]
    fn test_mock_buffer_creation() {
        let mock = MockRenderContext::new();
        let buffer = vertex_buffer(&mock, 1024);

        assert!(buffer.is_mock());
        assert_eq!(buffer.size(), 1024);
        assert_eq!(mock.count_buffer_creates(), 1);
    }

    #[test]
    fn test_mock_buffer_ids_are_unique() {
        let mock = MockRenderContext::new();
        let a = vertex_buffer(&mock, 16);
        let b = vertex_buffer(&mock, 16);

        assert_ne!(a.mock_id(), b.mock_id());
    }

    #[test]
    fn test_mock_buffer_write() {
        let mock = MockRenderContext::new();
        let buffer = vertex_buffer(&mock, 1024);

        mock.write_buffer(&buffer, 16, &[7u8; 32]);

        assert_eq!(mock.count_buffer_writes(), 1);
        assert_eq!(
            mock.calls()[1],
            RenderCall::WriteBuffer {
                buffer_id: 0,
                offset: 16,
                data: vec![7u8; 32],
            }
        );
        assert_eq!(mock.last_write(), Some(vec![7u8; 32]));
    }

    #[test]
    fn test_clear_calls() {
        let mock = MockRenderContext::new();
        vertex_buffer(&mock, 1024);

        assert_eq!(mock.call_count(), 1);

        mock.clear_calls();
        assert_eq!(mock.call_count(), 0);
        assert_eq!(mock.last_write(), None);
    }
}
