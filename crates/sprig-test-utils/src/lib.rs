//! Test utilities for Sprig.
//!
//! This crate provides testing infrastructure for the Sprig sprite batcher,
//! including a mock GPU context and the render trait it implements.
//!
//! # Overview
//!
//! - [`RenderContext`] - Trait abstracting the GPU buffer operations the sprite pipeline needs
//! - `MockRenderContext` - Mock implementation for testing (requires `mock` feature)
//! - [`GpuBuffer`] - Buffer wrapper that can be real or mock
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "mock")]
//! # {
//! use sprig_test_utils::{MockRenderContext, RenderContext};
//! use wgpu::*;
//!
//! let mock = MockRenderContext::new();
//!
//! let buffer = mock.create_buffer(&BufferDescriptor {
//!     label: Some("sprite_vertices"),
//!     size: 1024,
//!     usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
//!     mapped_at_creation: false,
//! });
//! mock.write_buffer(&buffer, 0, &[0u8; 120]);
//!
//! assert_eq!(mock.count_buffer_creates(), 1);
//! assert_eq!(mock.count_buffer_writes(), 1);
//! assert!(buffer.is_mock());
//! # }
//! ```
//!
//! # Design
//!
//! Wrapper types are owned and cheap to clone, so no lifetimes leak into
//! callers. The mock uses `parking_lot::Mutex` so that `&self` methods can
//! record calls while the trait stays `Send + Sync` and object safe.

pub mod gpu_types;
#[cfg(feature = "mock")]
pub mod mock_render;
pub mod render_context;

pub use gpu_types::*;
#[cfg(feature = "mock")]
pub use mock_render::*;
pub use render_context::*;
