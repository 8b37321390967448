//! Sprig Render - immediate-mode 2D sprite batching on wgpu.
//!
//! Applications describe textured rectangles every frame; the crate defers
//! them, groups them by texture and submits each group with a single draw.
//!
//! # Quick Start
//!
//! ```
//! use sprig_core::geometry::Rect;
//! use sprig_render::{PackedColor, RecordingSubmitter, SpriteBatch, TextureId};
//!
//! let mut batch = SpriteBatch::new(RecordingSubmitter::new());
//! let (grass, stone) = (TextureId::new(1), TextureId::new(2));
//!
//! batch.begin();
//! let _ = batch.draw(grass, Rect::new(0.0, 0.0, 32.0, 32.0), Rect::UNIT, PackedColor::WHITE);
//! let _ = batch.draw(stone, Rect::new(32.0, 0.0, 32.0, 32.0), Rect::UNIT, PackedColor::WHITE);
//! let _ = batch.draw(grass, Rect::new(64.0, 0.0, 32.0, 32.0), Rect::UNIT, PackedColor::WHITE);
//! batch.end();
//!
//! // Two textures, two draws; grass quads are adjacent in the stream
//! assert_eq!(batch.last_batches().len(), 2);
//! assert_eq!(batch.last_vertices().len(), 18);
//! ```
//!
//! Swap [`RecordingSubmitter`] for a [`SpriteRenderer`] to draw with a real
//! device, or implement [`SpriteSubmitter`] for another backend.
//!
//! # Modules
//!
//! - [`batch`]: the accumulator, the sorter and the submission trait
//! - [`renderer`]: the wgpu submitter and its shader
//! - [`vertex_buffer`]: the single growable vertex buffer uploads go to
//! - [`texture`]: texture handles and their bind groups

pub mod batch;
mod color;
mod config;
mod context;
mod context_impl;
mod glyph;
mod pipeline;
pub mod renderer;
pub mod texture;
mod vertex;
pub mod vertex_buffer;

pub use batch::*;
pub use color::*;
pub use config::*;
pub use context::*;
pub use glyph::*;
pub use renderer::*;
pub use texture::*;
pub use vertex::*;
pub use vertex_buffer::*;

#[cfg(feature = "mock")]
pub use sprig_test_utils::MockRenderContext;
pub use sprig_test_utils::{GpuBuffer, RenderContext};
