//! Immediate-mode sprite batching.
//!
//! [`SpriteBatch`] collects glyphs between `begin` and `end`. On flush,
//! [`batch_glyphs`] sorts them by texture and expands them into one vertex
//! stream plus a [`RenderBatch`] per texture run, which a [`SpriteSubmitter`]
//! then puts on screen:
//!
//! | Submitter | Used for |
//! |-----------|----------|
//! | [`SpriteRenderer`](crate::SpriteRenderer) | wgpu, one `draw()` per range |
//! | [`RecordingSubmitter`] | tests and headless capture |

mod accumulator;
mod recording;
mod sorter;
mod traits;
mod types;

pub use accumulator::*;
pub use recording::*;
pub use sorter::*;
pub use traits::*;
pub use types::*;
