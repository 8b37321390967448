//! Sprig Core
//!
//! Shared utilities for the Sprig sprite batcher: geometry, math helpers,
//! logging and profiling.

pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
