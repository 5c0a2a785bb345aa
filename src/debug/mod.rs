//! Optional debug-visualization side channel.
//!
//! Detectors can push auxiliary shapes (bounding rectangles, separating axes, projection
//! intervals) into a [`DebugSink`] so a renderer can show how a verdict was reached. The sink
//! never influences the result of a query: every detector behaves identically with or without
//! one, and passing `None` means no sink method is called at all.
//!
//! [`DebugShapes`] is a ready-made sink that simply records the shapes it receives.

pub use self::color::Color;
pub use self::debug_shapes::{DebugShape, DebugShapes, DEFAULT_DIRECTION_LENGTH};
pub use self::debug_sink::DebugSink;

mod color;
mod debug_shapes;
mod debug_sink;
