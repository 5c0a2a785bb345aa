//! In-memory model of polygons drawn click by click.

pub use self::sketch::{ClickOutcome, Sketch, DEFAULT_SNAP_DISTANCE, POLYGON_COLORS};

mod sketch;
