//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general entry point of this module is the [`CollisionDetector`] trait, implemented
//! by the three available detectors:
//!
//! * [`AabbDetector`] to compare the axis-aligned bounding boxes of two polygons.
//! * [`SatDetector`] to search for a separating axis between two convex polygons.
//! * [`GjkDetector`] to check whether the Minkowski difference of two convex polygons contains
//!   the origin.
//!
//! [`DetectorKind`] selects one of them at runtime and [`selector::check_all_pairs`] runs it on
//! every pair of a polygon collection.
//!
//! # Specific cases
//! The `sat` and `gjk` submodules expose the algorithms themselves. Their functions have the
//! form `[operation]_[shape1]_[shape2]()`, e.g., `polygon_polygon_intersection_test`.

pub use self::detector::{AabbDetector, CollisionDetector, DetectorKind, GjkDetector, SatDetector};
pub use self::error::QueryError;
pub use self::selector::{
    check_all_pairs, check_all_pairs_with_code, check_polygons, CollisionReport, PairReport,
};

mod detector;
mod error;
pub mod gjk;
pub mod sat;
pub mod selector;
