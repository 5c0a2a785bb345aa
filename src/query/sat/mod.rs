//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! Two convex polygons do **not** intersect if and only if there exists an axis onto which
//! their projections do not overlap. For polygons, it is enough to test the normals of the
//! edges of both shapes: if none of them separates the projections, the polygons overlap.
//!
//! The result is only meaningful for convex polygons. Concave input may be reported as
//! overlapping while it is not.

pub use self::sat_polygon_polygon::*;

mod sat_polygon_polygon;
