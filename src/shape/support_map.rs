//! Traits for support mapping based shapes.

use crate::math::{Point, Real, Vector};

/// A shape that can compute its support point along any direction.
///
/// The support point of a convex shape toward `dir` is the point of the shape that maximizes
/// its dot product with `dir`. It is the only geometric query GJK needs.
pub trait SupportMap {
    /// Evaluates the support function of this shape.
    ///
    /// Returns `None` if the shape has no point at all.
    fn local_support_point(&self, dir: &Vector<Real>) -> Option<Point<Real>>;
}
