use crate::math::*;

/// The unit normal of the edge going from `pts[0]` to `pts[1]`.
///
/// The edge vector `e` is rotated by +90°, giving `(-e.y, e.x)`. For a counter-clockwise
/// polygon this points toward the interior. Returns `None` for a zero-length edge.
#[inline]
pub fn edge_normal(pts: [&Point<Real>; 2]) -> Option<UnitVector<Real>> {
    let ab = *pts[1] - *pts[0];
    let res = Vector::new(-ab.y, ab.x);

    UnitVector::try_new(res, DEFAULT_EPSILON)
}
