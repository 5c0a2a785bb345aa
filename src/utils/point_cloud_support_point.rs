use crate::math::{Point, Real, Vector};

/// Index of the point of `points` with the largest dot product with `dir`.
///
/// When several points share the maximum, the first one in iteration order wins.
/// Returns `None` if `points` is empty.
#[inline]
pub fn point_cloud_support_point_id(dir: &Vector<Real>, points: &[Point<Real>]) -> Option<usize> {
    let first = points.first()?;
    let mut best_pt = 0;
    let mut best_dot = first.coords.dot(dir);

    for (i, p) in points.iter().enumerate().skip(1) {
        let dot = p.coords.dot(dir);

        if dot > best_dot {
            best_dot = dot;
            best_pt = i;
        }
    }

    Some(best_pt)
}

/// The point of `points` with the largest dot product with `dir`.
///
/// Returns `None` if `points` is empty.
#[inline]
pub fn point_cloud_support_point(dir: &Vector<Real>, points: &[Point<Real>]) -> Option<Point<Real>> {
    point_cloud_support_point_id(dir, points).map(|i| points[i])
}
