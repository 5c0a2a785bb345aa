use crate::math::{Point, Real};
use na;

/// Computes the geometric center (centroid) of a set of points.
///
/// All points are weighted equally. An empty slice has no meaningful center and yields the
/// origin instead of panicking.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use polycollide2d::utils::center;
/// use polycollide2d::math::Point;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(1.0, 3.0),
/// ];
///
/// assert_eq!(center(&points), Point::new(1.0, 1.0));
/// assert_eq!(center(&[]), Point::origin());
/// # }
/// ```
#[inline]
pub fn center(pts: &[Point<Real>]) -> Point<Real> {
    if pts.is_empty() {
        return Point::origin();
    }

    let denom: Real = na::convert::<f64, Real>(1.0 / (pts.len() as f64));

    let mut res = Point::origin();

    for pt in pts {
        res += pt.coords * denom;
    }

    res
}
