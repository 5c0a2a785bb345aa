use crate::math::{Real, Vector};

/// The vector triple product `(a × b) × c`, with the 2D inputs lifted to the `z = 0` plane.
///
/// The result lies back in the plane, so it is returned as a 2D vector. It is expanded as
/// `b (a · c) - a (b · c)` to avoid going through 3D vectors.
#[inline]
pub fn triple_product(a: &Vector<Real>, b: &Vector<Real>, c: &Vector<Real>) -> Vector<Real> {
    b * a.dot(c) - a * b.dot(c)
}

/// The 2D cross product (`z` component of the 3D cross product) of `a` and `b`.
#[inline]
pub fn perp_dot(a: &Vector<Real>, b: &Vector<Real>) -> Real {
    a.x * b.y - a.y * b.x
}
