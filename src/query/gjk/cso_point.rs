use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// A point of a Configuration-Space Obstacle.
///
/// A Configuration-Space Obstacle (CSO) is the result of the
/// Minkowski Difference of two solids. In other words, each of its
/// points correspond to the difference of two point, each belonging
/// to a different solid.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CSOPoint {
    /// The point on the CSO.
    pub point: Point<Real>,
}

impl CSOPoint {
    /// Wraps a point already expressed in the CSO space.
    pub fn new(point: Point<Real>) -> Self {
        CSOPoint { point }
    }

    /// CSO point where all components are set to zero.
    pub fn origin() -> Self {
        CSOPoint::new(Point::origin())
    }

    /// Computes the support point of the CSO of `g1` and `g2` toward the direction `dir`.
    ///
    /// This is `support(g1, dir) - support(g2, -dir)`. Returns `None` if one of the shapes has
    /// no point.
    pub fn from_shapes<G1, G2>(g1: &G1, g2: &G2, dir: &Vector<Real>) -> Option<Self>
    where
        G1: ?Sized + SupportMap,
        G2: ?Sized + SupportMap,
    {
        let sp1 = g1.local_support_point(dir)?;
        let sp2 = g2.local_support_point(&-*dir)?;

        Some(CSOPoint::new(Point::from(sp1 - sp2)))
    }
}
