//! The Gilbert-Johnson-Keerthi intersection test.
//!
//! GJK never looks at the polygons directly. It works on their **Minkowski difference**
//! `A ⊖ B` (the Configuration Space Obstacle, or CSO), which contains the origin iff `A` and
//! `B` overlap. The CSO is only ever sampled through support points, so any pair of shapes
//! implementing [`SupportMap`] can be tested.
//!
//! Starting from one support point, the algorithm grows a simplex (a segment then a triangle
//! in 2D) toward the origin, discarding the vertices that cannot help enclosing it. It stops
//! as soon as either:
//!
//! - the simplex encloses the origin: the shapes intersect,
//! - a support point fails to pass the origin: no point of the CSO can lie beyond it, so the
//!   shapes are disjoint.
//!
//! Only convex shapes give meaningful answers.

use na::Unit;

use crate::math::{Point, Real, Vector};
use crate::query::gjk::{CSOPoint, Simplex};
use crate::shape::{Polygon, SupportMap};

/// Configuration of the GJK algorithm.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GjkOptions {
    /// Maximum number of support points computed before giving up.
    ///
    /// GJK converges in a handful of iterations on well-formed polygons. This bound only
    /// guards against cycling on degenerate or non-convex input. When reached, the shapes are
    /// reported as not intersecting.
    pub max_iterations: u32,
    /// Below this norm, the difference of the centroids is not used as the initial search
    /// direction and `+X` is used instead.
    pub direction_epsilon: Real,
}

impl Default for GjkOptions {
    fn default() -> Self {
        Self {
            max_iterations: 64,
            direction_epsilon: 1.0e-4,
        }
    }
}

/// Results of the GJK intersection test.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GjkResult {
    /// The simplex enclosed the origin: the shapes overlap.
    Intersection,
    /// A support point did not pass the origin: the shapes are disjoint.
    NoIntersection,
    /// [`GjkOptions::max_iterations`] was reached without a verdict.
    IterationLimitReached,
    /// One of the shapes has no point at all.
    EmptyShape,
}

impl GjkResult {
    /// Does this result mean the shapes overlap?
    ///
    /// Only [`GjkResult::Intersection`] does.
    #[inline]
    pub fn is_intersecting(self) -> bool {
        self == GjkResult::Intersection
    }
}

/// The initial GJK search direction for two shapes with the given centers.
///
/// This is the normalized `center1 - center2`, or `+X` when both centers are closer than
/// `options.direction_epsilon`.
pub fn initial_direction(
    center1: &Point<Real>,
    center2: &Point<Real>,
    options: &GjkOptions,
) -> Unit<Vector<Real>> {
    Unit::try_new(center1 - center2, options.direction_epsilon).unwrap_or_else(Vector::x_axis)
}

/// Tests whether the Minkowski difference of `g1` and `g2` contains the origin.
///
/// The search starts along `init_dir` and reuses `simplex` as scratch space, which is reset
/// before being used.
pub fn intersection_test_with_params<G1, G2>(
    g1: &G1,
    g2: &G2,
    init_dir: &Unit<Vector<Real>>,
    simplex: &mut Simplex,
    options: &GjkOptions,
) -> GjkResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let first = match CSOPoint::from_shapes(g1, g2, init_dir) {
        Some(pt) => pt,
        None => return GjkResult::EmptyShape,
    };

    simplex.reset(first);
    let mut dir = -first.point.coords;

    if dir.norm_squared() == 0.0 {
        // The very first support point is the origin.
        log::trace!("GJK: the first support point lies on the origin.");
        return GjkResult::Intersection;
    }

    for niter in 0..options.max_iterations {
        let support = match CSOPoint::from_shapes(g1, g2, &dir) {
            Some(pt) => pt,
            None => return GjkResult::EmptyShape,
        };

        if support.point.coords.dot(&dir) < 0.0 {
            log::trace!("GJK: separated after {} iteration(s).", niter + 1);
            return GjkResult::NoIntersection;
        }

        simplex.push_front(support);

        if simplex.contains_origin(&mut dir) {
            log::trace!("GJK: origin enclosed after {} iteration(s).", niter + 1);
            return GjkResult::Intersection;
        }

        if dir.norm_squared() == 0.0 {
            // Only reached when the simplex collapsed onto the origin.
            return GjkResult::Intersection;
        }
    }

    log::warn!(
        "GJK: no verdict after {} iterations, reporting no intersection.",
        options.max_iterations
    );
    GjkResult::IterationLimitReached
}

/// Tests whether two convex polygons overlap using the GJK algorithm.
///
/// The search starts along the direction joining the centroids. Empty polygons never
/// intersect anything.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use polycollide2d::math::Point;
/// use polycollide2d::query::gjk::{self, GjkOptions};
/// use polycollide2d::shape::Polygon;
///
/// let tri1 = Polygon::from_vertices(vec![
///     Point::new(0.0, 0.0),
///     Point::new(4.0, 0.0),
///     Point::new(2.0, 4.0),
/// ]);
/// let tri2 = Polygon::from_vertices(vec![
///     Point::new(1.0, 1.0),
///     Point::new(5.0, 1.0),
///     Point::new(3.0, 5.0),
/// ]);
///
/// assert!(gjk::polygon_polygon_intersection_test(&tri1, &tri2, &GjkOptions::default()));
/// # }
/// ```
pub fn polygon_polygon_intersection_test(
    poly1: &Polygon,
    poly2: &Polygon,
    options: &GjkOptions,
) -> bool {
    if poly1.is_empty() || poly2.is_empty() {
        return false;
    }

    let init_dir = initial_direction(&poly1.centroid(), &poly2.centroid(), options);
    let mut simplex = Simplex::new(CSOPoint::origin());

    intersection_test_with_params(poly1, poly2, &init_dir, &mut simplex, options)
        .is_intersecting()
}
