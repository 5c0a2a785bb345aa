use crate::debug::{Color, DebugSink};
use crate::math::{Point, Real, UnitVector};
use crate::shape::Polygon;
use crate::utils;
use num::Bounded;
use smallvec::SmallVec;

/// The candidate separating axes of a pair of polygons.
pub type SatAxes = SmallVec<[UnitVector<Real>; 16]>;

/// The interval covered by a set of points once projected on an axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projection {
    /// Smallest projected value.
    pub min: Real,
    /// Largest projected value.
    pub max: Real,
}

impl Projection {
    /// Projects `points` on `axis`.
    ///
    /// An empty point set gives the empty interval `[Real::MAX, -Real::MAX]` which is separated
    /// from every other interval.
    ///
    /// The projections are rounded. On an axis that is not aligned with `x` or `y`, two points
    /// that coincide exactly may still project to slightly different values.
    pub fn new(points: &[Point<Real>], axis: &UnitVector<Real>) -> Self {
        let mut result = Projection {
            min: <Real as Bounded>::max_value(),
            max: -<Real as Bounded>::max_value(),
        };

        for pt in points {
            let proj = axis.dot(&pt.coords);
            result.min = result.min.min(proj);
            result.max = result.max.max(proj);
        }

        result
    }

    /// Do these two intervals have no point in common?
    ///
    /// Intervals sharing only an endpoint are not separated.
    #[inline]
    pub fn is_separated_from(&self, other: &Projection) -> bool {
        self.max < other.min || other.max < self.min
    }
}

/// Pushes the normal of each edge of `poly` into `out`.
///
/// Zero-length edges (repeated consecutive vertices) have no normal and are skipped. A
/// polygon with less than two vertices has no edge at all.
pub fn polygon_edge_normals(poly: &Polygon, out: &mut SatAxes) {
    let vertices = poly.vertices();

    if vertices.len() < 2 {
        return;
    }

    for i1 in 0..vertices.len() {
        let i2 = (i1 + 1) % vertices.len();
        if let Some(normal) = utils::edge_normal([&vertices[i1], &vertices[i2]]) {
            out.push(normal);
        }
    }
}

/// The candidate separating axes of `poly1` and `poly2`: the edge normals of `poly2` followed
/// by the edge normals of `poly1`.
pub fn polygon_polygon_candidate_axes(poly1: &Polygon, poly2: &Polygon) -> SatAxes {
    let mut axes = SatAxes::new();
    polygon_edge_normals(poly2, &mut axes);
    polygon_edge_normals(poly1, &mut axes);
    axes
}

/// Finds the first axis among `axes` that separates the projections of `poly1` and `poly2`.
///
/// Axes are tested in order and the search stops at the first separating one. If `debug` is
/// set, each tested axis is pushed as a black direction through the origin, followed by the
/// projection intervals of `poly1` and `poly2` drawn along that axis with their colors.
pub fn polygon_polygon_find_separating_axis(
    poly1: &Polygon,
    poly2: &Polygon,
    axes: &[UnitVector<Real>],
    mut debug: Option<&mut dyn DebugSink>,
) -> Option<UnitVector<Real>> {
    for axis in axes {
        let proj1 = Projection::new(poly1.vertices(), axis);
        let proj2 = Projection::new(poly2.vertices(), axis);

        if let Some(debug) = debug.as_deref_mut() {
            debug.add_direction(Color::BLACK, Point::origin(), axis.into_inner());
            debug.add_line(
                poly1.color(),
                Point::from(**axis * proj1.min),
                Point::from(**axis * proj1.max),
            );
            debug.add_line(
                poly2.color(),
                Point::from(**axis * proj2.min),
                Point::from(**axis * proj2.max),
            );
        }

        if proj1.is_separated_from(&proj2) {
            return Some(*axis);
        }
    }

    None
}

/// Tests whether two convex polygons overlap using the Separating Axis Theorem.
///
/// Touching polygons are considered overlapping. This is exact along axis-aligned edges only:
/// a contact through a slanted edge may round to a tiny gap on that edge's normal and be
/// reported as not overlapping (see [`Projection::new`]). Use the GJK detector when exact
/// contacts on integer coordinates matter. If neither polygon has an edge (both have less than
/// two distinct vertices) nothing can be tested: the pair is reported as not overlapping and a
/// warning is logged.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use polycollide2d::math::Point;
/// use polycollide2d::query::sat;
/// use polycollide2d::shape::Polygon;
///
/// let tri1 = Polygon::from_vertices(vec![
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(1.0, 2.0),
/// ]);
/// let tri2 = Polygon::from_vertices(vec![
///     Point::new(5.0, 0.0),
///     Point::new(7.0, 0.0),
///     Point::new(6.0, 2.0),
/// ]);
///
/// assert!(!sat::polygon_polygon_intersection_test(&tri1, &tri2, None));
/// assert!(sat::polygon_polygon_intersection_test(&tri1, &tri1, None));
/// # }
/// ```
pub fn polygon_polygon_intersection_test(
    poly1: &Polygon,
    poly2: &Polygon,
    debug: Option<&mut dyn DebugSink>,
) -> bool {
    let axes = polygon_polygon_candidate_axes(poly1, poly2);

    if axes.is_empty() {
        log::warn!(
            "SAT: no candidate axis between polygons with {} and {} vertices, reporting no overlap.",
            poly1.len(),
            poly2.len()
        );
        return false;
    }

    polygon_polygon_find_separating_axis(poly1, poly2, &axes, debug).is_none()
}
