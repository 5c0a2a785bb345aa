use core::fmt;
use core::str::FromStr;

use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::debug::DebugSink;
use crate::query::gjk::{self, GjkOptions};
use crate::query::{sat, QueryError};
use crate::shape::Polygon;

/// A strategy answering whether two polygons overlap.
///
/// Detectors are stateless between calls and total: any pair of polygons gets an answer, even
/// if only completed, convex polygons with at least 3 vertices get a meaningful one. Use
/// [`CollisionDetector::try_is_colliding`] to reject degenerate input instead.
pub trait CollisionDetector {
    /// Tests whether `a` and `b` overlap, pushing auxiliary shapes into `debug` if it is set.
    ///
    /// The result never depends on `debug`.
    fn is_colliding_with_debug(
        &self,
        a: &Polygon,
        b: &Polygon,
        debug: Option<&mut dyn DebugSink>,
    ) -> bool;

    /// Tests whether `a` and `b` overlap.
    #[inline]
    fn is_colliding(&self, a: &Polygon, b: &Polygon) -> bool {
        self.is_colliding_with_debug(a, b, None)
    }

    /// Tests whether `a` and `b` overlap after checking both have at least 3 vertices.
    fn try_is_colliding(&self, a: &Polygon, b: &Polygon) -> Result<bool, QueryError> {
        for poly in [a, b] {
            if poly.len() < 3 {
                return Err(QueryError::DegeneratePolygon {
                    num_vertices: poly.len(),
                });
            }
        }

        Ok(self.is_colliding(a, b))
    }
}

/// Overlap test of the axis-aligned bounding boxes of the polygons.
///
/// This is conservative: it never misses an actual overlap but reports many pairs that do not
/// overlap. Boxes sharing only an edge or a corner do overlap.
///
/// When a debug sink is given, the bounding box of `a` then the one of `b` are pushed as
/// rectangles with the color of their polygon. Empty polygons have no box and push nothing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AabbDetector;

impl CollisionDetector for AabbDetector {
    fn is_colliding_with_debug(
        &self,
        a: &Polygon,
        b: &Polygon,
        debug: Option<&mut dyn DebugSink>,
    ) -> bool {
        let aabb_a = a.aabb();
        let aabb_b = b.aabb();

        if let Some(debug) = debug {
            push_aabb(debug, a, &aabb_a);
            push_aabb(debug, b, &aabb_b);
        }

        aabb_a.intersects(&aabb_b)
    }
}

fn push_aabb(debug: &mut dyn DebugSink, poly: &Polygon, aabb: &Aabb) {
    if aabb.is_valid() {
        debug.add_rectangle(poly.color(), aabb.center(), aabb.extents());
    }
}

/// Overlap test based on the Separating Axis Theorem.
///
/// See [`sat::polygon_polygon_intersection_test`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SatDetector;

impl CollisionDetector for SatDetector {
    #[inline]
    fn is_colliding_with_debug(
        &self,
        a: &Polygon,
        b: &Polygon,
        debug: Option<&mut dyn DebugSink>,
    ) -> bool {
        sat::polygon_polygon_intersection_test(a, b, debug)
    }
}

/// Overlap test based on the Gilbert-Johnson-Keerthi algorithm.
///
/// See [`gjk::polygon_polygon_intersection_test`]. This detector never pushes debug shapes.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct GjkDetector {
    /// Parameters of the GJK algorithm.
    pub options: GjkOptions,
}

impl GjkDetector {
    /// A GJK detector with custom options.
    pub fn new(options: GjkOptions) -> Self {
        Self { options }
    }
}

impl CollisionDetector for GjkDetector {
    #[inline]
    fn is_colliding_with_debug(
        &self,
        a: &Polygon,
        b: &Polygon,
        _debug: Option<&mut dyn DebugSink>,
    ) -> bool {
        gjk::polygon_polygon_intersection_test(a, b, &self.options)
    }
}

/// Selects one of the available collision detectors.
///
/// Each detector is identified by an integer code: `1` for AABB, `2` for SAT and `3` for GJK.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use polycollide2d::query::DetectorKind;
///
/// assert_eq!(DetectorKind::try_from(2), Ok(DetectorKind::Sat));
/// assert_eq!("gjk".parse::<DetectorKind>(), Ok(DetectorKind::Gjk));
/// assert_eq!(DetectorKind::Aabb.to_string(), "AABB");
/// assert!(DetectorKind::try_from(0).is_err());
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DetectorKind {
    /// The [`AabbDetector`].
    #[default]
    Aabb = 1,
    /// The [`SatDetector`].
    Sat = 2,
    /// The [`GjkDetector`] with default options.
    Gjk = 3,
}

impl DetectorKind {
    /// All the detectors, ordered by code.
    pub const ALL: [DetectorKind; 3] = [DetectorKind::Aabb, DetectorKind::Sat, DetectorKind::Gjk];

    /// The integer code of this detector.
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }

    fn name(self) -> &'static str {
        match self {
            DetectorKind::Aabb => "AABB",
            DetectorKind::Sat => "SAT",
            DetectorKind::Gjk => "GJK",
        }
    }
}

impl TryFrom<i32> for DetectorKind {
    type Error = QueryError;

    fn try_from(code: i32) -> Result<Self, QueryError> {
        match code {
            1 => Ok(DetectorKind::Aabb),
            2 => Ok(DetectorKind::Sat),
            3 => Ok(DetectorKind::Gjk),
            _ => Err(QueryError::UnknownDetector(code)),
        }
    }
}

impl FromStr for DetectorKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, QueryError> {
        let name = s.trim();

        DetectorKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| QueryError::UnknownDetectorName(s.to_string()))
    }
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl CollisionDetector for DetectorKind {
    fn is_colliding_with_debug(
        &self,
        a: &Polygon,
        b: &Polygon,
        debug: Option<&mut dyn DebugSink>,
    ) -> bool {
        match self {
            DetectorKind::Aabb => AabbDetector.is_colliding_with_debug(a, b, debug),
            DetectorKind::Sat => SatDetector.is_colliding_with_debug(a, b, debug),
            DetectorKind::Gjk => GjkDetector::default().is_colliding_with_debug(a, b, debug),
        }
    }
}
