use crate::bounding_volume::Aabb;
use crate::debug::Color;
use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;
use crate::utils;
use na;
use ordered_float::OrderedFloat;

/// A polygon drawn vertex by vertex.
///
/// The vertices are kept in insertion order until [`Polygon::complete`] sorts them by angle
/// around the centroid, which turns an arbitrary click sequence into a non-self-intersecting
/// boundary. The collision detectors expect completed, convex polygons with at least three
/// vertices; they still return a (meaningless but deterministic) answer for anything else.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point<Real>>,
    centroid: Point<Real>,
    completed: bool,
    color: Color,
}

impl Default for Polygon {
    fn default() -> Self {
        Self::new()
    }
}

impl Polygon {
    /// Creates an empty, uncompleted polygon.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            centroid: Point::origin(),
            completed: false,
            color: Color::default(),
        }
    }

    /// Creates an uncompleted polygon with the given vertices, in order.
    ///
    /// # Example
    ///
    /// ```
    /// # #[cfg(feature = "f32")] {
    /// use polycollide2d::math::Point;
    /// use polycollide2d::shape::Polygon;
    ///
    /// let triangle = Polygon::from_vertices(vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(3.0, 0.0),
    ///     Point::new(0.0, 3.0),
    /// ]);
    /// assert_eq!(triangle.centroid(), Point::new(1.0, 1.0));
    /// assert!(!triangle.is_completed());
    /// # }
    /// ```
    pub fn from_vertices(vertices: Vec<Point<Real>>) -> Self {
        let centroid = utils::center(&vertices);
        Self {
            vertices,
            centroid,
            completed: false,
            color: Color::default(),
        }
    }

    /// The vertices of this polygon.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The number of vertices of this polygon.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Does this polygon have no vertex at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Has this polygon been closed by the user?
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Sets the completion flag without touching the vertices.
    #[inline]
    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    /// The color used when this polygon shows up in debug shapes.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the color used when this polygon shows up in debug shapes.
    #[inline]
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Appends a vertex.
    ///
    /// Duplicates are accepted and there is no upper bound on the vertex count.
    pub fn add_vertex(&mut self, vertex: Point<Real>) {
        self.vertices.push(vertex);
        self.update_centroid();
    }

    /// Removes the last vertex, if any, and returns it.
    pub fn pop_vertex(&mut self) -> Option<Point<Real>> {
        let vertex = self.vertices.pop();
        self.update_centroid();
        vertex
    }

    /// The arithmetic mean of all the vertices, or the origin if there are none.
    #[inline]
    pub fn centroid(&self) -> Point<Real> {
        self.centroid
    }

    fn update_centroid(&mut self) {
        self.centroid = utils::center(&self.vertices);
    }

    /// Reorders the vertices by increasing angle around the centroid.
    ///
    /// This is a counter-clockwise sort on `atan2(y - cy, x - cx)`. Vertices with the same
    /// angle keep their relative order, so sorting twice gives the same result as sorting
    /// once. Polygons with less than 3 vertices are left untouched.
    pub fn sort_by_angle(&mut self) {
        if self.vertices.len() < 3 {
            return;
        }

        let center = self.centroid;
        self.vertices.sort_by_cached_key(|v| {
            let dpt = v - center;
            OrderedFloat(dpt.y.atan2(dpt.x))
        });
    }

    /// Sorts the vertices by angle then marks this polygon as completed.
    pub fn complete(&mut self) {
        self.sort_by_angle();
        self.completed = true;
    }

    /// Is `point` strictly closer than `threshold` to the first vertex?
    ///
    /// Always `false` if this polygon has less than 3 vertices since it could not be closed
    /// into a surface yet.
    pub fn is_near_first_vertex(&self, point: &Point<Real>, threshold: Real) -> bool {
        if self.vertices.len() < 3 {
            return false;
        }

        na::distance(point, &self.vertices[0]) < threshold
    }

    /// The axis-aligned bounding box of the vertices.
    ///
    /// This is an invalid box (intersecting nothing) if the polygon is empty.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().copied())
    }
}

impl SupportMap for Polygon {
    #[inline]
    fn local_support_point(&self, dir: &Vector<Real>) -> Option<Point<Real>> {
        utils::point_cloud_support_point(dir, &self.vertices)
    }
}
