use crate::debug::{Color, DebugSink};
use crate::math::{Point, Real};
use crate::query::{selector, CollisionReport, DetectorKind};
use crate::shape::Polygon;

/// Default distance under which a click closes the current polygon.
pub const DEFAULT_SNAP_DISTANCE: Real = 20.0;

/// Half-transparent colors given, in turn, to new polygons.
pub const POLYGON_COLORS: [Color; 6] = [
    Color::new(0.90, 0.30, 0.24, 0.5),
    Color::new(0.20, 0.60, 0.86, 0.5),
    Color::new(0.18, 0.80, 0.44, 0.5),
    Color::new(0.95, 0.77, 0.06, 0.5),
    Color::new(0.61, 0.35, 0.71, 0.5),
    Color::new(0.90, 0.49, 0.13, 0.5),
];

/// What a click did to a [`Sketch`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A vertex was appended to the current polygon.
    VertexAdded,
    /// The click was close to the first vertex: the current polygon was completed and a new,
    /// empty polygon started.
    PolygonCompleted,
}

/// A collection of polygons drawn vertex by vertex.
///
/// The last polygon is the *current* one, receiving the new vertices. Clicking close enough to
/// the first vertex of the current polygon completes it (see [`Sketch::process_click`]).
///
/// Every mutation raises a dirty flag a renderer can poll with [`Sketch::take_dirty`].
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use polycollide2d::math::Point;
/// use polycollide2d::sketch::{ClickOutcome, Sketch};
///
/// let mut sketch = Sketch::new();
/// sketch.process_click(Point::new(0.0, 0.0));
/// sketch.process_click(Point::new(100.0, 0.0));
/// sketch.process_click(Point::new(50.0, 100.0));
///
/// assert_eq!(sketch.process_click(Point::new(5.0, 5.0)), ClickOutcome::PolygonCompleted);
/// assert!(sketch.polygons()[0].is_completed());
/// assert_eq!(sketch.len(), 2);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Sketch {
    polygons: Vec<Polygon>,
    snap_distance: Real,
    next_color: usize,
    dirty: bool,
}

impl Default for Sketch {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketch {
    /// A sketch with a single, empty current polygon.
    pub fn new() -> Self {
        let mut result = Self {
            polygons: Vec::new(),
            snap_distance: DEFAULT_SNAP_DISTANCE,
            next_color: 0,
            dirty: false,
        };
        let _ = result.add_new_polygon();
        result
    }

    /// All the polygons, the current one last.
    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// The number of polygons, including the current one.
    #[inline]
    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    /// Does this sketch contain no polygon at all?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// The i-th polygon, if it exists.
    #[inline]
    pub fn polygon(&self, i: usize) -> Option<&Polygon> {
        self.polygons.get(i)
    }

    /// The polygon receiving new vertices.
    #[inline]
    pub fn current_polygon(&self) -> Option<&Polygon> {
        self.polygons.last()
    }

    /// The distance under which a click closes the current polygon.
    #[inline]
    pub fn snap_distance(&self) -> Real {
        self.snap_distance
    }

    /// Sets the snap distance. Negative values are clamped to zero, which disables snapping.
    pub fn set_snap_distance(&mut self, distance: Real) {
        self.snap_distance = distance.max(0.0);
    }

    /// Starts a new, empty polygon which becomes the current one.
    pub fn add_new_polygon(&mut self) -> &mut Polygon {
        let mut polygon = Polygon::new();
        polygon.set_color(POLYGON_COLORS[self.next_color % POLYGON_COLORS.len()]);
        self.next_color += 1;
        self.dirty = true;
        self.polygons.push(polygon);
        let id = self.polygons.len() - 1;
        &mut self.polygons[id]
    }

    /// Appends `vertex` to the current polygon.
    ///
    /// A new polygon is started first if there is none or if the current one is completed.
    pub fn add_vertex_to_current_polygon(&mut self, vertex: Point<Real>) {
        if self.polygons.last().map_or(true, Polygon::is_completed) {
            let _ = self.add_new_polygon();
        }

        if let Some(current) = self.polygons.last_mut() {
            current.add_vertex(vertex);
            self.dirty = true;
        }
    }

    /// Sorts the vertices of the current polygon, marks it as completed and starts a new one.
    ///
    /// Returns `false` without doing anything if there is no current polygon or if it is
    /// already completed.
    pub fn complete_current_polygon(&mut self) -> bool {
        match self.polygons.last_mut() {
            Some(current) if !current.is_completed() => {
                current.complete();
                log::debug!("Completed a polygon with {} vertices.", current.len());
            }
            _ => return false,
        }

        let _ = self.add_new_polygon();
        true
    }

    /// Handles a click at `position`.
    ///
    /// Completes the current polygon if `position` is strictly closer than the snap distance to
    /// its first vertex (this needs at least 3 vertices), appends `position` to it otherwise.
    pub fn process_click(&mut self, position: Point<Real>) -> ClickOutcome {
        let snap = self
            .current_polygon()
            .is_some_and(|current| {
                !current.is_completed()
                    && current.is_near_first_vertex(&position, self.snap_distance)
            });

        if snap && self.complete_current_polygon() {
            ClickOutcome::PolygonCompleted
        } else {
            self.add_vertex_to_current_polygon(position);
            ClickOutcome::VertexAdded
        }
    }

    /// Removes the last vertex of the current polygon, if any, and returns it.
    pub fn undo_last_vertex(&mut self) -> Option<Point<Real>> {
        let current = self.polygons.last_mut()?;

        if current.is_completed() {
            return None;
        }

        let vertex = current.pop_vertex();
        self.dirty |= vertex.is_some();
        vertex
    }

    /// Inserts an already built polygon, sorted and marked as completed.
    ///
    /// Polygons with less than 3 vertices are rejected and given back. The polygon is inserted
    /// before the current polygon if the latter is still being drawn.
    pub fn add_polygon(&mut self, mut polygon: Polygon) -> Result<usize, Polygon> {
        if polygon.len() < 3 {
            return Err(polygon);
        }

        polygon.complete();

        let id = match self.polygons.last() {
            Some(current) if !current.is_completed() => self.polygons.len() - 1,
            _ => self.polygons.len(),
        };

        self.polygons.insert(id, polygon);
        self.dirty = true;
        Ok(id)
    }

    /// Removes and returns the i-th polygon, if it exists.
    pub fn remove_polygon(&mut self, i: usize) -> Option<Polygon> {
        if i < self.polygons.len() {
            self.dirty = true;
            Some(self.polygons.remove(i))
        } else {
            None
        }
    }

    /// Removes every polygon then starts a new, empty one.
    pub fn clear(&mut self) {
        self.polygons.clear();
        let _ = self.add_new_polygon();
    }

    /// A copy of the vertices of every polygon, in order.
    pub fn export_vertices(&self) -> Vec<Vec<Point<Real>>> {
        self.polygons.iter().map(|p| p.vertices().to_vec()).collect()
    }

    /// Has this sketch changed since the last call to [`Sketch::take_dirty`]?
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Returns the dirty flag and resets it.
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }

    /// Checks every pair of completed polygons with the detector selected by `kind`.
    pub fn check_collisions(
        &self,
        kind: DetectorKind,
        debug: Option<&mut dyn DebugSink>,
    ) -> CollisionReport {
        selector::check_polygons(kind, &self.polygons, debug)
    }
}
