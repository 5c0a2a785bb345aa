use crate::debug::{Color, DebugSink};
use crate::math::{Point, Real, Vector};
use crate::shape::Polygon;

/// Half-length of the segment used to display a [`DebugShape::Direction`].
pub const DEFAULT_DIRECTION_LENGTH: Real = 1000.0;

/// A shape recorded by [`DebugShapes`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum DebugShape {
    /// An axis-aligned rectangle.
    Rectangle {
        /// Display color.
        color: Color,
        /// Center of the rectangle.
        center: Point<Real>,
        /// Full width and height of the rectangle.
        size: Vector<Real>,
    },
    /// A segment.
    Line {
        /// Display color.
        color: Color,
        /// First endpoint.
        start: Point<Real>,
        /// Second endpoint.
        end: Point<Real>,
    },
    /// An infinite line through `origin`, oriented along `direction`.
    Direction {
        /// Display color.
        color: Color,
        /// A point of the line.
        origin: Point<Real>,
        /// Orientation of the line, not necessarily normalized.
        direction: Vector<Real>,
    },
}

impl DebugShape {
    /// The color this shape should be displayed with.
    pub fn color(&self) -> Color {
        match self {
            DebugShape::Rectangle { color, .. }
            | DebugShape::Line { color, .. }
            | DebugShape::Direction { color, .. } => *color,
        }
    }

    /// Converts this shape into a polygon a renderer can draw.
    ///
    /// Rectangles become completed 4-vertex polygons (counter-clockwise, starting at the
    /// bottom-left corner). Lines become open 2-vertex polygons. Directions become open
    /// 2-vertex polygons spanning `origin ± direction * half_length` with `direction`
    /// normalized; a zero direction collapses to the single point `origin`.
    pub fn to_polygon(&self, half_length: Real) -> Polygon {
        match *self {
            DebugShape::Rectangle {
                color,
                center,
                size,
            } => {
                let half = size / 2.0;
                let mut polygon = Polygon::from_vertices(vec![
                    Point::new(center.x - half.x, center.y - half.y),
                    Point::new(center.x + half.x, center.y - half.y),
                    Point::new(center.x + half.x, center.y + half.y),
                    Point::new(center.x - half.x, center.y + half.y),
                ]);
                polygon.set_color(color);
                polygon.set_completed(true);
                polygon
            }
            DebugShape::Line { color, start, end } => {
                let mut polygon = Polygon::from_vertices(vec![start, end]);
                polygon.set_color(color);
                polygon
            }
            DebugShape::Direction {
                color,
                origin,
                direction,
            } => {
                let dir = direction.try_normalize(0.0).unwrap_or_else(Vector::zeros);
                let mut polygon =
                    Polygon::from_vertices(vec![origin - dir * half_length, origin + dir * half_length]);
                polygon.set_color(color);
                polygon
            }
        }
    }
}

/// A [`DebugSink`] that records every shape it receives, in order.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebugShapes {
    shapes: Vec<DebugShape>,
}

impl DebugShapes {
    /// An empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded shapes, in the order they were pushed.
    #[inline]
    pub fn shapes(&self) -> &[DebugShape] {
        &self.shapes
    }

    /// The number of recorded shapes.
    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Is this recorder empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Forgets all the recorded shapes.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Converts every recorded shape to a polygon, see [`DebugShape::to_polygon`].
    pub fn to_polygons(&self) -> Vec<Polygon> {
        self.shapes
            .iter()
            .map(|shape| shape.to_polygon(DEFAULT_DIRECTION_LENGTH))
            .collect()
    }
}

impl DebugSink for DebugShapes {
    fn add_rectangle(&mut self, color: Color, center: Point<Real>, size: Vector<Real>) {
        self.shapes.push(DebugShape::Rectangle {
            color,
            center,
            size,
        });
    }

    fn add_line(&mut self, color: Color, start: Point<Real>, end: Point<Real>) {
        self.shapes.push(DebugShape::Line { color, start, end });
    }

    fn add_direction(&mut self, color: Color, origin: Point<Real>, direction: Vector<Real>) {
        self.shapes.push(DebugShape::Direction {
            color,
            origin,
            direction,
        });
    }
}
