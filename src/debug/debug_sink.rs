use crate::debug::Color;
use crate::math::{Point, Real, Vector};

/// A receiver for the auxiliary shapes detectors emit while they run.
///
/// Implementors are purely observers: they must not be relied upon by the detection logic.
pub trait DebugSink {
    /// An axis-aligned rectangle given by its `center` and full `size`.
    fn add_rectangle(&mut self, color: Color, center: Point<Real>, size: Vector<Real>);

    /// A segment going from `start` to `end`.
    fn add_line(&mut self, color: Color, start: Point<Real>, end: Point<Real>);

    /// An infinite line passing through `origin` and oriented along `direction`.
    fn add_direction(&mut self, color: Color, origin: Point<Real>, direction: Vector<Real>);
}

impl<S: ?Sized + DebugSink> DebugSink for &mut S {
    #[inline]
    fn add_rectangle(&mut self, color: Color, center: Point<Real>, size: Vector<Real>) {
        (**self).add_rectangle(color, center, size)
    }

    #[inline]
    fn add_line(&mut self, color: Color, start: Point<Real>, end: Point<Real>) {
        (**self).add_line(color, start, end)
    }

    #[inline]
    fn add_direction(&mut self, color: Color, origin: Point<Real>, direction: Vector<Real>) {
        (**self).add_direction(color, origin, direction)
    }
}
