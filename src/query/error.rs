/// Errors raised by the checked collision-detection entry points.
///
/// The detectors themselves are total functions and never fail. These errors are only
/// produced by the layers that validate input before dispatch: detector selection and
/// [`CollisionDetector::try_is_colliding`](crate::query::CollisionDetector::try_is_colliding).
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// The detector selection code is not one of `1` (AABB), `2` (SAT) or `3` (GJK).
    #[error("unknown collision detector code {0}, expected 1 (AABB), 2 (SAT) or 3 (GJK)")]
    UnknownDetector(i32),
    /// The detector name is not one of `aabb`, `sat` or `gjk`.
    #[error("unknown collision detector name {0:?}, expected \"aabb\", \"sat\" or \"gjk\"")]
    UnknownDetectorName(String),
    /// A polygon has too few vertices to enclose a surface.
    #[error("a polygon needs at least 3 vertices to be tested for collision, found {num_vertices}")]
    DegeneratePolygon {
        /// Number of vertices of the offending polygon.
        num_vertices: usize,
    },
}
