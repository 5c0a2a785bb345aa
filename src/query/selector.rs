//! Pairwise collision checks over a collection of polygons.

use core::fmt;

use crate::debug::DebugSink;
use crate::query::{CollisionDetector, DetectorKind, QueryError};
use crate::shape::Polygon;

/// The verdict of a detector for one pair of polygons.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PairReport {
    /// Index of the first polygon of the pair.
    pub first: usize,
    /// Index of the second polygon of the pair, always greater than `first`.
    pub second: usize,
    /// Do the polygons overlap?
    pub colliding: bool,
}

impl fmt::Display for PairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Polygon {} and Polygon {} colliding: {}",
            self.first, self.second, self.colliding
        )
    }
}

/// The result of checking every pair of completed polygons with one detector.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollisionReport {
    /// The detector used, if it is one of the built-in ones.
    pub detector: Option<DetectorKind>,
    /// The verdicts, ordered by `first` then by `second`.
    pub pairs: Vec<PairReport>,
    /// Indices of the completed polygons that were not tested because they have less than
    /// 3 vertices.
    pub skipped: Vec<usize>,
}

impl CollisionReport {
    /// Iterates through the pairs found colliding.
    pub fn colliding_pairs(&self) -> impl Iterator<Item = &PairReport> {
        self.pairs.iter().filter(|pair| pair.colliding)
    }

    /// The verdict for the polygons `i` and `j`, in any order, if that pair was tested.
    pub fn is_colliding(&self, i: usize, j: usize) -> Option<bool> {
        let (first, second) = if i <= j { (i, j) } else { (j, i) };
        self.pairs
            .iter()
            .find(|pair| pair.first == first && pair.second == second)
            .map(|pair| pair.colliding)
    }
}

/// One line per tested pair.
impl fmt::Display for CollisionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pair in &self.pairs {
            writeln!(f, "{}", pair)?;
        }

        Ok(())
    }
}

/// Runs `detector` on every pair of completed polygons.
///
/// `polygons` yields one slot per polygon index, `None` standing for an empty slot. For every
/// `i < j` such that both slots hold a completed polygon, the pair `(i, j)` is tested exactly
/// once, in ascending order of `i` then `j`. Uncompleted polygons are ignored. Completed
/// polygons with less than 3 vertices are not tested either: they are listed in
/// [`CollisionReport::skipped`].
///
/// `debug` is handed to the detector for every tested pair.
pub fn check_all_pairs<'a, D, I>(
    detector: &D,
    polygons: I,
    mut debug: Option<&mut dyn DebugSink>,
) -> CollisionReport
where
    D: ?Sized + CollisionDetector,
    I: IntoIterator<Item = Option<&'a Polygon>>,
{
    let mut candidates = Vec::new();
    let mut skipped = Vec::new();

    for (i, slot) in polygons.into_iter().enumerate() {
        match slot {
            Some(poly) if poly.is_completed() => {
                if poly.len() < 3 {
                    log::warn!(
                        "Polygon {} has only {} vertices, skipping it.",
                        i,
                        poly.len()
                    );
                    skipped.push(i);
                } else {
                    candidates.push((i, poly));
                }
            }
            _ => {}
        }
    }

    let mut pairs = Vec::new();

    for (k, (i, poly1)) in candidates.iter().enumerate() {
        for (j, poly2) in &candidates[k + 1..] {
            let sink = debug.as_mut().map(|d| &mut **d as &mut dyn DebugSink);
            let colliding = detector.is_colliding_with_debug(poly1, poly2, sink);
            let pair = PairReport {
                first: *i,
                second: *j,
                colliding,
            };
            log::info!("{}", pair);
            pairs.push(pair);
        }
    }

    CollisionReport {
        detector: None,
        pairs,
        skipped,
    }
}

/// Runs the detector selected by `kind` on every pair of completed polygons of `polygons`.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use polycollide2d::math::Point;
/// use polycollide2d::query::selector;
/// use polycollide2d::query::DetectorKind;
/// use polycollide2d::shape::Polygon;
///
/// let mut polygons = vec![
///     Polygon::from_vertices(vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(1.0, 2.0)]),
///     Polygon::from_vertices(vec![Point::new(1.0, 0.0), Point::new(3.0, 0.0), Point::new(2.0, 2.0)]),
/// ];
/// polygons.iter_mut().for_each(|p| p.complete());
///
/// let report = selector::check_polygons(DetectorKind::Sat, &polygons, None);
/// assert_eq!(report.to_string(), "Polygon 0 and Polygon 1 colliding: true\n");
/// # }
/// ```
pub fn check_polygons(
    kind: DetectorKind,
    polygons: &[Polygon],
    debug: Option<&mut dyn DebugSink>,
) -> CollisionReport {
    let mut report = check_all_pairs(&kind, polygons.iter().map(Some), debug);
    report.detector = Some(kind);
    report
}

/// Runs the detector identified by the integer `code` on every pair of completed polygons.
///
/// Fails with [`QueryError::UnknownDetector`] if `code` is not `1`, `2` or `3`, before
/// looking at any polygon.
pub fn check_all_pairs_with_code<'a, I>(
    code: i32,
    polygons: I,
    debug: Option<&mut dyn DebugSink>,
) -> Result<CollisionReport, QueryError>
where
    I: IntoIterator<Item = Option<&'a Polygon>>,
{
    let kind = DetectorKind::try_from(code)?;
    log::debug!("Checking all polygon pairs with the {} detector.", kind);

    let mut report = check_all_pairs(&kind, polygons, debug);
    report.detector = Some(kind);
    Ok(report)
}
