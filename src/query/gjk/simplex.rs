use crate::math::{Real, Vector};
use crate::query::gjk::CSOPoint;
use crate::utils;
use arrayvec::ArrayVec;

/// A 2D GJK simplex: a point, a segment, or a triangle of the CSO.
///
/// The most recently added point is always at index 0; older points are pushed toward higher
/// indices.
#[derive(Clone, Debug)]
pub struct Simplex {
    points: ArrayVec<CSOPoint, 3>,
}

impl Simplex {
    /// Creates a simplex made of the single point `pt`.
    pub fn new(pt: CSOPoint) -> Self {
        let mut points = ArrayVec::new();
        points.push(pt);
        Simplex { points }
    }

    /// Resets this simplex to the single point `pt`.
    pub fn reset(&mut self, pt: CSOPoint) {
        self.points.clear();
        self.points.push(pt);
    }

    /// The number of points of this simplex, between 1 and 3.
    #[inline]
    #[allow(clippy::len_without_is_empty)] // Never empty.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// The i-th point of this simplex, `0` being the newest.
    #[inline]
    pub fn point(&self, i: usize) -> &CSOPoint {
        &self.points[i]
    }

    /// Inserts `pt` as the newest point.
    ///
    /// If the simplex is already a triangle, its oldest point is discarded first.
    pub fn push_front(&mut self, pt: CSOPoint) {
        if self.points.is_full() {
            let _ = self.points.pop();
        }

        self.points.insert(0, pt);
    }

    /// Checks whether this simplex encloses the origin.
    ///
    /// When it does not, the simplex is reduced to the feature closest to the origin and `dir`
    /// is set to the next search direction. A point or a segment never encloses the origin in
    /// 2D, except when the origin lies exactly on them. The origin lying exactly on the boundary
    /// of the triangle counts as enclosed.
    pub fn contains_origin(&mut self, dir: &mut Vector<Real>) -> bool {
        match self.points.len() {
            2 => self.handle_line(dir),
            3 => self.handle_triangle(dir),
            _ => false,
        }
    }

    fn handle_line(&mut self, dir: &mut Vector<Real>) -> bool {
        let a = self.points[0].point; // Newest.
        let b = self.points[1].point;

        let ab = b - a;
        let ao = -a.coords;

        if ab.norm_squared() == 0.0 {
            // Both points coincide: fall back to a point simplex.
            let _ = self.points.pop();
            *dir = ao;
            return ao.norm_squared() == 0.0;
        }

        let perp = Vector::new(-ab.y, ab.x);
        let side = perp.dot(&ao);

        if side == 0.0 {
            // The origin is on the line (ab). It lies on the simplex if it is between a and b.
            let t = ao.dot(&ab);
            if t >= 0.0 && t <= ab.norm_squared() {
                return true;
            }
        }

        *dir = if side < 0.0 { -perp } else { perp };
        false
    }

    fn handle_triangle(&mut self, dir: &mut Vector<Real>) -> bool {
        let a = self.points[0].point; // Newest.
        let b = self.points[1].point;
        let c = self.points[2].point;

        let ab = b - a;
        let ac = c - a;
        let ao = -a.coords;

        if utils::perp_dot(&ab, &ac) == 0.0 {
            // Flat triangle: the oldest point brings nothing.
            let _ = self.points.remove(2);
            return self.handle_line(dir);
        }

        // Normals of the edges ab and ac, pointing away from the opposite vertex.
        let ab_perp = utils::triple_product(&ac, &ab, &ab);
        let ac_perp = utils::triple_product(&ab, &ac, &ac);

        if ab_perp.dot(&ao) > 0.0 {
            // Outside of ab: c is useless.
            let _ = self.points.remove(2);
            *dir = ab_perp;
            return false;
        }

        if ac_perp.dot(&ao) > 0.0 {
            // Outside of ac: b is useless.
            let _ = self.points.remove(1);
            *dir = ac_perp;
            return false;
        }

        true
    }
}
